//! Frame header encoding and parsing.
//!
//! Layout (all integers little-endian):
//!
//! | Field            | Size | Notes                                      |
//! |------------------|------|--------------------------------------------|
//! | magic            | 4    | `0x184D2204`                               |
//! | FLG              | 1    | version, independence, checksum flags      |
//! | BD               | 1    | block size id in bits 6-4                  |
//! | content size     | 0/8  | when FLG bit 3 is set                      |
//! | dictionary id    | 0/4  | when FLG bit 0 is set (rejected here)      |
//! | header checksum  | 1    | `(xxh32(FLG..=last field) >> 8) & 0xFF`    |

use super::types::{
    BlockChecksum, BlockMode, BlockSizeId, ContentChecksum, FrameDescriptor, FrameError,
    FrameInfo, BD_BLOCK_SIZE_MASK, BD_BLOCK_SIZE_SHIFT, BD_RESERVED, BF_SIZE, BH_SIZE,
    FLG_BLOCK_CHECKSUM, FLG_BLOCK_INDEPENDENCE, FLG_CONTENT_CHECKSUM, FLG_CONTENT_SIZE,
    FLG_DICT_ID, FLG_RESERVED, FLG_VERSION_SHIFT, LZ4F_MAGICNUMBER, LZ4F_VERSION, MAGIC_SIZE,
    MAX_FH_SIZE,
};
use crate::xxhash::xxh32;

/// Header checksum byte over the descriptor bytes (FLG through the last
/// optional field).
#[inline]
pub fn header_checksum(descriptor: &[u8]) -> u8 {
    ((xxh32(descriptor, 0) >> 8) & 0xFF) as u8
}

/// Append the frame header for `desc` to `dst`.  `content_size` is written
/// only when the descriptor asks for it.
pub fn write_header(dst: &mut Vec<u8>, desc: &FrameDescriptor, content_size: u64) {
    dst.extend_from_slice(&LZ4F_MAGICNUMBER.to_le_bytes());
    let start = dst.len();
    dst.push(desc.flg_byte());
    dst.push(desc.bd_byte());
    if desc.content_size {
        dst.extend_from_slice(&content_size.to_le_bytes());
    }
    let hc = header_checksum(&dst[start..]);
    dst.push(hc);
}

/// Parse and validate the frame header at the start of `src`.
///
/// # Errors
/// - [`FrameError::InvalidMagic`]: wrong magic number or fewer than 4 bytes.
/// - [`FrameError::CorruptedHeader`]: truncated descriptor, checksum
///   mismatch, reserved bits set or invalid block size id.
/// - [`FrameError::UnsupportedVersion`]: version bits other than `01`.
/// - [`FrameError::UnsupportedFeature`]: a dictionary id is present.
pub fn parse_header(src: &[u8]) -> Result<FrameInfo, FrameError> {
    let magic = src
        .get(..MAGIC_SIZE)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(FrameError::InvalidMagic)?;
    if magic != LZ4F_MAGICNUMBER {
        return Err(FrameError::InvalidMagic);
    }

    let desc_start = MAGIC_SIZE;
    let (flg, bd) = match src.get(desc_start..desc_start + 2) {
        Some(b) => (b[0], b[1]),
        None => return Err(FrameError::CorruptedHeader),
    };

    let mut desc_len = 2;
    if flg & FLG_CONTENT_SIZE != 0 {
        desc_len += 8;
    }
    if flg & FLG_DICT_ID != 0 {
        desc_len += 4;
    }
    let desc_end = desc_start + desc_len;
    let descriptor = src.get(desc_start..desc_end).ok_or(FrameError::CorruptedHeader)?;
    let stored_hc = *src.get(desc_end).ok_or(FrameError::CorruptedHeader)?;
    if header_checksum(descriptor) != stored_hc {
        return Err(FrameError::CorruptedHeader);
    }

    let version = flg >> FLG_VERSION_SHIFT;
    if version != LZ4F_VERSION {
        return Err(FrameError::UnsupportedVersion(version));
    }
    if flg & FLG_RESERVED != 0 || bd & BD_RESERVED != 0 {
        return Err(FrameError::CorruptedHeader);
    }
    let block_size_id = BlockSizeId::from_id((bd & BD_BLOCK_SIZE_MASK) >> BD_BLOCK_SIZE_SHIFT)
        .ok_or(FrameError::CorruptedHeader)?;
    if flg & FLG_DICT_ID != 0 {
        return Err(FrameError::UnsupportedFeature);
    }

    let content_size = (flg & FLG_CONTENT_SIZE != 0).then(|| {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&descriptor[2..10]);
        u64::from_le_bytes(raw)
    });

    let descriptor = FrameDescriptor {
        block_size_id,
        block_mode: if flg & FLG_BLOCK_INDEPENDENCE != 0 {
            BlockMode::Independent
        } else {
            BlockMode::Linked
        },
        block_checksum: if flg & FLG_BLOCK_CHECKSUM != 0 {
            BlockChecksum::Enabled
        } else {
            BlockChecksum::Disabled
        },
        content_checksum: if flg & FLG_CONTENT_CHECKSUM != 0 {
            ContentChecksum::Enabled
        } else {
            ContentChecksum::Disabled
        },
        content_size: content_size.is_some(),
    };

    Ok(FrameInfo { descriptor, content_size, header_size: desc_end + 1 })
}

/// Upper bound on the frame produced for `src_len` input bytes with `desc`.
///
/// Every block may end up stored, so the bound is the input plus per-block
/// framing plus the header and trailer.
pub fn compress_frame_bound(src_len: usize, desc: &FrameDescriptor) -> usize {
    let block_size = desc.block_size_id.block_size();
    let n_blocks = src_len.div_ceil(block_size);
    let per_block = BH_SIZE + if desc.block_checksum == BlockChecksum::Enabled { BF_SIZE } else { 0 };
    let trailer = BH_SIZE + if desc.content_checksum == ContentChecksum::Enabled { 4 } else { 0 };
    MAX_FH_SIZE + src_len + n_blocks * per_block + trailer
}
