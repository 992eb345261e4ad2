//! LZ4 frame decoder.
//!
//! [`decompress`] accepts one or more concatenated frames, skipping any
//! skippable frames between them.  For every LZ4 frame it
//!
//! 1. parses and validates the header ([`parse_header`]),
//! 2. decodes blocks until the end mark, verifying block checksums,
//! 3. verifies the content checksum and declared content size.
//!
//! The frame does not record each block's decoded size, so compressed
//! blocks are decoded into a buffer of the frame's maximum block size and
//! the decoder's return value gives the true length.

use super::header::parse_header;
use super::types::{
    BlockChecksum, BlockMode, ContentChecksum, FrameError, BF_SIZE, BH_SIZE,
    LZ4F_BLOCKUNCOMPRESSED_FLAG, LZ4F_MAGICNUMBER, LZ4F_MAGIC_SKIPPABLE_MASK,
    LZ4F_MAGIC_SKIPPABLE_START, MAGIC_SIZE,
};
use crate::block::{decompress_safe, Lz4StreamDecode};
use crate::xxhash::{xxh32, Xxh32State};

#[inline]
fn read_u32(src: &[u8], pos: usize) -> Option<u32> {
    let b = src.get(pos..pos.checked_add(4)?)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Decode every frame in `src` and return the concatenated content.
///
/// # Errors
/// Any [`FrameError`]; nothing is returned for a partially valid input.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    loop {
        let magic = read_u32(src, pos).ok_or(FrameError::InvalidMagic)?;
        if magic & LZ4F_MAGIC_SKIPPABLE_MASK == LZ4F_MAGIC_SKIPPABLE_START {
            let size = read_u32(src, pos + MAGIC_SIZE).ok_or(FrameError::TruncatedInput)? as usize;
            let end = (pos + 2 * MAGIC_SIZE)
                .checked_add(size)
                .filter(|&end| end <= src.len())
                .ok_or(FrameError::TruncatedInput)?;
            pos = end;
        } else if magic == LZ4F_MAGICNUMBER {
            pos += decompress_frame(&src[pos..], &mut out)?;
        } else {
            return Err(FrameError::InvalidMagic);
        }

        if pos == src.len() {
            return Ok(out);
        }
    }
}

/// Decode the single frame at the start of `src`, appending its content to
/// `out`.  Returns the number of input bytes the frame occupied.
pub fn decompress_frame(src: &[u8], out: &mut Vec<u8>) -> Result<usize, FrameError> {
    let info = parse_header(src)?;
    let desc = info.descriptor;
    let max_block = desc.block_size_id.block_size();
    let linked = desc.block_mode == BlockMode::Linked;

    let mut pos = info.header_size;
    let mut dctx = Lz4StreamDecode::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut hasher = Xxh32State::new(0);
    let start_len = out.len();

    loop {
        let header = read_u32(src, pos).ok_or(FrameError::CorruptedHeader)?;
        pos += BH_SIZE;
        if header == 0 {
            break;
        }

        let stored = header & LZ4F_BLOCKUNCOMPRESSED_FLAG != 0;
        let size = (header & !LZ4F_BLOCKUNCOMPRESSED_FLAG) as usize;
        if size > max_block {
            return Err(FrameError::CorruptedHeader);
        }
        let payload = src.get(pos..pos + size).ok_or(FrameError::TruncatedInput)?;
        pos += size;

        if desc.block_checksum == BlockChecksum::Enabled {
            let expected = read_u32(src, pos).ok_or(FrameError::TruncatedInput)?;
            pos += BF_SIZE;
            if xxh32(payload, 0) != expected {
                return Err(FrameError::BlockChecksumMismatch);
            }
        }

        let decoded: &[u8] = if stored {
            if linked {
                dctx.update_history(payload);
            }
            payload
        } else {
            if buf.is_empty() {
                buf = vec![0u8; max_block];
            }
            let n = if linked {
                dctx.decompress_safe_continue(payload, &mut buf)?
            } else {
                decompress_safe(payload, &mut buf)?
            };
            &buf[..n]
        };
        hasher.update(decoded);
        out.extend_from_slice(decoded);
    }

    if desc.content_checksum == ContentChecksum::Enabled {
        let expected = read_u32(src, pos).ok_or(FrameError::TruncatedInput)?;
        pos += 4;
        if hasher.digest() != expected {
            return Err(FrameError::ContentChecksumMismatch);
        }
    }

    if let Some(expected) = info.content_size {
        let actual = (out.len() - start_len) as u64;
        if actual != expected {
            return Err(FrameError::ContentSizeMismatch { expected, actual });
        }
    }

    Ok(pos)
}
