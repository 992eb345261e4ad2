//! LZ4 frame encoder.
//!
//! Splits the input into blocks of the descriptor's maximum size and
//! compresses each with the greedy block encoder.  Linked frames push every
//! block through one [`Lz4Stream`] so later blocks can reference earlier
//! ones; independent frames reset the stream before each block.  A block
//! is stored verbatim unless compression makes it strictly smaller.

use super::header::{compress_frame_bound, write_header};
use super::types::{
    BlockChecksum, BlockMode, ContentChecksum, FrameDescriptor, LZ4F_BLOCKUNCOMPRESSED_FLAG,
};
use crate::block::{compress_bound, Lz4Stream, LZ4_ACCELERATION_DEFAULT};
use crate::xxhash::xxh32;

/// Compress `src` into a frame with the default descriptor: 4 MiB linked
/// blocks and a content checksum.
pub fn compress(src: &[u8]) -> Vec<u8> {
    compress_with(src, &FrameDescriptor::default())
}

/// Compress `src` into a frame described by `desc`.
pub fn compress_with(src: &[u8], desc: &FrameDescriptor) -> Vec<u8> {
    let mut dst = Vec::with_capacity(compress_frame_bound(src.len(), desc));
    write_header(&mut dst, desc, src.len() as u64);

    let block_size = desc.block_size_id.block_size();
    let mut stream = Lz4Stream::new();
    let mut scratch = vec![0u8; compress_bound(block_size.min(src.len()))];

    for chunk in src.chunks(block_size) {
        if desc.block_mode == BlockMode::Independent {
            stream.reset();
        }

        // One byte short of the chunk: anything that does not shrink fails
        // to fit and is stored instead.
        let limit = chunk.len() - 1;
        let payload = match stream.compress_fast_continue(chunk, &mut scratch[..limit], LZ4_ACCELERATION_DEFAULT) {
            Ok(n) => {
                dst.extend_from_slice(&(n as u32).to_le_bytes());
                &scratch[..n]
            }
            Err(_) => {
                dst.extend_from_slice(&(chunk.len() as u32 | LZ4F_BLOCKUNCOMPRESSED_FLAG).to_le_bytes());
                chunk
            }
        };
        dst.extend_from_slice(payload);

        if desc.block_checksum == BlockChecksum::Enabled {
            dst.extend_from_slice(&xxh32(payload, 0).to_le_bytes());
        }
    }

    // End mark
    dst.extend_from_slice(&0u32.to_le_bytes());

    if desc.content_checksum == ContentChecksum::Enabled {
        dst.extend_from_slice(&xxh32(src, 0).to_le_bytes());
    }
    dst
}
