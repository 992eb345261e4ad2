//! LZ4 Frame format: whole-buffer compression and decompression.
//!
//! A frame wraps a sequence of LZ4 blocks with a self-describing header, an
//! end mark and optional XXH32 checksums, and is interoperable with any
//! standard LZ4 frame tool.

pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

// Re-export key public API items at the module level.
pub use compress::{compress, compress_with};
pub use decompress::{decompress, decompress_frame};
pub use header::{compress_frame_bound, header_checksum, parse_header};
pub use types::{
    BlockChecksum, BlockMode, BlockSizeId, ContentChecksum, FrameDescriptor, FrameError,
    FrameInfo, LZ4F_MAGICNUMBER,
};
