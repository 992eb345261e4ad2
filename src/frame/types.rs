//! LZ4 Frame format types, constants, and error handling.
//!
//! Covers:
//! - Frame format constants (magic numbers, FLG/BD bit layout, header sizes)
//! - Frame parameter enums: `BlockSizeId`, `BlockMode`, `ContentChecksum`,
//!   `BlockChecksum`
//! - `FrameDescriptor`: encoder settings, built with chained setters
//! - `FrameInfo`: what the decoder read back from a header
//! - `FrameError` with `Display` + `Error` impls

use core::fmt;

use crate::block::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// Frame format constants
// ─────────────────────────────────────────────────────────────────────────────

/// Magic number opening every LZ4 frame.
pub const LZ4F_MAGICNUMBER: u32 = 0x184D_2204;

/// First of the sixteen skippable-frame magic numbers (`0x184D2A50..=0x184D2A5F`).
pub const LZ4F_MAGIC_SKIPPABLE_START: u32 = 0x184D_2A50;
pub const LZ4F_MAGIC_SKIPPABLE_MASK: u32 = 0xFFFF_FFF0;

/// Frame format version carried in FLG bits 7-6.
pub const LZ4F_VERSION: u8 = 1;

/// High bit of block header: indicates the block data is stored uncompressed.
pub const LZ4F_BLOCKUNCOMPRESSED_FLAG: u32 = 0x8000_0000;

/// Block header size in bytes (holds block data length + compressed flag bit).
pub const BH_SIZE: usize = 4;

/// Block footer (checksum) size in bytes, present when block checksums are enabled.
pub const BF_SIZE: usize = 4;

/// Magic number size in bytes.
pub const MAGIC_SIZE: usize = 4;

/// Minimum LZ4 frame header size: magic + FLG + BD + header checksum.
pub const MIN_FH_SIZE: usize = 7;

/// Maximum frame header size this encoder writes (with the 8-byte content size).
pub const MAX_FH_SIZE: usize = 15;

// FLG byte layout
pub const FLG_VERSION_SHIFT: u32 = 6;
pub const FLG_BLOCK_INDEPENDENCE: u8 = 0x20;
pub const FLG_BLOCK_CHECKSUM: u8 = 0x10;
pub const FLG_CONTENT_SIZE: u8 = 0x08;
pub const FLG_CONTENT_CHECKSUM: u8 = 0x04;
pub const FLG_RESERVED: u8 = 0x02;
pub const FLG_DICT_ID: u8 = 0x01;

// BD byte layout
pub const BD_BLOCK_SIZE_SHIFT: u32 = 4;
pub const BD_BLOCK_SIZE_MASK: u8 = 0x70;
pub const BD_RESERVED: u8 = 0x8F;

// ─────────────────────────────────────────────────────────────────────────────
// Frame parameter enums
// ─────────────────────────────────────────────────────────────────────────────

/// Block size identifier determining the maximum LZ4 block size within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BlockSizeId {
    Max64Kb = 4,
    Max256Kb = 5,
    Max1Mb = 6,
    #[default]
    Max4Mb = 7,
}

impl BlockSizeId {
    /// Maximum uncompressed bytes per block: `1 << (2 * id + 8)`.
    #[inline]
    pub fn block_size(self) -> usize {
        1usize << (2 * self as u32 + 8)
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            4 => Some(BlockSizeId::Max64Kb),
            5 => Some(BlockSizeId::Max256Kb),
            6 => Some(BlockSizeId::Max1Mb),
            7 => Some(BlockSizeId::Max4Mb),
            _ => None,
        }
    }
}

/// Block linking mode: linked blocks share history, independent blocks do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Blocks share history (better compression, default).
    #[default]
    Linked,
    /// Each block is compressed independently.
    Independent,
}

/// Whether a 32-bit content checksum (XXH32) is appended after the last block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentChecksum {
    Disabled,
    #[default]
    Enabled,
}

/// Whether a 32-bit checksum follows each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockChecksum {
    #[default]
    Disabled,
    Enabled,
}

// ─────────────────────────────────────────────────────────────────────────────
// FrameDescriptor / FrameInfo
// ─────────────────────────────────────────────────────────────────────────────

/// Encoder settings for one frame.
///
/// ```
/// use lz4codec::frame::{BlockMode, BlockSizeId, FrameDescriptor};
///
/// let desc = FrameDescriptor::default()
///     .with_block_size(BlockSizeId::Max64Kb)
///     .with_block_mode(BlockMode::Independent)
///     .with_content_size(true);
/// assert_eq!(desc.block_size_id.block_size(), 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameDescriptor {
    pub block_size_id: BlockSizeId,
    pub block_mode: BlockMode,
    pub block_checksum: BlockChecksum,
    pub content_checksum: ContentChecksum,
    /// Write the total uncompressed size into the header.
    pub content_size: bool,
}

impl FrameDescriptor {
    pub fn with_block_size(mut self, id: BlockSizeId) -> Self {
        self.block_size_id = id;
        self
    }

    pub fn with_block_mode(mut self, mode: BlockMode) -> Self {
        self.block_mode = mode;
        self
    }

    pub fn with_block_checksum(mut self, enabled: bool) -> Self {
        self.block_checksum = if enabled { BlockChecksum::Enabled } else { BlockChecksum::Disabled };
        self
    }

    pub fn with_content_checksum(mut self, enabled: bool) -> Self {
        self.content_checksum = if enabled { ContentChecksum::Enabled } else { ContentChecksum::Disabled };
        self
    }

    pub fn with_content_size(mut self, enabled: bool) -> Self {
        self.content_size = enabled;
        self
    }

    /// The FLG byte for this descriptor.
    pub fn flg_byte(&self) -> u8 {
        let mut flg = LZ4F_VERSION << FLG_VERSION_SHIFT;
        if self.block_mode == BlockMode::Independent {
            flg |= FLG_BLOCK_INDEPENDENCE;
        }
        if self.block_checksum == BlockChecksum::Enabled {
            flg |= FLG_BLOCK_CHECKSUM;
        }
        if self.content_size {
            flg |= FLG_CONTENT_SIZE;
        }
        if self.content_checksum == ContentChecksum::Enabled {
            flg |= FLG_CONTENT_CHECKSUM;
        }
        flg
    }

    /// The BD byte for this descriptor.
    pub fn bd_byte(&self) -> u8 {
        (self.block_size_id as u8) << BD_BLOCK_SIZE_SHIFT
    }
}

/// Parameters recovered from a parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub descriptor: FrameDescriptor,
    /// Declared uncompressed size, when the header carries one.
    pub content_size: Option<u64>,
    /// Header length in bytes, magic number included.
    pub header_size: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by frame decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The input does not start with an LZ4 or skippable frame magic number.
    InvalidMagic,
    /// FLG carries a version other than 01.
    UnsupportedVersion(u8),
    /// Header checksum mismatch, reserved bits set, bad block size id,
    /// truncated descriptor or block header, or an oversized block.
    CorruptedHeader,
    /// A header flag this codec does not implement (dictionary ID).
    UnsupportedFeature,
    /// The input ends inside a block payload, checksum or skippable frame.
    TruncatedInput,
    /// A compressed block failed to decode.
    Block(DecompressError),
    BlockChecksumMismatch,
    ContentChecksumMismatch,
    /// Decoded length differs from the size declared in the header.
    ContentSizeMismatch { expected: u64, actual: u64 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidMagic => f.write_str("not an LZ4 frame (bad magic number)"),
            FrameError::UnsupportedVersion(v) => write!(f, "unsupported frame version {v}"),
            FrameError::CorruptedHeader => f.write_str("corrupted frame header"),
            FrameError::UnsupportedFeature => f.write_str("frame uses an unsupported feature (dictionary id)"),
            FrameError::TruncatedInput => f.write_str("frame truncated"),
            FrameError::Block(e) => write!(f, "block decode failed: {e}"),
            FrameError::BlockChecksumMismatch => f.write_str("block checksum mismatch"),
            FrameError::ContentChecksumMismatch => f.write_str("content checksum mismatch"),
            FrameError::ContentSizeMismatch { expected, actual } => {
                write!(f, "content size mismatch: header says {expected}, decoded {actual}")
            }
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Block(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecompressError> for FrameError {
    fn from(e: DecompressError) -> Self {
        FrameError::Block(e)
    }
}
