// lz4codec: LZ4 block, high-compression and frame codec

pub mod config;
pub mod block;
pub mod hc;
pub mod frame;
pub mod xxhash;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const LZ4CODEC_VERSION_MAJOR: u32 = 0;
pub const LZ4CODEC_VERSION_MINOR: u32 = 3;
pub const LZ4CODEC_VERSION_RELEASE: u32 = 0;
pub const LZ4CODEC_VERSION_NUMBER: u32 = LZ4CODEC_VERSION_MAJOR * 100 * 100
    + LZ4CODEC_VERSION_MINOR * 100
    + LZ4CODEC_VERSION_RELEASE;
pub const LZ4CODEC_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version as `major * 10000 + minor * 100 + release`.
pub fn version_number() -> u32 {
    LZ4CODEC_VERSION_NUMBER
}

pub fn version_string() -> &'static str {
    LZ4CODEC_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{
    compress_bound, compress_default, compress_fast, decompress_safe, decompress_safe_partial,
    decompress_safe_using_dict, DecompressError, Lz4Error, Lz4Stream, Lz4StreamDecode,
};
pub use frame::FrameError;
pub use hc::compress_hc;
pub use xxhash::xxh32;
