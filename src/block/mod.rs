//! LZ4 block compression and decompression.
//!
//! This module contains the core LZ4 block-format engine: the greedy
//! matcher, the streaming contexts on both sides, and the token decoder.

pub mod compress;
pub mod decompress_api;
pub mod decompress_core;
pub mod stream;
pub mod types;
pub mod window;

// Re-export the most important public API items at the module level.
pub use compress::{
    compress_bound, compress_default, compress_fast, compress_to_vec, Lz4Error,
    LZ4_ACCELERATION_DEFAULT, LZ4_ACCELERATION_MAX, LZ4_MAX_INPUT_SIZE,
};
pub use decompress_api::{
    decompress_safe, decompress_safe_partial, decompress_safe_partial_using_dict,
    decompress_safe_using_dict, Lz4StreamDecode,
};
pub use decompress_core::DecompressError;
pub use stream::Lz4Stream;
pub use types::{LZ4_DISTANCE_MAX, WINDOW_SIZE};
