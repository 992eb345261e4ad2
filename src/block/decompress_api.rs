//! Public LZ4 block decompression API.
//!
//!   - One-shot decompression: [`decompress_safe`], [`decompress_safe_partial`]
//!   - Dictionary decompression: [`decompress_safe_using_dict`],
//!     [`decompress_safe_partial_using_dict`]
//!   - Streaming decode context: [`Lz4StreamDecode`]
//!
//! All functions are thin wrappers around
//! [`decompress_generic`](super::decompress_core::decompress_generic) and
//! share its error taxonomy.

use super::decompress_core::{decompress_generic, DecompressError};
use super::window::Window;

// ─────────────────────────────────────────────────────────────────────────────
// One-shot safe API
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a full LZ4 block with no dictionary.
///
/// Returns the number of bytes written into `dst`.
pub fn decompress_safe(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let capacity = dst.len();
    decompress_generic(src, dst, capacity, &[])
}

/// Decompress an LZ4 block, stopping once `target_output_size` bytes exist.
///
/// `dst.len()` is the hard capacity.  The result is at least
/// `min(target_output_size, decoded size)` and never more than `dst.len()`;
/// it may overshoot the target by the remainder of the sequence that
/// crossed it.
pub fn decompress_safe_partial(
    src: &[u8],
    dst: &mut [u8],
    target_output_size: usize,
) -> Result<usize, DecompressError> {
    decompress_generic(src, dst, target_output_size, &[])
}

// ─────────────────────────────────────────────────────────────────────────────
// Stateless dictionary API
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress an LZ4 block whose matches may reach into `dict`, the data
/// that immediately preceded this block.
pub fn decompress_safe_using_dict(
    src: &[u8],
    dst: &mut [u8],
    dict: &[u8],
) -> Result<usize, DecompressError> {
    let capacity = dst.len();
    decompress_generic(src, dst, capacity, dict)
}

/// Partial decode with a dictionary; see [`decompress_safe_partial`].
pub fn decompress_safe_partial_using_dict(
    src: &[u8],
    dst: &mut [u8],
    target_output_size: usize,
    dict: &[u8],
) -> Result<usize, DecompressError> {
    decompress_generic(src, dst, target_output_size, dict)
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming decode context
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming decompression context.
///
/// Holds the last 64 KiB of decoded output so that each block can reference
/// the blocks before it, independently of where the caller puts the output.
#[derive(Debug, Clone, Default)]
pub struct Lz4StreamDecode {
    window: Window,
}

impl Lz4StreamDecode {
    pub fn new() -> Self {
        Lz4StreamDecode { window: Window::new() }
    }

    /// Replace the history with the tail of `dict` (empty to clear it).
    pub fn set_dict(&mut self, dict: &[u8]) {
        self.window.replace(dict);
    }

    /// The current history, oldest byte first.
    pub fn dictionary(&self) -> &[u8] {
        self.window.as_slice()
    }

    /// Decode the next block of the stream into `dst`.
    ///
    /// On success the decoded bytes are appended to the history.  A failed
    /// call leaves the history untouched.
    pub fn decompress_safe_continue(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, DecompressError> {
        let capacity = dst.len();
        let written = decompress_generic(src, dst, capacity, self.window.as_slice())?;
        self.window.append(&dst[..written]);
        Ok(written)
    }

    /// Record `data` as decoded output without running the decoder, e.g. for
    /// a block the container stored uncompressed.
    pub fn update_history(&mut self, data: &[u8]) {
        self.window.append(data);
    }
}
