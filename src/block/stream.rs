//! LZ4 streaming compression state management.
//!
//! # API
//! - [`Lz4Stream::new`] / [`Lz4Stream::reset`]
//! - [`Lz4Stream::load_dict`]: prime the stream with a dictionary
//! - [`Lz4Stream::compress_fast_continue`]: compress the next chunk, letting
//!   it reference up to 64 KiB of previously compressed data
//!
//! Each call treats the history window and the new chunk as one continuous
//! stream.  `processed_bytes` is the absolute position of the first byte of
//! the next chunk; hash-table entries are absolute positions in that same
//! coordinate space, which is what lets a chunk's matches land in data
//! from earlier calls.

use super::compress::{compress_generic, Lz4Error};
use super::types::{hash4, read_le32, HashTable, LZ4_HASHLOG, LZ4_HASH_SIZE_U32, MINMATCH};
use super::window::Window;

// ─────────────────────────────────────────────────────────────────────────────
// Public streaming-compression state
// ─────────────────────────────────────────────────────────────────────────────

/// LZ4 streaming compression context.
///
/// One context belongs to one logical stream.  It is reused across calls and
/// mutated by each of them, so all access goes through `&mut self`.
pub struct Lz4Stream {
    hash_table: HashTable,
    window: Window,
    processed_bytes: u64,
}

impl Lz4Stream {
    // ── Construction / reset ──────────────────────────────────────────────────

    /// Allocate a fresh streaming context on the heap.
    pub fn new() -> Box<Self> {
        Box::new(Lz4Stream {
            hash_table: [0; LZ4_HASH_SIZE_U32],
            window: Window::new(),
            processed_bytes: 0,
        })
    }

    /// Forget all history: clear the hash table, the window and the position
    /// counter.
    pub fn reset(&mut self) {
        self.hash_table.fill(0);
        self.window.clear();
        self.processed_bytes = 0;
    }

    // ── Dictionary loading ────────────────────────────────────────────────────

    /// Reset the stream and use the last 64 KiB of `dictionary` as history.
    ///
    /// Every 4-byte position of the retained dictionary is indexed, so the
    /// first compressed chunk can already reference it.  Returns the number
    /// of dictionary bytes retained.
    pub fn load_dict(&mut self, dictionary: &[u8]) -> usize {
        self.reset();
        self.window.replace(dictionary);

        let dict = self.window.as_slice();
        if dict.len() >= MINMATCH {
            for pos in 0..=dict.len() - MINMATCH {
                self.hash_table[hash4(read_le32(dict, pos), LZ4_HASHLOG)] = pos as u64;
            }
        }
        self.processed_bytes = dict.len() as u64;
        dict.len()
    }

    // ── Streaming compression ─────────────────────────────────────────────────

    /// Compress `src` as the next chunk of the stream.
    ///
    /// Matches may reference any byte of the current window.  The window and
    /// position counter advance past `src` whatever the outcome, so the
    /// decoder side stays in step even when the caller stores a chunk that
    /// did not fit.
    ///
    /// # Errors
    /// [`Lz4Error::OutputTooSmall`] when `dst` cannot hold the block;
    /// [`Lz4Error::InputTooLarge`] for oversized input.
    pub fn compress_fast_continue(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
        acceleration: i32,
    ) -> Result<usize, Lz4Error> {
        let result = compress_generic(
            &mut self.hash_table,
            self.window.as_slice(),
            self.processed_bytes,
            src,
            dst,
            acceleration,
        );

        self.processed_bytes += src.len() as u64;
        self.window.append(src);
        result
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The current history window, oldest byte first.
    pub fn dictionary(&self) -> &[u8] {
        self.window.as_slice()
    }

    /// Absolute stream position of the next chunk's first byte.
    pub fn processed_bytes(&self) -> u64 {
        self.processed_bytes
    }
}
