//! HC match-finder constants and context.
//!
//!   - Hash table: 32768 buckets, the most recent position per 4-byte hash
//!   - Chain table: 65536 `u16` deltas indexed by `position & 0xFFFF`, each
//!     pointing back to the previous position with the same hash
//!   - `next_to_update`: first position not yet linked into the tables

use crate::block::types::{self as bt, LZ4_DISTANCE_MAX};

// ─────────────────────────────────────────────────────────────────────────────
// Compression level
// ─────────────────────────────────────────────────────────────────────────────

/// The single HC level this codec implements (reference level 9 behaviour).
pub const LZ4HC_CLEVEL_DEFAULT: i32 = 9;

// ─────────────────────────────────────────────────────────────────────────────
// HC hash-table sizing
// ─────────────────────────────────────────────────────────────────────────────

pub const LZ4HC_DICTIONARY_LOGSIZE: u32 = 16;
/// Chain table length: one entry per slot in the 64 KB window.
pub const LZ4HC_MAXD: usize = 1 << LZ4HC_DICTIONARY_LOGSIZE; // 65536
pub const LZ4HC_MAXD_MASK: usize = LZ4HC_MAXD - 1; // 65535

pub const LZ4HC_HASH_LOG: u32 = 15;
/// Hash table entries (HC uses a 15-bit log → 32768 slots).
pub const LZ4HC_HASHTABLESIZE: usize = 1 << LZ4HC_HASH_LOG; // 32768

/// Chain-walk budget per search.
pub const LZ4HC_MAX_ATTEMPTS: usize = 256;

/// Chain delta meaning "no earlier occurrence".
pub const CHAIN_END: u16 = 0xFFFF;

/// Hash-table value for an empty bucket.
pub const NO_POSITION: u32 = u32::MAX;

// ─────────────────────────────────────────────────────────────────────────────
// Hashing
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
pub fn hash_ptr(src: &[u8], pos: usize) -> usize {
    bt::hash4(bt::read_le32(src, pos), LZ4HC_HASH_LOG)
}

// ─────────────────────────────────────────────────────────────────────────────
// Context
// ─────────────────────────────────────────────────────────────────────────────

/// A match found by the chain walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Position of the earlier occurrence.
    pub pos: usize,
    /// Match length, at least `MINMATCH`.
    pub len: usize,
}

impl Match {
    #[inline]
    pub fn offset(&self, ip: usize) -> usize {
        ip - self.pos
    }
}

/// Hash and chain tables for one HC compression call.
pub struct HcContext {
    pub(crate) hash_table: Box<[u32]>,
    pub(crate) chain_table: Box<[u16]>,
    pub(crate) next_to_update: usize,
}

impl HcContext {
    pub fn new() -> Self {
        HcContext {
            hash_table: vec![NO_POSITION; LZ4HC_HASHTABLESIZE].into_boxed_slice(),
            chain_table: vec![CHAIN_END; LZ4HC_MAXD].into_boxed_slice(),
            next_to_update: 0,
        }
    }

    /// Chain delta stored for `pos`.
    #[inline(always)]
    pub fn delta_next(&self, pos: usize) -> u16 {
        self.chain_table[pos & LZ4HC_MAXD_MASK]
    }

    /// Link `pos` into the hash bucket and record how far back the previous
    /// occurrence is.  Deltas that do not fit below the sentinel end the chain.
    #[inline]
    pub fn link(&mut self, src: &[u8], pos: usize) {
        let h = hash_ptr(src, pos);
        let prev = self.hash_table[h];
        let delta = if prev == NO_POSITION {
            CHAIN_END
        } else {
            let d = pos - prev as usize;
            if d < CHAIN_END as usize && d <= LZ4_DISTANCE_MAX {
                d as u16
            } else {
                CHAIN_END
            }
        };
        self.chain_table[pos & LZ4HC_MAXD_MASK] = delta;
        self.hash_table[h] = pos as u32;
    }
}

impl Default for HcContext {
    fn default() -> Self {
        Self::new()
    }
}
