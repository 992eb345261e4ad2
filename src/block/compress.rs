//! LZ4 block compression: the greedy single-pass matcher and its one-shot
//! entry points.
//!
//! | Rust function            | Role                                             |
//! |--------------------------|--------------------------------------------------|
//! | [`compress_generic`]     | matcher core, shared with [`super::stream`]      |
//! | [`compress_fast`]        | one-shot, caller-chosen acceleration             |
//! | [`compress_default`]     | one-shot, acceleration 1                         |
//! | [`compress_to_vec`]      | one-shot into a freshly sized `Vec<u8>`          |
//!
//! The encoder uses a hash table to find back-references (matches) within a
//! sliding window of up to [`LZ4_DISTANCE_MAX`] bytes.  Each compressed
//! sequence consists of a literal run followed by a match (offset + length);
//! bytes that cannot be matched are emitted as a final literal run.
//!
//! Positions are tracked in one coordinate space covering the history
//! window followed by the current input, so a match may start in the window,
//! run across into the current input, and the 4-byte prefix probe may
//! straddle the boundary.
//!
//! Capacity-exceeded conditions are signalled as [`Err(Lz4Error::OutputTooSmall)`]
//! rather than returning 0, which makes error handling unambiguous at call sites.
//!
//! See the [LZ4 block format document] for the authoritative description
//! of the on-disk layout.
//!
//! [LZ4 block format document]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md

use core::fmt;

use super::types::{
    count, hash4, read_le32, HashTable, OutputCursor, LASTLITERALS, LZ4_DISTANCE_MAX,
    LZ4_HASHLOG, LZ4_HASH_SIZE_U32, LZ4_MIN_LENGTH, LZ4_SKIP_TRIGGER, MFLIMIT, MINMATCH,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum allowed input size (2 113 929 216 bytes).  Inputs larger than this
/// cannot be represented in an LZ4 block.
pub const LZ4_MAX_INPUT_SIZE: u32 = 0x7E00_0000;

/// Default acceleration factor (equals 1, the densest search).
pub const LZ4_ACCELERATION_DEFAULT: i32 = 1;

/// Maximum allowed acceleration factor.
pub const LZ4_ACCELERATION_MAX: i32 = 65_537;

/// Literal-run shift applied to the skip distance once the probe budget runs out.
const SKIP_RUN_SHIFT: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block compression functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Error {
    /// The output buffer is too small to hold the compressed data.
    OutputTooSmall,
    /// The input exceeds `LZ4_MAX_INPUT_SIZE`.
    InputTooLarge,
}

impl fmt::Display for Lz4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz4Error::OutputTooSmall => f.write_str("destination buffer too small for compressed block"),
            Lz4Error::InputTooLarge => write!(f, "input exceeds {LZ4_MAX_INPUT_SIZE} bytes"),
        }
    }
}

impl std::error::Error for Lz4Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Utility
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for a given input size.
///
/// Returns 0 if `input_size` exceeds `LZ4_MAX_INPUT_SIZE`.
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    if input_size > LZ4_MAX_INPUT_SIZE as usize {
        0
    } else {
        input_size + (input_size / 255) + 16
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search space: history window followed by the current input
// ─────────────────────────────────────────────────────────────────────────────

/// Virtual buffer `dict ++ src`.  Position `v < dict.len()` lives in the
/// window, anything past it in the current input.
struct SearchSpace<'a> {
    dict: &'a [u8],
    src: &'a [u8],
}

impl SearchSpace<'_> {
    #[inline(always)]
    fn byte(&self, v: usize) -> u8 {
        let d = self.dict.len();
        if v < d {
            self.dict[v]
        } else {
            self.src[v - d]
        }
    }

    /// 4-byte prefix at `v`, possibly straddling the window boundary.
    #[inline(always)]
    fn read32(&self, v: usize) -> u32 {
        let d = self.dict.len();
        if v >= d {
            read_le32(self.src, v - d)
        } else if v + 4 <= d {
            read_le32(self.dict, v)
        } else {
            u32::from_le_bytes([self.byte(v), self.byte(v + 1), self.byte(v + 2), self.byte(v + 3)])
        }
    }

    /// Number of equal bytes at `ip` and `m` (`m < ip`, `ip` in the current
    /// input), never extending `ip` past `limit`.
    fn count(&self, ip: usize, m: usize, limit: usize) -> usize {
        let d = self.dict.len();
        let (mut ip_cur, mut m_cur) = (ip, m);

        if m_cur < d {
            let n = count(&self.src[ip_cur - d..limit - d], &self.dict[m_cur..]);
            ip_cur += n;
            m_cur += n;
            if m_cur < d || ip_cur >= limit {
                return ip_cur - ip;
            }
        }
        ip_cur += count(&self.src[ip_cur - d..limit - d], &self.src[m_cur - d..]);
        ip_cur - ip
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core matcher
// ─────────────────────────────────────────────────────────────────────────────

/// Greedy LZ4 block compression of `src` into `dst`.
///
/// `dict` is the history window immediately preceding `src` in the stream
/// and `base` is the absolute stream position of `src[0]`.  `table` holds
/// absolute positions; entries that fall outside `[base - dict.len(), ip)` or
/// further than [`LZ4_DISTANCE_MAX`] back are ignored, so a stale table is
/// harmless.  The table is updated in place.
///
/// # Errors
/// [`Lz4Error::InputTooLarge`] when `src` exceeds [`LZ4_MAX_INPUT_SIZE`];
/// [`Lz4Error::OutputTooSmall`] when `dst` cannot hold the block.
pub fn compress_generic(
    table: &mut HashTable,
    dict: &[u8],
    base: u64,
    src: &[u8],
    dst: &mut [u8],
    acceleration: i32,
) -> Result<usize, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE as usize {
        return Err(Lz4Error::InputTooLarge);
    }
    let acceleration = acceleration.clamp(LZ4_ACCELERATION_DEFAULT, LZ4_ACCELERATION_MAX) as usize;
    let mut out = OutputCursor::new(dst);

    // Too short for any match: one literals-only sequence.
    if src.len() < LZ4_MIN_LENGTH {
        out.push_sequence(src, None)?;
        return Ok(out.position());
    }

    let space = SearchSpace { dict, src };
    let d = dict.len();
    let end = d + src.len();
    let mflimit = end - MFLIMIT;
    let matchlimit = end - LASTLITERALS;
    let low_abs = base - d as u64;
    let abs = |v: usize| low_abs + v as u64;

    // A table entry is a usable match for `ip` only if it is still inside the
    // window, precedes `ip` within reach, and its prefix really is equal.
    let candidate = |entry: u64, ip: usize| -> Option<usize> {
        let v = entry.checked_sub(low_abs)?;
        if v >= ip as u64 {
            return None;
        }
        let v = v as usize;
        (ip - v <= LZ4_DISTANCE_MAX && space.read32(v) == space.read32(ip)).then_some(v)
    };

    let budget = (((1usize << LZ4_SKIP_TRIGGER) + 3) / acceleration).max(1);
    let mut anchor = d;
    let mut ip = d;

    table[hash4(space.read32(ip), LZ4_HASHLOG)] = abs(ip);
    ip += 1;

    'search: loop {
        // Find a match start.
        let mut attempts = budget;
        let mut m = loop {
            if ip > mflimit {
                break 'search;
            }
            let h = hash4(space.read32(ip), LZ4_HASHLOG);
            let entry = table[h];
            table[h] = abs(ip);
            if let Some(m) = candidate(entry, ip) {
                break m;
            }
            attempts -= 1;
            if attempts == 0 {
                ip += 1 + ((ip - anchor) >> SKIP_RUN_SHIFT);
                attempts = budget;
            } else {
                ip += 1;
            }
        };

        // Catch up: extend the match backwards over the pending literals.
        while ip > anchor && m > 0 && space.byte(ip - 1) == space.byte(m - 1) {
            ip -= 1;
            m -= 1;
        }

        let mut literals = &src[anchor - d..ip - d];
        loop {
            let match_len = MINMATCH + space.count(ip + MINMATCH, m + MINMATCH, matchlimit);
            out.push_sequence(literals, Some((ip - m, match_len)))?;
            ip += match_len;
            anchor = ip;

            if ip > mflimit {
                break 'search;
            }

            // Fill table
            table[hash4(space.read32(ip - 2), LZ4_HASHLOG)] = abs(ip - 2);

            // Test next position: a hit chains straight into a zero-literal sequence.
            let h = hash4(space.read32(ip), LZ4_HASHLOG);
            let entry = table[h];
            table[h] = abs(ip);
            match candidate(entry, ip) {
                Some(next) => {
                    m = next;
                    literals = &[];
                }
                None => {
                    ip += 1;
                    continue 'search;
                }
            }
        }
    }

    out.push_sequence(&src[anchor - d..], None)?;
    Ok(out.position())
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst` with the given acceleration factor.
///
/// `acceleration` is clamped to `1..=LZ4_ACCELERATION_MAX`; larger values
/// probe fewer positions and trade ratio for speed.  Size `dst` with
/// [`compress_bound`] to guarantee success.
///
/// Returns the number of bytes written to `dst`.
///
/// # Errors
/// - [`Lz4Error::OutputTooSmall`] when `dst` is too small.
/// - [`Lz4Error::InputTooLarge`] when `src.len() > LZ4_MAX_INPUT_SIZE`.
pub fn compress_fast(src: &[u8], dst: &mut [u8], acceleration: i32) -> Result<usize, Lz4Error> {
    let mut table: HashTable = [0; LZ4_HASH_SIZE_U32];
    compress_generic(&mut table, &[], 0, src, dst, acceleration)
}

/// Compress `src` into `dst` using the default acceleration (1).
///
/// Returns the number of bytes written to `dst`.
///
/// # Errors
/// Same conditions as [`compress_fast`].
pub fn compress_default(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    compress_fast(src, dst, LZ4_ACCELERATION_DEFAULT)
}

/// Compress `src` into a new vector sized with [`compress_bound`] and then
/// truncated to the compressed length.
pub fn compress_to_vec(src: &[u8]) -> Result<Vec<u8>, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE as usize {
        return Err(Lz4Error::InputTooLarge);
    }
    let mut dst = vec![0u8; compress_bound(src.len())];
    let written = compress_default(src, &mut dst)?;
    dst.truncate(written);
    Ok(dst)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
