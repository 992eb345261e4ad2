//! LZ4 block constants, hashing, match-length helpers, and the bounded
//! output cursor used by the block encoder.
//!
//! Everything here is shared by the greedy encoder ([`super::compress`]),
//! the streaming context ([`super::stream`]) and the decoder
//! ([`super::decompress_core`]); the HC encoder reuses the constants and
//! [`count`].

use super::compress::Lz4Error;

// ─────────────────────────────────────────────────────────────────────────────
// Block-format constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Safety margin before the end of the decode buffer inside which the
/// decoder switches to exact, end-checked copies.
pub const WILDCOPYLENGTH: usize = 8;

/// Last N bytes of the input are always emitted as literals.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const LASTLITERALS: usize = 5;

/// A match must start at least this many bytes before the end of the input.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const MFLIMIT: usize = WILDCOPYLENGTH + MINMATCH;

/// Minimum input length that may produce any match at all.
pub const LZ4_MIN_LENGTH: usize = MFLIMIT + 1;

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

/// Maximum back-reference distance supported by the LZ4 format.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

/// Size of the streaming history window.  Fixed by the 2-byte offset field.
pub const WINDOW_SIZE: usize = 64 * KB;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: usize = (1 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: usize = (1 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// Hash-table sizing (default LZ4_MEMORY_USAGE = 14)
// ─────────────────────────────────────────────────────────────────────────────

/// Sizing knob inherited from the reference format: the hash log is
/// `LZ4_MEMORY_USAGE - 2`.  Slots hold `u64` absolute positions, so the table
/// itself occupies 32 KiB.
pub const LZ4_MEMORY_USAGE: u32 = 14;
/// Hash log: number of bits kept from each hash value.
pub const LZ4_HASHLOG: u32 = LZ4_MEMORY_USAGE - 2; // = 12
/// Number of entries in the greedy hash table.
pub const LZ4_HASH_SIZE_U32: usize = 1 << LZ4_HASHLOG;

/// Multiplicative hashing constant (Knuth, 2^32 / φ).
pub const LZ4_HASH_PRIME: u32 = 2_654_435_761;

/// Higher → faster on incompressible data at the cost of compression ratio.
pub const LZ4_SKIP_TRIGGER: u32 = 6;

/// Greedy-matcher hash table: the most recent absolute stream position seen
/// for each 4-byte-prefix hash.
pub type HashTable = [u64; LZ4_HASH_SIZE_U32];

// ─────────────────────────────────────────────────────────────────────────────
// Memory helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Little-endian u16 at `pos`.  Caller guarantees `pos + 2 <= buf.len()`.
#[inline(always)]
pub fn read_le16(buf: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([buf[pos], buf[pos + 1]])
}

/// Little-endian u32 at `pos`.  Caller guarantees `pos + 4 <= buf.len()`.
#[inline(always)]
pub fn read_le32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}

/// Little-endian u64 at `pos`.  Caller guarantees `pos + 8 <= buf.len()`.
#[inline(always)]
pub fn read_le64(buf: &[u8], pos: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[pos..pos + 8]);
    u64::from_le_bytes(word)
}

/// Hash a 4-byte sequence into `hash_log` bits.
#[inline(always)]
pub fn hash4(sequence: u32, hash_log: u32) -> usize {
    (sequence.wrapping_mul(LZ4_HASH_PRIME) >> (32 - hash_log)) as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// Match-length helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Number of equal leading bytes encoded in the XOR of two little-endian words.
#[inline(always)]
pub fn nb_common_bytes(diff: u64) -> usize {
    (diff.trailing_zeros() / 8) as usize
}

/// Length of the common prefix of `a` and `b`, bounded by the shorter slice.
///
/// Compares eight bytes at a time, then finishes byte by byte.
#[inline]
pub fn count(a: &[u8], b: &[u8]) -> usize {
    let limit = a.len().min(b.len());
    let mut n = 0usize;

    while n + 8 <= limit {
        let diff = read_le64(a, n) ^ read_le64(b, n);
        if diff != 0 {
            return n + nb_common_bytes(diff);
        }
        n += 8;
    }
    while n < limit && a[n] == b[n] {
        n += 1;
    }
    n
}

// ─────────────────────────────────────────────────────────────────────────────
// Bounded output cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Write position over a caller-supplied destination slice.
///
/// Every write is checked against the true end of the slice; running out of
/// room surfaces as [`Lz4Error::OutputTooSmall`].
pub struct OutputCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> OutputCursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        OutputCursor { buf, pos: 0 }
    }

    /// Bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), Lz4Error> {
        let slot = self.buf.get_mut(self.pos).ok_or(Lz4Error::OutputTooSmall)?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), Lz4Error> {
        if bytes.len() > self.remaining() {
            return Err(Lz4Error::OutputTooSmall);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Emit the base-255 continuation of a length whose nibble saturated.
    pub fn push_length_ext(&mut self, mut rest: usize) -> Result<(), Lz4Error> {
        while rest >= 255 {
            self.push(255)?;
            rest -= 255;
        }
        self.push(rest as u8)
    }

    /// Emit one complete sequence: token, literal run, and optionally a match
    /// given as `(offset, match_len)`.
    ///
    /// The exact size of the sequence is checked up front so a failed
    /// call leaves no half-written sequence behind.
    pub fn push_sequence(
        &mut self,
        literals: &[u8],
        matched: Option<(usize, usize)>,
    ) -> Result<(), Lz4Error> {
        let lit_len = literals.len();
        if encoded_len(lit_len, matched) > self.remaining() {
            return Err(Lz4Error::OutputTooSmall);
        }

        let lit_code = lit_len.min(RUN_MASK);
        let ml_code = matched.map_or(0, |(_, ml)| (ml - MINMATCH).min(ML_MASK));
        self.push(((lit_code << ML_BITS) | ml_code) as u8)?;
        if lit_len >= RUN_MASK {
            self.push_length_ext(lit_len - RUN_MASK)?;
        }
        self.extend(literals)?;

        if let Some((offset, match_len)) = matched {
            self.extend(&(offset as u16).to_le_bytes())?;
            if match_len - MINMATCH >= ML_MASK {
                self.push_length_ext(match_len - MINMATCH - ML_MASK)?;
            }
        }
        Ok(())
    }
}

/// Exact encoded size of one sequence.
fn encoded_len(lit_len: usize, matched: Option<(usize, usize)>) -> usize {
    let mut n = 1 + lit_len;
    if lit_len >= RUN_MASK {
        n += (lit_len - RUN_MASK) / 255 + 1;
    }
    if let Some((_, match_len)) = matched {
        n += 2;
        if match_len - MINMATCH >= ML_MASK {
            n += (match_len - MINMATCH - ML_MASK) / 255 + 1;
        }
    }
    n
}
