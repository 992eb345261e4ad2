//! LZ4 block decompression core engine.
//!
//!   - `read_variable_length`: bounded base-255 length decoder
//!   - [`decompress_generic`]: the security-critical safe decompression loop
//!
//! # Security boundary
//!
//! Every read from the compressed input and every write into the destination
//! is checked against the true end of its slice before it happens.  Malformed
//! or truncated input returns one of the [`DecompressError`] kinds; it never
//! panics and never touches memory outside `src`, `dst` and `dict`.

use core::fmt;

use super::types::{read_le16, MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block decompression.
///
/// Each kind keeps a stable negative [`code`](DecompressError::code) so
/// callers that log or compare the classic sentinel values still can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// A literal run does not fit in the destination.
    OutputTooSmallForLiterals,
    /// The input ends inside a literal run (or before the first token).
    TruncatedLiterals,
    /// The input ends inside a match offset or a match-length extension.
    TruncatedOffset,
    /// A match offset of zero.
    ZeroOffset,
    /// A match reaches before the start of the output with no dictionary, or
    /// before the start of the dictionary.
    InvalidDictionaryReference,
    /// A match does not fit in the destination.
    OutputTooSmallForMatch,
}

impl DecompressError {
    pub fn code(self) -> i32 {
        match self {
            DecompressError::OutputTooSmallForLiterals => -1,
            DecompressError::TruncatedLiterals => -2,
            DecompressError::TruncatedOffset => -3,
            DecompressError::ZeroOffset => -4,
            DecompressError::InvalidDictionaryReference => -5,
            DecompressError::OutputTooSmallForMatch => -6,
        }
    }
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DecompressError::OutputTooSmallForLiterals => "output buffer too small for literals",
            DecompressError::TruncatedLiterals => "input truncated during literal copy",
            DecompressError::TruncatedOffset => "input truncated reading match offset",
            DecompressError::ZeroOffset => "zero match offset",
            DecompressError::InvalidDictionaryReference => "match references data before the dictionary",
            DecompressError::OutputTooSmallForMatch => "output buffer too small for match",
        };
        write!(f, "{msg} (code {})", self.code())
    }
}

impl std::error::Error for DecompressError {}

// ─────────────────────────────────────────────────────────────────────────────
// read_variable_length
// ─────────────────────────────────────────────────────────────────────────────

/// Read the base-255 continuation of a saturated length nibble.
///
/// Accumulates bytes until one below 255 is read.  Returns `None` if the
/// input ends first.  The sum saturates instead of wrapping; any length that
/// large fails the destination bounds check right after.
#[inline(always)]
fn read_variable_length(src: &[u8], ip: &mut usize) -> Option<usize> {
    let mut length = 0usize;
    loop {
        let s = *src.get(*ip)?;
        *ip += 1;
        length = length.saturating_add(s as usize);
        if s != 255 {
            return Some(length);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Match copy helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Copy `len` bytes inside `dst` from `from` to `to` (`from < to`).
///
/// When the ranges overlap the copy behaves as if done one byte at a time,
/// which is what turns a short offset into a repeating pattern.
#[inline(always)]
fn copy_match(dst: &mut [u8], from: usize, to: usize, len: usize) {
    let offset = to - from;
    if offset >= len {
        dst.copy_within(from..from + len, to);
    } else if offset == 1 {
        let byte = dst[from];
        dst[to..to + len].fill(byte);
    } else {
        for i in 0..len {
            dst[to + i] = dst[from + i];
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_generic
// ─────────────────────────────────────────────────────────────────────────────

/// Decode one LZ4 block.
///
/// * `src`: the compressed block.
/// * `dst`: destination; its length is the hard output limit.
/// * `target`: stop once at least this many bytes are decoded.  When
///   `target < dst.len()` the call runs in *partial* mode: copies that would
///   overrun `dst` are clamped to it instead of failing.  Values above
///   `dst.len()` are clamped.
/// * `dict`: history preceding `dst[0]`; empty when there is none.
///
/// Returns the number of bytes written to `dst`.
///
/// # Errors
/// One [`DecompressError`] kind per failure class; see the enum.
pub fn decompress_generic(
    src: &[u8],
    dst: &mut [u8],
    target: usize,
    dict: &[u8],
) -> Result<usize, DecompressError> {
    let iend = src.len();
    let oend = dst.len();
    let target = target.min(oend);
    let partial = target < oend;

    if iend == 0 {
        return Err(DecompressError::TruncatedLiterals);
    }

    let mut ip = 0usize;
    let mut op = 0usize;

    while ip < iend {
        let token = src[ip] as usize;
        ip += 1;

        // ── literals ──────────────────────────────────────────────────────────
        let mut lit_len = token >> ML_BITS;
        if lit_len == RUN_MASK {
            let ext = read_variable_length(src, &mut ip).ok_or(DecompressError::TruncatedLiterals)?;
            lit_len = lit_len.saturating_add(ext);
        }

        let mut copy_len = lit_len;
        let lit_end = op.saturating_add(lit_len);
        if lit_end > oend {
            if !partial {
                return Err(DecompressError::OutputTooSmallForLiterals);
            }
            copy_len = oend - op;
        }
        if copy_len > iend - ip {
            return Err(DecompressError::TruncatedLiterals);
        }
        dst[op..op + copy_len].copy_from_slice(&src[ip..ip + copy_len]);
        op += copy_len;
        ip += copy_len;

        if ip >= iend || (partial && op >= target) {
            break;
        }

        // ── match ─────────────────────────────────────────────────────────────
        if iend - ip < 2 {
            return Err(DecompressError::TruncatedOffset);
        }
        let offset = read_le16(src, ip) as usize;
        ip += 2;
        if offset == 0 {
            return Err(DecompressError::ZeroOffset);
        }

        let mut match_len = token & ML_MASK;
        if match_len == ML_MASK {
            let ext = read_variable_length(src, &mut ip).ok_or(DecompressError::TruncatedOffset)?;
            match_len = match_len.saturating_add(ext);
        }
        match_len = match_len.saturating_add(MINMATCH);

        let mut copy_len = match_len;
        if match_len > oend - op {
            if !partial {
                return Err(DecompressError::OutputTooSmallForMatch);
            }
            copy_len = oend - op;
        }

        if offset <= op {
            // Prefix match: entirely inside what has been written so far.
            copy_match(dst, op - offset, op, copy_len);
        } else {
            // External dictionary: the dict tail first, then our own prefix.
            let back = offset - op;
            if dict.is_empty() || back > dict.len() {
                return Err(DecompressError::InvalidDictionaryReference);
            }
            let dict_start = dict.len() - back;
            let from_dict = copy_len.min(back);
            dst[op..op + from_dict].copy_from_slice(&dict[dict_start..dict_start + from_dict]);
            let rest = copy_len - from_dict;
            if rest > 0 {
                copy_match(dst, 0, op + from_dict, rest);
            }
        }
        op += copy_len;

        if partial && op >= target {
            break;
        }
    }

    Ok(op)
}
