//! HC sequence encoder.
//!
//! [`encode_sequence`] serialises one complete LZ4 sequence (token byte,
//! literal-length extension, literal run, 16-bit offset, match-length
//! extension) onto a growable output.  The match-length extension always
//! follows the offset; the literal-length extension always precedes the
//! literals.

use crate::block::types::{MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

#[inline]
fn push_length_ext(dst: &mut Vec<u8>, mut rest: usize) {
    while rest >= 255 {
        dst.push(255);
        rest -= 255;
    }
    dst.push(rest as u8);
}

/// Append `literals` followed by a match of `match_len` bytes at `offset`.
///
/// `offset` must be in `1..=65535` and `match_len >= MINMATCH`.
pub fn encode_sequence(dst: &mut Vec<u8>, literals: &[u8], offset: usize, match_len: usize) {
    debug_assert!(offset > 0 && offset <= u16::MAX as usize);
    debug_assert!(match_len >= MINMATCH);

    let lit_len = literals.len();
    let ml_code = match_len - MINMATCH;
    let token = (lit_len.min(RUN_MASK) << ML_BITS) | ml_code.min(ML_MASK);
    dst.push(token as u8);

    if lit_len >= RUN_MASK {
        push_length_ext(dst, lit_len - RUN_MASK);
    }
    dst.extend_from_slice(literals);

    dst.extend_from_slice(&(offset as u16).to_le_bytes());
    if ml_code >= ML_MASK {
        push_length_ext(dst, ml_code - ML_MASK);
    }
}

/// Append the final literals-only sequence of a block.
pub fn encode_last_literals(dst: &mut Vec<u8>, literals: &[u8]) {
    let lit_len = literals.len();
    dst.push((lit_len.min(RUN_MASK) << ML_BITS) as u8);
    if lit_len >= RUN_MASK {
        push_length_ext(dst, lit_len - RUN_MASK);
    }
    dst.extend_from_slice(literals);
}
