//! LZ4 HC public API.
//!
//! | Function                 | Role                                          |
//! |--------------------------|-----------------------------------------------|
//! | [`compress_hc`]          | append one HC block to a caller's `Vec<u8>`   |
//! | [`compress_hc_to_vec`]   | HC-compress into a new vector                 |
//!
//! HC blocks are always self-contained: each call builds a fresh
//! [`HcContext`] and references nothing outside `src`.  The output is a
//! standard LZ4 block, decodable by
//! [`decompress_safe`](crate::block::decompress_safe).

use super::encode::{encode_last_literals, encode_sequence};
use super::search::find_longest_match;
use super::types::{HcContext, LZ4HC_MAX_ATTEMPTS};
use crate::block::compress::{compress_bound, Lz4Error, LZ4_MAX_INPUT_SIZE};
use crate::block::types::{LASTLITERALS, LZ4_MIN_LENGTH, MFLIMIT};

/// HC-compress `src` and append the block to `dst`.
///
/// Each position gets a chain search; before a match at `ip` is committed,
/// `ip + 1` is searched too, and a strictly longer match there defers the
/// current one by a single literal.
///
/// Returns the total length of `dst` after appending.
///
/// # Errors
/// [`Lz4Error::InputTooLarge`] when `src.len() > LZ4_MAX_INPUT_SIZE`.
pub fn compress_hc(src: &[u8], dst: &mut Vec<u8>) -> Result<usize, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE as usize {
        return Err(Lz4Error::InputTooLarge);
    }
    dst.reserve(compress_bound(src.len()));

    if src.len() < LZ4_MIN_LENGTH {
        encode_last_literals(dst, src);
        return Ok(dst.len());
    }

    let mflimit = src.len() - MFLIMIT;
    let matchlimit = src.len() - LASTLITERALS;
    let mut ctx = HcContext::new();
    let mut ip = 0usize;
    let mut anchor = 0usize;

    while ip <= mflimit {
        let Some(m) = find_longest_match(&mut ctx, src, ip, matchlimit, LZ4HC_MAX_ATTEMPTS) else {
            ip += 1;
            continue;
        };

        // Lazy step: a strictly longer match one byte later wins.
        if ip < mflimit {
            if let Some(next) =
                find_longest_match(&mut ctx, src, ip + 1, matchlimit, LZ4HC_MAX_ATTEMPTS)
            {
                if next.len > m.len {
                    ip += 1;
                    continue;
                }
            }
        }

        encode_sequence(dst, &src[anchor..ip], m.offset(ip), m.len);
        ip += m.len;
        anchor = ip;
    }

    encode_last_literals(dst, &src[anchor..]);
    Ok(dst.len())
}

/// HC-compress `src` into a new vector.
pub fn compress_hc_to_vec(src: &[u8]) -> Result<Vec<u8>, Lz4Error> {
    let mut dst = Vec::new();
    compress_hc(src, &mut dst)?;
    Ok(dst)
}
