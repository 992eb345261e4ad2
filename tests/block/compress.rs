// Integration tests for block::compress: one-shot greedy compression.
//
//   - compress_bound() worst-case sizes and the oversized-input rule
//   - compress_default() / compress_fast() output decodes back to the input
//   - Err(Lz4Error::OutputTooSmall) when the destination is short
//   - Acceleration values outside 1..=LZ4_ACCELERATION_MAX are clamped

use lz4codec::block::compress::{
    compress_bound, compress_default, compress_fast, compress_to_vec, Lz4Error,
    LZ4_ACCELERATION_DEFAULT, LZ4_ACCELERATION_MAX, LZ4_MAX_INPUT_SIZE,
};
use lz4codec::block::decompress_safe;

fn sample_text(len: usize) -> Vec<u8> {
    let words = b"the quick brown fox jumps over the lazy dog while lz4 keeps pace ";
    words.iter().copied().cycle().take(len).collect()
}

fn noise(len: usize) -> Vec<u8> {
    let mut state = 0x1234_5678u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn roundtrip(src: &[u8]) -> Vec<u8> {
    let mut compressed = vec![0u8; compress_bound(src.len())];
    let n = compress_default(src, &mut compressed).unwrap();
    let mut out = vec![0u8; src.len()];
    let m = decompress_safe(&compressed[..n], &mut out).unwrap();
    out.truncate(m);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Constants and bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn constants() {
    assert_eq!(LZ4_MAX_INPUT_SIZE, 0x7E00_0000);
    assert_eq!(LZ4_ACCELERATION_DEFAULT, 1);
    assert_eq!(LZ4_ACCELERATION_MAX, 65_537);
}

#[test]
fn bound_formula() {
    assert_eq!(compress_bound(0), 16);
    assert_eq!(compress_bound(255), 255 + 1 + 16);
    assert_eq!(compress_bound(1 << 20), (1 << 20) + (1 << 20) / 255 + 16);
}

#[test]
fn bound_is_zero_above_max_input() {
    assert_eq!(compress_bound(LZ4_MAX_INPUT_SIZE as usize + 1), 0);
    assert!(compress_bound(LZ4_MAX_INPUT_SIZE as usize) > 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_single_zero_token() {
    let mut dst = [0xAAu8; 16];
    assert_eq!(compress_default(b"", &mut dst), Ok(1));
    assert_eq!(dst[0], 0x00);
    assert_eq!(roundtrip(b""), b"");
}

#[test]
fn one_byte_roundtrip() {
    assert_eq!(roundtrip(b"x"), b"x");
}

#[test]
fn text_roundtrip_and_shrinks() {
    let src = sample_text(10_000);
    let packed = compress_to_vec(&src).unwrap();
    assert!(packed.len() < src.len() / 4);
    assert_eq!(roundtrip(&src), src);
}

#[test]
fn noise_stays_within_bound() {
    for len in [13usize, 100, 4096, 70_000] {
        let src = noise(len);
        let packed = compress_to_vec(&src).unwrap();
        assert!(packed.len() <= compress_bound(len), "len {len}");
        assert_eq!(roundtrip(&src), src);
    }
}

#[test]
fn large_input_roundtrip() {
    // Longer than the 64 KiB match distance and above 1 MiB.
    let mut src = sample_text(600_000);
    src.extend_from_slice(&noise(300_000));
    src.extend_from_slice(&sample_text(300_000));
    assert!(src.len() > 1 << 20);
    assert_eq!(roundtrip(&src), src);
}

#[test]
fn every_length_near_the_limits_roundtrips() {
    let text = sample_text(64);
    for len in 0..=40 {
        assert_eq!(roundtrip(&text[..len]), &text[..len], "len {len}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Acceleration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn acceleration_is_clamped() {
    let src = sample_text(5_000);
    let mut a = vec![0u8; compress_bound(src.len())];
    let mut b = vec![0u8; compress_bound(src.len())];

    let na = compress_fast(&src, &mut a, 0).unwrap();
    let nb = compress_fast(&src, &mut b, LZ4_ACCELERATION_DEFAULT).unwrap();
    assert_eq!(a[..na], b[..nb]);

    let na = compress_fast(&src, &mut a, i32::MAX).unwrap();
    let nb = compress_fast(&src, &mut b, LZ4_ACCELERATION_MAX).unwrap();
    assert_eq!(a[..na], b[..nb]);
}

#[test]
fn high_acceleration_still_roundtrips() {
    let src = sample_text(50_000);
    let mut packed = vec![0u8; compress_bound(src.len())];
    let n = compress_fast(&src, &mut packed, 64).unwrap();
    let mut out = vec![0u8; src.len()];
    assert_eq!(decompress_safe(&packed[..n], &mut out), Ok(src.len()));
    assert_eq!(out, src);
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn short_destination_fails() {
    let src = noise(1_000);
    let mut dst = vec![0u8; 500];
    assert_eq!(compress_default(&src, &mut dst), Err(Lz4Error::OutputTooSmall));
}

#[test]
fn empty_destination_fails() {
    let mut dst = [0u8; 0];
    assert_eq!(compress_default(b"", &mut dst), Err(Lz4Error::OutputTooSmall));
}

#[test]
fn error_display() {
    assert!(!Lz4Error::OutputTooSmall.to_string().is_empty());
    assert_ne!(Lz4Error::OutputTooSmall.to_string(), Lz4Error::InputTooLarge.to_string());
}
