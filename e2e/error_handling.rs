//! E2E Test Suite 04: Error Handling
//!
//! Hostile input must come back as an error value, never a panic or an
//! out-of-bounds access:
//! - random bytes through the block decoder at many capacities
//! - every truncation and single-byte corruption of a valid block and frame
//! - partial decoding at every target length

use lz4codec::block::{
    compress_to_vec, decompress_safe, decompress_safe_partial, decompress_safe_using_dict,
    DecompressError,
};
use lz4codec::frame::{compress_with, decompress, BlockSizeId, FrameDescriptor, FrameError};

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next() as u8).collect()
    }
}

fn sample() -> Vec<u8> {
    b"error handling needs a block with literals, matches and long runs ".repeat(40)
}

#[test]
fn random_bytes_never_panic_block_decoder() {
    let mut rng = Lcg(1);
    for round in 0..2_000 {
        let len = 1 + (rng.next() as usize % 300);
        let src = rng.bytes(len);
        let capacity = rng.next() as usize % 2_000;
        let mut dst = vec![0u8; capacity];
        if let Ok(n) = decompress_safe(&src, &mut dst) {
            assert!(n <= capacity, "round {round}");
        }
        let n = rng.next() as usize % 100;
        let dict = rng.bytes(n);
        if let Ok(n) = decompress_safe_using_dict(&src, &mut dst, &dict) {
            assert!(n <= capacity, "round {round}");
        }
    }
}

#[test]
fn every_truncation_of_a_block_fails_cleanly() {
    let src = sample();
    let block = compress_to_vec(&src).unwrap();
    let mut dst = vec![0u8; src.len()];
    for cut in 0..block.len() {
        match decompress_safe(&block[..cut], &mut dst) {
            Err(_) => {}
            // A cut on a sequence boundary is a valid, shorter block.
            Ok(n) => assert!(n < src.len() && dst[..n] == src[..n], "cut {cut}"),
        }
    }
}

#[test]
fn every_single_byte_corruption_of_a_block() {
    let src = sample();
    let block = compress_to_vec(&src).unwrap();
    let mut dst = vec![0u8; src.len() + 64];
    for pos in 0..block.len() {
        for flip in [0x01u8, 0x80, 0xFF] {
            let mut bad = block.clone();
            bad[pos] ^= flip;
            if let Ok(n) = decompress_safe(&bad, &mut dst) {
                assert!(n <= dst.len());
            }
        }
    }
}

#[test]
fn partial_decode_every_target() {
    let src = sample();
    let block = compress_to_vec(&src).unwrap();
    for target in 0..=src.len() {
        let mut dst = vec![0u8; src.len()];
        let n = decompress_safe_partial(&block, &mut dst, target).unwrap();
        assert!(n >= target.min(src.len()) && n <= src.len(), "target {target}");
        assert_eq!(dst[..n], src[..n], "target {target}");
    }
}

#[test]
fn partial_decode_into_short_buffers() {
    let src = sample();
    let block = compress_to_vec(&src).unwrap();
    for capacity in [1usize, 5, 17, 100, 1_000] {
        let mut dst = vec![0u8; capacity];
        let n = decompress_safe_partial(&block, &mut dst, capacity / 2).unwrap();
        assert!(n <= capacity);
        assert_eq!(dst[..n], src[..n], "capacity {capacity}");
    }
}

#[test]
fn full_decode_into_short_buffer_reports_kind() {
    let src = sample();
    let block = compress_to_vec(&src).unwrap();
    let mut dst = vec![0u8; src.len() - 1];
    let err = decompress_safe(&block, &mut dst).unwrap_err();
    assert!(matches!(
        err,
        DecompressError::OutputTooSmallForLiterals | DecompressError::OutputTooSmallForMatch
    ));
    assert!(err.code() < 0);
}

#[test]
fn every_truncation_of_a_frame_fails() {
    let src = sample();
    let desc = FrameDescriptor::default().with_block_checksum(true).with_content_size(true);
    let frame = compress_with(&src, &desc);
    for cut in 0..frame.len() {
        assert!(decompress(&frame[..cut]).is_err(), "cut {cut}");
    }
    assert_eq!(decompress(&frame).unwrap(), src);
}

#[test]
fn every_single_byte_corruption_of_a_frame_is_detected() {
    // Header checksum, block checksums and the content checksum together
    // cover every byte of the frame.
    let src = sample();
    let desc = FrameDescriptor::default()
        .with_block_size(BlockSizeId::Max64Kb)
        .with_block_checksum(true);
    let frame = compress_with(&src, &desc);
    for pos in 0..frame.len() {
        let mut bad = frame.clone();
        bad[pos] ^= 0x04;
        assert!(decompress(&bad).is_err(), "byte {pos} not detected");
    }
}

#[test]
fn random_frames_never_panic() {
    let mut rng = Lcg(7);
    let desc = FrameDescriptor::default().with_block_size(BlockSizeId::Max64Kb);
    let valid = compress_with(&sample(), &desc);
    for _ in 0..2_000 {
        let mut bad = valid.clone();
        let edits = 1 + rng.next() as usize % 4;
        for _ in 0..edits {
            let pos = rng.next() as usize % bad.len();
            bad[pos] = rng.next() as u8;
        }
        let _ = decompress(&bad);
    }
    for _ in 0..500 {
        let mut junk = vec![0x04, 0x22, 0x4D, 0x18];
        let n = rng.next() as usize % 64;
        junk.extend(rng.bytes(n));
        assert!(decompress(&junk).is_err());
    }
}

#[test]
fn frame_error_wraps_block_error() {
    let err: FrameError = DecompressError::TruncatedLiterals.into();
    assert_eq!(err, FrameError::Block(DecompressError::TruncatedLiterals));
    assert!(err.to_string().contains("literal"));
}
