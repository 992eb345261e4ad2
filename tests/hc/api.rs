// Integration tests for hc::api: one-shot high-compression blocks.
//
//   - Output is a standard block: decompress_safe restores the input
//   - Empty, tiny, incompressible and > 1 MiB inputs round-trip
//   - HC output is never larger than the greedy encoder's on structured text

use lz4codec::block::{compress_bound, compress_to_vec, decompress_safe};
use lz4codec::hc::{compress_hc, compress_hc_to_vec, LZ4HC_CLEVEL_DEFAULT, LZ4HC_MAX_ATTEMPTS};

fn records(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut n = 0u32;
    while out.len() < len {
        let line = format!("{{\"id\":{n},\"name\":\"user{}\",\"active\":{}}}\n", n % 97, n % 3 == 0);
        out.extend_from_slice(line.as_bytes());
        n += 1;
    }
    out.truncate(len);
    out
}

fn noise(len: usize) -> Vec<u8> {
    let mut state = 0xA5A5_1234u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

fn roundtrip(src: &[u8]) -> usize {
    let packed = compress_hc_to_vec(src).unwrap();
    assert!(packed.len() <= compress_bound(src.len()));
    let mut out = vec![0u8; src.len()];
    let n = decompress_safe(&packed, &mut out).unwrap();
    assert_eq!(n, src.len());
    assert_eq!(out, src);
    packed.len()
}

#[test]
fn constants() {
    assert_eq!(LZ4HC_CLEVEL_DEFAULT, 9);
    assert_eq!(LZ4HC_MAX_ATTEMPTS, 256);
}

#[test]
fn empty_input() {
    assert_eq!(compress_hc_to_vec(b"").unwrap(), vec![0x00]);
    assert_eq!(roundtrip(b""), 1);
}

#[test]
fn one_byte_input() {
    assert_eq!(compress_hc_to_vec(b"q").unwrap(), vec![0x10, b'q']);
}

#[test]
fn short_inputs_roundtrip() {
    let src = records(64);
    for len in 0..=64 {
        roundtrip(&src[..len]);
    }
}

#[test]
fn structured_text_roundtrip() {
    let src = records(200_000);
    let size = roundtrip(&src);
    assert!(size < src.len() / 3, "{size}");
}

#[test]
fn incompressible_roundtrip() {
    roundtrip(&noise(50_000));
}

#[test]
fn large_input_roundtrip() {
    let mut src = records(700_000);
    src.extend_from_slice(&noise(200_000));
    src.extend_from_slice(&records(300_000));
    assert!(src.len() > 1 << 20);
    roundtrip(&src);
}

#[test]
fn long_runs_roundtrip() {
    let mut src = vec![0u8; 100_000];
    src.extend(std::iter::repeat(b'z').take(70_000));
    src.extend_from_slice(b"end of runs");
    roundtrip(&src);
}

#[test]
fn not_worse_than_greedy_on_text() {
    let src = records(100_000);
    let hc = compress_hc_to_vec(&src).unwrap();
    let fast = compress_to_vec(&src).unwrap();
    assert!(hc.len() <= fast.len(), "hc {} vs fast {}", hc.len(), fast.len());
}

#[test]
fn compress_hc_appends_and_returns_total_length() {
    let src = records(5_000);
    let mut dst = b"prefix".to_vec();
    let total = compress_hc(&src, &mut dst).unwrap();
    assert_eq!(total, dst.len());
    assert_eq!(&dst[..6], b"prefix");
    assert_eq!(&dst[6..], &compress_hc_to_vec(&src).unwrap()[..]);
}

#[test]
fn deterministic_output() {
    let src = records(30_000);
    assert_eq!(compress_hc_to_vec(&src).unwrap(), compress_hc_to_vec(&src).unwrap());
}
