//! E2E Test Suite 01: Block Round Trips
//!
//! Feeds a range of data shapes through every block-level compressor and the
//! safe decoder:
//! - greedy one-shot at several accelerations
//! - HC one-shot
//! - empty, single-byte, boundary-length and multi-megabyte inputs
//! - compressed size never exceeds `compress_bound`

use lz4codec::block::{compress_bound, compress_fast, decompress_safe};
use lz4codec::hc::compress_hc_to_vec;

fn corpus() -> Vec<(&'static str, Vec<u8>)> {
    let mut lcg = 12_345u32;
    let mut random = || {
        lcg = lcg.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (lcg >> 16) as u8
    };
    let noise: Vec<u8> = (0..100_000).map(|_| random()).collect();
    let low_entropy: Vec<u8> = (0..100_000).map(|_| random() % 4).collect();
    let prose: Vec<u8> = b"It was the best of times, it was the worst of times, it was the age of wisdom. "
        .iter()
        .copied()
        .cycle()
        .take(250_000)
        .collect();
    let mut mixed = Vec::new();
    for i in 0..40 {
        if i % 3 == 0 {
            mixed.extend_from_slice(&noise[i * 1000..i * 1000 + 3000]);
        } else {
            mixed.extend(std::iter::repeat(i as u8).take(2_500 + i * 7));
        }
    }
    let mut big = Vec::with_capacity(3 << 20);
    while big.len() < 3 << 20 {
        big.extend_from_slice(format!("{:08x} ", big.len().wrapping_mul(2_654_435_761)).as_bytes());
        big.extend_from_slice(&noise[big.len() % 50_000..big.len() % 50_000 + 64]);
    }

    vec![
        ("empty", Vec::new()),
        ("one byte", vec![0x42]),
        ("twelve bytes", b"twelve bytes".to_vec()),
        ("thirteen byte", b"thirteen byte".to_vec()),
        ("zeros", vec![0u8; 200_000]),
        ("noise", noise),
        ("low entropy", low_entropy),
        ("prose", prose),
        ("mixed", mixed),
        ("3 MiB", big),
    ]
}

#[test]
fn greedy_roundtrip_all_shapes() {
    for (name, src) in corpus() {
        for acceleration in [1, 2, 8, 100] {
            let mut packed = vec![0u8; compress_bound(src.len())];
            let n = compress_fast(&src, &mut packed, acceleration)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(n <= compress_bound(src.len()), "{name}");
            let mut out = vec![0u8; src.len()];
            assert_eq!(decompress_safe(&packed[..n], &mut out), Ok(src.len()), "{name} accel {acceleration}");
            assert!(out == src, "{name} accel {acceleration}: content differs");
        }
    }
}

#[test]
fn hc_roundtrip_all_shapes() {
    for (name, src) in corpus() {
        let packed = compress_hc_to_vec(&src).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(packed.len() <= compress_bound(src.len()), "{name}");
        let mut out = vec![0u8; src.len()];
        assert_eq!(decompress_safe(&packed, &mut out), Ok(src.len()), "{name}");
        assert!(out == src, "{name}: content differs");
    }
}

#[test]
fn greedy_and_hc_outputs_are_interchangeable() {
    // Both encoders produce standard blocks: a decoder cannot tell them apart.
    for (name, src) in corpus().into_iter().take(8) {
        let mut greedy = vec![0u8; compress_bound(src.len())];
        let n = compress_fast(&src, &mut greedy, 1).unwrap();
        let hc = compress_hc_to_vec(&src).unwrap();

        let mut a = vec![0u8; src.len()];
        let mut b = vec![0u8; src.len()];
        decompress_safe(&greedy[..n], &mut a).unwrap();
        decompress_safe(&hc, &mut b).unwrap();
        assert_eq!(a, b, "{name}");
    }
}
