#![no_main]
use libfuzzer_sys::fuzz_target;
use lz4codec::block::{compress_to_vec, decompress_safe};
use lz4codec::hc::compress_hc_to_vec;

fuzz_target!(|data: &[u8]| {
    // Greedy and HC blocks must both decode back to the input at its exact size.
    for compressed in [compress_to_vec(data), compress_hc_to_vec(data)] {
        let compressed = compressed.expect("fuzz inputs are far below the block size limit");
        let mut out = vec![0u8; data.len()];
        let n = decompress_safe(&compressed, &mut out).expect("own block must decode");
        assert_eq!(&out[..n], data);
    }
});
