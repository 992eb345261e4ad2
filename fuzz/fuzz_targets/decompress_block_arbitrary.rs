#![no_main]
use libfuzzer_sys::fuzz_target;
use lz4codec::block::{decompress_safe, decompress_safe_partial, decompress_safe_using_dict};

fuzz_target!(|data: &[u8]| {
    // Errors are fine; panics and out-of-bounds writes are not.
    let capacity = data.len().saturating_mul(255).min(1 << 20);
    for cap in [0, 4096, capacity] {
        let mut dst = vec![0u8; cap];
        if let Ok(n) = decompress_safe(data, &mut dst) {
            assert!(n <= cap);
        }
        if let Ok(n) = decompress_safe_partial(data, &mut dst, cap / 2) {
            assert!(n <= cap);
        }
        let dict = &data[..data.len() / 2];
        if let Ok(n) = decompress_safe_using_dict(data, &mut dst, dict) {
            assert!(n <= cap);
        }
    }
});
