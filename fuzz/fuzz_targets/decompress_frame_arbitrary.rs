#![no_main]
use libfuzzer_sys::fuzz_target;
use lz4codec::frame;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, and arbitrary bytes behind a valid magic number.
    let _ = frame::parse_header(data);
    let _ = frame::decompress(data);

    let mut framed = vec![0x04, 0x22, 0x4D, 0x18];
    framed.extend_from_slice(data);
    let _ = frame::decompress(&framed);
});
