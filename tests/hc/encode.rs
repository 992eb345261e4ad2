// Integration tests for hc::encode: sequence serialisation.

use lz4codec::block::decompress_safe;
use lz4codec::hc::encode::{encode_last_literals, encode_sequence};

#[test]
fn hello_hello_world_layout() {
    let mut dst = Vec::new();
    encode_sequence(&mut dst, b"Hello", 5, 5);
    encode_last_literals(&mut dst, b"World");
    assert_eq!(
        dst,
        vec![0x51, b'H', b'e', b'l', b'l', b'o', 0x05, 0x00, 0x50, b'W', b'o', b'r', b'l', b'd']
    );

    let mut out = [0u8; 15];
    assert_eq!(decompress_safe(&dst, &mut out), Ok(15));
    assert_eq!(&out, b"HelloHelloWorld");
}

#[test]
fn nibble_boundaries() {
    // 15 literals and a 19-byte match: both nibbles saturate with a zero
    // extension byte.
    let lits = *b"ABCDEFGHIJKLMNO";
    let mut dst = Vec::new();
    encode_sequence(&mut dst, &lits, 15, 19);
    assert_eq!(dst[0], 0xFF);
    assert_eq!(dst[1], 0x00);
    assert_eq!(&dst[2..17], &lits);
    assert_eq!(&dst[17..], &[15, 0, 0]);
}

#[test]
fn just_below_the_boundaries() {
    let mut dst = Vec::new();
    encode_sequence(&mut dst, &[1u8; 14], 1, 18);
    assert_eq!(dst[0], 0xEE);
    assert_eq!(dst.len(), 1 + 14 + 2);
}

#[test]
fn large_offset_is_little_endian() {
    let mut dst = Vec::new();
    encode_sequence(&mut dst, b"", 0xFFFF, 4);
    assert_eq!(dst, vec![0x00, 0xFF, 0xFF]);
}

#[test]
fn empty_last_literals() {
    let mut dst = vec![9];
    encode_last_literals(&mut dst, b"");
    assert_eq!(dst, vec![9, 0x00]);
}
