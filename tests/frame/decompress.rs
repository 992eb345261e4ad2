// Integration tests for frame::decompress: the frame decoder.
//
//   - Frames from the reference command-line tool's layout decode correctly
//   - Concatenated and skippable frames
//   - Every FrameError kind is reachable from a damaged frame

use lz4codec::block::DecompressError;
use lz4codec::frame::header::write_header;
use lz4codec::frame::{
    compress, compress_with, decompress, decompress_frame, header_checksum, BlockSizeId,
    FrameDescriptor, FrameError,
};
use lz4codec::xxhash::xxh32;

fn text(len: usize) -> Vec<u8> {
    (0..len).map(|i| b"decoder side of the frame format "[i % 33]).collect()
}

/// A frame holding `payload` as one stored block, laid out by hand.
fn hand_built_stored_frame(payload: &[u8]) -> Vec<u8> {
    // magic, FLG (v01, independent, content checksum), BD (64 KB), HC
    let mut frame = vec![0x04, 0x22, 0x4D, 0x18, 0x64, 0x40, 0xA7];
    frame.extend_from_slice(&(payload.len() as u32 | 0x8000_0000).to_le_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&[0, 0, 0, 0]);
    frame.extend_from_slice(&xxh32(payload, 0).to_le_bytes());
    frame
}

fn skippable(magic_low: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![0x50 | magic_low, 0x2A, 0x4D, 0x18];
    out.extend_from_slice(&(content.len() as u32).to_le_bytes());
    out.extend_from_slice(content);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Valid input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hand_built_frame() {
    let frame = hand_built_stored_frame(b"Hello");
    assert_eq!(&frame[16..20], &[0, 0, 0, 0]);
    assert_eq!(&frame[20..], &[0x8F, 0xD2, 0x06, 0xF2]);
    assert_eq!(decompress(&frame).unwrap(), b"Hello");
}

#[test]
fn hand_built_compressed_block() {
    // default header, one compressed block "HelloHelloWorld", no checksum
    let desc = FrameDescriptor::default().with_content_checksum(false);
    let mut frame = Vec::new();
    write_header(&mut frame, &desc, 0);
    let block = [0x51, b'H', b'e', b'l', b'l', b'o', 0x05, 0x00, 0x50, b'W', b'o', b'r', b'l', b'd'];
    frame.extend_from_slice(&(block.len() as u32).to_le_bytes());
    frame.extend_from_slice(&block);
    frame.extend_from_slice(&[0, 0, 0, 0]);
    assert_eq!(decompress(&frame).unwrap(), b"HelloHelloWorld");
}

#[test]
fn concatenated_frames() {
    let a = text(5_000);
    let b = text(70_000);
    let mut stream = compress(&a);
    stream.extend_from_slice(&compress_with(&b, &FrameDescriptor::default().with_block_size(BlockSizeId::Max64Kb)));
    assert_eq!(decompress(&stream).unwrap(), [a, b].concat());
}

#[test]
fn skippable_frames_are_ignored() {
    let src = text(1_000);
    let mut stream = skippable(0x0, b"metadata");
    stream.extend_from_slice(&compress(&src));
    stream.extend_from_slice(&skippable(0xF, b""));
    stream.extend_from_slice(&compress(b"tail"));
    stream.extend_from_slice(&skippable(0x7, &[0u8; 100]));

    let mut expected = src;
    expected.extend_from_slice(b"tail");
    assert_eq!(decompress(&stream).unwrap(), expected);
}

#[test]
fn decompress_frame_reports_consumed_bytes() {
    let first = compress(b"first frame");
    let mut stream = first.clone();
    stream.extend_from_slice(&compress(b"second"));

    let mut out = b"existing ".to_vec();
    assert_eq!(decompress_frame(&stream, &mut out), Ok(first.len()));
    assert_eq!(out, b"existing first frame");
}

#[test]
fn content_size_is_checked() {
    let src = text(3_000);
    let frame = compress_with(&src, &FrameDescriptor::default().with_content_size(true));
    assert_eq!(decompress(&frame).unwrap(), src);

    // Rewrite the declared size and fix up the header checksum.
    let mut bad = frame.clone();
    bad[6..14].copy_from_slice(&2_999u64.to_le_bytes());
    bad[14] = header_checksum(&bad[4..14]);
    assert_eq!(
        decompress(&bad),
        Err(FrameError::ContentSizeMismatch { expected: 2_999, actual: 3_000 })
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Damaged input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input() {
    assert_eq!(decompress(b""), Err(FrameError::InvalidMagic));
}

#[test]
fn not_a_frame() {
    assert_eq!(decompress(b"plain text, not lz4"), Err(FrameError::InvalidMagic));
}

#[test]
fn corrupted_header_checksum() {
    let mut frame = compress(b"payload");
    frame[6] ^= 0xFF;
    assert_eq!(decompress(&frame), Err(FrameError::CorruptedHeader));
}

#[test]
fn missing_end_mark() {
    let frame = hand_built_stored_frame(b"Hello");
    assert_eq!(decompress(&frame[..frame.len() - 8]), Err(FrameError::CorruptedHeader));
}

#[test]
fn truncated_block_payload() {
    let frame = hand_built_stored_frame(b"Hello");
    assert_eq!(decompress(&frame[..13]), Err(FrameError::TruncatedInput));
}

#[test]
fn truncated_content_checksum() {
    let frame = hand_built_stored_frame(b"Hello");
    assert_eq!(decompress(&frame[..frame.len() - 2]), Err(FrameError::TruncatedInput));
}

#[test]
fn truncated_skippable_frame() {
    let mut stream = skippable(0x3, &[1u8; 50]);
    stream.truncate(30);
    assert_eq!(decompress(&stream), Err(FrameError::TruncatedInput));
}

#[test]
fn oversized_block_header() {
    let mut frame = vec![0x04, 0x22, 0x4D, 0x18, 0x64, 0x40, 0xA7];
    frame.extend_from_slice(&(64u32 * 1024 + 1).to_le_bytes());
    frame.extend_from_slice(&vec![0u8; 64 * 1024 + 1]);
    assert_eq!(decompress(&frame), Err(FrameError::CorruptedHeader));
}

#[test]
fn content_checksum_mismatch() {
    let mut frame = hand_built_stored_frame(b"Hello");
    frame[11] = b'J';
    assert_eq!(decompress(&frame), Err(FrameError::ContentChecksumMismatch));
}

#[test]
fn block_checksum_mismatch() {
    let desc = FrameDescriptor::default().with_block_checksum(true);
    let mut frame = compress_with(&text(2_000), &desc);
    // The first block's checksum sits right after its payload.
    let len = u32::from_le_bytes([frame[7], frame[8], frame[9], frame[10]]) & 0x7FFF_FFFF;
    let at = 11 + len as usize;
    frame[at] ^= 0x01;
    assert_eq!(decompress(&frame), Err(FrameError::BlockChecksumMismatch));
}

#[test]
fn malformed_block_surfaces_block_error() {
    let desc = FrameDescriptor::default().with_content_checksum(false);
    let mut frame = Vec::new();
    write_header(&mut frame, &desc, 0);
    // one literal, then a single offset byte
    let block = [0x10, b'a', 0x01];
    frame.extend_from_slice(&(block.len() as u32).to_le_bytes());
    frame.extend_from_slice(&block);
    frame.extend_from_slice(&[0, 0, 0, 0]);
    assert_eq!(decompress(&frame), Err(FrameError::Block(DecompressError::TruncatedOffset)));
}

#[test]
fn dictionary_id_frames_are_rejected() {
    let desc = [0x45, 0x70, 9, 9, 9, 9];
    let mut frame = vec![0x04, 0x22, 0x4D, 0x18];
    frame.extend_from_slice(&desc);
    frame.push(header_checksum(&desc));
    frame.extend_from_slice(&[0, 0, 0, 0]);
    assert_eq!(decompress(&frame), Err(FrameError::UnsupportedFeature));
}

#[test]
fn error_display_and_source() {
    use std::error::Error;
    let e = FrameError::from(DecompressError::ZeroOffset);
    assert!(e.to_string().contains("zero match offset"));
    assert!(e.source().is_some());
    assert!(FrameError::InvalidMagic.source().is_none());
}
