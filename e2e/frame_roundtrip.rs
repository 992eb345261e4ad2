//! E2E Test Suite 03: Frame Round Trips
//!
//! Whole-buffer frame compression and decompression across sizes and
//! descriptor settings, including inputs that span many blocks and inputs
//! above 1 MiB.

use lz4codec::frame::{
    compress, compress_frame_bound, compress_with, decompress, parse_header, BlockMode,
    BlockSizeId, FrameDescriptor,
};

fn dataset(len: usize, seed: u32) -> Vec<u8> {
    // Runs of text interleaved with pseudo-random spans.
    let mut state = seed;
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        if state >> 31 == 0 {
            out.extend_from_slice(b"frame data frame data frame data ");
        } else {
            out.extend((0..48).map(|k| (state >> (k % 24)) as u8));
        }
    }
    out.truncate(len);
    out
}

#[test]
fn default_descriptor_sizes() {
    for len in [0usize, 1, 5, 13, 64, 1_000, 65_535, 65_536, 65_537, 300_000] {
        let src = dataset(len, len as u32);
        let frame = compress(&src);
        assert!(frame.len() <= compress_frame_bound(len, &FrameDescriptor::default()));
        assert_eq!(decompress(&frame).unwrap(), src, "len {len}");
    }
}

#[test]
fn multi_megabyte_inputs() {
    let src = dataset(5 * 1024 * 1024 + 123, 99);
    for id in [BlockSizeId::Max64Kb, BlockSizeId::Max1Mb, BlockSizeId::Max4Mb] {
        for mode in [BlockMode::Linked, BlockMode::Independent] {
            let desc = FrameDescriptor::default()
                .with_block_size(id)
                .with_block_mode(mode)
                .with_block_checksum(true)
                .with_content_size(true);
            let frame = compress_with(&src, &desc);
            let info = parse_header(&frame).unwrap();
            assert_eq!(info.descriptor, desc);
            assert_eq!(info.content_size, Some(src.len() as u64));
            assert!(decompress(&frame).unwrap() == src, "{id:?} {mode:?}");
        }
    }
}

#[test]
fn linked_is_never_larger_than_independent_on_repetitive_data() {
    let unit = dataset(20_000, 7);
    let src: Vec<u8> = unit.iter().copied().cycle().take(400_000).collect();
    let base = FrameDescriptor::default().with_block_size(BlockSizeId::Max64Kb);
    let linked = compress_with(&src, &base.with_block_mode(BlockMode::Linked));
    let independent = compress_with(&src, &base.with_block_mode(BlockMode::Independent));
    assert!(linked.len() <= independent.len(), "{} vs {}", linked.len(), independent.len());
    assert_eq!(decompress(&linked).unwrap(), src);
    assert_eq!(decompress(&independent).unwrap(), src);
}

#[test]
fn frames_of_many_inputs_concatenate() {
    let parts: Vec<Vec<u8>> = (0..10).map(|i| dataset(i * 9_000 + 1, i as u32)).collect();
    let mut stream = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        let desc = FrameDescriptor::default().with_block_checksum(i % 2 == 0);
        stream.extend_from_slice(&compress_with(part, &desc));
    }
    assert_eq!(decompress(&stream).unwrap(), parts.concat());
}
