#![no_main]
use libfuzzer_sys::fuzz_target;
use lz4codec::frame::{self, BlockMode, BlockSizeId, FrameDescriptor};

fuzz_target!(|data: &[u8]| {
    // The first byte picks the frame settings; the rest is the payload.
    let Some((&selector, payload)) = data.split_first() else { return };
    let desc = FrameDescriptor::default()
        .with_block_size(if selector & 1 != 0 { BlockSizeId::Max64Kb } else { BlockSizeId::Max4Mb })
        .with_block_mode(if selector & 2 != 0 { BlockMode::Independent } else { BlockMode::Linked })
        .with_block_checksum(selector & 4 != 0)
        .with_content_checksum(selector & 8 != 0)
        .with_content_size(selector & 16 != 0);

    let framed = frame::compress_with(payload, &desc);
    let decoded = frame::decompress(&framed).expect("own frame must decode");
    assert_eq!(decoded, payload);
});
