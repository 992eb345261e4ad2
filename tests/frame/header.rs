// Integration tests for frame::header: descriptor encoding, parsing and the
// header checksum byte.

use lz4codec::frame::header::write_header;
use lz4codec::frame::{
    header_checksum, parse_header, BlockChecksum, BlockMode, BlockSizeId, ContentChecksum,
    FrameDescriptor, FrameError, LZ4F_MAGICNUMBER,
};

/// Magic, descriptor bytes, and a correct checksum byte.
fn header(descriptor: &[u8]) -> Vec<u8> {
    let mut out = LZ4F_MAGICNUMBER.to_le_bytes().to_vec();
    out.extend_from_slice(descriptor);
    out.push(header_checksum(descriptor));
    out
}

#[test]
fn checksum_matches_standard_tool_headers() {
    // 64 KB independent blocks with content checksum, as written by the
    // reference command-line tool.
    assert_eq!(header_checksum(&[0x64, 0x40]), 0xA7);
    assert_eq!(header_checksum(&[0x64, 0x70]), 0xB9);
}

#[test]
fn default_header_bytes() {
    let mut buf = Vec::new();
    write_header(&mut buf, &FrameDescriptor::default(), 0);
    assert_eq!(buf, vec![0x04, 0x22, 0x4D, 0x18, 0x44, 0x70, 0x1D]);
}

#[test]
fn parses_standard_tool_header() {
    let info = parse_header(&[0x04, 0x22, 0x4D, 0x18, 0x64, 0x40, 0xA7]).unwrap();
    assert_eq!(info.header_size, 7);
    assert_eq!(info.content_size, None);
    assert_eq!(info.descriptor.block_size_id, BlockSizeId::Max64Kb);
    assert_eq!(info.descriptor.block_mode, BlockMode::Independent);
    assert_eq!(info.descriptor.block_checksum, BlockChecksum::Disabled);
    assert_eq!(info.descriptor.content_checksum, ContentChecksum::Enabled);
}

#[test]
fn every_descriptor_round_trips() {
    for id in [BlockSizeId::Max64Kb, BlockSizeId::Max256Kb, BlockSizeId::Max1Mb, BlockSizeId::Max4Mb] {
        for flags in 0..16u8 {
            let desc = FrameDescriptor::default()
                .with_block_size(id)
                .with_block_mode(if flags & 1 != 0 { BlockMode::Independent } else { BlockMode::Linked })
                .with_block_checksum(flags & 2 != 0)
                .with_content_checksum(flags & 4 != 0)
                .with_content_size(flags & 8 != 0);
            let mut buf = Vec::new();
            write_header(&mut buf, &desc, 987_654_321);
            let info = parse_header(&buf).unwrap();
            assert_eq!(info.descriptor, desc);
            assert_eq!(info.header_size, buf.len());
            assert_eq!(info.content_size, desc.content_size.then_some(987_654_321));
        }
    }
}

#[test]
fn bad_magic() {
    assert_eq!(parse_header(&[0x05, 0x22, 0x4D, 0x18, 0x64, 0x40, 0xA7]), Err(FrameError::InvalidMagic));
    assert_eq!(parse_header(&[0x04, 0x22]), Err(FrameError::InvalidMagic));
}

#[test]
fn truncated_descriptor() {
    assert_eq!(parse_header(&[0x04, 0x22, 0x4D, 0x18, 0x64]), Err(FrameError::CorruptedHeader));
    assert_eq!(parse_header(&[0x04, 0x22, 0x4D, 0x18, 0x64, 0x40]), Err(FrameError::CorruptedHeader));
    // Content-size flag set but the 8 bytes are missing.
    assert_eq!(
        parse_header(&[0x04, 0x22, 0x4D, 0x18, 0x6C, 0x40, 0x00, 0x00]),
        Err(FrameError::CorruptedHeader)
    );
}

#[test]
fn checksum_mismatch() {
    assert_eq!(
        parse_header(&[0x04, 0x22, 0x4D, 0x18, 0x64, 0x40, 0xA8]),
        Err(FrameError::CorruptedHeader)
    );
}

#[test]
fn unsupported_versions() {
    assert_eq!(parse_header(&header(&[0x04, 0x70])), Err(FrameError::UnsupportedVersion(0)));
    assert_eq!(parse_header(&header(&[0x84, 0x70])), Err(FrameError::UnsupportedVersion(2)));
}

#[test]
fn reserved_bits_must_be_zero() {
    assert_eq!(parse_header(&header(&[0x46, 0x70])), Err(FrameError::CorruptedHeader));
    assert_eq!(parse_header(&header(&[0x44, 0x71])), Err(FrameError::CorruptedHeader));
    assert_eq!(parse_header(&header(&[0x44, 0xF0])), Err(FrameError::CorruptedHeader));
}

#[test]
fn invalid_block_size_id() {
    for bd in [0x00u8, 0x10, 0x20, 0x30] {
        assert_eq!(parse_header(&header(&[0x44, bd])), Err(FrameError::CorruptedHeader), "bd {bd:#x}");
    }
}

#[test]
fn dictionary_id_is_unsupported() {
    assert_eq!(
        parse_header(&header(&[0x45, 0x70, 1, 2, 3, 4])),
        Err(FrameError::UnsupportedFeature)
    );
}

#[test]
fn content_size_is_little_endian() {
    let desc = FrameDescriptor::default().with_content_size(true);
    let mut buf = Vec::new();
    write_header(&mut buf, &desc, 0x0102_0304_0506_0708);
    assert_eq!(&buf[6..14], &[8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(buf[14], header_checksum(&buf[4..14]));
}
