//! E2E Test Suite 02: Block Streaming API
//!
//! Exercises `Lz4Stream` and `Lz4StreamDecode` together the way a message
//! protocol would:
//! - a long stream cut into chunks of varying size
//! - a shared dictionary primed on both sides
//! - stream reset between independent messages
//! - chunks that fail to fit and are forwarded verbatim

use lz4codec::block::{
    compress_bound, decompress_safe_using_dict, Lz4Error, Lz4Stream, Lz4StreamDecode,
    LZ4_ACCELERATION_DEFAULT, WINDOW_SIZE,
};

fn log_lines(len: usize) -> Vec<u8> {
    let levels = ["INFO", "WARN", "DEBUG", "ERROR"];
    let mut out = Vec::with_capacity(len);
    let mut i = 0usize;
    while out.len() < len {
        let line = format!(
            "2024-01-{:02}T12:{:02}:{:02} {} worker-{} request {} finished in {}ms\n",
            1 + i % 28,
            i % 60,
            (i * 7) % 60,
            levels[i % 4],
            i % 16,
            i * 31,
            (i * 13) % 997
        );
        out.extend_from_slice(line.as_bytes());
        i += 1;
    }
    out.truncate(len);
    out
}

fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Chunk sizes cycling through small, odd and window-sized values.
fn chunk_sizes() -> impl Iterator<Item = usize> {
    [1usize, 12, 13, 100, 4_093, 65_536, 70_000, 777].into_iter().cycle()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: a long stream in irregular chunks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_irregular_chunks() {
    let data = log_lines(600_000);
    let mut enc = Lz4Stream::new();
    let mut dec = Lz4StreamDecode::new();
    let mut rebuilt = Vec::with_capacity(data.len());
    let mut compressed_total = 0;

    let mut pos = 0;
    for size in chunk_sizes() {
        if pos >= data.len() {
            break;
        }
        let chunk = &data[pos..(pos + size).min(data.len())];
        pos += chunk.len();

        let mut packed = vec![0u8; compress_bound(chunk.len())];
        let n = enc
            .compress_fast_continue(chunk, &mut packed, LZ4_ACCELERATION_DEFAULT)
            .unwrap();
        compressed_total += n;

        let mut out = vec![0u8; chunk.len()];
        let m = dec.decompress_safe_continue(&packed[..n], &mut out).unwrap();
        assert_eq!(m, chunk.len());
        rebuilt.extend_from_slice(&out);
    }

    assert_eq!(rebuilt, data);
    assert!(compressed_total < data.len() / 2, "{compressed_total}");
    assert_eq!(enc.processed_bytes(), data.len() as u64);
    assert_eq!(enc.dictionary(), &data[data.len() - WINDOW_SIZE..]);
    assert_eq!(dec.dictionary(), enc.dictionary());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: shared dictionary
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shared_dictionary_messages() {
    // Messages quote the tail of a high-entropy dictionary; without it they
    // would not compress at all.
    let dict = noise(32 * 1024, 0xDEAD_BEEF);
    let messages: Vec<Vec<u8>> = (0..20)
        .map(|i| {
            let start = dict.len() - 2_500 + i * 50;
            dict[start..start + 200 + i * 20].to_vec()
        })
        .collect();

    for msg in &messages {
        let mut enc = Lz4Stream::new();
        enc.load_dict(&dict);
        let mut packed = vec![0u8; compress_bound(msg.len())];
        let n = enc.compress_fast_continue(msg, &mut packed, 1).unwrap();
        assert!(n < msg.len() / 2, "dictionary should help: {n} vs {}", msg.len());

        // Stateless decode with the same dictionary...
        let mut out = vec![0u8; msg.len()];
        assert_eq!(decompress_safe_using_dict(&packed[..n], &mut out, &dict), Ok(msg.len()));
        assert_eq!(&out, msg);

        // ...and a streaming decoder primed with it.
        let mut dec = Lz4StreamDecode::new();
        dec.set_dict(&dict);
        let mut out = vec![0u8; msg.len()];
        assert_eq!(dec.decompress_safe_continue(&packed[..n], &mut out), Ok(msg.len()));
        assert_eq!(&out, msg);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: reset between messages
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_reset_between_messages() {
    let mut enc = Lz4Stream::new();
    for i in 0..5 {
        enc.reset();
        let msg = log_lines(10_000 + i * 1_000);
        let mut packed = vec![0u8; compress_bound(msg.len())];
        let n = enc.compress_fast_continue(&msg, &mut packed, 1).unwrap();

        // Each message decodes with a fresh decoder.
        let mut dec = Lz4StreamDecode::new();
        let mut out = vec![0u8; msg.len()];
        assert_eq!(dec.decompress_safe_continue(&packed[..n], &mut out), Ok(msg.len()));
        assert_eq!(out, msg);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: chunks forwarded verbatim keep both sides in step
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_verbatim_fallback_keeps_streams_in_step() {
    let data = log_lines(200_000);
    let mut enc = Lz4Stream::new();
    let mut dec = Lz4StreamDecode::new();
    let mut rebuilt = Vec::new();

    for (i, chunk) in data.chunks(10_000).enumerate() {
        // Every third chunk gets a destination that is far too small.
        let capacity = if i % 3 == 1 { 32 } else { compress_bound(chunk.len()) };
        let mut packed = vec![0u8; capacity];
        match enc.compress_fast_continue(chunk, &mut packed, 1) {
            Ok(n) => {
                let mut out = vec![0u8; chunk.len()];
                let m = dec.decompress_safe_continue(&packed[..n], &mut out).unwrap();
                rebuilt.extend_from_slice(&out[..m]);
            }
            Err(Lz4Error::OutputTooSmall) => {
                dec.update_history(chunk);
                rebuilt.extend_from_slice(chunk);
            }
            Err(e) => panic!("unexpected error {e}"),
        }
    }
    assert_eq!(rebuilt, data);
}
