//! XXH32, the 32-bit xxHash digest used for frame integrity.
//!
//! Backed by the `xxhash-rust` crate.  [`xxh32`] hashes a complete buffer;
//! [`Xxh32State`] accepts data incrementally so the frame decoder can
//! checksum content block by block.

pub use xxhash_rust::xxh32::Xxh32 as Xxh32State;

/// One-shot XXH32 of `data` with `seed`.
///
/// # Parity vectors
/// * `xxh32(b"", 0)`    == `0x02CC5D05`
/// * `xxh32(b"a", 0)`   == `0x550D7456`
/// * `xxh32(b"abc", 0)` == `0x32D153FF`
#[inline]
pub fn xxh32(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}
