//! LZ4 HC (high-compression) block codec.
//!
//! A hash-chain match finder with one-step lazy evaluation.  Produces
//! standard LZ4 blocks, usually smaller than the greedy encoder's at a
//! higher compression cost.

pub mod api;
pub mod encode;
pub mod search;
pub mod types;

// Re-export key public API items at the module level.
pub use api::{compress_hc, compress_hc_to_vec};
pub use types::{HcContext, Match, LZ4HC_CLEVEL_DEFAULT, LZ4HC_MAX_ATTEMPTS};
