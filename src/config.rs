// config.rs: Defaults for the command-line front end.
//
// Codec tuning constants (hash sizes, window size, match limits) live next to
// the code that uses them in block::types, hc::types and frame::types. This
// file only holds what the CLI falls back to when a flag is absent.

// Default block size ID (7 = 4 MB blocks).
// Overridden with `compress --block-size <4..7>`.
pub const BLOCKSIZEID_DEFAULT: u8 = 7;

// Default display level.
// 0 = silent; 1 = errors only; 2 = normal; 3 = detailed; 4 = verbose.
// Each -v raises it by one, each -q lowers it by one.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest display level that still changes output.
pub const DISPLAY_LEVEL_MAX: u32 = 4;
