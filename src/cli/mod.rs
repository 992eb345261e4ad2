//! Command-line interface for the `lz4codec` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | The process-wide `DISPLAY_LEVEL` and the `displaylevel!` macro. |
//! | [`args`]      | `Cli`: the clap-derived argument tree and its conversion into a [`FrameDescriptor`](crate::frame::FrameDescriptor). |
//! | [`op_mode`]   | `run`: executes the selected subcommand (file I/O, timing, progress lines). |
//!
//! Typical call sequence: `Cli::parse` → `set_display_level` → `op_mode::run`.

pub mod constants;
pub mod args;
pub mod op_mode;
