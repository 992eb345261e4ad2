//! Command-line argument definitions for `lz4codec`.
//!
//! ```text
//! lz4codec [-v]... [-q]... compress   <INPUT> <OUTPUT> [-B 4..7] [--independent]
//!                                     [--block-checksum] [--no-content-checksum] [--content-size]
//! lz4codec [-v]... [-q]... decompress <INPUT> <OUTPUT>
//! lz4codec [-v]... [-q]... bench      <INPUT>
//! ```
//!
//! `-v` and `-q` are global and may be repeated; each one moves the display
//! level up or down by one from [`DISPLAY_LEVEL_DEFAULT`].

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{BLOCKSIZEID_DEFAULT, DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};
use crate::frame::{BlockMode, BlockSizeId, FrameDescriptor};

#[derive(Debug, Parser)]
#[command(name = "lz4codec", version, about = "Compress and decompress LZ4 frame files")]
pub struct Cli {
    /// Print more progress information (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print less (repeatable; -qq silences errors too)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Display level selected by the `-v` / `-q` counts.
    pub fn display_level(&self) -> u32 {
        (DISPLAY_LEVEL_DEFAULT + u32::from(self.verbose))
            .saturating_sub(u32::from(self.quiet))
            .min(DISPLAY_LEVEL_MAX)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress INPUT into an LZ4 frame written to OUTPUT
    Compress {
        input: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        frame: FrameOptions,
    },
    /// Decode the LZ4 frame(s) in INPUT and write the content to OUTPUT
    Decompress { input: PathBuf, output: PathBuf },
    /// Time frame compression, frame decompression and HC compression of INPUT
    Bench { input: PathBuf },
}

/// Frame settings accepted by `compress`.
#[derive(Debug, Clone, Args)]
pub struct FrameOptions {
    /// Block size id: 4 = 64 KB, 5 = 256 KB, 6 = 1 MB, 7 = 4 MB
    #[arg(
        short = 'B',
        long,
        default_value_t = BLOCKSIZEID_DEFAULT,
        value_parser = clap::value_parser!(u8).range(4..=7)
    )]
    pub block_size: u8,

    /// Compress every block without reference to earlier blocks
    #[arg(long)]
    pub independent: bool,

    /// Append an XXH32 checksum after every block
    #[arg(long)]
    pub block_checksum: bool,

    /// Omit the XXH32 checksum of the whole content
    #[arg(long)]
    pub no_content_checksum: bool,

    /// Record the uncompressed size in the frame header
    #[arg(long)]
    pub content_size: bool,
}

impl FrameOptions {
    pub fn descriptor(&self) -> FrameDescriptor {
        let mode = if self.independent { BlockMode::Independent } else { BlockMode::Linked };
        FrameDescriptor::default()
            .with_block_size(BlockSizeId::from_id(self.block_size).unwrap_or_default())
            .with_block_mode(mode)
            .with_block_checksum(self.block_checksum)
            .with_content_checksum(!self.no_content_checksum)
            .with_content_size(self.content_size)
    }
}
