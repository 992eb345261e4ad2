//! Binary entry point for the `lz4codec` command-line tool.
//!
//! Parses the command line, applies the requested display level and hands
//! off to [`op_mode::run`](lz4codec::cli::op_mode::run).  Any error is
//! printed with its full context chain and the process exits with status 1.

use clap::Parser;

use lz4codec::cli::args::Cli;
use lz4codec::cli::constants::set_display_level;
use lz4codec::cli::op_mode::run;
use lz4codec::displaylevel;

fn main() {
    let cli = Cli::parse();
    set_display_level(cli.display_level());

    if let Err(err) = run(&cli) {
        displaylevel!(1, "Error: {err:#}\n");
        std::process::exit(1);
    }
}
