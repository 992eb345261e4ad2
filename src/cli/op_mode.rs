//! Subcommand execution.
//!
//! [`run`] performs all file I/O for the binary; the codec modules only ever
//! see byte slices.  Progress and result lines go to stderr through
//! [`displaylevel!`](crate::displaylevel) so `-q` can silence them.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};

use crate::cli::args::{Cli, Command};
use crate::cli::constants::MB;
use crate::displaylevel;
use crate::frame::{self, FrameDescriptor};
use crate::hc::compress_hc_to_vec;

/// Execute the subcommand selected on the command line.
///
/// # Errors
/// Any file I/O failure (with the path in the context chain), a frame that
/// fails to decode, or a bench round trip that does not reproduce its input.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Compress { input, output, frame } => {
            compress_file(input, output, &frame.descriptor()).map(|_| ())
        }
        Command::Decompress { input, output } => decompress_file(input, output).map(|_| ()),
        Command::Bench { input } => bench_file(input),
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))
}

/// Compressed size as a percentage of `original`; empty input counts as one byte.
fn ratio_percent(compressed: usize, original: usize) -> f64 {
    compressed as f64 / original.max(1) as f64 * 100.0
}

fn mib_per_sec(bytes: usize, elapsed: Duration) -> f64 {
    // Avoid division by zero on very small inputs.
    let seconds = elapsed.as_secs_f64().max(1e-9);
    bytes as f64 / seconds / MB as f64
}

/// Frame-compress `input` into `output`; returns the compressed size.
pub fn compress_file(input: &Path, output: &Path, desc: &FrameDescriptor) -> Result<usize> {
    let src = read_input(input)?;
    displaylevel!(4, "Using {} KB blocks\n", desc.block_size_id.block_size() >> 10);

    let start = Instant::now();
    let compressed = frame::compress_with(&src, desc);
    let elapsed = start.elapsed();

    write_output(output, &compressed)?;
    displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        src.len(),
        compressed.len(),
        ratio_percent(compressed.len(), src.len())
    );
    displaylevel!(
        3,
        "Done in {:.2} s ==> {:.2} MiB/s\n",
        elapsed.as_secs_f64(),
        mib_per_sec(src.len(), elapsed)
    );
    Ok(compressed.len())
}

/// Decode the frame(s) in `input` into `output`; returns the decoded size.
pub fn decompress_file(input: &Path, output: &Path) -> Result<usize> {
    let src = read_input(input)?;

    let start = Instant::now();
    let decoded = frame::decompress(&src)
        .with_context(|| format!("{}: cannot decode LZ4 frame", input.display()))?;
    let elapsed = start.elapsed();

    write_output(output, &decoded)?;
    displaylevel!(2, "{:<30.30} : decoded {} bytes \n", input.display().to_string(), decoded.len());
    displaylevel!(
        2,
        "Done in {:.2} s ==> {:.2} MiB/s\n",
        elapsed.as_secs_f64(),
        mib_per_sec(decoded.len(), elapsed)
    );
    Ok(decoded.len())
}

/// Time the three codec paths over the whole of `input`.  Nothing is written.
pub fn bench_file(input: &Path) -> Result<()> {
    let src = read_input(input)?;
    let name = input.display().to_string();
    displaylevel!(3, "Benchmarking {} ({} bytes)\n", name, src.len());

    let start = Instant::now();
    let framed = frame::compress(&src);
    let compress_time = start.elapsed();

    let start = Instant::now();
    let decoded = frame::decompress(&framed).context("frame round trip failed")?;
    let decompress_time = start.elapsed();
    ensure!(decoded == src, "frame round trip does not reproduce {name}");

    let start = Instant::now();
    let hc = compress_hc_to_vec(&src).context("HC compression failed")?;
    let hc_time = start.elapsed();

    displaylevel!(
        2,
        "{:<20.20} : {:>10} -> {:>10} ({:6.2}%) frame  {:8.1} MiB/s compress  {:8.1} MiB/s decompress\n",
        name,
        src.len(),
        framed.len(),
        ratio_percent(framed.len(), src.len()),
        mib_per_sec(src.len(), compress_time),
        mib_per_sec(src.len(), decompress_time)
    );
    displaylevel!(
        2,
        "{:<20.20} : {:>10} -> {:>10} ({:6.2}%) hc     {:8.1} MiB/s compress\n",
        name,
        src.len(),
        hc.len(),
        ratio_percent(hc.len(), src.len()),
        mib_per_sec(src.len(), hc_time)
    );
    Ok(())
}
