//! E2E Test Suite 05: CLI Integration
//!
//! Drives the `lz4codec` binary as a black box with `std::process::Command`:
//! subcommand dispatch, frame flags, verbosity and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use lz4codec::frame::{self, BlockMode, BlockSizeId};
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4codec"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin()).args(args).output().expect("failed to run lz4codec")
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("temp paths are utf-8")
}

/// A temp dir holding `input.txt` with about 8 KB of text.
fn temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Hello, LZ4 frame!\n".repeat(450)).unwrap();
    (dir, input)
}

// ── 1. Round trip ────────────────────────────────────────────────────────────

#[test]
fn compress_then_decompress_roundtrip() {
    let (dir, input) = temp_input();
    let packed = dir.path().join("input.txt.lz4");
    let unpacked = dir.path().join("roundtrip.txt");

    let out = run(&["compress", path_str(&input), path_str(&packed)]);
    assert!(out.status.success(), "compress failed: {}", String::from_utf8_lossy(&out.stderr));
    let out = run(&["decompress", path_str(&packed), path_str(&unpacked)]);
    assert!(out.status.success(), "decompress failed: {}", String::from_utf8_lossy(&out.stderr));

    assert_eq!(fs::read(&input).unwrap(), fs::read(&unpacked).unwrap());
    assert!(fs::metadata(&packed).unwrap().len() < fs::metadata(&input).unwrap().len());
}

#[test]
fn output_is_a_standard_frame() {
    let (dir, input) = temp_input();
    let packed = dir.path().join("out.lz4");
    assert!(run(&["compress", path_str(&input), path_str(&packed)]).status.success());

    let bytes = fs::read(&packed).unwrap();
    assert_eq!(&bytes[..4], &[0x04, 0x22, 0x4D, 0x18]);
    assert_eq!(frame::decompress(&bytes).unwrap(), fs::read(&input).unwrap());
}

// ── 2. Frame flags ───────────────────────────────────────────────────────────

#[test]
fn frame_flags_reach_the_header() {
    let (dir, input) = temp_input();
    let packed = dir.path().join("flags.lz4");
    let out = run(&[
        "compress",
        path_str(&input),
        path_str(&packed),
        "-B",
        "4",
        "--independent",
        "--block-checksum",
        "--no-content-checksum",
        "--content-size",
    ]);
    assert!(out.status.success());

    let bytes = fs::read(&packed).unwrap();
    let info = frame::parse_header(&bytes).unwrap();
    assert_eq!(info.descriptor.block_size_id, BlockSizeId::Max64Kb);
    assert_eq!(info.descriptor.block_mode, BlockMode::Independent);
    assert_eq!(info.content_size, Some(fs::metadata(&input).unwrap().len()));
    assert_eq!(frame::decompress(&bytes).unwrap(), fs::read(&input).unwrap());
}

#[test]
fn invalid_block_size_is_rejected() {
    let (dir, input) = temp_input();
    let packed = dir.path().join("never.lz4");
    let out = run(&["compress", path_str(&input), path_str(&packed), "-B", "9"]);
    assert!(!out.status.success());
    assert!(!packed.exists());
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let out = run(&[]);
    assert!(!out.status.success());
}

#[test]
fn version_flag() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "unexpected version output: {stdout}");
}

// ── 3. Errors and exit codes ─────────────────────────────────────────────────

#[test]
fn missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let out = run(&["compress", path_str(&missing), path_str(&dir.path().join("x.lz4"))]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("does-not-exist"), "stderr: {stderr}");
}

#[test]
fn decompressing_plain_text_fails() {
    let (dir, input) = temp_input();
    let out = run(&["decompress", path_str(&input), path_str(&dir.path().join("x.txt"))]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("magic"));
}

#[test]
fn double_quiet_silences_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nothing-here");
    let out = run(&["-qq", "compress", path_str(&missing), path_str(&dir.path().join("x.lz4"))]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty());
}

// ── 4. Verbosity and bench ───────────────────────────────────────────────────

#[test]
fn default_level_reports_ratio() {
    let (dir, input) = temp_input();
    let out = run(&["compress", path_str(&input), path_str(&dir.path().join("r.lz4"))]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Compressed"));
}

#[test]
fn quiet_compress_prints_nothing() {
    let (dir, input) = temp_input();
    let out = run(&["-q", "compress", path_str(&input), path_str(&dir.path().join("q.lz4"))]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    assert!(out.stdout.is_empty());
}

#[test]
fn bench_runs_without_writing() {
    let (dir, input) = temp_input();
    let out = run(&["bench", path_str(&input)]);
    assert!(out.status.success(), "bench failed: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
