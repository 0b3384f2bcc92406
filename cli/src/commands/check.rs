//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::digest_reader;
use anyhow::{Context, Result};
use qwhash::HashConfig;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of one checksum line.
#[derive(Debug, PartialEq, Eq)]
enum LineStatus {
    Ok,
    Mismatch,
    Failed(String),
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path, config: &HashConfig) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hash, file_path)) = line.split_once("  ") else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        let file_path = file_path.trim();
        total += 1;

        match check_line(expected_hash.trim(), Path::new(file_path), config) {
            LineStatus::Ok => println!("{file_path}: OK"),
            LineStatus::Mismatch => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            LineStatus::Failed(reason) => {
                println!("{file_path}: FAILED ({reason})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}

fn check_line(expected_hash: &str, path: &Path, config: &HashConfig) -> LineStatus {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return LineStatus::Failed(e.to_string()),
    };
    match digest_reader(file, config) {
        Ok(digest) if hex::encode(&digest).eq_ignore_ascii_case(expected_hash) => LineStatus::Ok,
        Ok(_) => LineStatus::Mismatch,
        Err(e) => LineStatus::Failed(format!("{e:#}")),
    }
}
