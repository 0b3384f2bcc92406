//! Hash Command
//!
//! Input hashing with parallel file processing via Rayon.

use anyhow::{Context, Result};
use clap::ValueEnum;
use qwhash::{hash_block_sized, ChainHasher, HashConfig, HashMode};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Read buffer for chained inputs.
const READ_BUFFER_SIZE: usize = 128 * 1024;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    /// Lowercase hex string
    Hex,
    /// Digest bytes as a list of integers
    Ints,
    /// Digest bytes as a sorted list of integers
    Sorted,
}

impl OutputFormat {
    pub fn render(self, digest: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(digest),
            Self::Ints => format!("{digest:?}"),
            Self::Sorted => {
                let mut sorted = digest.to_vec();
                sorted.sort_unstable();
                format!("{sorted:?}")
            }
        }
    }
}

// =============================================================================
// DIGEST
// =============================================================================

/// Digest everything `reader` yields under `config`.
///
/// Chained modes stream through a [`ChainHasher`]; block mode reads only the
/// first `block_size` bytes.
pub fn digest_reader<R: Read>(mut reader: R, config: &HashConfig) -> Result<Vec<u8>> {
    if config.mode == HashMode::Block {
        let mut block = Vec::with_capacity(config.block_size.min(READ_BUFFER_SIZE));
        reader
            .by_ref()
            .take(config.block_size as u64)
            .read_to_end(&mut block)?;
        return Ok(hash_block_sized(&block, &config.params, config.block_size)?);
    }

    let mut hasher = ChainHasher::new(&config.params)?;
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n])?;
    }
    let chained = hasher.finalize()?;

    if config.mode == HashMode::Prehashed {
        return Ok(hash_block_sized(&chained, &config.params, chained.len())?);
    }
    Ok(chained)
}

fn digest_path(path: &Path, config: &HashConfig) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        return digest_reader(std::io::stdin().lock(), config);
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;
    digest_reader(file, config)
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

// =============================================================================
// HASH
// =============================================================================

/// Hash `--text` or the given files and print one line per input.
pub fn hash_inputs(
    files: &[PathBuf],
    text: Option<&str>,
    config: &HashConfig,
    format: OutputFormat,
    timing: bool,
) -> Result<()> {
    if let Some(text) = text {
        let (digest, elapsed) = timed(|| digest_reader(text.as_bytes(), config));
        println!("{}  \"{}\"", format.render(&digest?), text);
        if timing {
            eprintln!("time: {elapsed:?}");
        }
        return Ok(());
    }

    // `par_iter().map().collect()` keeps input order.
    let results: Vec<(Result<Vec<u8>>, Duration)> = files
        .par_iter()
        .map(|path| timed(|| digest_path(path, config)))
        .collect();

    let mut failed = 0usize;
    for (path, (result, elapsed)) in files.iter().zip(results) {
        match result {
            Ok(digest) => println!("{}  {}", format.render(&digest), path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
        if timing {
            eprintln!("time: {}: {elapsed:?}", path.display());
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
