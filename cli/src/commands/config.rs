//! Config Resolution
//!
//! `--config` JSON file first, then individual flags on top.

use crate::HashArgs;
use anyhow::{Context, Result};
use clap::ValueEnum;
use qwhash::{HashConfig, HashMode, ParameterSet, SelectionPolicy, WalkContext};
use std::fs::File;
use std::io::BufReader;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ModeArg {
    /// One block of `--block-size` bytes
    Block,
    /// 32-byte XOR chaining over the whole input
    Chained,
    /// Chained digest hashed once more as a block
    Prehashed,
}

impl From<ModeArg> for HashMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Block => Self::Block,
            ModeArg::Chained => Self::Chained,
            ModeArg::Prehashed => Self::Prehashed,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum PolicyArg {
    /// Two angles selected by message bits
    Bit,
    /// Eight angles selected by message bytes
    Byte,
}

impl PolicyArg {
    const fn policy(self) -> SelectionPolicy {
        match self {
            Self::Bit => SelectionPolicy::Bit,
            Self::Byte => SelectionPolicy::Byte,
        }
    }

    fn standard(self) -> ParameterSet {
        match self {
            Self::Bit => ParameterSet::standard_bit(),
            Self::Byte => ParameterSet::standard_byte(),
        }
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Build the effective configuration from `--config` and flags.
///
/// `--policy` only replaces the angles when the loaded set uses the other
/// policy, so custom angles from a file survive a matching flag.
pub fn resolve_config(args: &HashArgs) -> Result<HashConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => HashConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(block_size) = args.block_size {
        config.block_size = block_size;
    }
    if let Some(policy) = args.policy {
        if config.params.policy() != policy.policy() {
            config.params = policy.standard();
        }
    }

    config.params.validate().context("Invalid coin angles")?;
    if config.mode == HashMode::Block {
        WalkContext::new(config.block_size, &config.params).context("Invalid block size")?;
    }
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
