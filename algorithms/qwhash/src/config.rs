//! Hash configuration: which entry point to use, at what block size, with
//! which coin angles. Deserializable (feature `serde`) so drivers can load it
//! from a file.

use crate::kernels::constants::DEFAULT_BLOCK_SIZE;
use crate::oneshot::{hash_block_sized, hash_chained, hash_prehashed};
use crate::types::{ParameterSet, QwResult};

/// Which construction a [`HashConfig`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashMode {
    /// A single block of `block_size` bytes.
    Block,
    /// 32-byte XOR-feedback chain.
    #[default]
    Chained,
    /// Chain, then one more block hash over the chained digest.
    Prehashed,
}

/// Complete description of a hash invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HashConfig {
    /// Block length for [`HashMode::Block`]; the chain always uses 32.
    pub block_size: usize,
    /// Construction to run.
    pub mode: HashMode,
    /// Coin angles and selection policy.
    pub params: ParameterSet,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            mode: HashMode::default(),
            params: ParameterSet::default(),
        }
    }
}

impl HashConfig {
    /// Digest `message` according to this configuration.
    ///
    /// # Errors
    /// Whatever the selected entry point reports.
    pub fn digest(&self, message: &[u8]) -> QwResult<Vec<u8>> {
        match self.mode {
            HashMode::Block => hash_block_sized(message, &self.params, self.block_size),
            HashMode::Chained => hash_chained(message, &self.params),
            HashMode::Prehashed => hash_prehashed(message, &self.params),
        }
    }
}
