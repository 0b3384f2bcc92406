//! Block Chainer
//!
//! XOR-feedback chaining over fixed 32-byte blocks:
//!
//! ```text
//! D_0 = H(M_0)
//! D_l = H(D_{l-1} XOR M_l)      l = 1 .. floor(len / 32) - 1
//! ```
//!
//! A trailing partial block is dropped. `ChainHasher` accepts the message in
//! pieces and produces the same digest as hashing the concatenation at once.

use crate::engine::context::WalkContext;
use crate::kernels::constants::CHAIN_BLOCK_SIZE;
use crate::oneshot::{hash_block_sized, hash_with_context};
use crate::types::{ParameterSet, QwError, QwResult};

// =============================================================================
// CHAIN HASHER
// =============================================================================

/// Incremental hasher for the 32-byte block chain.
///
/// Holds at most one partial block. Once a block fails, the hasher keeps
/// returning that error until [`ChainHasher::reset`].
#[derive(Debug, Clone)]
pub struct ChainHasher {
    /// Context for full chain blocks
    context: WalkContext,
    /// Partial block (first `buffered` bytes valid)
    buffer: [u8; CHAIN_BLOCK_SIZE],
    buffered: usize,
    /// Running digest, `None` before the first full block
    digest: Option<Vec<u8>>,
    /// Full blocks absorbed
    blocks: u64,
    /// Total bytes received
    total_len: u64,
    /// First block error, sticky
    failure: Option<QwError>,
}

impl ChainHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher for `params`.
    ///
    /// # Errors
    /// `QwError::InvalidParameter` if an angle is out of range.
    pub fn new(params: &ParameterSet) -> QwResult<Self> {
        Ok(Self {
            context: WalkContext::new(CHAIN_BLOCK_SIZE, params)?,
            buffer: [0u8; CHAIN_BLOCK_SIZE],
            buffered: 0,
            digest: None,
            blocks: 0,
            total_len: 0,
            failure: None,
        })
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Feed more message bytes.
    ///
    /// # Errors
    /// The first block error, which is also kept for later calls.
    pub fn update(&mut self, data: &[u8]) -> QwResult<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.total_len += data.len() as u64;

        let mut data = data;

        // Top up a partial block first.
        if self.buffered > 0 {
            let take = (CHAIN_BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < CHAIN_BLOCK_SIZE {
                return Ok(());
            }
            let block = self.buffer;
            self.buffered = 0;
            self.absorb(&block)?;
        }

        // Fast path: whole blocks straight from the input.
        let mut blocks = data.chunks_exact(CHAIN_BLOCK_SIZE);
        for block in &mut blocks {
            self.absorb(block)?;
        }

        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered = remainder.len();
        Ok(())
    }

    /// Finish the chain and return the digest.
    ///
    /// # Errors
    /// A stored block error, or the error of the single short-block hash when
    /// fewer than 32 bytes were supplied.
    pub fn finalize(self) -> QwResult<Vec<u8>> {
        if let Some(err) = self.failure {
            return Err(err);
        }

        if let Some(digest) = self.digest {
            if self.buffered > 0 {
                tracing::trace!(dropped = self.buffered, "trailing partial block ignored");
            }
            tracing::debug!(blocks = self.blocks, total_len = self.total_len, "chain finalized");
            return Ok(digest);
        }

        // Shorter than one chain block: a single block of the message's own length.
        let short = &self.buffer[..self.buffered];
        hash_block_sized(short, self.context.params(), short.len())
    }

    /// Reset for reuse, keeping the parameters.
    pub fn reset(&mut self) {
        self.buffered = 0;
        self.digest = None;
        self.blocks = 0;
        self.total_len = 0;
        self.failure = None;
    }

    /// Full blocks absorbed so far.
    #[must_use]
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Hash one full block, XORed with the running digest after the first.
    fn absorb(&mut self, block: &[u8]) -> QwResult<()> {
        let input: Vec<u8> = match &self.digest {
            None => block.to_vec(),
            Some(digest) => digest.iter().zip(block).map(|(d, m)| d ^ m).collect(),
        };

        match hash_with_context(&input, &self.context) {
            Ok(digest) => {
                self.digest = Some(digest);
                self.blocks += 1;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(block = self.blocks, error = %err, "chain aborted");
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }
}
