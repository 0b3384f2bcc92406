//! # qwhash
//!
//! Quantum-walk block hash. A message block is loaded into the amplitudes of
//! a `(position ⊗ coin)` register, walked through message-controlled coin
//! rotations and coin-controlled shifts, and the final probability
//! distribution is collapsed into digest bytes. This is a classical
//! simulation and an experimental construction, not a vetted cryptographic
//! hash.

//! # Usage
//! ```rust
//! use qwhash::{hash_block, hash_chained, ParameterSet};
//!
//! // 1. One block (first 32 bytes)
//! let params = ParameterSet::standard_byte();
//! let digest = hash_block(b"an input block of thirty-two b..", &params)?;
//! assert_eq!(digest.len(), 32);
//!
//! // 2. Arbitrary length, 32-byte XOR chaining
//! let long = vec![0x42u8; 4096];
//! let chained = hash_chained(&long, &params)?;
//! assert_eq!(chained.len(), 32);
//!
//! // 3. Incremental
//! use qwhash::ChainHasher;
//!
//! let mut hasher = ChainHasher::new(&params)?;
//! hasher.update(&long[..1000])?;
//! hasher.update(&long[1000..])?;
//! assert_eq!(hasher.finalize()?, chained);
//! # Ok::<(), qwhash::QwError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod chaining;
mod config;
pub mod engine;
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use chaining::ChainHasher;
pub use config::{HashConfig, HashMode};
pub use engine::parallel::{hash_blocks_batch, hash_chained_batch};
pub use engine::WalkContext;
pub use kernels::constants::{CHAIN_BLOCK_SIZE, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
pub use kernels::state::AmplitudeState;
pub use oneshot::{
    hash_block, hash_block_sized, hash_chained, hash_prehashed, verify_block, verify_chained,
};
pub use types::{ParameterSet, QwError, QwResult, SelectionPolicy};
