//! Public API Layer
//!
//! One-shot entry points: single blocks, chains, and constant-time verification.

use crate::chaining::ChainHasher;
use crate::engine::context::WalkContext;
use crate::kernels::constants::DEFAULT_BLOCK_SIZE;
use crate::kernels::{extract, state::AmplitudeState, walk};
use crate::types::{ParameterSet, QwResult};
use subtle::ConstantTimeEq;

// =============================================================================
// BLOCK HASHING
// =============================================================================

/// Hash the first 32 bytes of `message`.
///
/// # Errors
/// See [`hash_block_sized`].
///
/// # Example
/// ```rust
/// use qwhash::{hash_block, ParameterSet};
///
/// let digest = hash_block(b"thirty-two bytes of walk input!!", &ParameterSet::default())?;
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), qwhash::QwError>(())
/// ```
#[inline]
pub fn hash_block(message: &[u8], params: &ParameterSet) -> QwResult<Vec<u8>> {
    hash_block_sized(message, params, DEFAULT_BLOCK_SIZE)
}

/// Hash the first `block_size` bytes of `message` into `block_size` bytes.
///
/// # Errors
/// - `InvalidBlockSize`: `block_size` is not a supported power of two, or
///   `message` is shorter than `block_size`.
/// - `InvalidParameter`: an angle is out of range.
/// - `ZeroNormInput`: the block is all zeros.
/// - `UnderfilledDistribution`: the walk left fewer than `block_size`
///   basis states with non-zero probability.
pub fn hash_block_sized(
    message: &[u8],
    params: &ParameterSet,
    block_size: usize,
) -> QwResult<Vec<u8>> {
    let ctx = WalkContext::new(block_size, params)?;
    hash_with_context(message, &ctx)
}

/// Run initializer, walk and extractor under an existing context.
pub(crate) fn hash_with_context(message: &[u8], ctx: &WalkContext) -> QwResult<Vec<u8>> {
    let mut state = AmplitudeState::prepare(message, ctx)?;
    let block = &message[..ctx.block_size()];
    walk::run(&mut state, block, ctx)?;
    extract::collapse(&state, ctx.block_size())
}

// =============================================================================
// CHAINED HASHING
// =============================================================================

/// Hash an arbitrary-length message with 32-byte XOR-feedback chaining.
///
/// Trailing bytes that do not fill a whole block are ignored. A message
/// shorter than one block is hashed as a single block of its own length,
/// which must then be a supported power of two.
///
/// # Errors
/// Any block error aborts the whole chain.
///
/// # Example
/// ```rust
/// use qwhash::{hash_chained, ParameterSet};
///
/// let message = vec![0x5Au8; 1024];
/// let digest = hash_chained(&message, &ParameterSet::default())?;
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), qwhash::QwError>(())
/// ```
pub fn hash_chained(message: &[u8], params: &ParameterSet) -> QwResult<Vec<u8>> {
    let mut hasher = ChainHasher::new(params)?;
    hasher.update(message)?;
    hasher.finalize()
}

/// Chain `message`, then pass the 32-byte chained digest through one more
/// block hash.
///
/// # Errors
/// Same as [`hash_chained`].
pub fn hash_prehashed(message: &[u8], params: &ParameterSet) -> QwResult<Vec<u8>> {
    let chained = hash_chained(message, params)?;
    hash_block_sized(&chained, params, chained.len())
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the block digest and compare in constant time.
///
/// # Errors
/// Hashing errors are returned as-is; a mismatch is `Ok(false)`.
pub fn verify_block(message: &[u8], params: &ParameterSet, expected: &[u8]) -> QwResult<bool> {
    let computed = hash_block(message, params)?;
    Ok(computed.as_slice().ct_eq(expected).into())
}

/// Recompute the chained digest and compare in constant time.
///
/// # Errors
/// Hashing errors are returned as-is; a mismatch is `Ok(false)`.
pub fn verify_chained(message: &[u8], params: &ParameterSet, expected: &[u8]) -> QwResult<bool> {
    let computed = hash_chained(message, params)?;
    Ok(computed.as_slice().ct_eq(expected).into())
}
