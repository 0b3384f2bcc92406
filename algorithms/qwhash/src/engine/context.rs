//! Walk Context
//!
//! Resolves a block size and parameter set into the register geometry used by
//! one hash call. The context is immutable and owned by the call.

use crate::kernels::constants::{COIN_QUBITS, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
use crate::types::{ParameterSet, QwError, QwResult};

// =============================================================================
// CONTEXT
// =============================================================================

/// Geometry and parameters for a single block hash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkContext {
    block_size: usize,
    position_qubits: usize,
    rounds: usize,
    params: ParameterSet,
}

impl WalkContext {
    /// Validate `block_size` and `params` and derive `Q` and `T`.
    ///
    /// # Errors
    /// `QwError::InvalidBlockSize` if `block_size` is not a power of two in
    /// `[MIN_BLOCK_SIZE, MAX_BLOCK_SIZE]`; `QwError::InvalidParameter` for a
    /// bad angle.
    pub fn new(block_size: usize, params: &ParameterSet) -> QwResult<Self> {
        let position_qubits = position_qubits_for(block_size)?;
        params.validate()?;
        let rounds = params.rounds(block_size, position_qubits);

        tracing::trace!(
            block_size,
            position_qubits,
            rounds,
            policy = ?params.policy(),
            "walk context"
        );

        Ok(Self {
            block_size,
            position_qubits,
            rounds,
            params: *params,
        })
    }

    /// Block length `N` (also the digest length).
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Position qubits `Q = log2(N)`.
    #[must_use]
    pub const fn position_qubits(&self) -> usize {
        self.position_qubits
    }

    /// Walk rounds `T`.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Amplitude-vector dimension `2^(Q+1)`.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.block_size << COIN_QUBITS
    }

    /// Coin-angle parameters.
    #[must_use]
    pub const fn params(&self) -> &ParameterSet {
        &self.params
    }
}

/// Position qubits for a block of `block_size` bytes.
///
/// # Errors
/// `QwError::InvalidBlockSize` unless `block_size` is a power of two within
/// the supported range.
pub fn position_qubits_for(block_size: usize) -> QwResult<usize> {
    if !block_size.is_power_of_two() {
        return Err(QwError::InvalidBlockSize {
            size: block_size,
            reason: "block size must be a power of two",
        });
    }
    if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&block_size) {
        return Err(QwError::InvalidBlockSize {
            size: block_size,
            reason: "block size outside the supported range 2..=2^20",
        });
    }
    Ok(block_size.trailing_zeros() as usize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_for_default_block() {
        let ctx = WalkContext::new(32, &ParameterSet::standard_byte()).unwrap();
        assert_eq!(ctx.position_qubits(), 5);
        assert_eq!(ctx.dimension(), 64);
        assert_eq!(ctx.rounds(), 6);

        let ctx = WalkContext::new(32, &ParameterSet::standard_bit()).unwrap();
        assert_eq!(ctx.rounds(), 51);
    }

    #[test]
    fn test_rejects_unsupported_sizes() {
        for size in [0, 1, 3, 24, 33, MAX_BLOCK_SIZE * 2] {
            let err = position_qubits_for(size).unwrap_err();
            assert!(
                matches!(err, QwError::InvalidBlockSize { .. }),
                "size {size} accepted"
            );
        }
        assert_eq!(position_qubits_for(2).unwrap(), 1);
        assert_eq!(position_qubits_for(MAX_BLOCK_SIZE).unwrap(), 20);
    }
}
