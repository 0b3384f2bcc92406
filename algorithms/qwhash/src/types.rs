//! Shared types used across the qwhash library.

use crate::kernels::constants::{ANGLE_TABLE_SIZE, BITS_PER_BYTE};
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use thiserror::Error;

// =============================================================================
// PARAMETER SETS
// =============================================================================

/// Coin-angle parameters and the policy that selects among them.
///
/// Every angle must lie in the open interval (0, π/2) and differ from π/4.
/// Use [`ParameterSet::bit`] / [`ParameterSet::byte`] to build a validated
/// set; the hash entry points re-validate before walking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "lowercase"))]
pub enum ParameterSet {
    /// One message bit per position qubit and round.
    Bit {
        /// Angle used where the message bit is `0`.
        theta1: f64,
        /// Angle used where the message bit is `1`.
        theta2: f64,
    },
    /// One message byte per round, applied to every position qubit.
    Byte {
        /// Angle table indexed by `byte % 8`.
        thetas: [f64; ANGLE_TABLE_SIZE],
    },
}

/// Discriminant of a [`ParameterSet`], without the angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPolicy {
    /// Bit-driven angle selection.
    Bit,
    /// Byte-driven angle selection.
    Byte,
}

impl ParameterSet {
    /// Build a validated bit-policy set.
    ///
    /// # Errors
    /// Returns `QwError::InvalidParameter` if either angle is out of range.
    pub fn bit(theta1: f64, theta2: f64) -> QwResult<Self> {
        let params = Self::Bit { theta1, theta2 };
        params.validate()?;
        Ok(params)
    }

    /// Build a validated byte-policy set.
    ///
    /// # Errors
    /// Returns `QwError::InvalidParameter` naming the first bad table entry.
    pub fn byte(thetas: [f64; ANGLE_TABLE_SIZE]) -> QwResult<Self> {
        let params = Self::Byte { thetas };
        params.validate()?;
        Ok(params)
    }

    /// Bit-policy pair `(acos(3/5), acos(8/17))`.
    #[must_use]
    pub fn standard_bit() -> Self {
        Self::Bit {
            theta1: (3.0_f64 / 5.0).acos(),
            theta2: (8.0_f64 / 17.0).acos(),
        }
    }

    /// Byte-policy table of Pythagorean-ratio angles.
    ///
    /// The first entry is `acos(1 / sqrt(2))`, which rounds one ulp above
    /// `FRAC_PI_4` and is therefore accepted.
    #[must_use]
    pub fn standard_byte() -> Self {
        Self::Byte {
            thetas: [
                (1.0 / 2.0_f64.sqrt()).acos(),
                (3.0_f64 / 5.0).acos(),
                (4.0_f64 / 5.0).acos(),
                (5.0_f64 / 13.0).acos(),
                (7.0_f64 / 10.0).acos(),
                (8.0_f64 / 17.0).acos(),
                (2.0_f64 / 3.0).acos(),
                (5.0_f64 / 8.0).acos(),
            ],
        }
    }

    /// Policy of this set.
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        match self {
            Self::Bit { .. } => SelectionPolicy::Bit,
            Self::Byte { .. } => SelectionPolicy::Byte,
        }
    }

    /// Check every angle.
    ///
    /// # Errors
    /// Returns `QwError::InvalidParameter` for the first angle that is NaN,
    /// outside (0, π/2), or exactly π/4.
    pub fn validate(&self) -> QwResult<()> {
        match self {
            Self::Bit { theta1, theta2 } => {
                validate_angle(0, *theta1)?;
                validate_angle(1, *theta2)
            }
            Self::Byte { thetas } => thetas
                .iter()
                .enumerate()
                .try_for_each(|(index, theta)| validate_angle(index, *theta)),
        }
    }

    /// Walk rounds for a block with `position_qubits` position qubits.
    ///
    /// Bit-policy consumes `Q` bits per round (`8N / Q` rounds); byte-policy
    /// consumes one byte per round (`N / Q` rounds). `position_qubits` is at
    /// least 1 for every supported block size.
    #[must_use]
    pub(crate) const fn rounds(&self, block_size: usize, position_qubits: usize) -> usize {
        match self {
            Self::Bit { .. } => block_size * BITS_PER_BYTE / position_qubits,
            Self::Byte { .. } => block_size / position_qubits,
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::standard_byte()
    }
}

#[allow(clippy::float_cmp)] // π/4 is excluded as an exact value
fn validate_angle(index: usize, value: f64) -> QwResult<()> {
    let in_range = value > 0.0 && value < FRAC_PI_2;
    if !in_range || value == FRAC_PI_4 {
        return Err(QwError::InvalidParameter { index, value });
    }
    Ok(())
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Result alias for walk-hash operations.
pub type QwResult<T> = Result<T, QwError>;

/// Errors raised while hashing a block or a chain.
///
/// Every error is reported for the whole call; no partial digest is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QwError {
    /// Block length is not a supported power of two, or the message is too short.
    #[error("invalid block size {size}: {reason}")]
    InvalidBlockSize {
        /// Offending size (block length or message length).
        size: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A coin angle is NaN, outside (0, π/2), or equal to π/4.
    #[error("coin angle #{index} = {value} must lie in (0, pi/2) and differ from pi/4")]
    InvalidParameter {
        /// Position of the angle in the parameter set.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// The block is all zero bytes and cannot be normalized.
    #[error("message block has zero norm (all-zero input)")]
    ZeroNormInput,

    /// Fewer basis states carry probability than digest bytes are required.
    #[error("distribution underfilled: {produced} of {required} digest bytes")]
    UnderfilledDistribution {
        /// Bytes that could be produced.
        produced: usize,
        /// Bytes required (the block length).
        required: usize,
    },

    /// A gate addressed a position qubit outside the register.
    #[error("position qubit {qubit} out of range for a {qubits}-qubit register")]
    QubitOutOfRange {
        /// Requested qubit.
        qubit: usize,
        /// Position qubits in the register.
        qubits: usize,
    },
}
