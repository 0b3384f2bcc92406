//! Amplitude State
//!
//! Complex amplitude vector over the `(coin, position)` register, plus the
//! initializer that loads a message block into it.
//!
//! Layout: index `i = coin << Q | position`, so the first `N` entries are the
//! coin=0 half and position qubit `idx` is bit `idx` of the index.

use crate::engine::context::{position_qubits_for, WalkContext};
use crate::types::{QwError, QwResult};
use num_complex::Complex64;

// =============================================================================
// STATE
// =============================================================================

/// Amplitude vector of dimension `2N` for a block of `N` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeState {
    amplitudes: Vec<Complex64>,
    position_qubits: usize,
}

impl AmplitudeState {
    /// Load the first `N` bytes of `message` into a unit-norm state.
    ///
    /// Entry `i` is `byte[i] + j * (byte[i] mod 7)`, normalized, in the coin=0
    /// half; the coin=1 half starts at zero.
    ///
    /// # Errors
    /// `QwError::InvalidBlockSize` if `message` holds fewer than `N` bytes,
    /// `QwError::ZeroNormInput` if those bytes are all zero.
    pub fn prepare(message: &[u8], ctx: &WalkContext) -> QwResult<Self> {
        let n = ctx.block_size();
        let Some(block) = message.get(..n) else {
            return Err(QwError::InvalidBlockSize {
                size: message.len(),
                reason: "message shorter than the block size",
            });
        };

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); ctx.dimension()];
        for (slot, &byte) in amplitudes.iter_mut().zip(block) {
            *slot = Complex64::new(f64::from(byte), f64::from(byte % 7));
        }

        let norm = amplitudes[..n]
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 {
            return Err(QwError::ZeroNormInput);
        }
        for amp in &mut amplitudes[..n] {
            *amp /= norm;
        }

        Ok(Self {
            amplitudes,
            position_qubits: ctx.position_qubits(),
        })
    }

    /// Wrap a raw amplitude vector (not renormalized).
    ///
    /// # Errors
    /// `QwError::InvalidBlockSize` if `amplitudes.len() / 2` is not a
    /// supported block size.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> QwResult<Self> {
        if amplitudes.len() % 2 != 0 {
            return Err(QwError::InvalidBlockSize {
                size: amplitudes.len(),
                reason: "amplitude vector must have even dimension",
            });
        }
        let position_qubits = position_qubits_for(amplitudes.len() / 2)?;
        Ok(Self {
            amplitudes,
            position_qubits,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Block length `N` (positions).
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.amplitudes.len() / 2
    }

    /// Position qubits `Q`.
    #[must_use]
    pub const fn position_qubits(&self) -> usize {
        self.position_qubits
    }

    /// All `2N` amplitudes.
    #[must_use]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Sum of squared magnitudes (1 for a valid state).
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// `(index, probability)` for every basis state, in index order.
    pub fn probabilities(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .enumerate()
    }

    /// Bitstring label of basis state `index`: coin bit first, then the
    /// position bits from most to least significant.
    #[must_use]
    pub fn basis_label(&self, index: usize) -> String {
        format!("{index:0width$b}", width = self.position_qubits + 1)
    }
}
