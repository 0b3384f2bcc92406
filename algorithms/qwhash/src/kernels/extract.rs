//! Distribution Extractor
//!
//! Collapses the final amplitudes into digest bytes. Basis states are visited
//! in ascending order of their `(Q+1)`-bit labels, which under the
//! `coin << Q | position` layout is plain index order. States with zero
//! probability are skipped.

use super::constants::{BYTE_MODULUS, PROBABILITY_SCALE};
use super::state::AmplitudeState;
use crate::types::{QwError, QwResult};

// =============================================================================
// EXTRACTION
// =============================================================================

/// Produce exactly `output_len` bytes from `state`.
///
/// # Errors
/// `QwError::UnderfilledDistribution` if fewer than `output_len` basis states
/// carry non-zero probability.
pub fn collapse(state: &AmplitudeState, output_len: usize) -> QwResult<Vec<u8>> {
    let digest: Vec<u8> = state
        .probabilities()
        .filter(|&(_, p)| p != 0.0)
        .take(output_len)
        .map(|(_, p)| scale_probability(p))
        .collect();

    if digest.len() < output_len {
        tracing::debug!(
            produced = digest.len(),
            required = output_len,
            "distribution underfilled"
        );
        return Err(QwError::UnderfilledDistribution {
            produced: digest.len(),
            required: output_len,
        });
    }
    Ok(digest)
}

/// `floor(p * 10^8) mod 256`.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_probability(probability: f64) -> u8 {
    // p is in [0, 1], so the scaled value fits a u64 exactly before the modulus.
    let scaled = (probability * PROBABILITY_SCALE).floor() as u64;
    (scaled % BYTE_MODULUS) as u8
}
