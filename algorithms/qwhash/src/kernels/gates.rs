//! Gate Operators
//!
//! The coin rotation and the controlled shift, applied to an `AmplitudeState`
//! in place by index arithmetic. No dense operator is ever built: each gate
//! touches the amplitude pairs that differ only in the bits it acts on.

use super::state::AmplitudeState;
use crate::types::{QwError, QwResult};

/// Real 2x2 coin matrix, row-major.
pub type CoinMatrix = [[f64; 2]; 2];

// =============================================================================
// COIN
// =============================================================================

/// Coin rotation for angle `theta`:
///
/// ```text
/// [ cos θ   sin θ ]
/// [ sin θ  -cos θ ]
/// ```
///
/// Symmetric and orthogonal, hence unitary and its own inverse for any real θ.
#[must_use]
pub fn rotation(theta: f64) -> CoinMatrix {
    let (sin, cos) = theta.sin_cos();
    [[cos, sin], [sin, -cos]]
}

// =============================================================================
// CONTROLLED OPERATIONS
// =============================================================================

/// Controlled coin rotation: control = position qubit `control`, target = coin.
///
/// Identity where the control bit is 0; where it is 1, `rotation(theta)` acts
/// on the `(coin=0, coin=1)` amplitude pair.
///
/// # Errors
/// `QwError::QubitOutOfRange` if `control` is not a position qubit.
pub fn apply_controlled_rotation(
    state: &mut AmplitudeState,
    control: usize,
    theta: f64,
) -> QwResult<()> {
    let mask = position_mask(state, control)?;
    let [[m00, m01], [m10, m11]] = rotation(theta);
    let n = state.block_size();
    let amps = state.amplitudes_mut();

    for low in (0..n).filter(|low| low & mask != 0) {
        let high = low + n;
        let (a0, a1) = (amps[low], amps[high]);
        amps[low] = a0 * m00 + a1 * m01;
        amps[high] = a0 * m10 + a1 * m11;
    }
    Ok(())
}

/// Controlled bit flip (CNOT): control = coin, target = position qubit `target`.
///
/// In the coin=1 half, swaps each pair of amplitudes that differ only in bit
/// `target`; the coin=0 half is untouched.
///
/// # Errors
/// `QwError::QubitOutOfRange` if `target` is not a position qubit.
pub fn apply_controlled_bit_flip(state: &mut AmplitudeState, target: usize) -> QwResult<()> {
    let mask = position_mask(state, target)?;
    let n = state.block_size();
    let coin_half = &mut state.amplitudes_mut()[n..];

    for position in (0..n).filter(|position| position & mask == 0) {
        coin_half.swap(position, position | mask);
    }
    Ok(())
}

fn position_mask(state: &AmplitudeState, qubit: usize) -> QwResult<usize> {
    let qubits = state.position_qubits();
    if qubit >= qubits {
        return Err(QwError::QubitOutOfRange { qubit, qubits });
    }
    Ok(1 << qubit)
}
