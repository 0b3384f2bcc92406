//! Walk Driver
//!
//! Runs `T` rounds of (controlled coin, controlled shift) over every position
//! qubit, choosing the coin angle from the message:
//!
//! - bit-policy: round `t` reads bits `[tQ, (t+1)Q)` of the big-endian message
//!   bitstring, bit `idx` of that slice selecting `theta1`/`theta2` for qubit `idx`;
//! - byte-policy: round `t` reads byte `t`, `thetas[byte % 8]` drives all qubits.
//!
//! The state is never renormalized; the gates are unitary.

use super::constants::{ANGLE_TABLE_SIZE, BITS_PER_BYTE};
use super::gates::{apply_controlled_bit_flip, apply_controlled_rotation};
use super::state::AmplitudeState;
use crate::engine::context::WalkContext;
use crate::types::{ParameterSet, QwResult};

// =============================================================================
// DRIVER
// =============================================================================

/// Walk `state` through all rounds for `block` (the first `N` message bytes).
///
/// # Errors
/// Propagates gate errors; none occur for a state built from the same context.
pub fn run(state: &mut AmplitudeState, block: &[u8], ctx: &WalkContext) -> QwResult<()> {
    run_observed(state, block, ctx, |_, _| {})
}

/// Like [`run`], calling `observe(round, state)` after each completed round.
///
/// # Errors
/// Propagates gate errors.
pub fn run_observed<F>(
    state: &mut AmplitudeState,
    block: &[u8],
    ctx: &WalkContext,
    mut observe: F,
) -> QwResult<()>
where
    F: FnMut(usize, &AmplitudeState),
{
    let qubits = ctx.position_qubits();

    match *ctx.params() {
        ParameterSet::Bit { theta1, theta2 } => {
            for round in 0..ctx.rounds() {
                for idx in 0..qubits {
                    let theta = if message_bit(block, round * qubits + idx) {
                        theta2
                    } else {
                        theta1
                    };
                    step(state, idx, theta)?;
                }
                observe(round, state);
            }
        }
        ParameterSet::Byte { thetas } => {
            // Bounded by the bytes actually present.
            for (round, &byte) in block.iter().take(ctx.rounds()).enumerate() {
                let theta = thetas[usize::from(byte) % ANGLE_TABLE_SIZE];
                for idx in 0..qubits {
                    step(state, idx, theta)?;
                }
                observe(round, state);
            }
        }
    }
    Ok(())
}

/// One coin + shift on position qubit `idx`.
#[inline]
fn step(state: &mut AmplitudeState, idx: usize, theta: f64) -> QwResult<()> {
    apply_controlled_rotation(state, idx, theta)?;
    apply_controlled_bit_flip(state, idx)
}

/// Bit `index` of `block` read MSB-first; bits past the end read as 0.
#[inline]
fn message_bit(block: &[u8], index: usize) -> bool {
    block
        .get(index / BITS_PER_BYTE)
        .is_some_and(|byte| (byte >> (BITS_PER_BYTE - 1 - index % BITS_PER_BYTE)) & 1 == 1)
}
