//! Walk Trace example.
//!
//! Runs one 16-byte block round by round and prints how the probability mass
//! spreads from the coin-0 half into the coin-1 half, then the final
//! distribution by basis label.

#![allow(clippy::pedantic, clippy::nursery)]

use qwhash::kernels::{extract, state::AmplitudeState, walk};
use qwhash::{ParameterSet, QwResult, WalkContext};

fn main() -> QwResult<()> {
    let block: Vec<u8> = (0..16u8).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect();
    let params = ParameterSet::standard_bit();
    let ctx = WalkContext::new(block.len(), &params)?;

    println!(
        "N = {}, Q = {}, rounds = {}, dimension = {}",
        ctx.block_size(),
        ctx.position_qubits(),
        ctx.rounds(),
        ctx.dimension()
    );

    let mut state = AmplitudeState::prepare(&block, &ctx)?;
    let n = ctx.block_size();
    walk::run_observed(&mut state, &block, &ctx, |round, state| {
        let coin_one: f64 = state.probabilities().filter(|(i, _)| *i >= n).map(|(_, p)| p).sum();
        let occupied = state.probabilities().filter(|(_, p)| *p != 0.0).count();
        println!(
            "round {round:>3}: norm^2 = {:.12}  coin-1 mass = {coin_one:.6}  occupied = {occupied}",
            state.norm_sqr()
        );
    })?;

    println!();
    for (index, p) in state.probabilities() {
        println!(
            "|{}>  p = {p:.10}  byte = {:3}",
            state.basis_label(index),
            extract::scale_probability(p)
        );
    }

    let digest = extract::collapse(&state, n)?;
    println!("\nDigest: {}", hex::encode(digest));
    Ok(())
}
