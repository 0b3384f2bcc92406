//! Kernel Benchmark
//!
//! Cost of the individual stages on one 32-byte block: state preparation,
//! a single gate pair, the full walk and extraction.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion};
use qwhash::kernels::{extract, gates, state::AmplitudeState, walk};
use qwhash::{ParameterSet, WalkContext};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Walk Stages");

    let block: Vec<u8> = (0..32u8).map(|i| i.wrapping_mul(29).wrapping_add(1)).collect();
    let params = ParameterSet::standard_byte();
    let ctx = WalkContext::new(block.len(), &params).unwrap();
    let prepared = AmplitudeState::prepare(&block, &ctx).unwrap();

    // 1. Normalized amplitude vector from the message block
    group.bench_function("prepare", |b| {
        b.iter(|| AmplitudeState::prepare(black_box(&block), &ctx).unwrap());
    });

    // 2. One controlled coin plus one controlled shift
    let theta = (3.0_f64 / 5.0).acos();
    group.bench_function("gate-pair", |b| {
        let mut state = prepared.clone();
        b.iter(|| {
            gates::apply_controlled_rotation(&mut state, 2, black_box(theta)).unwrap();
            gates::apply_controlled_bit_flip(&mut state, 2).unwrap();
        });
    });

    // 3. All rounds
    group.bench_function("walk", |b| {
        b.iter(|| {
            let mut state = prepared.clone();
            walk::run(&mut state, black_box(&block), &ctx).unwrap();
            state
        });
    });

    // 4. Probability scaling
    let mut walked = prepared.clone();
    walk::run(&mut walked, &block, &ctx).unwrap();
    group.bench_function("collapse", |b| {
        b.iter(|| extract::collapse(black_box(&walked), 32).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
