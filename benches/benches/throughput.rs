//! qwhash Criterion Benchmark
//!
//! Block latency, chain throughput and batch scaling.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qwhash::{hash_block_sized, hash_chained, verify_chained, ParameterSet};
use rand::prelude::*;
use sha2::{Digest, Sha256};
use std::hint::black_box;

const KB: usize = 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: BLOCK LATENCY
// =============================================================================

/// Single block cost by block size and policy.
fn bench_block_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Block-Latency");

    let policies = [
        ("byte", ParameterSet::standard_byte()),
        ("bit", ParameterSet::standard_bit()),
    ];

    for size in [8usize, 32, 128, 512] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (name, params) in &policies {
            group.bench_with_input(
                BenchmarkId::new(*name, format!("{size}B")),
                &input,
                |b, data| b.iter(|| hash_block_sized(black_box(data), params, size).unwrap()),
            );
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: CHAIN THROUGHPUT
// =============================================================================

/// 32-byte chaining over growing messages, with SHA-256 as a baseline.
fn bench_chained(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Chained");
    let params = ParameterSet::standard_byte();

    for (size, name) in [(KB, "1KB"), (4 * KB, "4KB"), (16 * KB, "16KB")] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("qwhash", name), &input, |b, data| {
            b.iter(|| hash_chained(black_box(data), &params).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sha256", name), &input, |b, data| {
            b.iter(|| Sha256::digest(black_box(data)))
        });
    }

    // Verification (constant-time)
    let input = random_input(4 * KB);
    let digest = hash_chained(&input, &params).unwrap();
    group.bench_function("verify-4KB", |b| {
        b.iter(|| verify_chained(black_box(&input), &params, black_box(&digest)).unwrap())
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 3: BATCH SCALING
// =============================================================================

/// Independent messages spread across 1 to N threads.
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Batch-Scaling");
    group.sample_size(20);

    let params = ParameterSet::standard_byte();
    let messages: Vec<Vec<u8>> = (0..256).map(|_| random_input(KB)).collect();
    group.throughput(Throughput::Bytes((messages.len() * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| {
                    b.iter(|| qwhash::hash_chained_batch(black_box(&messages), &params))
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_block_latency, bench_chained);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
