//! Benchmark for ErgoSet vs the standard HashSet.
//!
//! The adapter delegates every core operation, so these numbers should track
//! the standard container closely; the interesting entry is the union
//! operator, which is implemented as copy-then-extend.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ergoset::ErgoSet;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ErgoSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = ErgoSet::new();
                for index in 0..size {
                    set.insert(black_box(index));
                }
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = HashSet::new();
                for index in 0..size {
                    set.insert(black_box(index));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [1_000, 10_000] {
        let set: ErgoSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("ErgoSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for index in 0..size {
                    if set.contains(black_box(&index)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// union Benchmark
// =============================================================================

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union");

    for size in [1_000, 10_000] {
        let left: ErgoSet<i32> = (0..size).collect();
        let right: ErgoSet<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("ErgoSet", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&left | &right));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_union
);
criterion_main!(benches);
