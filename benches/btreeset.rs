//! Benchmarks for the standard library's `BTreeSet`, for comparison.

use std::collections::BTreeSet;

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Benchmarking sizes.
const SIZES: [usize; 5] = [10, 100, 1000, 10_000, 100_000];

/// Benchmarking insertion of random elements.
#[inline]
fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeSet Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut set: BTreeSet<u64> =
                std::iter::repeat_with(|| rng.random()).take(size).collect();

            b.iter(|| {
                set.insert(rng.random());
            });
        });
    }
}

/// Benchmarking lookup of random elements.
#[inline]
fn find(c: &mut Criterion) {
    let mut group = c.benchmark_group("BTreeSet Find");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let keys: Vec<u64> = std::iter::repeat_with(|| rng.random()).take(size).collect();
            let set: BTreeSet<u64> = keys.iter().copied().collect();

            b.iter(|| {
                for key in keys.iter().take(10) {
                    black_box(set.get(key));
                }
            });
        });
    }
}

/// Benchmarking iteration.
#[inline]
fn iter(c: &mut Criterion) {
    c.bench_function("BTreeSet Iter", |b| {
        let mut rng = StdRng::seed_from_u64(0x1234_abcd);
        let set: BTreeSet<u64> = std::iter::repeat_with(|| rng.random())
            .take(100_000)
            .collect();

        b.iter(|| {
            for el in &set {
                black_box(el);
            }
        });
    });
}

/// Run all benchmarks for `BTreeSet`.
pub fn benchmark(c: &mut Criterion) {
    insert(c);
    find(c);
    iter(c);
}
