//! Benchmarks for this crate's [`SkipSet`].

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::{Rng, SeedableRng, rngs::StdRng};
use skipset::SkipSet;

/// Benchmarking sizes.
const SIZES: [usize; 5] = [10, 100, 1000, 10_000, 100_000];

/// Benchmarking insertion of random elements.
#[inline]
fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipSet Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut set: SkipSet<u64> =
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
    let mut group = c.benchmark_group("SkipSet Find");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let keys: Vec<u64> = std::iter::repeat_with(|| rng.random()).take(size).collect();
            let set: SkipSet<u64> = keys.iter().copied().collect();

            b.iter(|| {
                for key in keys.iter().take(10) {
                    black_box(set.find(key));
                }
            });
        });
    }
}

/// Benchmarking removal and reinsertion through cursors.
#[inline]
fn remove_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipSet Remove/Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let keys: Vec<u64> = std::iter::repeat_with(|| rng.random()).take(size).collect();
            let mut set: SkipSet<u64> = keys.iter().copied().collect();

            b.iter(|| {
                let key = keys[rng.random_range(0..keys.len())];
                let (removed, _) = set.remove(set.find(&key)).unwrap();
                set.insert(removed);
            });
        });
    }
}

/// Benchmarking iteration.
#[inline]
fn iter(c: &mut Criterion) {
    c.bench_function("SkipSet Iter", |b| {
        let mut rng = StdRng::seed_from_u64(0x1234_abcd);
        let set: SkipSet<u64> = std::iter::repeat_with(|| rng.random())
            .take(100_000)
            .collect();

        b.iter(|| {
            for el in &set {
                black_box(el);
            }
        });
    });
}

/// Run all benchmarks for [`SkipSet`].
pub fn benchmark(c: &mut Criterion) {
    insert(c);
    find(c);
    remove_insert(c);
    iter(c);
}
