//! Benchmarks for cap construction and exclusion counting.
//!
//! Run with:
//! ```bash
//! cargo bench --bench cap_search
//! ```

use cap_rs::builder::build_complete_cap;
use cap_rs::cap::Cap;
use cap_rs::exclusion::max_exclusion_multiplicity;
use cap_rs::types::Dim;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate deterministic complete caps for reproducible benchmarks.
fn random_caps(dim: Dim, seed: u64, count: usize) -> Vec<Cap> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| build_complete_cap(dim, &mut rng)).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_complete_cap");

    for n in [4, 6, 8, 10] {
        let dim = Dim::new(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dim, |b, &dim| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| build_complete_cap(dim, &mut rng));
        });
    }

    group.finish();
}

fn bench_exclusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_exclusion_multiplicity");

    for n in [4, 6, 8, 10] {
        let dim = Dim::new(n);
        let caps = random_caps(dim, 42, 16);
        group.bench_with_input(BenchmarkId::from_parameter(n), &caps, |b, caps| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % caps.len();
                max_exclusion_multiplicity(&caps[i], dim)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_exclusion);
criterion_main!(benches);
