//! Integration benchmarks
//!
//! Benchmarks fixed-step Euler integration of the Lorenz system.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftsim::solver::integrate;
use driftsim::system::{LorenzParameters, State};

fn bench_euler_integration(c: &mut Criterion) {
    let params = LorenzParameters::default();
    let s0 = State::new(-1.0, 0.1, 25.0);
    let dt = 1.0 / 256.0;

    let mut group = c.benchmark_group("Euler integration");
    for steps in [1_000usize, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("steps", steps), steps, |b, &steps| {
            b.iter(|| integrate(&params, black_box(s0), dt, steps));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_euler_integration);
criterion_main!(benches);
