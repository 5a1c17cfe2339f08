//! Criterion benchmarks for the monotone-chain hull.
//! Sizes: m in {10, 100, 1000, 5000}; the trace snapshots make large m
//! quadratic in memory, which is what this measures.
//! Results live under target/criterion.

use algoviz::hull::{self, convex_hull_with_steps};
use algoviz::randgen::{random_points, PointCfg, ReplayToken};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &m in &[10usize, 100, 1000, 5000] {
        let cfg = PointCfg {
            count: m,
            min: -10_000,
            max: 10_000,
        };
        group.bench_with_input(BenchmarkId::new("with_steps", m), &m, |b, _| {
            b.iter_batched(
                || random_points(cfg, ReplayToken::new(43)),
                |pts| {
                    let _trace = convex_hull_with_steps(&pts);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("solve_normalized", m), &m, |b, _| {
            b.iter_batched(
                || random_points(cfg, ReplayToken::new(44)),
                |pts| {
                    let _res = hull::solve(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
