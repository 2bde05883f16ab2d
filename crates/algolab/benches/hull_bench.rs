//! Criterion benchmarks for Graham-scan hulls.
//! Focus sizes: m in {16, 128, 1024} points from the disc sampler.

use algolab::hull::rand::{draw_point_cloud, PointCount, ReplayToken, ScatterCfg};
use algolab::hull::{convex_hull, polygon_area, polygon_perimeter};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &m in &[16usize, 128, 1024] {
        let cfg = ScatterCfg {
            point_count: PointCount::Fixed(m),
            radius: 10_000.0,
            grid_step: 1,
        };
        group.bench_with_input(BenchmarkId::new("convex_hull", m), &m, |b, &m| {
            b.iter_batched(
                || draw_point_cloud(cfg, ReplayToken { seed: 42, index: m as u64 }),
                |points| {
                    let _hull = convex_hull(&points);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("hull_with_metrics", m), &m, |b, &m| {
            b.iter_batched(
                || draw_point_cloud(cfg, ReplayToken { seed: 43, index: m as u64 }),
                |points| {
                    let hull = convex_hull(&points);
                    let _metrics = (polygon_area(&hull), polygon_perimeter(&hull));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
