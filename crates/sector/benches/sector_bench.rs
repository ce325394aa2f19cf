//! Criterion benchmarks for sector construction, area ordering and sorting.
//! Sizes: n in {10, 100, 1000} random sectors from the default bounds.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sector::api::{draw_sector, Sector, SectorBounds, SectorReplay};

fn random_sectors(n: usize, seed: u64) -> Vec<Sector> {
    let bounds = SectorBounds::default();
    (0..n as u64)
        .map(|i| draw_sector(bounds, SectorReplay::new(seed, i)).expect("default bounds are valid"))
        .collect()
}

fn bench_sector(c: &mut Criterion) {
    let mut group = c.benchmark_group("sector");
    group.bench_function("new_and_area", |b| {
        b.iter(|| {
            let s = Sector::new(black_box(2.5), black_box(45.0)).unwrap();
            black_box(s.area() + s.arc_length())
        })
    });
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("sort_by_area", n), &n, |b, &n| {
            b.iter_batched(
                || random_sectors(n, 43),
                |mut v| {
                    v.sort_by(Sector::cmp_by_area);
                    v
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sector);
criterion_main!(benches);
