//! Benchmarks for geo crate distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roadwatch_geo::{haversine_distance_meters, within_radius, Coordinate};

fn create_test_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Berlin
            let lat = 52.0 + (i as f64 * 0.0001) % 2.0;
            let lng = 13.0 + (i as f64 * 0.0001) % 2.0;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let berlin = Coordinate::new(52.5200, 13.4050);
    let paris = Coordinate::new(48.8566, 2.3522);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance_meters(black_box(&berlin), black_box(&paris)))
    });
}

fn bench_proximity_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity_filter");
    let center = Coordinate::new(52.5, 13.4);

    for size in [10, 100, 1000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("linear_scan", size), size, |b, _| {
            b.iter(|| within_radius(black_box(&center), black_box(&points), black_box(20.0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_proximity_filter);
criterion_main!(benches);
