//! Benchmarks for kd-tree and quadtree construction and line extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use subdivide2d::bounds::{working_domain, Aabb2};
use subdivide2d::spatial::{KdTree, QuadTree, SpatialPartition};
use subdivide2d::Point2;

/// Generates random points in the working domain.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push(Point2::new(x.min(99.999), y.min(99.999)));
    }

    points
}

fn bench_kdtree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_construction");
    let domain = working_domain::<f64>().to_aabb();

    for count in [40, 1000, 10000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("depth_8", count), &points, |b, pts| {
            b.iter(|| KdTree::build(black_box(pts), 8, domain))
        });
    }

    group.finish();
}

fn bench_quadtree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_construction");

    for count in [40, 1000, 10000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("depth_8", count), &points, |b, pts| {
            b.iter(|| QuadTree::build(black_box(pts), 8, working_domain()))
        });
    }

    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    let points = generate_random_points(10000, 54321);
    let domain: Aabb2<f64> = working_domain::<f64>().to_aabb();
    let kd = KdTree::build(&points, 12, domain).unwrap();
    let quad = QuadTree::build(&points, 12, working_domain()).unwrap();

    group.bench_function("kdtree", |b| b.iter(|| black_box(&kd).lines()));
    group.bench_function("quadtree", |b| b.iter(|| black_box(&quad).lines()));

    group.finish();
}

criterion_group!(
    benches,
    bench_kdtree_construction,
    bench_quadtree_construction,
    bench_lines
);
criterion_main!(benches);
