//! Criterion microbenches for window membership and sampling.
//!
//! - contains: single-point membership on boxes and balls, d in {2, 4, 8}.
//! - rand: volume-uniform sampling of 1000 points, same dimensions.
//!
//! Results live under `target/criterion`.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ppwindow::{BallWindow, BoxWindow, Window};

const DIMS: [usize; 3] = [2, 4, 8];

fn random_point(d: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..d).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for &d in &DIMS {
        let cube = BoxWindow::unit(None, d).unwrap();
        let ball = BallWindow::unit(None, d).unwrap();
        let point = random_point(d, 42 + d as u64);
        group.bench_with_input(BenchmarkId::new("box", d), &point, |b, p| {
            b.iter(|| black_box(cube.contains(black_box(p)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("ball", d), &point, |b, p| {
            b.iter(|| black_box(ball.contains(black_box(p)).unwrap()))
        });
    }
    group.finish();
}

fn bench_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_1000");
    for &d in &DIMS {
        let cube = BoxWindow::unit(None, d).unwrap();
        let ball = BallWindow::unit(None, d).unwrap();
        group.bench_function(BenchmarkId::new("box", d), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(7),
                |mut rng| black_box(cube.rand(1000, &mut rng)),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("ball", d), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(7),
                |mut rng| black_box(ball.rand(1000, &mut rng)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_indicator(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_rows_1000");
    for &d in &DIMS {
        let ball = BallWindow::unit(None, d).unwrap();
        let points = ball.rand_seeded(1000, Some(3));
        group.bench_with_input(BenchmarkId::new("ball", d), &points, |b, pts| {
            b.iter(|| black_box(ball.indicator_function_rows(pts).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_rand, bench_indicator);
criterion_main!(benches);
