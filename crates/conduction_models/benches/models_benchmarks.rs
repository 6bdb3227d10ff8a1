//! Criterion benchmarks for conduction_models.
//!
//! Compares direct per-time field evaluation with the cached coefficient
//! path, and measures eigenvalue solves per geometry.

use conduction_models::{EigenvalueSolver, Geometry, TemperatureField};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark solving seven eigenvalues for each geometry.
fn bench_eigenvalues(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigenvalues");

    for geometry in Geometry::ALL {
        let solver = EigenvalueSolver::new(geometry);
        group.bench_with_input(BenchmarkId::new("solve_7", geometry), &geometry, |b, _| {
            b.iter(|| solver.solve(black_box(5.0), 7));
        });
    }

    group.finish();
}

/// Benchmark a 100-time scan over 41 coordinates.
fn bench_time_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_scan");
    let positions: Vec<f64> = (0..=40).map(|i| i as f64 / 40.0).collect();
    let fouriers: Vec<f64> = (1..=100).map(|i| i as f64 * 0.01).collect();

    for geometry in Geometry::ALL {
        let set = EigenvalueSolver::new(geometry).solve(5.0, 7).unwrap();
        let field = TemperatureField::new(geometry, set.values(), 1.0).unwrap();

        group.bench_with_input(BenchmarkId::new("direct", geometry), &geometry, |b, _| {
            b.iter(|| {
                fouriers
                    .iter()
                    .map(|&tau| field.temperatures(black_box(&positions), tau, 20.0, 500.0))
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(BenchmarkId::new("cached", geometry), &geometry, |b, _| {
            b.iter(|| {
                let coefficients = field.coefficients(black_box(&positions));
                coefficients.temperature_series(&fouriers, 20.0, 500.0)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eigenvalues, bench_time_scan);
criterion_main!(benches);
