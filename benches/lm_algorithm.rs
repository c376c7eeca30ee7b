//! Benchmarks for the Levenberg-Marquardt algorithm
//!
//! This file contains benchmarks for the core LM algorithm and the linear
//! solve it performs every iteration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lmsolve_rs::linalg::solve_linear_system;
use lmsolve_rs::models::{CurveFitProblem, PolynomialProblem};
use lmsolve_rs::{solve, LevenbergMarquardt};
use ndarray::{array, Array1, Array2};

fn bench_nonlinear_system(c: &mut Criterion) {
    let equations = |v: &Array1<f64>| {
        array![
            v[0].powi(2) + v[1].powi(2) - 4.0,
            v[0] * v[0] + v[1] - 3.0
        ]
    };

    c.bench_function("nonlinear_system_2x2", |b| {
        b.iter(|| solve(equations, black_box(array![1.0, 1.0])).unwrap())
    });
}

fn bench_exponential_fit(c: &mut Criterion) {
    let x = Array1::linspace(0.0, 10.0, 100);
    let y = x.mapv(|x: f64| 5.0 * (-0.3 * x).exp());
    let problem =
        CurveFitProblem::new(x, y, |x: f64, p: &Array1<f64>| p[0] * (p[1] * x).exp()).unwrap();
    let lm = LevenbergMarquardt::new();

    c.bench_function("exponential_fit_100_points", |b| {
        b.iter(|| lm.minimize(&problem, black_box(array![1.0, -0.1])).unwrap())
    });
}

fn bench_polynomial_fit(c: &mut Criterion) {
    let x = Array1::linspace(-1.0, 1.0, 200);
    let y = x.mapv(|x: f64| 1.0 - 2.0 * x + 0.5 * x.powi(3) + 0.1 * x.powi(5));
    let problem = PolynomialProblem::new(x, y, 5).unwrap();
    let lm = LevenbergMarquardt::new();

    c.bench_function("polynomial_fit_degree_5", |b| {
        b.iter(|| lm.minimize(&problem, black_box(Array1::zeros(6))).unwrap())
    });
}

fn bench_linear_solve(c: &mut Criterion) {
    let n = 50;
    let a = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            n as f64
        } else {
            1.0 / (1.0 + i as f64 + j as f64)
        }
    });
    let b = Array1::ones(n);

    c.bench_function("gauss_50x50", |bench| {
        bench.iter(|| solve_linear_system(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_nonlinear_system,
    bench_exponential_fit,
    bench_polynomial_fit,
    bench_linear_solve
);
criterion_main!(benches);
