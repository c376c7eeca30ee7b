//! Curve fitting through the public API.

use crate::test_helpers::{array_approx_eq, gaussian_noise};
use approx::assert_relative_eq;
use lmsolve_rs::models::{CurveFitProblem, PolynomialProblem};
use lmsolve_rs::{ConvergenceStatus, LevenbergMarquardt, Problem};
use ndarray::{array, Array1};

#[test]
fn test_quadratic_fit() {
    // Roughly y = x^2 + x + 1
    let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = array![1.1, 2.9, 7.2, 12.8, 21.1];

    let problem = CurveFitProblem::new(x.clone(), y.clone(), |x: f64, p: &Array1<f64>| {
        p[0] * x * x + p[1] * x + p[2]
    })
    .unwrap();

    let result = LevenbergMarquardt::new()
        .minimize(&problem, array![1.0, 1.0, 1.0])
        .unwrap();

    assert!(result.f_norm < 1.0);
    assert_eq!(result.solution.len(), 3);

    // Same answer as the linear least-squares solution (lowest power first)
    let exact = PolynomialProblem::new(x, y, 2)
        .unwrap()
        .initial_guess()
        .unwrap();
    let fitted = array![result.solution[2], result.solution[1], result.solution[0]];
    assert!(array_approx_eq(&fitted, &exact, 1e-5));
}

#[test]
fn test_polynomial_problem_fit() {
    let x = Array1::linspace(-2.0, 2.0, 30);
    let truth = array![0.5, -1.0, 0.25, 0.75];
    let noise = gaussian_noise(x.len(), 0.05, 7);
    let y = x.mapv(|x| PolynomialProblem::evaluate(&truth, x)) + &noise;

    let problem = PolynomialProblem::new(x, y, 3).unwrap();
    let result = LevenbergMarquardt::new()
        .minimize(&problem, Array1::zeros(4))
        .unwrap();

    let exact = problem.initial_guess().unwrap();
    assert!(array_approx_eq(&result.solution, &exact, 1e-6));
    for i in 0..4 {
        assert!((result.solution[i] - truth[i]).abs() < 0.1);
    }
    // Analytic Jacobian: no extra evaluations beyond one per pass, one per
    // candidate and the final check
    assert!(result.func_evals <= 2 * result.iteration_data.len() + 1);
}

#[test]
fn test_noisy_exponential_fit() {
    let (a, b) = (2.5, -1.3);
    let x = Array1::linspace(0.0, 4.0, 50);
    let noise = gaussian_noise(x.len(), 0.01, 42);
    let y = x.mapv(|x: f64| a * (b * x).exp()) + &noise;

    let problem =
        CurveFitProblem::new(x, y, |x: f64, p: &Array1<f64>| p[0] * (p[1] * x).exp()).unwrap();
    let result = LevenbergMarquardt::new()
        .minimize(&problem, array![2.0, -1.0])
        .unwrap();

    // Noise keeps the residual norm far above the tolerance
    assert_eq!(result.status, ConvergenceStatus::MaxIterationsReached);
    assert_eq!(result.iteration_data.len(), 100);

    assert!((result.solution[0] - a).abs() < 0.05);
    assert!((result.solution[1] - b).abs() < 0.05);
    assert_relative_eq!(
        result.f_norm,
        problem.residual_norm(&result.solution).unwrap(),
        epsilon = 1e-15
    );
}
