//! Finite difference methods for numerical differentiation.
//!
//! This module provides the central-difference Jacobian used by default for
//! every [`Problem`] that does not supply an analytic one.

use crate::error::{LmSolveError, Result};
use crate::problem::Problem;
use ndarray::{Array1, Array2};

/// Default step size for finite differences.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Compute the Jacobian matrix using central finite differences.
///
/// Column `j` is `(f(x + eps*e_j) - f(x - eps*e_j)) / (2*eps)`, so the
/// estimate costs `2n` residual evaluations. The step is the fixed `epsilon`
/// for every coordinate.
///
/// # Arguments
///
/// * `problem` - The problem to evaluate
/// * `params` - The parameter values at which to evaluate the Jacobian
/// * `residuals` - The residuals at `params`, which fix the row count `m`
/// * `epsilon` - The step size for finite differences
///
/// # Returns
///
/// * `Result<Array2<f64>>` - The `m x n` Jacobian matrix
pub fn jacobian<P: Problem + ?Sized>(
    problem: &P,
    params: &Array1<f64>,
    residuals: &Array1<f64>,
    epsilon: f64,
) -> Result<Array2<f64>> {
    let n_params = params.len();
    let n_residuals = residuals.len();

    let mut jac = Array2::zeros((n_residuals, n_params));

    for j in 0..n_params {
        let mut params_forward = params.clone();
        let mut params_backward = params.clone();
        params_forward[j] += epsilon;
        params_backward[j] -= epsilon;

        let f_forward = problem.eval(&params_forward)?;
        let f_backward = problem.eval(&params_backward)?;

        for evaluated in [&f_forward, &f_backward] {
            if evaluated.len() != n_residuals {
                return Err(LmSolveError::DimensionMismatch(format!(
                    "Expected {} residuals, got {}",
                    n_residuals,
                    evaluated.len()
                )));
            }
        }

        let column = (&f_forward - &f_backward) / (2.0 * epsilon);
        jac.column_mut(j).assign(&column);
    }

    Ok(jac)
}
