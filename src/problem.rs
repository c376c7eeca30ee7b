//! Problem definition trait and implementations.
//!
//! This module defines the `Problem` trait, which represents a nonlinear
//! least squares problem to be solved with the Levenberg-Marquardt algorithm,
//! and [`ResidualFn`], which turns a plain closure into a `Problem`.

use crate::error::Result;
use crate::linalg::norm;
use ndarray::{Array1, Array2};

/// A trait representing a nonlinear least squares problem.
///
/// Implementors must be pure: the solver evaluates the residuals many times
/// per iteration and expects the same output for the same input, always of
/// the same length.
pub trait Problem {
    /// Evaluate the residuals at the given parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter values at which to evaluate the residuals
    ///
    /// # Returns
    ///
    /// * A vector of residuals, or an error if the evaluation fails
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>>;

    /// Evaluate the Jacobian matrix at the given parameters.
    ///
    /// The Jacobian is the `m x n` matrix of partial derivatives of the
    /// residuals with respect to the parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter values at which to evaluate the Jacobian
    /// * `residuals` - The residuals already evaluated at `params`
    /// * `epsilon` - The finite-difference step, ignored by analytic implementations
    ///
    /// # Default Implementation
    ///
    /// Central finite differences, costing `2n` residual evaluations.
    fn jacobian(
        &self,
        params: &Array1<f64>,
        residuals: &Array1<f64>,
        epsilon: f64,
    ) -> Result<Array2<f64>> {
        crate::utils::finite_difference::jacobian(self, params, residuals, epsilon)
    }

    /// Check if this problem provides a custom Jacobian implementation.
    ///
    /// The solver only uses this for evaluation accounting: a custom
    /// Jacobian is assumed to cost no residual evaluations.
    fn has_custom_jacobian(&self) -> bool {
        false
    }

    /// Euclidean norm of the residuals at the given parameters.
    fn residual_norm(&self, params: &Array1<f64>) -> Result<f64> {
        Ok(norm(&self.eval(params)?))
    }
}

/// Adapter that turns a residual closure into a [`Problem`].
///
/// ```
/// use lmsolve_rs::problem::{Problem, ResidualFn};
/// use ndarray::array;
///
/// let problem = ResidualFn::new(|x: &ndarray::Array1<f64>| array![x[0] - 1.0, x[1] + 2.0]);
/// let residuals = problem.eval(&array![1.0, -2.0]).unwrap();
/// assert_eq!(residuals, array![0.0, 0.0]);
/// ```
pub struct ResidualFn<F> {
    f: F,
}

impl<F> ResidualFn<F>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    /// Wrap a residual closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Problem for ResidualFn<F>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        Ok((self.f)(params))
    }
}
