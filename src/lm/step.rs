//! Step calculation for the Levenberg-Marquardt algorithm.
//!
//! The step solves the damped normal equations
//! `(J^T J + lambda I) step = -J^T f`.

use crate::error::Result;
use crate::linalg::{add_lambda_to_diagonal, multiply, negate, solve_linear_system, transpose};
use ndarray::{Array1, Array2};

/// Handles step calculation for the Levenberg-Marquardt algorithm.
pub struct LmStep;

impl LmStep {
    /// Calculates the Levenberg-Marquardt step.
    ///
    /// # Arguments
    ///
    /// * `jacobian` - The `m x n` Jacobian at the current position
    /// * `residuals` - The length-`m` residuals at the current position
    /// * `lambda` - The damping added to the diagonal of `J^T J`
    ///
    /// # Returns
    ///
    /// * The length-`n` step, or `SingularMatrix` if the damped system has a
    ///   zero or non-finite pivot
    pub fn calculate_step(
        jacobian: &Array2<f64>,
        residuals: &Array1<f64>,
        lambda: f64,
    ) -> Result<Array1<f64>> {
        let j_t = transpose(jacobian);
        let j_t_j = multiply(&j_t, jacobian)?;
        let j_t_f = multiply(&j_t, residuals)?;

        let damped = add_lambda_to_diagonal(&j_t_j, lambda)?;
        solve_linear_system(&damped, &negate(&j_t_f))
    }
}
