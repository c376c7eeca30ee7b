//! Polynomial least-squares fitting with an analytic Jacobian.

use ndarray::{Array1, Array2};

use crate::error::{LmSolveError, Result};
use crate::linalg::{multiply, solve_linear_system, transpose};
use crate::problem::Problem;

/// Fits a polynomial of fixed degree to data.
///
/// The polynomial is
///
/// f(x) = c[0] + c[1]*x + c[2]*x^2 + ... + c[d]*x^d
///
/// so the parameter vector holds `d + 1` coefficients, lowest power first.
/// The Jacobian is exact: `J[i][k] = x_i^k`.
pub struct PolynomialProblem {
    x_data: Array1<f64>,
    y_data: Array1<f64>,
    degree: usize,
}

impl PolynomialProblem {
    /// Create a new polynomial fitting problem.
    pub fn new(x_data: Array1<f64>, y_data: Array1<f64>, degree: usize) -> Result<Self> {
        if x_data.len() != y_data.len() {
            return Err(LmSolveError::DimensionMismatch(format!(
                "x data has {} points but y data has {}",
                x_data.len(),
                y_data.len()
            )));
        }
        Ok(Self {
            x_data,
            y_data,
            degree,
        })
    }

    /// Number of coefficients (`degree + 1`).
    pub fn parameter_count(&self) -> usize {
        self.degree + 1
    }

    /// Evaluate the polynomial with coefficients `params` at `x` (Horner).
    pub fn evaluate(params: &Array1<f64>, x: f64) -> f64 {
        params.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Vandermonde matrix `V[i][k] = x_i^k`.
    fn vandermonde(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.x_data.len(), self.degree + 1), |(i, k)| {
            self.x_data[i].powi(k as i32)
        })
    }

    /// Linear least-squares coefficients from the normal equations
    /// `V^T V c = V^T y`, useful as a starting point.
    pub fn initial_guess(&self) -> Result<Array1<f64>> {
        let v = self.vandermonde();
        let v_t = transpose(&v);
        let v_t_v = multiply(&v_t, &v)?;
        let v_t_y = multiply(&v_t, &self.y_data)?;
        solve_linear_system(&v_t_v, &v_t_y)
    }

    fn check_params(&self, params: &Array1<f64>) -> Result<()> {
        if params.len() != self.parameter_count() {
            return Err(LmSolveError::DimensionMismatch(format!(
                "Expected {} coefficients, got {}",
                self.parameter_count(),
                params.len()
            )));
        }
        Ok(())
    }
}

impl Problem for PolynomialProblem {
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        self.check_params(params)?;
        Ok(self.x_data.mapv(|x| Self::evaluate(params, x)) - &self.y_data)
    }

    fn jacobian(
        &self,
        params: &Array1<f64>,
        _residuals: &Array1<f64>,
        _epsilon: f64,
    ) -> Result<Array2<f64>> {
        self.check_params(params)?;
        Ok(self.vandermonde())
    }

    fn has_custom_jacobian(&self) -> bool {
        true
    }
}
