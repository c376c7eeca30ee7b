//! Curve-fitting problems.
//!
//! A curve fit turns observed data `(x_i, y_i)` and a model `f(x, p)` into
//! the residual problem `r_i(p) = f(x_i, p) - y_i`.

use ndarray::Array1;

use crate::error::{LmSolveError, Result};
use crate::problem::Problem;

mod polynomial;

pub use polynomial::PolynomialProblem;

/// Fits an arbitrary scalar model to data, using the finite-difference
/// Jacobian.
///
/// ```
/// use lmsolve_rs::models::CurveFitProblem;
/// use lmsolve_rs::LevenbergMarquardt;
/// use ndarray::{array, Array1};
///
/// let x = array![0.0, 1.0, 2.0, 3.0];
/// let y = x.mapv(|x: f64| 2.0 * x + 1.0);
/// let problem = CurveFitProblem::new(x, y, |x: f64, p: &Array1<f64>| p[0] * x + p[1]).unwrap();
///
/// let result = LevenbergMarquardt::new().minimize(&problem, array![0.0, 0.0]).unwrap();
/// assert!((result.solution[0] - 2.0).abs() < 1e-6);
/// ```
pub struct CurveFitProblem<F> {
    x_data: Array1<f64>,
    y_data: Array1<f64>,
    model: F,
}

impl<F> CurveFitProblem<F>
where
    F: Fn(f64, &Array1<f64>) -> f64,
{
    /// Create a new curve-fitting problem.
    ///
    /// # Arguments
    ///
    /// * `x_data` - The independent variable values
    /// * `y_data` - The observed values, same length as `x_data`
    /// * `model` - The model function `f(x, params)`
    pub fn new(x_data: Array1<f64>, y_data: Array1<f64>, model: F) -> Result<Self> {
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
            model,
        })
    }

    /// Evaluate the model at every x value.
    pub fn predict(&self, params: &Array1<f64>) -> Array1<f64> {
        self.x_data.mapv(|x| (self.model)(x, params))
    }
}

impl<F> Problem for CurveFitProblem<F>
where
    F: Fn(f64, &Array1<f64>) -> f64,
{
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        Ok(self.predict(params) - &self.y_data)
    }
}
