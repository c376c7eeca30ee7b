//! Dense vector and matrix primitives.
//!
//! These are the small building blocks the Levenberg-Marquardt driver uses to
//! assemble and solve the damped normal equations. All of them work on
//! `ndarray` containers and report shape violations as
//! [`LmSolveError::DimensionMismatch`] instead of silently truncating.

use ndarray::{Array1, Array2};

use crate::error::{LmSolveError, Result};

pub mod gauss;

pub use gauss::solve_linear_system;

/// Euclidean (L2) norm of a vector.
pub fn norm(v: &Array1<f64>) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Returns the transpose of a matrix as a new owned matrix.
pub fn transpose(m: &Array2<f64>) -> Array2<f64> {
    m.t().to_owned()
}

/// Matrix multiplication overloaded on the rank of the right-hand side.
///
/// Multiplying by an `Array1` yields a vector, multiplying by an `Array2`
/// yields the standard matrix product.
pub trait Multiply<Rhs> {
    /// The product type.
    type Output;

    /// Computes `self * rhs`, failing if the inner dimensions disagree.
    fn multiply(&self, rhs: &Rhs) -> Result<Self::Output>;
}

impl Multiply<Array1<f64>> for Array2<f64> {
    type Output = Array1<f64>;

    fn multiply(&self, rhs: &Array1<f64>) -> Result<Array1<f64>> {
        if self.ncols() != rhs.len() {
            return Err(LmSolveError::DimensionMismatch(format!(
                "Cannot multiply {}x{} matrix by vector of length {}",
                self.nrows(),
                self.ncols(),
                rhs.len()
            )));
        }
        Ok(self.dot(rhs))
    }
}

impl Multiply<Array2<f64>> for Array2<f64> {
    type Output = Array2<f64>;

    fn multiply(&self, rhs: &Array2<f64>) -> Result<Array2<f64>> {
        if self.ncols() != rhs.nrows() {
            return Err(LmSolveError::DimensionMismatch(format!(
                "Cannot multiply {}x{} matrix by {}x{} matrix",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            )));
        }
        Ok(self.dot(rhs))
    }
}

/// Free-function form of [`Multiply::multiply`].
pub fn multiply<B>(a: &Array2<f64>, b: &B) -> Result<<Array2<f64> as Multiply<B>>::Output>
where
    Array2<f64>: Multiply<B>,
{
    a.multiply(b)
}

/// Returns a copy of the square matrix `m` with `lambda` added to every
/// diagonal entry.
pub fn add_lambda_to_diagonal(m: &Array2<f64>, lambda: f64) -> Result<Array2<f64>> {
    if m.nrows() != m.ncols() {
        return Err(LmSolveError::DimensionMismatch(format!(
            "Expected a square matrix, got {}x{}",
            m.nrows(),
            m.ncols()
        )));
    }

    let mut damped = m.clone();
    damped.diag_mut().mapv_inplace(|d| d + lambda);
    Ok(damped)
}

/// Elementwise negation.
pub fn negate(v: &Array1<f64>) -> Array1<f64> {
    v.mapv(|x| -x)
}

/// Elementwise sum of two vectors of equal length.
pub fn add(a: &Array1<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    if a.len() != b.len() {
        return Err(LmSolveError::DimensionMismatch(format!(
            "Cannot add vectors of length {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a + b)
}
