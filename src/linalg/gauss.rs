//! Gaussian elimination with partial pivoting for dense square systems.

use ndarray::{Array1, Array2};

use crate::error::{LmSolveError, Result};

/// Solves `A x = b` for a dense square `A`.
///
/// Works on copies of `a` and `b`; the inputs are not modified. At column `i`
/// the row with the largest absolute value in that column (among rows
/// `i..n`) is swapped into place before elimination. A zero or non-finite
/// pivot means the system cannot be solved and yields
/// [`LmSolveError::SingularMatrix`].
pub fn solve_linear_system(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LmSolveError::DimensionMismatch(format!(
            "Expected a square matrix, got {}x{}",
            n,
            a.ncols()
        )));
    }
    if b.len() != n {
        return Err(LmSolveError::DimensionMismatch(format!(
            "Right-hand side has length {}, expected {}",
            b.len(),
            n
        )));
    }

    let mut a = a.to_owned();
    let mut b = b.to_owned();

    // Forward elimination
    for i in 0..n {
        let pivot_row = ((i + 1)..n).fold(i, |best, j| {
            if a[[j, i]].abs() > a[[best, i]].abs() {
                j
            } else {
                best
            }
        });

        if pivot_row != i {
            for k in 0..n {
                a.swap([i, k], [pivot_row, k]);
            }
            b.swap(i, pivot_row);
        }

        let pivot = a[[i, i]];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(LmSolveError::SingularMatrix);
        }

        for j in (i + 1)..n {
            let factor = a[[j, i]] / pivot;
            let b_i = b[i];
            b[j] -= factor * b_i;
            for k in i..n {
                let a_ik = a[[i, k]];
                a[[j, k]] -= factor * a_ik;
            }
        }
    }

    // Back substitution
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = ((i + 1)..n).map(|j| a[[i, j]] * x[j]).sum();
        x[i] = (b[i] - sum) / a[[i, i]];
    }

    Ok(x)
}
