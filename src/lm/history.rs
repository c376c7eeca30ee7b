//! Per-iteration snapshots recorded by the driver.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Immutable snapshot taken at the start of every loop pass, before the
/// accept/reject decision for that pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationRecord {
    /// Zero-based pass index
    pub iter: usize,

    /// Copy of the parameters evaluated in this pass
    #[serde(with = "crate::utils::serde_array")]
    pub x: Array1<f64>,

    /// Residual norm at `x`
    pub f_norm: f64,

    /// Damping parameter in effect for this pass
    pub lambda: f64,
}

impl IterationRecord {
    pub fn new(iter: usize, x: &Array1<f64>, f_norm: f64, lambda: f64) -> Self {
        Self {
            iter,
            x: x.clone(),
            f_norm,
            lambda,
        }
    }
}
