//! Configuration options for the Levenberg-Marquardt algorithm.
//!
//! `LmConfig` carries the four recognised solver options. It can be built in
//! code, or loaded from JSON where any omitted field keeps its default.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LmSolveError, Result};
use crate::utils::DEFAULT_EPSILON;

/// Configuration options for the Levenberg-Marquardt algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LmConfig {
    /// Maximum number of iterations. Default: 100
    pub max_iterations: usize,

    /// Residual-norm threshold below which the solve has converged. Default: 1e-8
    pub tolerance: f64,

    /// Initial value for the damping parameter. Default: 1e-3
    pub initial_lambda: f64,

    /// Step used for the finite-difference Jacobian. Default: 1e-8
    pub epsilon: f64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-8,
            initial_lambda: 1e-3,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl LmConfig {
    /// Checks that every option is usable by the solver.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_lambda > 0.0 && self.initial_lambda.is_finite()) {
            return Err(LmSolveError::InvalidParameter(format!(
                "initial_lambda must be positive and finite, got {}",
                self.initial_lambda
            )));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(LmSolveError::InvalidParameter(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.tolerance >= 0.0) {
            return Err(LmSolveError::InvalidParameter(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LmConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Save the configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
