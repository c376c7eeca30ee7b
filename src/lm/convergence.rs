//! Convergence criteria for the Levenberg-Marquardt driver.
//!
//! The driver is a small state machine: it starts `Running` and ends in one
//! of two terminal states. Only the residual norm decides convergence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Possible states of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergenceStatus {
    /// The algorithm is still running.
    Running,

    /// The residual norm fell below the tolerance.
    #[serde(rename = "Converged")]
    Converged,

    /// The iteration budget was exhausted without reaching the tolerance.
    #[serde(rename = "Max Iterations Reached")]
    MaxIterationsReached,
}

impl ConvergenceStatus {
    /// Returns true if the solve has terminated.
    pub fn is_terminated(&self) -> bool {
        !matches!(self, ConvergenceStatus::Running)
    }

    /// Returns true if the solve has converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceStatus::Converged)
    }

    /// The status tag as reported to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvergenceStatus::Running => "Running",
            ConvergenceStatus::Converged => "Converged",
            ConvergenceStatus::MaxIterationsReached => "Max Iterations Reached",
        }
    }
}

impl fmt::Display for ConvergenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria for determining when the solve stops.
#[derive(Debug, Clone)]
pub struct ConvergenceCriteria {
    /// Residual-norm threshold.
    pub tolerance: f64,

    /// Maximum number of iterations.
    pub max_iterations: usize,
}

impl Default for ConvergenceCriteria {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

impl ConvergenceCriteria {
    /// Creates a new set of convergence criteria.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Residual check made right after each pass records its snapshot.
    ///
    /// # Arguments
    ///
    /// * `f_norm` - The residual norm at the current parameters
    pub fn check_residual(&self, f_norm: f64) -> ConvergenceStatus {
        if f_norm < self.tolerance {
            ConvergenceStatus::Converged
        } else {
            ConvergenceStatus::Running
        }
    }

    /// Budget check made after each completed iteration.
    ///
    /// # Arguments
    ///
    /// * `iterations` - The number of completed iterations
    pub fn check_iterations(&self, iterations: usize) -> ConvergenceStatus {
        if iterations >= self.max_iterations {
            ConvergenceStatus::MaxIterationsReached
        } else {
            ConvergenceStatus::Running
        }
    }

    /// Terminal status from a freshly evaluated residual norm.
    ///
    /// This ignores how the loop exited: a run that used up its iterations but
    /// ended under the tolerance is `Converged`.
    pub fn final_status(&self, f_norm: f64) -> ConvergenceStatus {
        if f_norm < self.tolerance {
            ConvergenceStatus::Converged
        } else {
            ConvergenceStatus::MaxIterationsReached
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_criteria() {
        let criteria = ConvergenceCriteria::default();

        assert_eq!(criteria.check_residual(1e-9), ConvergenceStatus::Converged);
        assert_eq!(criteria.check_residual(1.0), ConvergenceStatus::Running);
        // NaN never converges
        assert_eq!(criteria.check_residual(f64::NAN), ConvergenceStatus::Running);

        assert_eq!(criteria.check_iterations(99), ConvergenceStatus::Running);
        assert_eq!(
            criteria.check_iterations(100),
            ConvergenceStatus::MaxIterationsReached
        );
        assert_eq!(
            ConvergenceCriteria::new(1e-8, 0).check_iterations(0),
            ConvergenceStatus::MaxIterationsReached
        );
    }

    #[test]
    fn test_final_status() {
        let criteria = ConvergenceCriteria::new(1e-3, 5);

        assert_eq!(criteria.final_status(1e-4), ConvergenceStatus::Converged);
        assert_eq!(
            criteria.final_status(1e-3),
            ConvergenceStatus::MaxIterationsReached
        );
        assert_eq!(
            criteria.final_status(f64::NAN),
            ConvergenceStatus::MaxIterationsReached
        );
    }

    #[test]
    fn test_convergence_status_methods() {
        assert!(!ConvergenceStatus::Running.is_terminated());
        assert!(ConvergenceStatus::Converged.is_terminated());
        assert!(ConvergenceStatus::MaxIterationsReached.is_terminated());

        assert!(ConvergenceStatus::Converged.is_converged());
        assert!(!ConvergenceStatus::MaxIterationsReached.is_converged());

        assert_eq!(ConvergenceStatus::Converged.to_string(), "Converged");
        assert_eq!(
            ConvergenceStatus::MaxIterationsReached.to_string(),
            "Max Iterations Reached"
        );
        assert_eq!(
            serde_json::to_string(&ConvergenceStatus::MaxIterationsReached).unwrap(),
            "\"Max Iterations Reached\""
        );
    }
}
