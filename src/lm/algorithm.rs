//! Implementation of the Levenberg-Marquardt algorithm.
//!
//! This module contains the iteration driver: Jacobian estimation, damped
//! normal equations, trust-region accept/reject and the final status check.

use std::fmt;

use log::{debug, info, trace, warn};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{LmSolveError, Result};
use crate::linalg::{add, norm};
use crate::problem::{Problem, ResidualFn};

use super::config::LmConfig;
use super::convergence::{ConvergenceCriteria, ConvergenceStatus};
use super::history::IterationRecord;
use super::step::LmStep;
use super::trust_region::TrustRegion;

/// Result of the Levenberg-Marquardt optimization.
///
/// Serializes with the keys `solution`, `status`, `iterationData`, `fNorm`,
/// `funcEvals` and `lambda`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LmResult {
    /// Final parameter values (the last accepted iterate)
    #[serde(with = "crate::utils::serde_array")]
    pub solution: Array1<f64>,

    /// Terminal status, from the post-loop residual check
    pub status: ConvergenceStatus,

    /// One record per loop pass, in execution order
    pub iteration_data: Vec<IterationRecord>,

    /// Residual norm at `solution`
    pub f_norm: f64,

    /// Number of residual function evaluations
    pub func_evals: usize,

    /// Damping parameter at exit
    pub lambda: f64,
}

impl LmResult {
    /// Whether the residual norm at the solution is below the tolerance.
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }

    /// Serialize the result to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for LmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimization Result:")?;
        writeln!(f, "  Status: {}", self.status)?;
        writeln!(f, "  Residual norm: {:.6e}", self.f_norm)?;
        writeln!(f, "  Iterations: {}", self.iteration_data.len())?;
        writeln!(f, "  Function evaluations: {}", self.func_evals)?;
        writeln!(f, "  Solution: {:?}", self.solution)?;
        Ok(())
    }
}

/// Wraps a problem, pinning the residual length to the first evaluation and
/// counting residual evaluations.
struct Evaluator<'a, P: Problem + ?Sized> {
    problem: &'a P,
    n_residuals: Option<usize>,
    func_evals: usize,
}

impl<'a, P: Problem + ?Sized> Evaluator<'a, P> {
    fn new(problem: &'a P) -> Self {
        Self {
            problem,
            n_residuals: None,
            func_evals: 0,
        }
    }

    fn eval(&mut self, params: &Array1<f64>) -> Result<Array1<f64>> {
        let residuals = self.problem.eval(params)?;
        self.func_evals += 1;

        match self.n_residuals {
            None => self.n_residuals = Some(residuals.len()),
            Some(m) if m != residuals.len() => {
                return Err(LmSolveError::DimensionMismatch(format!(
                    "Residual function returned {} values, expected {}",
                    residuals.len(),
                    m
                )));
            }
            Some(_) => {}
        }

        Ok(residuals)
    }

    fn jacobian(
        &mut self,
        params: &Array1<f64>,
        residuals: &Array1<f64>,
        epsilon: f64,
    ) -> Result<Array2<f64>> {
        let jacobian = self.problem.jacobian(params, residuals, epsilon)?;
        if !self.problem.has_custom_jacobian() {
            self.func_evals += 2 * params.len();
        }

        let expected = (residuals.len(), params.len());
        if jacobian.dim() != expected {
            return Err(LmSolveError::DimensionMismatch(format!(
                "Jacobian has shape {:?}, expected {:?}",
                jacobian.dim(),
                expected
            )));
        }

        Ok(jacobian)
    }
}

/// The Levenberg-Marquardt optimizer.
#[derive(Debug, Clone, Default)]
pub struct LevenbergMarquardt {
    /// Configuration options
    config: LmConfig,
}

impl LevenbergMarquardt {
    /// Create a new Levenberg-Marquardt optimizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Levenberg-Marquardt optimizer with the given configuration.
    pub fn with_config(config: LmConfig) -> Self {
        Self { config }
    }

    /// The configuration this optimizer runs with.
    pub fn config(&self) -> &LmConfig {
        &self.config
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the residual-norm convergence threshold.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the initial value for the damping parameter.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.config.initial_lambda = lambda;
        self
    }

    /// Set the finite-difference step for the Jacobian.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Minimize the residual norm of the given problem.
    ///
    /// Each pass records a snapshot, stops if the residual norm is below the
    /// tolerance, and otherwise tries one damped Gauss-Newton step. A step is
    /// kept only if it strictly lowers the residual norm; lambda is halved on
    /// accept and doubled on reject. After the loop the residual is evaluated
    /// once more and that norm alone decides the returned status.
    ///
    /// # Arguments
    ///
    /// * `problem` - The problem to solve
    /// * `initial_params` - Initial guess for the parameter values
    ///
    /// # Returns
    ///
    /// * `Result<LmResult>` - The result of the optimization. Errors are
    ///   reserved for invalid configuration, shape violations and residual
    ///   evaluation failures.
    pub fn minimize<P: Problem + ?Sized>(
        &self,
        problem: &P,
        initial_params: Array1<f64>,
    ) -> Result<LmResult> {
        self.config.validate()?;
        if initial_params.is_empty() {
            return Err(LmSolveError::DimensionMismatch(
                "Initial guess must contain at least one parameter".to_string(),
            ));
        }

        let criteria = ConvergenceCriteria::new(self.config.tolerance, self.config.max_iterations);
        let mut trust_region = TrustRegion::new(self.config.initial_lambda);
        let mut evaluator = Evaluator::new(problem);

        let mut params = initial_params;
        let mut history = Vec::new();
        let mut iterations = 0;
        let mut status = criteria.check_iterations(iterations);

        while !status.is_terminated() {
            let residuals = evaluator.eval(&params)?;
            let f_norm = norm(&residuals);
            history.push(IterationRecord::new(
                iterations,
                &params,
                f_norm,
                trust_region.lambda(),
            ));
            debug!(
                "iteration {}: |f| = {:.6e}, lambda = {:.3e}",
                iterations,
                f_norm,
                trust_region.lambda()
            );

            status = criteria.check_residual(f_norm);
            if status.is_terminated() {
                break;
            }

            let jacobian = evaluator.jacobian(&params, &residuals, self.config.epsilon)?;

            let accepted =
                match LmStep::calculate_step(&jacobian, &residuals, trust_region.lambda()) {
                    Ok(step) => {
                        let candidate = add(&params, &step)?;
                        let candidate_norm = norm(&evaluator.eval(&candidate)?);
                        let accepted = TrustRegion::accepts(f_norm, candidate_norm);
                        trace!(
                            "iteration {}: candidate |f| = {:.6e}, {}",
                            iterations,
                            candidate_norm,
                            if accepted { "accepted" } else { "rejected" }
                        );
                        if accepted {
                            params = candidate;
                        }
                        accepted
                    }
                    Err(LmSolveError::SingularMatrix) => {
                        warn!(
                            "iteration {}: damped normal equations are singular at lambda = {:.3e}, rejecting step",
                            iterations,
                            trust_region.lambda()
                        );
                        false
                    }
                    Err(err) => return Err(err),
                };
            trust_region.update_lambda(accepted);

            iterations += 1;
            status = criteria.check_iterations(iterations);
        }

        let f_norm = norm(&evaluator.eval(&params)?);
        let final_status = criteria.final_status(f_norm);
        if final_status != status {
            debug!(
                "loop exited as {} but final residual check reports {}",
                status, final_status
            );
        }

        info!(
            "{} after {} passes: |f| = {:.6e}, {} function evaluations",
            final_status,
            history.len(),
            f_norm,
            evaluator.func_evals
        );

        Ok(LmResult {
            solution: params,
            status: final_status,
            iteration_data: history,
            f_norm,
            func_evals: evaluator.func_evals,
            lambda: trust_region.lambda(),
        })
    }
}

/// Solve `residual_fn(x) = 0` in the least-squares sense with the default
/// configuration (100 iterations, tolerance 1e-8, lambda 1e-3, epsilon 1e-8).
///
/// ```
/// use lmsolve_rs::{solve, ConvergenceStatus};
/// use ndarray::{array, Array1};
///
/// let equations = |v: &Array1<f64>| array![v[0] + 2.0 * v[1] - 5.0, 3.0 * v[0] + 4.0 * v[1] - 11.0];
/// let result = solve(equations, array![0.0, 0.0]).unwrap();
///
/// assert_eq!(result.status, ConvergenceStatus::Converged);
/// assert!((result.solution[0] - 1.0).abs() < 1e-6);
/// assert!((result.solution[1] - 2.0).abs() < 1e-6);
/// ```
pub fn solve<F>(residual_fn: F, initial_guess: Array1<f64>) -> Result<LmResult>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    solve_with_config(residual_fn, initial_guess, LmConfig::default())
}

/// [`solve`] with explicit options.
pub fn solve_with_config<F>(
    residual_fn: F,
    initial_guess: Array1<f64>,
    config: LmConfig,
) -> Result<LmResult>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    LevenbergMarquardt::with_config(config).minimize(&ResidualFn::new(residual_fn), initial_guess)
}
