//! Levenberg-Marquardt algorithm implementation.
//!
//! The driver in [`algorithm`] repeatedly estimates the Jacobian, solves the
//! damped normal equations for a step ([`step`]), and keeps or discards the
//! step depending on whether it lowers the residual norm ([`trust_region`]).

pub mod algorithm;
pub mod config;
pub mod convergence;
pub mod history;
pub mod step;
pub mod trust_region;

// Re-export key types
pub use algorithm::{solve, solve_with_config, LevenbergMarquardt, LmResult};
pub use config::LmConfig;
pub use convergence::{ConvergenceCriteria, ConvergenceStatus};
pub use history::IterationRecord;
pub use step::LmStep;
pub use trust_region::TrustRegion;
