//! # lmsolve-rs
//!
//! `lmsolve-rs` is a small Levenberg-Marquardt solver for nonlinear
//! least-squares problems and systems of nonlinear equations.
//!
//! The library provides:
//! - A damped Gauss-Newton driver with halve-on-accept / double-on-reject damping
//! - Central finite-difference Jacobians, with optional analytic Jacobians
//! - Dense linear algebra primitives and Gaussian elimination with partial pivoting
//! - Curve-fitting problem adapters
//!
//! ## Basic Usage
//!
//! ```
//! use lmsolve_rs::{solve, ConvergenceStatus};
//! use ndarray::{array, Array1};
//!
//! // x^2 + y^2 = 4, x^2 + y = 3
//! let equations = |v: &Array1<f64>| {
//!     array![v[0].powi(2) + v[1].powi(2) - 4.0, v[0].powi(2) + v[1] - 3.0]
//! };
//!
//! let result = solve(equations, array![1.0, 1.0]).unwrap();
//! assert_eq!(result.status, ConvergenceStatus::Converged);
//! assert_eq!(result.solution.len(), 2);
//! ```

// Public modules
pub mod error;
pub mod linalg;
pub mod lm;
pub mod models;
pub mod problem;
pub mod utils;

// Re-exports for convenience
pub use error::{LmSolveError, Result};
pub use lm::{
    solve, solve_with_config, ConvergenceStatus, IterationRecord, LevenbergMarquardt, LmConfig,
    LmResult,
};
pub use problem::{Problem, ResidualFn};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
