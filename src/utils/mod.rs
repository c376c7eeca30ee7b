//! Utility functions and helpers for the lmsolve-rs library.

pub mod finite_difference;
pub mod serde_array;

pub use finite_difference::{jacobian, DEFAULT_EPSILON};
