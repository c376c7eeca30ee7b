//! Integration tests for the lmsolve-rs library
//!
//! This module organizes integration tests that exercise the library as a
//! whole, rather than individual components.

// Curve fitting with closures, polynomial problems and noisy data
pub mod curve_fitting;
