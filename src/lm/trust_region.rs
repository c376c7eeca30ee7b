//! Damping control for the Levenberg-Marquardt algorithm.
//!
//! The damping parameter is halved after every accepted step (more
//! Gauss-Newton-like) and doubled after every rejected one (more
//! gradient-descent-like). It stays strictly positive and finite.

/// Damping state for one solve.
#[derive(Debug, Clone)]
pub struct TrustRegion {
    lambda: f64,
}

impl TrustRegion {
    /// Creates a new TrustRegion with the given initial damping.
    pub fn new(initial_lambda: f64) -> Self {
        Self {
            lambda: initial_lambda,
        }
    }

    /// Current damping parameter.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Updates the damping parameter after an accept/reject decision.
    pub fn update_lambda(&mut self, accepted: bool) {
        if accepted {
            self.lambda = (self.lambda / 2.0).max(f64::MIN_POSITIVE);
        } else {
            self.lambda = (self.lambda * 2.0).min(f64::MAX);
        }
    }

    /// Trust-region acceptance test: the candidate must strictly reduce the
    /// residual norm. A NaN candidate norm is always rejected.
    pub fn accepts(current_norm: f64, candidate_norm: f64) -> bool {
        candidate_norm < current_norm
    }
}
