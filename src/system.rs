//! Lorenz system definition
//!
//! The Lorenz equations:
//!
//! ```text
//! dx/dt = σ(y - x)
//! dy/dt = x(ρ - z) - y
//! dz/dt = xy - βz
//! ```
//!
//! Classical chaotic behavior occurs at σ=10, ρ=28, β=8/3.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Dynamical state (x, y, z) in phase space
///
/// Every step produces a fresh value; states are never mutated in place once
/// recorded in a trajectory.
pub type State = Vector3<f64>;

/// Parameters of the Lorenz equations, constant for one integration run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParameters {
    /// σ, the Prandtl number
    pub sigma: f64,
    /// ρ, the Rayleigh number
    pub rho: f64,
    /// β, the geometric factor
    pub beta: f64,
}

impl Default for LorenzParameters {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl LorenzParameters {
    /// Create parameters for a single run
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }

    /// Evaluate the right-hand side of the Lorenz equations at `s`
    ///
    /// All three components are functions of `s` alone; the caller decides
    /// how the derivative enters the update rule.
    pub fn derivatives(&self, s: &State) -> State {
        Vector3::new(
            self.sigma * (s.y - s.x),
            s.x * (self.rho - s.z) - s.y,
            s.x * s.y - self.beta * s.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let p = LorenzParameters::default();
        assert_relative_eq!(p.sigma, 10.0);
        assert_relative_eq!(p.rho, 28.0);
        assert_relative_eq!(p.beta, 8.0 / 3.0);
    }

    #[test]
    fn test_derivatives_at_classic_point() {
        let p = LorenzParameters::default();
        let dot = p.derivatives(&State::new(1.0, 1.0, 1.0));

        // dx = 10*(1-1), dy = 1*(28-1)-1, dz = 1*1 - (8/3)*1
        assert_relative_eq!(dot.x, 0.0);
        assert_relative_eq!(dot.y, 26.0);
        assert_relative_eq!(dot.z, 1.0 - 8.0 / 3.0);
    }

    #[test]
    fn test_derivatives_fixed_point_origin() {
        // The origin is an equilibrium of the Lorenz system
        let p = LorenzParameters::default();
        let dot = p.derivatives(&State::zeros());
        assert_relative_eq!(dot.norm(), 0.0);
    }
}
