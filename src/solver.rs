//! Forward Euler method for numerical integration
//!
//! # Mathematical Form
//! ```text
//! s_{n+1} = s_n + h * f(s_n)
//! ```
//!
//! First-order, single-stage, explicit, fixed timestep. The cheapest method
//! per step and the least accurate, which is exactly what makes it useful
//! here: the external fixed-point reference implements the same rule, so any
//! divergence between the two trajectories comes from numeric representation
//! rather than from the integration scheme.

use crate::system::{LorenzParameters, State};
use crate::trajectory::Trajectory;

/// Explicit forward Euler stepper for the Lorenz system
///
/// The derivative is evaluated once per step at the pre-step state. No
/// component of the update sees another component's freshly computed value;
/// evaluating the components sequentially against updated values would be a
/// semi-implicit scheme and a different trajectory.
#[derive(Debug, Clone)]
pub struct Euler {
    state: State,
    dt: f64,
}

impl Euler {
    /// Create a new Euler stepper with the given initial state and timestep
    pub fn new(initial: State, dt: f64) -> Self {
        Self { state: initial, dt }
    }

    /// Get the current state
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Advance one step and return the new state
    pub fn step(&mut self, params: &LorenzParameters) -> State {
        let dot = params.derivatives(&self.state);
        self.state += dot * self.dt;
        self.state
    }
}

/// Integrate `steps` Euler steps from `initial`, recording every state
///
/// The returned trajectory has length `steps + 1`; index 0 is the initial
/// condition and index i+1 is derived from index i. Pure function of its
/// arguments: two invocations with identical inputs produce bit-identical
/// trajectories.
pub fn integrate(params: &LorenzParameters, initial: State, dt: f64, steps: usize) -> Trajectory {
    let mut solver = Euler::new(initial, dt);
    let mut trajectory = Trajectory::with_capacity(steps + 1);
    trajectory.push(initial);
    for _ in 0..steps {
        trajectory.push(solver.step(params));
    }
    trajectory
}
