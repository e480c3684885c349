//! Trajectory storage and per-axis views

use std::ops::{Index, Range};

use crate::system::State;

/// Phase-space axis label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in (x, y, z) order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Extract this axis' component from a state
    pub fn component(&self, s: &State) -> f64 {
        match self {
            Axis::X => s.x,
            Axis::Y => s.y,
            Axis::Z => s.z,
        }
    }
}

/// Ordered, finite sequence of states, indexed from 0
///
/// Grown once during integration or loading and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            states: Vec::with_capacity(n),
        }
    }

    /// Build a trajectory from three parallel scalar series
    ///
    /// Ragged inputs are silently truncated to the shortest length; differing
    /// source lengths are a policy of the textual format, not an error.
    pub fn from_axes(x: &[f64], y: &[f64], z: &[f64]) -> Self {
        let len = x.len().min(y.len()).min(z.len());
        let states = (0..len)
            .map(|i| State::new(x[i], y[i], z[i]))
            .collect();
        Self { states }
    }

    pub fn push(&mut self, s: State) {
        self.states.push(s);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Scalar series for one axis
    pub fn axis(&self, axis: Axis) -> Vec<f64> {
        self.states.iter().map(|s| axis.component(s)).collect()
    }

    /// Copy of the sub-sequence over `range`
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds, like slice indexing.
    pub fn slice(&self, range: Range<usize>) -> Trajectory {
        Self {
            states: self.states[range].to_vec(),
        }
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}

impl FromIterator<State> for Trajectory {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
