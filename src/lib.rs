//! DriftSim - Lorenz trajectory divergence analysis
//!
//! Simulates the Lorenz system with fixed-step forward Euler integration in
//! double precision and quantifies how far the resulting trajectory drifts
//! from a reference trajectory produced by an external fixed-point
//! implementation of the same equations. Divergence between the two numeric
//! representations is measured, never corrected.
//!
//! # Pipeline
//!
//! ```rust,ignore
//! use driftsim::prelude::*;
//!
//! let config = RunConfig::default();
//! let computed = integrate(&config.parameters, config.initial_state(), config.dt, config.steps);
//! let reference = load_trajectory(&config.reference.x, &config.reference.y, &config.reference.z)?;
//!
//! // Reference index k corresponds to computed index k + 1.
//! let window = align(&computed, &reference, config.window.start..config.window.end);
//! let errors = error_series(window.computed(), window.reference())?;
//! ```

pub mod align;
pub mod analysis;
pub mod config;
pub mod io;
pub mod report;
pub mod solver;
pub mod system;
pub mod trajectory;

pub use align::{align, AlignedWindow};
pub use analysis::{error_series, AnalysisError, ErrorSeries};
pub use config::{ConfigError, RunConfig};
pub use io::{load_series, load_trajectory, write_series, write_trajectory, LoadError};
pub use solver::{integrate, Euler};
pub use system::{LorenzParameters, State};
pub use trajectory::{Axis, Trajectory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::align::{align, AlignedWindow};
    pub use crate::analysis::{error_series, AnalysisError, ErrorSeries};
    pub use crate::config::{ConfigError, RunConfig, SeriesPaths, WindowConfig};
    pub use crate::io::{load_series, load_trajectory, write_series, write_trajectory, LoadError};
    pub use crate::report::write_comparison_csv;
    pub use crate::solver::{integrate, Euler};
    pub use crate::system::{LorenzParameters, State};
    pub use crate::trajectory::{Axis, Trajectory};
}
