//! Run configuration
//!
//! One `RunConfig` describes a full simulation-and-comparison run. Defaults
//! reproduce the canonical scenario the fixed-point reference implementation
//! was generated with.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::system::{LorenzParameters, State};

/// Errors raised while reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Paths of the three per-axis series files of one trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPaths {
    pub x: PathBuf,
    pub y: PathBuf,
    pub z: PathBuf,
}

impl SeriesPaths {
    pub fn new(x: impl Into<PathBuf>, y: impl Into<PathBuf>, z: impl Into<PathBuf>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

/// Requested comparison window [start, end) in aligned step indices
///
/// Signed and unclamped; the aligner clamps it to the common trajectory
/// length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowConfig {
    pub start: i64,
    pub end: i64,
}

/// Full configuration for one simulation-and-comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Initial state (x0, y0, z0); element 0 of the computed trajectory
    pub initial: [f64; 3],
    pub parameters: LorenzParameters,
    /// Fixed integration timestep
    pub dt: f64,
    /// Number of Euler steps; the computed trajectory has `steps + 1` entries
    pub steps: usize,
    pub window: WindowConfig,
    /// Reference (fixed-point) trajectory inputs
    pub reference: SeriesPaths,
    /// Computed trajectory outputs
    pub output: SeriesPaths,
    /// Comparison report (CSV) output
    pub report: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            initial: [-1.0, 0.1, 25.0],
            parameters: LorenzParameters::default(),
            dt: 1.0 / 256.0,
            steps: 10_000,
            window: WindowConfig {
                start: 0,
                end: 10_000,
            },
            reference: SeriesPaths::new("x.txt", "y.txt", "z.txt"),
            output: SeriesPaths::new("x_float.txt", "y_float.txt", "z_float.txt"),
            report: PathBuf::from("comparison.csv"),
        }
    }
}

impl RunConfig {
    /// The initial condition as a state vector
    pub fn initial_state(&self) -> State {
        State::new(self.initial[0], self.initial[1], self.initial[2])
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_matches_reference_scenario() {
        let config = RunConfig::default();

        assert_eq!(config.initial_state(), State::new(-1.0, 0.1, 25.0));
        assert_relative_eq!(config.dt, 1.0 / 256.0);
        assert_eq!(config.steps, 10_000);
        assert_relative_eq!(config.parameters.beta, 8.0 / 3.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"steps": 500, "window": {"start": 10, "end": 60}}"#).unwrap();

        assert_eq!(config.steps, 500);
        assert_eq!(config.window.start, 10);
        assert_eq!(config.window.end, 60);
        // Untouched fields keep the canonical scenario.
        assert_eq!(config.initial, [-1.0, 0.1, 25.0]);
        assert_eq!(config.reference.x, PathBuf::from("x.txt"));
    }
}
