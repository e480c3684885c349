//! Divergence measurement between aligned trajectories

use thiserror::Error;

use crate::trajectory::{Axis, Trajectory};

/// Errors raised by trajectory comparison
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The inputs were not produced by the aligner. A caller bug, never
    /// silently coerced by truncation.
    #[error("aligned series length mismatch: computed has {computed} samples, reference has {reference}")]
    LengthMismatch { computed: usize, reference: usize },
}

/// Per-axis elementwise differences (computed - reference) at aligned indices
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSeries {
    diffs: Trajectory,
}

impl ErrorSeries {
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// The difference states themselves
    pub fn diffs(&self) -> &Trajectory {
        &self.diffs
    }

    /// Difference series for one axis
    pub fn axis(&self, axis: Axis) -> Vec<f64> {
        self.diffs.axis(axis)
    }

    /// Largest absolute deviation on one axis, 0.0 for an empty series
    pub fn max_abs(&self, axis: Axis) -> f64 {
        self.diffs
            .iter()
            .map(|d| axis.component(d).abs())
            .fold(0.0, f64::max)
    }

    /// Root-mean-square deviation on one axis, 0.0 for an empty series
    pub fn rms(&self, axis: Axis) -> f64 {
        if self.diffs.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self
            .diffs
            .iter()
            .map(|d| {
                let v = axis.component(d);
                v * v
            })
            .sum();
        (sum_sq / self.diffs.len() as f64).sqrt()
    }
}

/// Compute the elementwise difference series between two aligned windows
///
/// Both inputs must come from the aligner and therefore have equal length;
/// anything else indicates the alignment step was bypassed.
pub fn error_series(
    computed: &Trajectory,
    reference: &Trajectory,
) -> Result<ErrorSeries, AnalysisError> {
    if computed.len() != reference.len() {
        return Err(AnalysisError::LengthMismatch {
            computed: computed.len(),
            reference: reference.len(),
        });
    }

    let diffs = computed
        .iter()
        .zip(reference.iter())
        .map(|(c, r)| c - r)
        .collect();
    Ok(ErrorSeries { diffs })
}
