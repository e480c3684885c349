//! Comparison report export
//!
//! CSV hand-off consumed by external plotting tools: one row per aligned
//! step, with computed, reference, and difference columns per axis. Enough
//! to render the computed-only, overlay, and difference views without
//! re-deriving the alignment.

use std::path::Path;

use crate::align::AlignedWindow;
use crate::analysis::ErrorSeries;
use crate::trajectory::Axis;

/// Write the aligned comparison to a CSV file
///
/// # CSV Format
///
/// ```csv
/// step,x_float,x_fixed,x_diff,y_float,y_fixed,y_diff,z_float,z_fixed,z_diff
/// 0,-0.957031,-0.957031,0.000000015,...
/// ```
///
/// # Panics
///
/// Panics if `errors` was not derived from `window` (length mismatch).
pub fn write_comparison_csv(
    path: impl AsRef<Path>,
    window: &AlignedWindow,
    errors: &ErrorSeries,
) -> csv::Result<()> {
    assert_eq!(
        errors.len(),
        window.len(),
        "error series must be derived from the same aligned window"
    );

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["step".to_string()];
    for axis in Axis::ALL {
        header.push(format!("{}_float", axis.as_str()));
        header.push(format!("{}_fixed", axis.as_str()));
        header.push(format!("{}_diff", axis.as_str()));
    }
    writer.write_record(&header)?;

    for (offset, step) in window.steps().enumerate() {
        let computed = &window.computed()[offset];
        let reference = &window.reference()[offset];
        let diff = &errors.diffs()[offset];

        let mut record = vec![step.to_string()];
        for axis in Axis::ALL {
            record.push(axis.component(computed).to_string());
            record.push(axis.component(reference).to_string());
            record.push(axis.component(diff).to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
