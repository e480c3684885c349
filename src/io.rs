//! Trajectory persistence
//!
//! The on-disk format is transport-neutral text: three files per trajectory,
//! one per axis, one decimal value per line. The external fixed-point
//! implementation emits the same format, so both trajectories load through
//! the same path.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::trajectory::{Axis, Trajectory};

/// Errors raised while loading a scalar series from a text source
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input source does not exist. Fatal; there is nothing to retry.
    #[error("input series not found: {path}")]
    NotFound { path: PathBuf },

    /// A line is not a valid real number. The whole load aborts; no partial
    /// trajectory is returned.
    #[error("{path}:{line}: not a real number: {content:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load one newline-delimited scalar series
///
/// Blank lines are skipped, matching the behavior of the numpy `loadtxt`
/// consumer of this format.
pub fn load_series(path: impl AsRef<Path>) -> Result<Vec<f64>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let reader = BufReader::new(file);
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: f64 = trimmed.parse().map_err(|_| LoadError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.clone(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Load a trajectory from three per-axis series files
///
/// Series of differing length are truncated to the shortest common length.
pub fn load_trajectory(
    x_path: impl AsRef<Path>,
    y_path: impl AsRef<Path>,
    z_path: impl AsRef<Path>,
) -> Result<Trajectory, LoadError> {
    let x = load_series(x_path)?;
    let y = load_series(y_path)?;
    let z = load_series(z_path)?;
    Ok(Trajectory::from_axes(&x, &y, &z))
}

/// Write one scalar series, one value per line with 6 fraction digits
///
/// Reloading via [`load_series`] reproduces each value within 5e-7 absolute
/// error from the formatting alone.
pub fn write_series(path: impl AsRef<Path>, values: &[f64]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for v in values {
        writeln!(writer, "{v:.6}")?;
    }
    writer.flush()
}

/// Serialize a trajectory to three per-axis series files
pub fn write_trajectory(
    trajectory: &Trajectory,
    x_path: impl AsRef<Path>,
    y_path: impl AsRef<Path>,
    z_path: impl AsRef<Path>,
) -> io::Result<()> {
    write_series(x_path, &trajectory.axis(Axis::X))?;
    write_series(y_path, &trajectory.axis(Axis::Y))?;
    write_series(z_path, &trajectory.axis(Axis::Z))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("driftsim_io_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_series_missing_file() {
        let err = load_series(temp_path("does_not_exist.txt")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_load_series_parse_error_reports_line() {
        let path = temp_path("bad_line.txt");
        fs::write(&path, "1.5\n2.5\nnot-a-number\n").unwrap();

        let err = load_series(&path).unwrap_err();
        match err {
            LoadError::Parse { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_series_skips_blank_lines() {
        let path = temp_path("blank_lines.txt");
        fs::write(&path, "1.0\n\n  \n-2.5\n").unwrap();

        let values = load_series(&path).unwrap();
        assert_eq!(values, vec![1.0, -2.5]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_series_fixed_precision() {
        let path = temp_path("precision.txt");
        write_series(&path, &[-0.95703125, 24.739153645833332]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "-0.957031\n24.739154\n");

        let _ = fs::remove_file(&path);
    }
}
