//! Lorenz divergence analysis pipeline
//!
//! Integrates the Lorenz system with forward Euler in double precision,
//! persists the computed trajectory, loads the external fixed-point
//! reference trajectory, aligns the two, and reports per-axis divergence
//! over the configured window.

use std::env;
use std::error::Error;

use log::info;

use driftsim::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => RunConfig::from_json_file(&path)?,
        None => RunConfig::default(),
    };

    info!(
        "integrating {} Euler steps from ({}, {}, {}) with dt = {}",
        config.steps, config.initial[0], config.initial[1], config.initial[2], config.dt
    );
    let computed = integrate(
        &config.parameters,
        config.initial_state(),
        config.dt,
        config.steps,
    );

    write_trajectory(
        &computed,
        &config.output.x,
        &config.output.y,
        &config.output.z,
    )?;
    info!(
        "computed trajectory ({} samples) written to {}, {}, {}",
        computed.len(),
        config.output.x.display(),
        config.output.y.display(),
        config.output.z.display()
    );

    let reference = load_trajectory(&config.reference.x, &config.reference.y, &config.reference.z)?;
    info!("reference trajectory loaded: {} samples", reference.len());

    let window = align(
        &computed,
        &reference,
        config.window.start..config.window.end,
    );
    info!(
        "aligned window [{}, {}) selected ({} samples)",
        window.steps().start,
        window.steps().end,
        window.len()
    );

    let errors = error_series(window.computed(), window.reference())?;
    for axis in Axis::ALL {
        info!(
            "{} divergence: max |err| = {:.6e}, rms = {:.6e}",
            axis.as_str(),
            errors.max_abs(axis),
            errors.rms(axis)
        );
    }

    write_comparison_csv(&config.report, &window, &errors)?;
    info!("comparison report written to {}", config.report.display());

    Ok(())
}
