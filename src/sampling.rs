// src/sampling.rs

use rand::Rng;
use tracing::info;

use crate::diffusion::evaluate_with;
use crate::error::DiffusionResult;
use crate::input::{ProblemParameters, SamplingSettings};

/// Draws `num_uncertainties` independent samples, uniform on `[-1, 1]`.
pub fn draw_uncertainties<R: Rng + ?Sized>(rng: &mut R, num_uncertainties: usize) -> Vec<f64> {
    (0..num_uncertainties)
        .map(|_| rng.gen_range(-1.0..=1.0))
        .collect()
}

/// Midpoint values of one diffusivity realization at a fine and a coarse resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiFidelitySample {
    pub high_fidelity: f64,
    pub low_fidelity: f64,
}

/// Evaluates the same realization `xi_uncertainties` on both grids of `settings`.
pub fn sample_multi_fidelity(
    params: &ProblemParameters,
    settings: &SamplingSettings,
    xi_uncertainties: &[f64],
) -> DiffusionResult<MultiFidelitySample> {
    settings.validate()?;
    let high_fidelity = evaluate_with(
        params,
        settings.high_fidelity_grid_points,
        settings.num_uncertainties,
        xi_uncertainties,
    )?;
    let low_fidelity = evaluate_with(
        params,
        settings.low_fidelity_grid_points,
        settings.num_uncertainties,
        xi_uncertainties,
    )?;
    info!(high_fidelity, low_fidelity, "multi-fidelity sample");
    Ok(MultiFidelitySample {
        high_fidelity,
        low_fidelity,
    })
}
