// src/diffusion/solver.rs

use nalgebra::DVector;
use tracing::{debug, debug_span};

use crate::diffusion::coefficient::stochastic_diffusivity;
use crate::diffusion::grid::{check_grid_points, forcing_terms, uniform_grid};
use crate::error::{DiffusionError, DiffusionResult};
use crate::input::ProblemParameters;
use crate::utils::build_diffusion_system;

fn check_inputs(
    params: &ProblemParameters,
    num_grid_points: usize,
    num_uncertainties: usize,
    xi_uncertainties: &[f64],
) -> DiffusionResult<()> {
    check_grid_points(num_grid_points)?;
    if xi_uncertainties.len() != num_uncertainties {
        return Err(DiffusionError::UncertaintyCountMismatch {
            expected: num_uncertainties,
            actual: xi_uncertainties.len(),
        });
    }
    if let Some(index) = xi_uncertainties.iter().position(|xi| !xi.is_finite()) {
        return Err(DiffusionError::InvalidParameter(format!(
            "uncertainty {index} is not finite: {}",
            xi_uncertainties[index]
        )));
    }
    params.validate()
}

/// Solves `d/dx(k du/dx) = f` for one diffusivity realization and returns `u` at every node.
///
/// # Arguments
///
/// * `params` - Physical constants of the problem.
/// * `num_grid_points` - Number of nodes, boundaries included (at least 2).
/// * `num_uncertainties` - Number of modes in the diffusivity expansion.
/// * `xi_uncertainties` - One sample value per mode.
///
/// # Returns
///
/// * `Ok(DVector<f64>)` with the discrete solution, `u[0]` and `u[N-1]` equal to the boundary values.
/// * `Err` if the grid is too small, the sample count does not match, or a parameter is invalid.
pub fn solve_field(
    params: &ProblemParameters,
    num_grid_points: usize,
    num_uncertainties: usize,
    xi_uncertainties: &[f64],
) -> DiffusionResult<DVector<f64>> {
    check_inputs(params, num_grid_points, num_uncertainties, xi_uncertainties)?;
    let _span = debug_span!("diffusion_1d", num_grid_points, num_uncertainties).entered();

    let grid = uniform_grid(num_grid_points, params.domain_length)?;
    let forcing = forcing_terms(num_grid_points, params.forcing);
    let diffusivity = stochastic_diffusivity(&grid, xi_uncertainties, params.sigma);

    let system = build_diffusion_system(
        &grid,
        &diffusivity,
        &forcing,
        params.left_boundary,
        params.right_boundary,
    )?;
    let solution = system.solve()?;
    debug!(
        k_min = diffusivity.min(),
        k_max = diffusivity.max(),
        "solved diffusion system"
    );
    Ok(solution)
}

/// Value of the solution at node `num_grid_points / 2`.
///
/// For an even number of nodes this is the node just right of the domain centre.
pub fn evaluate_with(
    params: &ProblemParameters,
    num_grid_points: usize,
    num_uncertainties: usize,
    xi_uncertainties: &[f64],
) -> DiffusionResult<f64> {
    let solution = solve_field(params, num_grid_points, num_uncertainties, xi_uncertainties)?;
    Ok(solution[num_grid_points / 2])
}

/// Midpoint value for the reference problem: unit domain, `u(0) = u(1) = 0`, `f = -10`, `sigma = 1`.
///
/// Computed in `f64`; a single-precision evaluation of the same scheme differs only by rounding.
pub fn evaluate(
    num_grid_points: usize,
    num_uncertainties: usize,
    xi_uncertainties: &[f64],
) -> DiffusionResult<f64> {
    evaluate_with(
        &ProblemParameters::default(),
        num_grid_points,
        num_uncertainties,
        xi_uncertainties,
    )
}
