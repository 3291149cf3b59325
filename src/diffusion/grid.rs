// src/diffusion/grid.rs

use nalgebra::DVector;
use std::mem::size_of;

use crate::error::{DiffusionError, DiffusionResult};

/// Largest node count whose `f64` buffers can be allocated at all.
pub const MAX_GRID_POINTS: usize = isize::MAX as usize / size_of::<f64>();

/// Checks `2 <= num_grid_points <= MAX_GRID_POINTS` before anything is allocated.
pub fn check_grid_points(num_grid_points: usize) -> DiffusionResult<()> {
    if num_grid_points < 2 {
        return Err(DiffusionError::InvalidGridPoints { num_grid_points });
    }
    if num_grid_points > MAX_GRID_POINTS {
        return Err(DiffusionError::GridTooLarge {
            num_grid_points,
            max: MAX_GRID_POINTS,
        });
    }
    Ok(())
}

/// Builds `num_grid_points` evenly spaced nodes on `[0, domain_length]`, boundaries included.
///
/// # Arguments
///
/// * `num_grid_points` - Number of nodes, at least 2.
/// * `domain_length` - Length of the domain.
///
/// # Returns
///
/// * Node positions `x[i] = i * domain_length / (num_grid_points - 1)`.
pub fn uniform_grid(num_grid_points: usize, domain_length: f64) -> DiffusionResult<DVector<f64>> {
    check_grid_points(num_grid_points)?;
    let grid_spacing = domain_length / (num_grid_points - 1) as f64;
    Ok(DVector::from_fn(num_grid_points, |i, _| i as f64 * grid_spacing))
}

/// Constant source term at every node.
pub fn forcing_terms(num_grid_points: usize, forcing: f64) -> DVector<f64> {
    DVector::from_element(num_grid_points, forcing)
}
