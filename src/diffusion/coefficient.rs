// src/diffusion/coefficient.rs

use nalgebra::DVector;
use std::f64::consts::PI;

/// Base value of the diffusivity before perturbation.
pub const BASE_DIFFUSIVITY: f64 = 1.0;

/// Builds a realization of the random diffusivity field at the given nodes.
///
/// The field is a truncated cosine expansion around `BASE_DIFFUSIVITY`, with mode `m`
/// (counting from 1) weighted by `sigma / (m^2 pi^2)` and scaled by the sample `xi[m - 1]`:
///
/// `k(x) = 1 + sum_m sigma / (m^2 pi^2) * cos(2 pi m x) * xi[m - 1]`
///
/// An empty `xi` gives the constant field `BASE_DIFFUSIVITY`.
pub fn stochastic_diffusivity(grid: &DVector<f64>, xi_uncertainties: &[f64], sigma: f64) -> DVector<f64> {
    grid.map(|x| {
        let mut k = BASE_DIFFUSIVITY;
        for (index, xi) in xi_uncertainties.iter().enumerate() {
            let mode = (index + 1) as f64;
            k += sigma * ((1.0 / (mode * mode * PI * PI)) * (2.0 * PI * mode * x).cos() * xi);
        }
        k
    })
}
