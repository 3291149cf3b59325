// src/diffusion/mod.rs

pub mod coefficient;
pub mod grid;
pub mod solver;

pub use coefficient::{stochastic_diffusivity, BASE_DIFFUSIVITY};
pub use grid::{check_grid_points, forcing_terms, uniform_grid, MAX_GRID_POINTS};
pub use solver::{evaluate, evaluate_with, solve_field};
