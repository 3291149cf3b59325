// src/lib.rs

//! Midpoint estimate of a 1D steady diffusion problem with a random diffusivity.
//!
//! Solves `d/dx(k(x) du/dx) = f` on `[0, L]` with Dirichlet ends, where `k` is a truncated
//! cosine expansion driven by caller-supplied samples. Each call owns its buffers, so
//! independent samples can be evaluated concurrently.

pub mod diffusion;
pub mod error;
pub mod input;
pub mod sampling;
pub mod utils;

pub use diffusion::{evaluate, evaluate_with, solve_field};
pub use error::{DiffusionError, DiffusionResult};
pub use input::{InputDeck, ProblemParameters, SamplingSettings};
