// src/input/input_deck.rs
use serde::Deserialize;

use crate::diffusion::grid::check_grid_points;
use crate::error::{DiffusionError, DiffusionResult};

/// Fixed physical constants of the problem `d/dx(k du/dx) = f` on `[0, L]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProblemParameters {
    pub domain_length: f64,   // [-] L, the domain starts at 0
    pub left_boundary: f64,   // Dirichlet value u(0)
    pub right_boundary: f64,  // Dirichlet value u(L)
    pub forcing: f64,         // Constant source term f
    pub sigma: f64,           // Variability scale of the diffusivity
}

impl Default for ProblemParameters {
    fn default() -> Self {
        ProblemParameters {
            domain_length: 1.0,
            left_boundary: 0.0,
            right_boundary: 0.0,
            forcing: -10.0,
            sigma: 1.0,
        }
    }
}

impl ProblemParameters {
    /// Checks that every constant is finite and that the domain has positive length.
    pub fn validate(&self) -> DiffusionResult<()> {
        let fields = [
            ("domain_length", self.domain_length),
            ("left_boundary", self.left_boundary),
            ("right_boundary", self.right_boundary),
            ("forcing", self.forcing),
            ("sigma", self.sigma),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DiffusionError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.domain_length <= 0.0 {
            return Err(DiffusionError::InvalidParameter(format!(
                "domain_length must be positive, got {}",
                self.domain_length
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    pub num_uncertainties: usize,          // Number of terms in the cosine expansion
    pub seed: Option<u64>,                 // RNG seed, entropy when absent
    pub high_fidelity_grid_points: usize,  // Fine resolution
    pub low_fidelity_grid_points: usize,   // Coarse resolution
}

impl Default for SamplingSettings {
    fn default() -> Self {
        SamplingSettings {
            num_uncertainties: 10,
            seed: None,
            high_fidelity_grid_points: 100,
            low_fidelity_grid_points: 10,
        }
    }
}

impl SamplingSettings {
    /// Checks that both resolutions are usable grid sizes.
    pub fn validate(&self) -> DiffusionResult<()> {
        check_grid_points(self.high_fidelity_grid_points)?;
        check_grid_points(self.low_fidelity_grid_points)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputDeck {
    pub problem: ProblemParameters,
    pub sampling: SamplingSettings,
}

impl InputDeck {
    /// Validates the problem constants, then the sampling settings.
    pub fn validate(&self) -> DiffusionResult<()> {
        self.problem.validate()?;
        self.sampling.validate()
    }
}
