// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffusionError {
    #[error("at least 2 grid points are required, got {num_grid_points}")]
    InvalidGridPoints { num_grid_points: usize },

    #[error("{num_grid_points} grid points exceed the addressable maximum of {max}")]
    GridTooLarge { num_grid_points: usize, max: usize },

    #[error("expected {expected} uncertainty values, got {actual}")]
    UncertaintyCountMismatch { expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("tridiagonal band has length {actual}, expected {expected}")]
    BandLengthMismatch { expected: usize, actual: usize },

    #[error("cannot solve an empty tridiagonal system")]
    EmptySystem,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type DiffusionResult<T> = Result<T, DiffusionError>;
