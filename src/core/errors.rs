use thiserror::Error;

use crate::core::actions::cancellation::Cancelled;

/// A render request that the core refuses to run.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidConfigError {
    #[error("canvas dimensions must be positive: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("canvas of {width}x{height} pixels does not fit in memory")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("maximum iterations {max_iterations} exceeds limit {limit}")]
    MaxIterationsTooLarge { max_iterations: u32, limit: u32 },

    #[error("zoom factor must be positive and finite, got {0}")]
    NonPositiveZoom(f64),

    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(#[from] InvalidConfigError),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}
