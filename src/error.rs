use thiserror::Error;

/// Rejected simulation configuration. Raised before any field is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small, need at least 3 cells per side")]
    GridTooSmall { size: usize },

    #[error("time step must be positive and finite, got {dt}")]
    NonPositiveTimeStep { dt: f32 },

    #[error("relaxation needs at least one iteration")]
    NoRelaxationIterations,

    #[error("{name} coefficient must be non-negative and finite, got {value}")]
    NegativeCoefficient { name: &'static str, value: f32 },
}
