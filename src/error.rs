use thiserror::Error;

use crate::geometry::Axis;

/// Errors raised while validating coverage inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoverageError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid {axis} range on {subject}: min {min} is greater than max {max}")]
    InvalidEnvelope {
        subject: String,
        axis: Axis,
        min: f64,
        max: f64,
    },

    #[error("Too many candidates: {actual} exceeds the configured limit of {limit}")]
    CandidateLimitExceeded { limit: usize, actual: usize },
}
