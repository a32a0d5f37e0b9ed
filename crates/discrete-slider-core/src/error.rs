//! Error types for slider configuration.
//!
//! Interaction itself never fails: out-of-range input is clamped and missing
//! values fall back to the first option. Errors only surface where a
//! configuration is validated or (de)serialized.

use thiserror::Error;

/// Slider configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum SliderError {
    #[error("Tick divisor must be at least 1, got {0}")]
    InvalidTickDivisor(usize),
    #[error("Animation duration must be finite and non-negative, got {0}")]
    InvalidAnimationDuration(f64),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SliderError {
    fn from(err: serde_json::Error) -> Self {
        SliderError::Serialization(err.to_string())
    }
}

/// Result type for slider configuration operations.
pub type SliderResult<T> = Result<T, SliderError>;
