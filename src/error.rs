//! Error types for maze generation and layout.

use thiserror::Error;

/// Errors that can occur while generating or laying out a maze.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// A grid or cell dimension was zero, negative or not finite.
    #[error("invalid dimensions: {field} must be positive, got {value}")]
    InvalidDimensions {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A finite random source ran out of values mid-generation.
    #[error("random source exhausted")]
    RandomSourceExhausted,
}

impl MazeError {
    /// Build an `InvalidDimensions` error for the named parameter.
    pub fn invalid(field: &'static str, value: impl Into<f64>) -> Self {
        Self::InvalidDimensions {
            field,
            value: value.into(),
        }
    }
}

/// Reject a cell count of zero.
pub(crate) fn check_count(field: &'static str, count: usize) -> Result<(), MazeError> {
    if count == 0 {
        return Err(MazeError::invalid(field, 0.0));
    }
    Ok(())
}

/// Reject non-positive or non-finite lengths.
pub(crate) fn check_length(field: &'static str, length: f32) -> Result<(), MazeError> {
    if !length.is_finite() || length <= 0.0 {
        return Err(MazeError::invalid(field, length));
    }
    Ok(())
}
