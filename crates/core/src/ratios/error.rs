//! Ratio error types.

use balanza_shared::AppError;
use thiserror::Error;

/// Ratio computation errors.
///
/// A zero denominator is not an error; it yields an undefined result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// No ratio with this name is registered.
    #[error("Unknown ratio: {0}")]
    UnknownRatio(String),

    /// A formula input was not supplied.
    #[error("Ratio {ratio} requires input {input}")]
    MissingInput {
        /// Ratio being computed.
        ratio: String,
        /// Missing input name.
        input: String,
    },

    /// A ratio with this name is already registered.
    #[error("Ratio already registered: {0}")]
    DuplicateRatio(String),
}

impl From<RatioError> for AppError {
    fn from(err: RatioError) -> Self {
        match err {
            RatioError::UnknownRatio(_) => Self::NotFound(err.to_string()),
            RatioError::MissingInput { .. } => Self::Validation(err.to_string()),
            RatioError::DuplicateRatio(_) => Self::Configuration(err.to_string()),
        }
    }
}
