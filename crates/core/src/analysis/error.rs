//! Analysis error types.

use balanza_shared::AppError;
use thiserror::Error;

use crate::chart::ChartError;
use crate::ratios::RatioError;

/// Errors raised while analyzing a ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The snapshot or a layout is structurally invalid.
    #[error("Snapshot {company}: {source}")]
    Chart {
        /// Company the snapshot belongs to.
        company: String,
        /// Underlying error.
        #[source]
        source: ChartError,
    },

    /// A ratio definition could not be evaluated.
    #[error("Snapshot {company}: {source}")]
    Ratio {
        /// Company the snapshot belongs to.
        company: String,
        /// Underlying error.
        #[source]
        source: RatioError,
    },
}

impl AnalysisError {
    /// Company of the failing snapshot.
    #[must_use]
    pub fn company(&self) -> &str {
        match self {
            Self::Chart { company, .. } | Self::Ratio { company, .. } => company,
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Chart { source, .. } => source.into(),
            AnalysisError::Ratio { source, .. } => source.into(),
        }
    }
}
