//! Aging error types.

use balanza_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Open item validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgingError {
    /// Item has an empty identifier.
    #[error("Open item at position {index} has an empty id")]
    EmptyId {
        /// Position in the input.
        index: usize,
    },

    /// Two items share an identifier.
    #[error("Duplicate open item id: {0}")]
    DuplicateId(String),

    /// Original amount is negative.
    #[error("Open item {id} has negative amount {amount}")]
    NegativeAmount {
        /// Item id.
        id: String,
        /// The offending amount.
        amount: Decimal,
    },

    /// Pending amount is negative.
    #[error("Open item {id} has negative pending amount {pending_amount}")]
    NegativePending {
        /// Item id.
        id: String,
        /// The offending pending amount.
        pending_amount: Decimal,
    },

    /// More is pending than was originally owed.
    #[error("Open item {id} has pending amount {pending_amount} above its amount {amount}")]
    PendingExceedsAmount {
        /// Item id.
        id: String,
        /// Pending amount.
        pending_amount: Decimal,
        /// Original amount.
        amount: Decimal,
    },
}

impl From<AgingError> for AppError {
    fn from(err: AgingError) -> Self {
        Self::Validation(err.to_string())
    }
}
