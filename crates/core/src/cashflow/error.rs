//! Cash-flow projection error types.

use balanza_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Projection parameter errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashflowError {
    /// Projection months must be 1-60.
    #[error("Projection months must be between 1 and 60, got {0}")]
    InvalidProjectionMonths(u32),

    /// Growth rate must be -1.0 to 10.0.
    #[error("Growth rate must be between -1.0 and 10.0, got {0}")]
    InvalidGrowthRate(Decimal),

    /// Baseline flows cannot be negative.
    #[error("Baseline {flow} cannot be negative: {amount}")]
    NegativeFlow {
        /// Which flow.
        flow: &'static str,
        /// The offending amount.
        amount: Decimal,
    },

    /// Adjustment targets a month outside the projection.
    #[error("Adjustment for month {month} is outside the {projection_months}-month projection")]
    AdjustmentOutOfRange {
        /// Targeted month (1-based).
        month: u32,
        /// Projection length.
        projection_months: u32,
    },

    /// An amount grew past what `Decimal` can represent.
    #[error("Projected amounts overflow in month {month}")]
    Overflow {
        /// Month where the overflow happened (1-based).
        month: u32,
    },

    /// Projected period dates overflow the calendar.
    #[error("Projection dates are out of range")]
    DateOutOfRange,
}

impl From<CashflowError> for AppError {
    fn from(err: CashflowError) -> Self {
        match err {
            CashflowError::Overflow { .. } => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
