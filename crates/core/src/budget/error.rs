//! Budget error types.

use balanza_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Budget line validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A line has no account code.
    #[error("Budget line at position {index} has no account code")]
    MissingAccountCode {
        /// Position in the input.
        index: usize,
    },

    /// Budgeted amount cannot be negative.
    #[error("Budget line {account_code} has negative budgeted amount {amount}")]
    NegativeBudget {
        /// Account code of the line.
        account_code: String,
        /// The offending amount.
        amount: Decimal,
    },

    /// Two lines share an account code.
    #[error("Duplicate budget line for account {0}")]
    DuplicateAccountCode(String),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::Validation(err.to_string())
    }
}
