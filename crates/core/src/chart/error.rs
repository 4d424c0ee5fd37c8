//! Chart of accounts error types.

use balanza_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::account::AccountType;

/// Errors raised when an account snapshot or a layout is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The same account code appears twice in one snapshot.
    #[error("Duplicate account code {code} at positions {first_index} and {duplicate_index}")]
    DuplicateAccountCode {
        /// The repeated code.
        code: String,
        /// Position of the first occurrence.
        first_index: usize,
        /// Position of the repeated occurrence.
        duplicate_index: usize,
    },

    /// Account code is empty or contains non-digit characters.
    #[error("Invalid account code {code:?} at position {index}")]
    InvalidAccountCode {
        /// Position of the account in the snapshot.
        index: usize,
        /// The offending code.
        code: String,
    },

    /// Balance sign contradicts the account's normal side.
    #[error("Account {code} ({account_type}) has negative balance {balance}")]
    NegativeBalance {
        /// Account code.
        code: String,
        /// Account type.
        account_type: AccountType,
        /// The offending balance.
        balance: Decimal,
    },

    /// Range bounds are empty or not ordered.
    #[error("Invalid account code range [{start}, {end})")]
    InvalidRange {
        /// Inclusive start.
        start: String,
        /// Exclusive end.
        end: String,
    },

    /// Two leaf sections claim overlapping code ranges.
    #[error("Sections {first} and {second} have overlapping account ranges")]
    OverlappingRanges {
        /// First section code.
        first: String,
        /// Second section code.
        second: String,
    },

    /// Two sections share a code.
    #[error("Duplicate section code: {0}")]
    DuplicateSectionCode(String),

    /// A leaf section has no account range.
    #[error("Leaf section {0} has no account range")]
    LeafWithoutRange(String),

    /// A group section also declares an account range.
    #[error("Group section {0} cannot declare an account range")]
    GroupWithRange(String),
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::OverlappingRanges { .. }
            | ChartError::DuplicateSectionCode(_)
            | ChartError::LeafWithoutRange(_)
            | ChartError::GroupWithRange(_)
            | ChartError::InvalidRange { .. } => Self::Configuration(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
