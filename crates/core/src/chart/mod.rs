//! Chart of accounts.
//!
//! This module provides:
//! - Account snapshot types and boundary validation
//! - Half-open account-code ranges
//! - Statement layouts (section definition trees) including the built-in
//!   Spanish PGC layouts

pub mod account;
pub mod error;
pub mod layout;
pub mod range;

pub use account::{Account, AccountType, NormalSide, validate_accounts};
pub use error::ChartError;
pub use layout::{BalanceSheetLayout, SectionDef, StatementLayout, codes};
pub use range::{AccountCodeRange, matches};
