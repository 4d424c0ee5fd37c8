//! Financial statements.
//!
//! This module provides pure business logic for building statements from a
//! ledger snapshot:
//! - Hierarchical section aggregation
//! - Balance sheet with the accounting equation check
//! - Income statement
//! - Trial balance

pub mod aggregate;
pub mod invariant;
pub mod service;
pub mod trial_balance;
pub mod types;


pub use aggregate::SectionAggregator;
pub use invariant::{BalanceCheck, BalanceInvariantChecker, DEFAULT_TOLERANCE};
pub use service::StatementService;
pub use types::*;
