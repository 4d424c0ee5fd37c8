//! Chart-of-accounts aggregation and financial analysis for Balanza.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Every operation is a deterministic function over an immutable input
//! snapshot, so independent invocations can run in parallel freely.
//!
//! # Modules
//!
//! - `chart` - Accounts, account-code ranges and statement layouts
//! - `statements` - Section aggregation, balance sheet, income statement, trial balance
//! - `ratios` - Financial ratios, benchmark status and health score
//! - `aging` - Receivable/payable aging buckets
//! - `budget` - Budget vs actual variance analysis
//! - `cashflow` - Monthly cash-flow projection
//! - `analysis` - One-call analysis of a ledger snapshot

pub mod aging;
pub mod analysis;
pub mod budget;
pub mod cashflow;
pub mod chart;
pub mod ratios;
pub mod statements;

pub use balanza_shared::types::{
    AgingBucketKey, AgingStatus, BudgetStatus, HealthTier, Locale, RatioStatus,
};
