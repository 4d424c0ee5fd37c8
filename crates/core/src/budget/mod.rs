//! Budget vs actual variance analysis.
//!
//! This module provides:
//! - Per-line variance with category-aware favorable/unfavorable direction
//! - Status buckets from the absolute variance percentage
//! - Trend against the prior period
//! - A validated report with category totals

pub mod error;
pub mod report;
pub mod types;
pub mod variance;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use types::*;
pub use variance::VarianceAnalyzer;
