//! Financial analysis of whole ledger snapshots.
//!
//! Combines statement generation, ratio computation and health scoring
//! behind one call, and runs independent snapshots in parallel.

pub mod analyzer;
pub mod error;
pub mod types;

pub use analyzer::FinancialAnalyzer;
pub use error::AnalysisError;
pub use types::{FinancialAnalysis, LedgerSnapshot};
