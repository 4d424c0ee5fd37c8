//! Financial ratios.
//!
//! This module provides:
//! - A registry of named ratio formulas (liquidity, solvency, profitability,
//!   efficiency)
//! - Benchmark status classification through a configurable threshold table
//! - Display formatting (percent, times, currency, days)
//! - The aggregate health score

pub mod definition;
pub mod engine;
pub mod error;
pub mod format;
pub mod health;
pub mod inputs;
pub mod status;

#[cfg(test)]
mod tests;

pub use definition::{Direction, Formula, RatioCategory, RatioDefinition, RatioFormat, RatioRegistry, Term};
pub use engine::{RatioEngine, RatioResult};
pub use error::RatioError;
pub use format::{format_currency, format_ratio};
pub use health::{HealthScore, HealthScorer};
pub use inputs::RatioInputs;
pub use status::{evaluate_status, favorable_deviation};
