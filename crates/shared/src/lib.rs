//! Shared types, errors, and configuration for Balanza.
//!
//! This crate provides common items used by the analysis engine and by any
//! layer that serves its results:
//! - Classification tags (ratio status, aging status, budget status, locale)
//! - Application-wide error types
//! - Engine configuration (thresholds, tolerances, formatting locale)

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::AppError;
