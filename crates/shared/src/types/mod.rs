//! Common types used across the engine.

pub mod locale;
pub mod status;

pub use locale::Locale;
pub use status::{AgingBucketKey, AgingStatus, BudgetStatus, HealthTier, RatioStatus};
