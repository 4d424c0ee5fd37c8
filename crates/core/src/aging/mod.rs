//! Receivable and payable aging.
//!
//! Open items are classified into the fixed buckets `current`, `0-30`,
//! `31-60`, `61-90` and `90+` relative to a reference date.

pub mod bucketizer;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use bucketizer::AgingBucketizer;
pub use error::AgingError;
pub use types::*;
