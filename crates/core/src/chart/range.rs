//! Half-open account-code ranges.
//!
//! Codes are compared as plain strings, so a shorter string sorts before
//! any longer string it prefixes (`"57" < "570000" < "58"`). Ranges must be
//! declared at a single digit-length granularity (for example always two
//! digits) for membership to follow the group prefix.

use serde::{Deserialize, Serialize};

use super::error::ChartError;

/// Account-code range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountCodeRange {
    /// Inclusive lower bound.
    pub start: String,
    /// Exclusive upper bound.
    pub end: String,
}

impl AccountCodeRange {
    /// Creates a range, rejecting empty or unordered bounds.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, ChartError> {
        let range = Self {
            start: start.into(),
            end: end.into(),
        };
        range.validate()?;
        Ok(range)
    }

    /// Checks that both bounds are present and `start < end`.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.start.is_empty() || self.end.is_empty() || self.start >= self.end {
            return Err(ChartError::InvalidRange {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok(())
    }

    /// Returns true if `code` falls inside the range.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        matches(code, &self.start, &self.end)
    }

    /// Returns true if the two ranges share at least one code.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Returns true if `range_start <= code < range_end_exclusive`.
#[must_use]
pub fn matches(code: &str, range_start: &str, range_end_exclusive: &str) -> bool {
    range_start <= code && code < range_end_exclusive
}
