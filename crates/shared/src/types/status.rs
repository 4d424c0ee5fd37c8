//! Classification tags produced by the analysis engine.
//!
//! These live in the shared crate because the configuration tables map
//! numeric thresholds onto them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health status of a single financial ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioStatus {
    /// Clearly better than the benchmark.
    Excellent,
    /// At or slightly better than the benchmark.
    Good,
    /// Worse than the benchmark.
    Warning,
    /// Far worse than the benchmark.
    Critical,
    /// Not evaluable (undefined value or no benchmark).
    Neutral,
}

/// Overall health tier bucketed from the aggregate health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    /// Score in the top tier.
    Excellent,
    /// Healthy score.
    Good,
    /// Middling score.
    Fair,
    /// Weak score.
    Poor,
    /// Score in the bottom tier.
    Critical,
}

/// Status of an open receivable or payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingStatus {
    /// Not yet due.
    Current,
    /// Recently past due.
    Due,
    /// Past due.
    Overdue,
    /// Long past due.
    Critical,
}

/// Fixed day-range aging buckets.
///
/// The buckets partition the integer line of days overdue:
/// `current` (<= 0), `0-30` (1..=30), `31-60`, `61-90`, `90+` (> 90).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgingBucketKey {
    /// Not yet due (days overdue <= 0).
    #[serde(rename = "current")]
    Current,
    /// 1 to 30 days overdue.
    #[serde(rename = "0-30")]
    Days1To30,
    /// 31 to 60 days overdue.
    #[serde(rename = "31-60")]
    Days31To60,
    /// 61 to 90 days overdue.
    #[serde(rename = "61-90")]
    Days61To90,
    /// More than 90 days overdue.
    #[serde(rename = "90+")]
    Over90,
}

impl AgingBucketKey {
    /// All buckets in display order.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Days1To30,
        Self::Days31To60,
        Self::Days61To90,
        Self::Over90,
    ];

    /// Returns the bucket a day count falls into.
    #[must_use]
    pub const fn for_days(days_overdue: i64) -> Self {
        match days_overdue {
            i64::MIN..=0 => Self::Current,
            1..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }

    /// Returns the bucket key as displayed to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Days1To30 => "0-30",
            Self::Days31To60 => "31-60",
            Self::Days61To90 => "61-90",
            Self::Over90 => "90+",
        }
    }
}

impl fmt::Display for AgingBucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a budget line, bucketed from the absolute variance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Within the tolerated deviation.
    OnTrack,
    /// Noticeable deviation.
    Warning,
    /// Large deviation.
    Critical,
    /// Deviation beyond every configured threshold.
    Exceeded,
}
