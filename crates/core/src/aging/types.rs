//! Aging data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AgingBucketKey, AgingStatus};

/// Whether the items are owed to us or by us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingSide {
    /// Customer invoices.
    Receivable,
    /// Supplier bills.
    Payable,
}

/// An unpaid invoice or bill as supplied by the open-items source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenItem {
    /// Document identifier.
    pub id: String,
    /// Customer or supplier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Original amount.
    pub amount: Decimal,
    /// Amount still unpaid.
    pub pending_amount: Decimal,
}

impl OpenItem {
    /// Creates an open item without counterparty.
    pub fn new(id: impl Into<String>, due_date: NaiveDate, amount: Decimal, pending_amount: Decimal) -> Self {
        Self {
            id: id.into(),
            counterparty: None,
            due_date,
            amount,
            pending_amount,
        }
    }
}

/// A classified open item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingItem {
    /// Document identifier.
    pub id: String,
    /// Customer or supplier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Original amount.
    pub amount: Decimal,
    /// Amount still unpaid.
    pub pending_amount: Decimal,
    /// `today - due_date` in days; negative when not yet due.
    pub days_overdue: i64,
    /// Bucket the item falls into.
    pub bucket: AgingBucketKey,
    /// Status derived from the same day count as the bucket.
    pub status: AgingStatus,
}

/// One aging bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingBucket {
    /// Bucket key.
    pub key: AgingBucketKey,
    /// Items in input order.
    pub items: Vec<AgingItem>,
    /// Sum of pending amounts.
    pub total: Decimal,
    /// Share of the grand total pending amount (0-100, two decimals).
    pub percentage: Decimal,
}

/// Aging report over a set of open items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingReport {
    /// Receivables or payables.
    pub side: AgingSide,
    /// Reference date.
    pub as_of: NaiveDate,
    /// All five buckets, from `current` to `90+`.
    pub buckets: Vec<AgingBucket>,
    /// Sum of every pending amount.
    pub total_pending: Decimal,
    /// Pending amount past its due date.
    pub total_overdue: Decimal,
    /// Number of items.
    pub item_count: usize,
    /// Pending-weighted mean of days overdue (not-yet-due items count as 0).
    pub weighted_average_days_overdue: Option<Decimal>,
}

impl AgingReport {
    /// Returns a bucket by key.
    #[must_use]
    pub fn bucket(&self, key: AgingBucketKey) -> Option<&AgingBucket> {
        self.buckets.iter().find(|b| b.key == key)
    }
}
