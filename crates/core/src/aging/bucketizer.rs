//! Aging bucket assignment.

use std::collections::HashSet;

use balanza_shared::config::AgingConfig;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::AgingError;
use super::types::{AgingBucket, AgingItem, AgingReport, AgingSide, OpenItem};
use crate::AgingBucketKey;

/// Classifies open items into fixed day-range buckets.
pub struct AgingBucketizer;

impl AgingBucketizer {
    /// Buckets open items by days overdue as of `today`.
    ///
    /// Every item lands in exactly one bucket. Bucket and status are both
    /// derived from the same `days_overdue`, so they never disagree.
    ///
    /// # Errors
    ///
    /// Returns an error identifying the first invalid item.
    pub fn bucketize(
        side: AgingSide,
        items: &[OpenItem],
        today: NaiveDate,
        config: &AgingConfig,
    ) -> Result<AgingReport, AgingError> {
        Self::validate(items)?;

        let mut buckets: Vec<AgingBucket> = AgingBucketKey::ALL
            .iter()
            .map(|&key| AgingBucket {
                key,
                items: Vec::new(),
                total: Decimal::ZERO,
                percentage: Decimal::ZERO,
            })
            .collect();

        for item in items {
            let aged = Self::classify(item, today, config);
            let bucket = &mut buckets[Self::position(aged.bucket)];
            bucket.total += aged.pending_amount;
            bucket.items.push(aged);
        }

        let total_pending: Decimal = buckets.iter().map(|b| b.total).sum();
        for bucket in &mut buckets {
            bucket.percentage = Self::percentage(bucket.total, total_pending);
        }

        let total_overdue = total_pending - buckets[0].total;
        let weighted_days: Decimal = buckets
            .iter()
            .flat_map(|b| &b.items)
            .map(|i| i.pending_amount * Decimal::from(i.days_overdue.max(0)))
            .sum();
        let weighted_average_days_overdue = weighted_days
            .checked_div(total_pending)
            .map(|d| d.round_dp(2));

        debug!(
            ?side,
            items = items.len(),
            %total_pending,
            %total_overdue,
            "Bucketized open items"
        );

        Ok(AgingReport {
            side,
            as_of: today,
            buckets,
            total_pending,
            total_overdue,
            item_count: items.len(),
            weighted_average_days_overdue,
        })
    }

    /// Computes days overdue, bucket and status for one item.
    #[must_use]
    pub fn classify(item: &OpenItem, today: NaiveDate, config: &AgingConfig) -> AgingItem {
        let days_overdue = (today - item.due_date).num_days();
        let bucket = AgingBucketKey::for_days(days_overdue);

        AgingItem {
            id: item.id.clone(),
            counterparty: item.counterparty.clone(),
            due_date: item.due_date,
            amount: item.amount,
            pending_amount: item.pending_amount,
            days_overdue,
            bucket,
            status: config.status_for(bucket),
        }
    }

    fn validate(items: &[OpenItem]) -> Result<(), AgingError> {
        let mut seen = HashSet::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(AgingError::EmptyId { index });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(AgingError::DuplicateId(item.id.clone()));
            }
            if item.amount < Decimal::ZERO {
                return Err(AgingError::NegativeAmount {
                    id: item.id.clone(),
                    amount: item.amount,
                });
            }
            if item.pending_amount < Decimal::ZERO {
                return Err(AgingError::NegativePending {
                    id: item.id.clone(),
                    pending_amount: item.pending_amount,
                });
            }
            if item.pending_amount > item.amount {
                return Err(AgingError::PendingExceedsAmount {
                    id: item.id.clone(),
                    pending_amount: item.pending_amount,
                    amount: item.amount,
                });
            }
        }

        Ok(())
    }

    fn position(key: AgingBucketKey) -> usize {
        match key {
            AgingBucketKey::Current => 0,
            AgingBucketKey::Days1To30 => 1,
            AgingBucketKey::Days31To60 => 2,
            AgingBucketKey::Days61To90 => 3,
            AgingBucketKey::Over90 => 4,
        }
    }

    fn percentage(part: Decimal, total: Decimal) -> Decimal {
        if total.is_zero() {
            return Decimal::ZERO;
        }
        (part / total * Decimal::ONE_HUNDRED).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AgingStatus;
    use chrono::Duration;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn item(id: &str, days: i64, pending: Decimal) -> OpenItem {
        OpenItem::new(id, today() - Duration::days(days), pending, pending)
    }

    #[rstest]
    #[case(-10, AgingBucketKey::Current, AgingStatus::Current)]
    #[case(0, AgingBucketKey::Current, AgingStatus::Current)]
    #[case(1, AgingBucketKey::Days1To30, AgingStatus::Due)]
    #[case(30, AgingBucketKey::Days1To30, AgingStatus::Due)]
    #[case(31, AgingBucketKey::Days31To60, AgingStatus::Overdue)]
    #[case(61, AgingBucketKey::Days61To90, AgingStatus::Overdue)]
    #[case(90, AgingBucketKey::Days61To90, AgingStatus::Overdue)]
    #[case(91, AgingBucketKey::Over90, AgingStatus::Critical)]
    fn test_classify_boundaries(
        #[case] days: i64,
        #[case] bucket: AgingBucketKey,
        #[case] status: AgingStatus,
    ) {
        let aged = AgingBucketizer::classify(&item("F1", days, dec!(100)), today(), &AgingConfig::default());
        assert_eq!(aged.days_overdue, days);
        assert_eq!(aged.bucket, bucket);
        assert_eq!(aged.status, status);
    }

    #[test]
    fn test_percentages_and_weighted_days() {
        let items = vec![
            item("F1", -5, dec!(500)),
            item("F2", 10, dec!(250)),
            item("F3", 100, dec!(250)),
        ];

        let report =
            AgingBucketizer::bucketize(AgingSide::Receivable, &items, today(), &AgingConfig::default())
                .unwrap();

        assert_eq!(report.total_pending, dec!(1000));
        assert_eq!(report.total_overdue, dec!(500));
        assert_eq!(report.bucket(AgingBucketKey::Current).unwrap().percentage, dec!(50));
        assert_eq!(report.bucket(AgingBucketKey::Days1To30).unwrap().percentage, dec!(25));
        assert_eq!(report.bucket(AgingBucketKey::Days31To60).unwrap().percentage, Decimal::ZERO);
        // (250 * 10 + 250 * 100) / 1000
        assert_eq!(report.weighted_average_days_overdue, Some(dec!(27.5)));
    }

    #[test]
    fn test_empty_items_have_zero_percentages() {
        let report =
            AgingBucketizer::bucketize(AgingSide::Payable, &[], today(), &AgingConfig::default())
                .unwrap();

        assert_eq!(report.buckets.len(), 5);
        assert!(report.buckets.iter().all(|b| b.percentage.is_zero()));
        assert_eq!(report.weighted_average_days_overdue, None);
    }

    #[test]
    fn test_custom_status_policy() {
        let config = AgingConfig {
            days_31_60: AgingStatus::Critical,
            ..AgingConfig::default()
        };
        let aged = AgingBucketizer::classify(&item("F1", 45, dec!(1)), today(), &config);
        assert_eq!(aged.status, AgingStatus::Critical);
    }

    #[test]
    fn test_invalid_items_rejected() {
        let cfg = AgingConfig::default();

        let dup = vec![item("F1", 1, dec!(1)), item("F1", 2, dec!(1))];
        assert_eq!(
            AgingBucketizer::bucketize(AgingSide::Receivable, &dup, today(), &cfg),
            Err(AgingError::DuplicateId("F1".to_string()))
        );

        let empty = vec![item("", 1, dec!(1))];
        assert_eq!(
            AgingBucketizer::bucketize(AgingSide::Receivable, &empty, today(), &cfg),
            Err(AgingError::EmptyId { index: 0 })
        );

        let over = vec![OpenItem::new("F2", today(), dec!(100), dec!(150))];
        assert!(matches!(
            AgingBucketizer::bucketize(AgingSide::Receivable, &over, today(), &cfg),
            Err(AgingError::PendingExceedsAmount { ref id, .. }) if id == "F2"
        ));

        let negative = vec![OpenItem::new("F3", today(), dec!(100), dec!(-1))];
        assert!(matches!(
            AgingBucketizer::bucketize(AgingSide::Receivable, &negative, today(), &cfg),
            Err(AgingError::NegativePending { .. })
        ));
    }
}
