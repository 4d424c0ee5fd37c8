//! Property-based tests for aging module.

use balanza_shared::config::AgingConfig;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::bucketizer::AgingBucketizer;
use super::types::{AgingSide, OpenItem};
use crate::{AgingBucketKey, AgingStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn arb_items() -> impl Strategy<Value = Vec<OpenItem>> {
    prop::collection::vec((-400i64..400, 0i64..10_000_000, 0u8..=100), 0..50).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (days, cents, paid_pct))| {
                let amount = Decimal::new(cents, 2);
                let pending = (amount * Decimal::from(paid_pct) / dec!(100)).round_dp(2);
                OpenItem::new(format!("INV-{i:04}"), today() - Duration::days(days), amount, pending)
            })
            .collect()
    })
}

proptest! {
    /// Bucket totals add up to the pending total and every item lands once.
    #[test]
    fn test_buckets_partition_items(items in arb_items()) {
        let report = AgingBucketizer::bucketize(
            AgingSide::Receivable,
            &items,
            today(),
            &AgingConfig::default(),
        )
        .unwrap();

        let bucket_sum: Decimal = report.buckets.iter().map(|b| b.total).sum();
        let pending_sum: Decimal = items.iter().map(|i| i.pending_amount).sum();
        prop_assert_eq!(bucket_sum, pending_sum);
        prop_assert_eq!(report.total_pending, pending_sum);

        let placed: usize = report.buckets.iter().map(|b| b.items.len()).sum();
        prop_assert_eq!(placed, items.len());

        for item in &items {
            let hits = report
                .buckets
                .iter()
                .filter(|b| b.items.iter().any(|i| i.id == item.id))
                .count();
            prop_assert_eq!(hits, 1);
        }
    }

    /// Bucket membership and status derive from the same day count.
    #[test]
    fn test_bucket_and_status_agree(items in arb_items()) {
        let config = AgingConfig::default();
        let report =
            AgingBucketizer::bucketize(AgingSide::Payable, &items, today(), &config).unwrap();

        for bucket in &report.buckets {
            for item in &bucket.items {
                prop_assert_eq!(item.bucket, bucket.key);
                prop_assert_eq!(AgingBucketKey::for_days(item.days_overdue), bucket.key);
                prop_assert_eq!(item.status, config.status_for(bucket.key));
            }
        }
    }

    /// Percentages are within 0..=100 and zero when nothing is pending.
    #[test]
    fn test_percentages_bounded(items in arb_items()) {
        let report = AgingBucketizer::bucketize(
            AgingSide::Receivable,
            &items,
            today(),
            &AgingConfig::default(),
        )
        .unwrap();

        for bucket in &report.buckets {
            prop_assert!(bucket.percentage >= Decimal::ZERO);
            prop_assert!(bucket.percentage <= dec!(100));
            if report.total_pending.is_zero() {
                prop_assert!(bucket.percentage.is_zero());
            }
        }
    }
}

#[test]
fn test_item_35_days_past_due_is_overdue() {
    let items = vec![OpenItem::new(
        "FAC-2025-0042",
        today() - Duration::days(35),
        dec!(8500),
        dec!(8500),
    )];

    let report = AgingBucketizer::bucketize(
        AgingSide::Receivable,
        &items,
        today(),
        &AgingConfig::default(),
    )
    .unwrap();

    let bucket = report.bucket(AgingBucketKey::Days31To60).unwrap();
    assert_eq!(bucket.key.as_str(), "31-60");
    assert_eq!(bucket.items.len(), 1);
    assert_eq!(bucket.items[0].days_overdue, 35);
    assert_eq!(bucket.items[0].status, AgingStatus::Overdue);
    assert_eq!(bucket.total, dec!(8500));
    assert_eq!(bucket.percentage, dec!(100));
}

#[test]
fn test_bucket_keys_serialize_as_ranges() {
    let report = AgingBucketizer::bucketize(
        AgingSide::Payable,
        &[],
        today(),
        &AgingConfig::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let keys: Vec<&str> = json["buckets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["current", "0-30", "31-60", "61-90", "90+"]);
    assert_eq!(json["side"], "payable");
}
