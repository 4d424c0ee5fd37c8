//! Benchmark status classification.

use balanza_shared::config::StatusThreshold;
use rust_decimal::Decimal;

use super::definition::Direction;
use crate::RatioStatus;

/// Relative distance from the benchmark, positive on the favorable side.
///
/// `(value - benchmark) / |benchmark|`, negated for lower-is-better ratios.
/// A zero benchmark falls back to the absolute difference. `None` when the
/// difference does not fit in a `Decimal`.
#[must_use]
pub fn favorable_deviation(
    value: Decimal,
    benchmark: Decimal,
    direction: Direction,
) -> Option<Decimal> {
    let difference = value.checked_sub(benchmark)?;
    let relative = difference
        .checked_div(benchmark.abs())
        .unwrap_or(difference);

    Some(match direction {
        Direction::HigherIsBetter => relative,
        Direction::LowerIsBetter => -relative,
    })
}

/// Maps a ratio value to a status through the threshold table.
///
/// Thresholds are scanned in order; the first whose `min_deviation` the
/// value reaches wins, and values below every threshold are `critical`.
/// A missing value or benchmark is `neutral`, as is a deviation too large
/// to compute.
#[must_use]
pub fn evaluate_status(
    value: Option<Decimal>,
    benchmark: Option<Decimal>,
    direction: Direction,
    thresholds: &[StatusThreshold],
) -> RatioStatus {
    let (Some(value), Some(benchmark)) = (value, benchmark) else {
        return RatioStatus::Neutral;
    };

    let Some(deviation) = favorable_deviation(value, benchmark, direction) else {
        return RatioStatus::Neutral;
    };

    thresholds
        .iter()
        .find(|t| deviation >= t.min_deviation)
        .map_or(RatioStatus::Critical, |t| t.status)
}
