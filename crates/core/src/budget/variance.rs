//! Budget variance calculations.

use balanza_shared::config::BudgetConfig;
use rust_decimal::Decimal;

use super::types::{BudgetCategory, Trend, VarianceAnalysis, VarianceType};
use crate::BudgetStatus;

/// Compares budgeted and actual amounts.
#[derive(Debug, Clone, Default)]
pub struct VarianceAnalyzer {
    config: BudgetConfig,
}

impl VarianceAnalyzer {
    /// Creates an analyzer with the given thresholds.
    #[must_use]
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Analyzes one budgeted/actual pair.
    ///
    /// The variance is always `actual - budgeted`. Whether it is favorable
    /// depends on the category:
    ///   - Revenue: favorable when `variance >= 0`
    ///   - Expense: favorable when `variance <= 0`
    #[must_use]
    pub fn analyze(&self, budgeted: Decimal, actual: Decimal, category: BudgetCategory) -> VarianceAnalysis {
        let variance_amount = actual - budgeted;
        let variance_percentage = Self::percentage(variance_amount, budgeted);

        let favorable = match category {
            BudgetCategory::Revenue => variance_amount >= Decimal::ZERO,
            BudgetCategory::Expense => variance_amount <= Decimal::ZERO,
        };
        let variance_type = if favorable {
            VarianceType::Favorable
        } else {
            VarianceType::Unfavorable
        };

        let status = match variance_percentage {
            Some(percentage) => self.status(percentage),
            None if variance_amount.is_zero() => BudgetStatus::OnTrack,
            None => BudgetStatus::Exceeded,
        };

        VarianceAnalysis {
            variance_amount,
            variance_percentage,
            variance_type,
            status,
        }
    }

    /// Buckets the unsigned percentage through the threshold table.
    #[must_use]
    pub fn status(&self, percentage: Decimal) -> BudgetStatus {
        let magnitude = percentage.abs();
        self.config
            .status_thresholds
            .iter()
            .find(|t| magnitude <= t.max_percentage)
            .map_or(BudgetStatus::Exceeded, |t| t.status)
    }

    /// Compares the current variance percentage with the prior period's.
    ///
    /// Percentages are oriented so that larger is more favorable before
    /// comparing; moves within the trend tolerance are `stable`.
    #[must_use]
    pub fn trend(
        &self,
        current: Option<Decimal>,
        prior: Option<Decimal>,
        category: BudgetCategory,
    ) -> Trend {
        let (Some(current), Some(prior)) = (current, prior) else {
            return Trend::Stable;
        };

        let delta = match category {
            BudgetCategory::Revenue => current - prior,
            BudgetCategory::Expense => prior - current,
        };

        if delta > self.config.trend_tolerance {
            Trend::Improving
        } else if delta < -self.config.trend_tolerance {
            Trend::Worsening
        } else {
            Trend::Stable
        }
    }

    /// `variance / budgeted * 100` rounded to two decimals, `None` for a zero budget.
    #[must_use]
    pub fn percentage(variance: Decimal, budgeted: Decimal) -> Option<Decimal> {
        if budgeted.is_zero() {
            return None;
        }
        variance
            .checked_div(budgeted)
            .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
            .map(|p| p.round_dp(2))
    }
}
