//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::BudgetStatus;

/// Budget line category; decides which variance direction is favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    /// Income: actual above budget is favorable.
    Revenue,
    /// Cost: actual below budget is favorable.
    Expense,
}

/// Type of variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceType {
    /// The deviation benefits the business.
    Favorable,
    /// The deviation hurts the business.
    Unfavorable,
}

/// Movement of a line's variance since the prior period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Variance moved in the favorable direction.
    Improving,
    /// Variance moved in the unfavorable direction.
    Worsening,
    /// No significant movement, or no prior data.
    #[default]
    Stable,
}

/// Budget vs actual comparison of one amount pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceAnalysis {
    /// `actual - budgeted`.
    pub variance_amount: Decimal,
    /// `variance_amount / budgeted * 100`, `None` for a zero budget.
    pub variance_percentage: Option<Decimal>,
    /// Favorable or unfavorable for the category.
    pub variance_type: VarianceType,
    /// Status bucketed from the absolute percentage.
    pub status: BudgetStatus,
}

/// A budget line as supplied by the budget source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineInput {
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Category.
    pub category: BudgetCategory,
    /// Budgeted amount.
    pub budgeted_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
}

impl BudgetLineInput {
    /// Creates a budget line.
    pub fn new(
        account_code: impl Into<String>,
        account_name: impl Into<String>,
        category: BudgetCategory,
        budgeted_amount: Decimal,
        actual_amount: Decimal,
    ) -> Self {
        Self {
            account_code: account_code.into(),
            account_name: account_name.into(),
            category,
            budgeted_amount,
            actual_amount,
        }
    }
}

/// An analyzed budget line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Category.
    pub category: BudgetCategory,
    /// Budgeted amount.
    pub budgeted_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
    /// `actual - budgeted`.
    pub variance_amount: Decimal,
    /// Variance as a percentage of the budget.
    pub variance_percentage: Option<Decimal>,
    /// Favorable or unfavorable.
    pub variance_type: VarianceType,
    /// Status.
    pub status: BudgetStatus,
    /// Movement against the prior period; `stable` without prior data.
    pub trend: Trend,
}

/// Totals of one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Total budgeted.
    pub budgeted: Decimal,
    /// Total actual.
    pub actual: Decimal,
    /// `actual - budgeted`.
    pub variance_amount: Decimal,
    /// Variance percentage, `None` for a zero budget.
    pub variance_percentage: Option<Decimal>,
}

/// Number of lines per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Lines on track.
    pub on_track: usize,
    /// Lines in warning.
    pub warning: usize,
    /// Lines in critical.
    pub critical: usize,
    /// Lines exceeded.
    pub exceeded: usize,
}

impl StatusCounts {
    /// Counts one line.
    pub fn record(&mut self, status: BudgetStatus) {
        match status {
            BudgetStatus::OnTrack => self.on_track += 1,
            BudgetStatus::Warning => self.warning += 1,
            BudgetStatus::Critical => self.critical += 1,
            BudgetStatus::Exceeded => self.exceeded += 1,
        }
    }
}

/// Budget report summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Revenue totals.
    pub revenue: CategoryTotals,
    /// Expense totals.
    pub expense: CategoryTotals,
    /// Actual result minus budgeted result (revenue minus expense).
    pub net_variance: Decimal,
    /// Lines per status.
    pub status_counts: StatusCounts,
    /// Favorable lines.
    pub favorable_lines: usize,
    /// Unfavorable lines.
    pub unfavorable_lines: usize,
}

/// Budget vs actual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Analyzed lines in input order.
    pub lines: Vec<BudgetLine>,
    /// Summary.
    pub summary: BudgetSummary,
}
