//! Cash-flow projection data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Collections.
    Inflow,
    /// Payments.
    Outflow,
}

/// Type of projection adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// Increase by a percentage.
    PercentageIncrease,
    /// Decrease by a percentage.
    PercentageDecrease,
    /// Set to a fixed amount.
    FixedAmount,
    /// Add a fixed amount.
    FixedIncrease,
    /// Subtract a fixed amount.
    FixedDecrease,
}

/// A one-off change to one month's flow (a large collection, a tax payment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowAdjustment {
    /// Month to adjust, 1-based.
    pub month: u32,
    /// Flow to adjust.
    pub flow: FlowKind,
    /// Type of adjustment.
    pub adjustment_type: AdjustmentType,
    /// Adjustment value (percentage points for percentage types).
    pub value: Decimal,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowParams {
    /// Any date in the first projected month.
    pub start_month: NaiveDate,
    /// Number of months to project (1-60).
    pub projection_months: u32,
    /// Cash available at the start.
    pub opening_balance: Decimal,
    /// Baseline monthly collections.
    pub monthly_inflow: Decimal,
    /// Baseline monthly payments.
    pub monthly_outflow: Decimal,
    /// Compound monthly growth of inflows (0.02 for 2%).
    #[serde(default)]
    pub inflow_growth_rate: Decimal,
    /// Compound monthly growth of outflows.
    #[serde(default)]
    pub outflow_growth_rate: Decimal,
    /// One-off adjustments.
    #[serde(default)]
    pub adjustments: Vec<CashflowAdjustment>,
}

/// One projected month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedMonth {
    /// Period name (e.g., "2026-01").
    pub period_name: String,
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Balance at the start of the month.
    pub opening_balance: Decimal,
    /// Collections.
    pub inflow: Decimal,
    /// Payments.
    pub outflow: Decimal,
    /// Inflow minus outflow.
    pub net_flow: Decimal,
    /// Balance at the end of the month.
    pub closing_balance: Decimal,
}

/// Result of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowProjection {
    /// Projected months in order.
    pub months: Vec<ProjectedMonth>,
    /// Total collections.
    pub total_inflow: Decimal,
    /// Total payments.
    pub total_outflow: Decimal,
    /// Final minus opening balance.
    pub net_change: Decimal,
    /// Balance at the end of the last month.
    pub closing_balance: Decimal,
    /// Lowest closing balance.
    pub minimum_balance: Decimal,
    /// First month whose closing balance is negative.
    pub first_negative_month: Option<String>,
    /// Months fully covered before cash runs out; `None` if it never does.
    pub runway_months: Option<u32>,
}
