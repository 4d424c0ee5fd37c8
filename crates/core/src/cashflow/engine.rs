//! Monthly cash-flow projection.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::CashflowError;
use super::types::{
    AdjustmentType, CashflowAdjustment, CashflowParams, CashflowProjection, FlowKind,
    ProjectedMonth,
};

/// Maximum projection horizon in months.
pub const MAX_PROJECTION_MONTHS: u32 = 60;

/// Projects cash balances month by month.
#[derive(Debug, Default, Clone, Copy)]
pub struct CashflowEngine;

impl CashflowEngine {
    /// Creates a new cash-flow engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an adjustment to a value.
    ///
    /// Returns `None` if the result does not fit in a `Decimal`.
    #[must_use]
    pub fn apply_adjustment(
        value: Decimal,
        adjustment_type: AdjustmentType,
        adjustment_value: Decimal,
    ) -> Option<Decimal> {
        let percent_of = || {
            value
                .checked_mul(adjustment_value)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        };
        match adjustment_type {
            AdjustmentType::PercentageIncrease => value.checked_add(percent_of()?),
            AdjustmentType::PercentageDecrease => value.checked_sub(percent_of()?),
            AdjustmentType::FixedAmount => Some(adjustment_value),
            AdjustmentType::FixedIncrease => value.checked_add(adjustment_value),
            AdjustmentType::FixedDecrease => value.checked_sub(adjustment_value),
        }
    }

    /// Validates projection parameters.
    ///
    /// # Errors
    ///
    /// Returns an error for a horizon outside 1-60 months, growth rates
    /// outside -1.0 to 10.0, negative baseline flows or adjustments that
    /// target a month outside the horizon.
    pub fn validate(params: &CashflowParams) -> Result<(), CashflowError> {
        if params.projection_months == 0 || params.projection_months > MAX_PROJECTION_MONTHS {
            return Err(CashflowError::InvalidProjectionMonths(params.projection_months));
        }

        for rate in [params.inflow_growth_rate, params.outflow_growth_rate] {
            if rate < Decimal::NEGATIVE_ONE || rate > Decimal::TEN {
                return Err(CashflowError::InvalidGrowthRate(rate));
            }
        }

        if params.monthly_inflow < Decimal::ZERO {
            return Err(CashflowError::NegativeFlow {
                flow: "inflow",
                amount: params.monthly_inflow,
            });
        }
        if params.monthly_outflow < Decimal::ZERO {
            return Err(CashflowError::NegativeFlow {
                flow: "outflow",
                amount: params.monthly_outflow,
            });
        }

        if let Some(adj) = params
            .adjustments
            .iter()
            .find(|a| a.month == 0 || a.month > params.projection_months)
        {
            return Err(CashflowError::AdjustmentOutOfRange {
                month: adj.month,
                projection_months: params.projection_months,
            });
        }

        Ok(())
    }

    /// Runs a projection.
    ///
    /// Baseline flows grow by their compound monthly rate; adjustments then
    /// apply to the targeted month only, in the order given. Adjusted flows
    /// never go below zero. Amounts are rounded to cents each month.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the period dates
    /// overflow the calendar or an amount grows past what `Decimal` holds.
    pub fn project(&self, params: &CashflowParams) -> Result<CashflowProjection, CashflowError> {
        Self::validate(params)?;

        let first = params
            .start_month
            .with_day(1)
            .ok_or(CashflowError::DateOutOfRange)?;

        let mut months = Vec::with_capacity(params.projection_months as usize);
        let mut base_inflow = params.monthly_inflow;
        let mut base_outflow = params.monthly_outflow;
        let mut balance = params.opening_balance;

        for index in 0..params.projection_months {
            let month = index + 1;
            let overflow = || CashflowError::Overflow { month };

            if index > 0 {
                base_inflow = base_inflow
                    .checked_mul(Decimal::ONE + params.inflow_growth_rate)
                    .ok_or_else(overflow)?;
                base_outflow = base_outflow
                    .checked_mul(Decimal::ONE + params.outflow_growth_rate)
                    .ok_or_else(overflow)?;
            }

            let period_start = first
                .checked_add_months(Months::new(index))
                .ok_or(CashflowError::DateOutOfRange)?;
            let period_end = month_end(period_start)?;

            let month_adjustments: Vec<&CashflowAdjustment> = params
                .adjustments
                .iter()
                .filter(|a| a.month == month)
                .collect();

            let inflow = adjusted(base_inflow, FlowKind::Inflow, &month_adjustments)
                .ok_or_else(overflow)?;
            let outflow = adjusted(base_outflow, FlowKind::Outflow, &month_adjustments)
                .ok_or_else(overflow)?;
            let net_flow = inflow.checked_sub(outflow).ok_or_else(overflow)?;
            let opening_balance = balance;
            balance = balance.checked_add(net_flow).ok_or_else(overflow)?;

            months.push(ProjectedMonth {
                period_name: format!("{}-{:02}", period_start.year(), period_start.month()),
                period_start,
                period_end,
                opening_balance,
                inflow,
                outflow,
                net_flow,
                closing_balance: balance,
            });
        }

        let projection = summarize(params.opening_balance, months)?;

        if let Some(month) = &projection.first_negative_month {
            warn!(
                month = %month,
                minimum_balance = %projection.minimum_balance,
                "Projected cash balance goes negative"
            );
        }
        debug!(
            months = projection.months.len(),
            closing_balance = %projection.closing_balance,
            "Projected cash flow"
        );

        Ok(projection)
    }
}

fn adjusted(base: Decimal, flow: FlowKind, adjustments: &[&CashflowAdjustment]) -> Option<Decimal> {
    let value = adjustments
        .iter()
        .filter(|a| a.flow == flow)
        .try_fold(base, |value, a| {
            CashflowEngine::apply_adjustment(value, a.adjustment_type, a.value)
        })?;
    Some(value.max(Decimal::ZERO).round_dp(2))
}

fn month_end(period_start: NaiveDate) -> Result<NaiveDate, CashflowError> {
    period_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(CashflowError::DateOutOfRange)
}

fn summarize(
    opening_balance: Decimal,
    months: Vec<ProjectedMonth>,
) -> Result<CashflowProjection, CashflowError> {
    let overflow = || CashflowError::Overflow {
        month: u32::try_from(months.len()).unwrap_or(u32::MAX),
    };
    let total_inflow = checked_total(months.iter().map(|m| m.inflow)).ok_or_else(overflow)?;
    let total_outflow = checked_total(months.iter().map(|m| m.outflow)).ok_or_else(overflow)?;
    let closing_balance = months.last().map_or(opening_balance, |m| m.closing_balance);
    let minimum_balance = months
        .iter()
        .map(|m| m.closing_balance)
        .min()
        .unwrap_or(opening_balance);

    let first_negative = months
        .iter()
        .position(|m| m.closing_balance < Decimal::ZERO);

    let net_change = closing_balance
        .checked_sub(opening_balance)
        .ok_or_else(overflow)?;

    Ok(CashflowProjection {
        total_inflow,
        total_outflow,
        net_change,
        closing_balance,
        minimum_balance,
        first_negative_month: first_negative.map(|i| months[i].period_name.clone()),
        runway_months: first_negative.and_then(|i| u32::try_from(i).ok()),
        months,
    })
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, Decimal::checked_add)
}
