//! Budget vs actual report.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use super::error::BudgetError;
use super::types::{
    BudgetCategory, BudgetLine, BudgetLineInput, BudgetReport, BudgetSummary, CategoryTotals,
    VarianceType,
};
use super::variance::VarianceAnalyzer;

impl BudgetReport {
    /// Validates and analyzes budget lines.
    ///
    /// `prior` holds the same lines for the previous period; lines are
    /// matched by account code and lines without a prior counterpart get a
    /// `stable` trend.
    ///
    /// # Errors
    ///
    /// Rejects lines with no account code, negative budgets and duplicate
    /// account codes, naming the offending line.
    pub fn build(
        lines: &[BudgetLineInput],
        prior: Option<&[BudgetLineInput]>,
        analyzer: &VarianceAnalyzer,
    ) -> Result<Self, BudgetError> {
        validate_lines(lines)?;
        if let Some(prior) = prior {
            validate_lines(prior)?;
        }

        let prior_percentages: HashMap<&str, Option<Decimal>> = prior
            .unwrap_or_default()
            .iter()
            .map(|p| {
                let variance = p.actual_amount - p.budgeted_amount;
                (
                    p.account_code.as_str(),
                    VarianceAnalyzer::percentage(variance, p.budgeted_amount),
                )
            })
            .collect();

        let analyzed: Vec<BudgetLine> = lines
            .iter()
            .map(|line| {
                let analysis =
                    analyzer.analyze(line.budgeted_amount, line.actual_amount, line.category);
                let prior_percentage = prior_percentages
                    .get(line.account_code.as_str())
                    .copied()
                    .flatten();

                BudgetLine {
                    account_code: line.account_code.clone(),
                    account_name: line.account_name.clone(),
                    category: line.category,
                    budgeted_amount: line.budgeted_amount,
                    actual_amount: line.actual_amount,
                    variance_amount: analysis.variance_amount,
                    variance_percentage: analysis.variance_percentage,
                    variance_type: analysis.variance_type,
                    status: analysis.status,
                    trend: analyzer.trend(
                        analysis.variance_percentage,
                        prior_percentage,
                        line.category,
                    ),
                }
            })
            .collect();

        let summary = summarize(&analyzed);

        debug!(
            lines = analyzed.len(),
            net_variance = %summary.net_variance,
            unfavorable = summary.unfavorable_lines,
            "Built budget report"
        );

        Ok(Self {
            lines: analyzed,
            summary,
        })
    }
}

fn validate_lines(lines: &[BudgetLineInput]) -> Result<(), BudgetError> {
    let mut seen = HashSet::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if line.account_code.is_empty() {
            return Err(BudgetError::MissingAccountCode { index });
        }
        if line.budgeted_amount < Decimal::ZERO {
            return Err(BudgetError::NegativeBudget {
                account_code: line.account_code.clone(),
                amount: line.budgeted_amount,
            });
        }
        if !seen.insert(line.account_code.as_str()) {
            return Err(BudgetError::DuplicateAccountCode(line.account_code.clone()));
        }
    }

    Ok(())
}

fn summarize(lines: &[BudgetLine]) -> BudgetSummary {
    let mut summary = BudgetSummary::default();

    for line in lines {
        let totals = match line.category {
            BudgetCategory::Revenue => &mut summary.revenue,
            BudgetCategory::Expense => &mut summary.expense,
        };
        totals.budgeted += line.budgeted_amount;
        totals.actual += line.actual_amount;

        summary.status_counts.record(line.status);
        match line.variance_type {
            VarianceType::Favorable => summary.favorable_lines += 1,
            VarianceType::Unfavorable => summary.unfavorable_lines += 1,
        }
    }

    for totals in [&mut summary.revenue, &mut summary.expense] {
        finish_totals(totals);
    }

    summary.net_variance = summary.revenue.variance_amount - summary.expense.variance_amount;
    summary
}

fn finish_totals(totals: &mut CategoryTotals) {
    totals.variance_amount = totals.actual - totals.budgeted;
    totals.variance_percentage = VarianceAnalyzer::percentage(totals.variance_amount, totals.budgeted);
}
