//! Property-based tests for budget module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{BudgetCategory, BudgetLineInput, BudgetReport, VarianceType};
use super::variance::VarianceAnalyzer;
use crate::BudgetStatus;

proptest! {
    /// Revenue is favorable iff actual >= budgeted.
    #[test]
    fn test_revenue_sign_invariant(
        budgeted in 0i64..1_000_000_000,
        actual in -1_000_000i64..1_000_000_000,
    ) {
        let budgeted = Decimal::new(budgeted, 2);
        let actual = Decimal::new(actual, 2);

        let result = VarianceAnalyzer::default().analyze(budgeted, actual, BudgetCategory::Revenue);

        prop_assert_eq!(result.variance_amount, actual - budgeted);
        prop_assert_eq!(result.variance_type == VarianceType::Favorable, actual >= budgeted);
    }

    /// Expense is favorable iff actual <= budgeted.
    #[test]
    fn test_expense_sign_invariant(
        budgeted in 0i64..1_000_000_000,
        actual in -1_000_000i64..1_000_000_000,
    ) {
        let budgeted = Decimal::new(budgeted, 2);
        let actual = Decimal::new(actual, 2);

        let result = VarianceAnalyzer::default().analyze(budgeted, actual, BudgetCategory::Expense);

        prop_assert_eq!(result.variance_amount, actual - budgeted);
        prop_assert_eq!(result.variance_type == VarianceType::Favorable, actual <= budgeted);
    }

    /// The percentage is absent exactly when the budget is zero.
    #[test]
    fn test_percentage_defined_iff_budget_nonzero(
        budgeted in 0i64..1_000_000,
        actual in 0i64..1_000_000,
    ) {
        let budgeted = Decimal::from(budgeted);
        let actual = Decimal::from(actual);

        let result = VarianceAnalyzer::default().analyze(budgeted, actual, BudgetCategory::Expense);

        prop_assert_eq!(result.variance_percentage.is_none(), budgeted.is_zero());
    }

    /// Status depends only on the magnitude, never on the direction.
    #[test]
    fn test_status_ignores_direction(
        budgeted in 1i64..1_000_000,
        delta in 0i64..2_000_000,
    ) {
        let budgeted = Decimal::from(budgeted);
        let delta = Decimal::from(delta);
        let analyzer = VarianceAnalyzer::default();

        let over = analyzer.analyze(budgeted, budgeted + delta, BudgetCategory::Expense);
        let under = analyzer.analyze(budgeted, budgeted - delta, BudgetCategory::Revenue);

        prop_assert_eq!(over.status, under.status);
    }
}

#[test]
fn test_expense_under_budget_scenario() {
    let lines = vec![BudgetLineInput::new(
        "629000",
        "Otros servicios",
        BudgetCategory::Expense,
        dec!(10000),
        dec!(9000),
    )];

    let report = BudgetReport::build(&lines, None, &VarianceAnalyzer::default()).unwrap();
    let line = &report.lines[0];

    assert_eq!(line.variance_amount, dec!(-1000));
    assert_eq!(line.variance_percentage, Some(dec!(-10)));
    assert_eq!(line.variance_type, VarianceType::Favorable);
    assert_eq!(line.status, BudgetStatus::OnTrack);
}

#[test]
fn test_budget_line_serializes_snake_case() {
    let lines = vec![BudgetLineInput::new(
        "700000",
        "Ventas",
        BudgetCategory::Revenue,
        Decimal::ZERO,
        dec!(10),
    )];

    let report = BudgetReport::build(&lines, None, &VarianceAnalyzer::default()).unwrap();
    let json = serde_json::to_value(&report.lines[0]).unwrap();

    assert_eq!(json["status"], "exceeded");
    assert_eq!(json["variance_type"], "favorable");
    assert_eq!(json["trend"], "stable");
    assert!(json["variance_percentage"].is_null());
}
