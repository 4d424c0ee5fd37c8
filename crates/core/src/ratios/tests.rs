//! Property-based tests for ratios module.

use balanza_shared::config::{BalanceConfig, RatioConfig};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::definition::{Formula, RatioRegistry};
use super::engine::RatioEngine;
use super::inputs::{self, RatioInputs};
use crate::chart::{Account, AccountType, BalanceSheetLayout, StatementLayout};
use crate::statements::StatementService;
use crate::{Locale, RatioStatus};

const ALL_INPUTS: [&str; 15] = [
    inputs::CURRENT_ASSETS,
    inputs::CURRENT_LIABILITIES,
    inputs::INVENTORY,
    inputs::CASH,
    inputs::RECEIVABLES,
    inputs::PAYABLES,
    inputs::TOTAL_ASSETS,
    inputs::TOTAL_LIABILITIES,
    inputs::EQUITY,
    inputs::NET_INCOME,
    inputs::REVENUE,
    inputs::COST_OF_SALES,
    inputs::GROSS_PROFIT,
    inputs::OPERATING_INCOME,
    inputs::INTEREST_EXPENSE,
];

fn arb_inputs() -> impl Strategy<Value = RatioInputs> {
    prop::collection::vec(-100_000_000i64..100_000_000i64, ALL_INPUTS.len()).prop_map(|cents| {
        ALL_INPUTS
            .iter()
            .zip(cents)
            .map(|(name, c)| (*name, Decimal::new(c, 2)))
            .collect::<RatioInputs>()
    })
}

proptest! {
    /// A zero denominator yields an undefined, neutral result for every ratio.
    #[test]
    fn test_zero_denominator_is_null_safe(base in arb_inputs()) {
        let engine = RatioEngine::default();

        for definition in engine.registry().iter() {
            let Formula::Quotient { denominator, .. } = &definition.formula else {
                continue;
            };

            let mut inputs = base.clone();
            for term in denominator {
                inputs.insert(term.input.clone(), Decimal::ZERO);
            }

            let result = engine.compute(&definition.name, &inputs).unwrap();
            prop_assert_eq!(result.raw_value, None);
            prop_assert_eq!(result.formatted_value.as_str(), "-");
            prop_assert_eq!(result.status, RatioStatus::Neutral);
        }
    }

    /// Status is neutral exactly when the value or the benchmark is missing.
    #[test]
    fn test_neutral_iff_unclassifiable(inputs in arb_inputs()) {
        let engine = RatioEngine::default();

        for result in engine.compute_all(&inputs).unwrap() {
            let unclassifiable = result.raw_value.is_none() || result.benchmark.is_none();
            prop_assert_eq!(result.status == RatioStatus::Neutral, unclassifiable);
        }
    }

    /// The health score stays within 0..=100.
    #[test]
    fn test_health_score_bounded(inputs in arb_inputs()) {
        let engine = RatioEngine::default();
        let results = engine.compute_all(&inputs).unwrap();
        let health = engine.health_score(&results);

        if let Some(score) = health.score {
            prop_assert!(score >= Decimal::ZERO && score <= dec!(100));
        }
        prop_assert_eq!(health.evaluated + health.excluded, results.len());
    }
}

#[test]
fn test_current_ratio_formats_as_times_and_is_good() {
    let engine = RatioEngine::default();
    let inputs = RatioInputs::new()
        .with(inputs::CURRENT_ASSETS, dec!(150000))
        .with(inputs::CURRENT_LIABILITIES, dec!(100000));

    let result = engine.compute("currentRatio", &inputs).unwrap();

    assert_eq!(result.raw_value, Some(dec!(1.5)));
    assert_eq!(result.formatted_value, "1.50x");
    assert_eq!(result.status, RatioStatus::Good);
}

#[test]
fn test_current_ratio_with_zero_denominator_is_neutral() {
    let engine = RatioEngine::default();
    let inputs = RatioInputs::new()
        .with(inputs::CURRENT_ASSETS, Decimal::ZERO)
        .with(inputs::CURRENT_LIABILITIES, Decimal::ZERO);

    let result = engine.compute("currentRatio", &inputs).unwrap();

    assert_eq!(result.raw_value, None);
    assert_eq!(result.formatted_value, "-");
    assert_eq!(result.status, RatioStatus::Neutral);
}

#[test]
fn test_working_capital_overflow_is_neutral() {
    let engine = RatioEngine::default();
    let inputs = RatioInputs::new()
        .with(inputs::CURRENT_ASSETS, Decimal::MAX)
        .with(inputs::CURRENT_LIABILITIES, dec!(-1));

    let result = engine.compute("workingCapital", &inputs).unwrap();

    assert_eq!(result.raw_value, None);
    assert_eq!(result.formatted_value, "-");
    assert_eq!(result.status, RatioStatus::Neutral);
}

#[test]
fn test_quotient_overflow_is_undefined() {
    let formula = Formula::ratio("a", "b");
    let inputs = RatioInputs::new()
        .with("a", Decimal::MAX)
        .with("b", dec!(0.5));

    assert_eq!(formula.evaluate("test", &inputs).unwrap(), None);
}

#[test]
fn test_inputs_from_statements() {
    let accounts = vec![
        Account::new("300000", "Mercaderías", AccountType::Asset, dec!(20000)),
        Account::new("430000", "Clientes", AccountType::Asset, dec!(30000)),
        Account::new("572000", "Bancos", AccountType::Asset, dec!(10000)),
        Account::new("211000", "Construcciones", AccountType::Asset, dec!(40000)),
        Account::new("400000", "Proveedores", AccountType::Liability, dec!(25000)),
        Account::new("170000", "Deudas l/p", AccountType::Liability, dec!(15000)),
        Account::new("100000", "Capital", AccountType::Equity, dec!(50000)),
        Account::new("700000", "Ventas", AccountType::Revenue, dec!(100000)),
        Account::new("600000", "Compras", AccountType::Expense, dec!(60000)),
        Account::new("662000", "Intereses", AccountType::Expense, dec!(2000)),
        Account::new("640000", "Sueldos", AccountType::Expense, dec!(28000)),
    ];
    let config = BalanceConfig::default();

    let sheet =
        StatementService::generate_balance_sheet(&accounts, &BalanceSheetLayout::pgc(), &config)
            .unwrap();
    let statement = StatementService::generate_income_statement(
        &accounts,
        &StatementLayout::pgc_income_statement(),
        &config,
    )
    .unwrap();
    assert!(sheet.balance_check.is_balanced);

    let derived = RatioInputs::from_statements(&sheet, &statement);
    assert_eq!(derived.get(inputs::CURRENT_ASSETS), Some(dec!(60000)));
    assert_eq!(derived.get(inputs::CURRENT_LIABILITIES), Some(dec!(25000)));
    assert_eq!(derived.get(inputs::INVENTORY), Some(dec!(20000)));
    assert_eq!(derived.get(inputs::TOTAL_LIABILITIES), Some(dec!(40000)));
    assert_eq!(derived.get(inputs::EQUITY), Some(dec!(60000)));
    assert_eq!(derived.get(inputs::NET_INCOME), Some(dec!(10000)));
    assert_eq!(derived.get(inputs::OPERATING_INCOME), Some(dec!(12000)));
    assert_eq!(derived.get(inputs::INTEREST_EXPENSE), Some(dec!(2000)));

    let engine = RatioEngine::new(RatioRegistry::builtin(), RatioConfig::default(), Locale::EnUs);
    let results = engine.compute_all(&derived).unwrap();
    let coverage = results.iter().find(|r| r.name == "interestCoverage").unwrap();
    assert_eq!(coverage.formatted_value, "6.00x");
    assert_eq!(coverage.status, RatioStatus::Excellent);
}
