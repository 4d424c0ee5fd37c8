//! Named ratio inputs.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::codes;
use crate::statements::{BalanceSheet, IncomeStatement};

/// Total current assets.
pub const CURRENT_ASSETS: &str = "currentAssets";
/// Total current liabilities.
pub const CURRENT_LIABILITIES: &str = "currentLiabilities";
/// Inventories.
pub const INVENTORY: &str = "inventory";
/// Cash and equivalents.
pub const CASH: &str = "cash";
/// Trade receivables.
pub const RECEIVABLES: &str = "receivables";
/// Trade payables.
pub const PAYABLES: &str = "payables";
/// Total assets.
pub const TOTAL_ASSETS: &str = "totalAssets";
/// Total liabilities.
pub const TOTAL_LIABILITIES: &str = "totalLiabilities";
/// Total equity.
pub const EQUITY: &str = "equity";
/// Net result of the period.
pub const NET_INCOME: &str = "netIncome";
/// Net sales.
pub const REVENUE: &str = "revenue";
/// Cost of sales.
pub const COST_OF_SALES: &str = "costOfSales";
/// Revenue minus cost of sales.
pub const GROSS_PROFIT: &str = "grossProfit";
/// Operating result.
pub const OPERATING_INCOME: &str = "operatingIncome";
/// Financial expenses.
pub const INTEREST_EXPENSE: &str = "interestExpense";

/// Input values keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatioInputs(BTreeMap<String, Decimal>);

impl RatioInputs {
    /// Creates an empty input set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an input, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Decimal) {
        self.0.insert(name.into(), value);
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns an input value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.0.get(name).copied()
    }

    /// Derives every built-in input from aggregated statements.
    ///
    /// Section amounts are read by their well-known codes; a layout that
    /// lacks one of them contributes zero.
    #[must_use]
    pub fn from_statements(balance_sheet: &BalanceSheet, income_statement: &IncomeStatement) -> Self {
        Self::new()
            .with(CURRENT_ASSETS, balance_sheet.amount_of(codes::CURRENT_ASSETS))
            .with(CURRENT_LIABILITIES, balance_sheet.amount_of(codes::CURRENT_LIABILITIES))
            .with(INVENTORY, balance_sheet.amount_of(codes::INVENTORIES))
            .with(CASH, balance_sheet.amount_of(codes::CASH))
            .with(RECEIVABLES, balance_sheet.amount_of(codes::TRADE_RECEIVABLES))
            .with(PAYABLES, balance_sheet.amount_of(codes::TRADE_PAYABLES))
            .with(TOTAL_ASSETS, balance_sheet.total_assets)
            .with(TOTAL_LIABILITIES, balance_sheet.total_liabilities)
            .with(EQUITY, balance_sheet.total_equity)
            .with(NET_INCOME, income_statement.net_result)
            .with(REVENUE, income_statement.revenue)
            .with(COST_OF_SALES, income_statement.cost_of_sales)
            .with(GROSS_PROFIT, income_statement.gross_profit)
            .with(OPERATING_INCOME, income_statement.operating_result)
            .with(INTEREST_EXPENSE, income_statement.financial_expenses)
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for RatioInputs {
    fn from_iter<T: IntoIterator<Item = (K, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
