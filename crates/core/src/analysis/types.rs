//! Analysis input and output types.

use serde::{Deserialize, Serialize};

use crate::chart::Account;
use crate::ratios::{HealthScore, RatioResult};
use crate::statements::{BalanceSheet, IncomeStatement};

/// The account balances of one company at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Company identifier or name.
    pub company: String,
    /// Account balances.
    pub accounts: Vec<Account>,
}

impl LedgerSnapshot {
    /// Creates a snapshot.
    pub fn new(company: impl Into<String>, accounts: Vec<Account>) -> Self {
        Self {
            company: company.into(),
            accounts,
        }
    }
}

/// Statements, ratios and health score for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    /// Company the snapshot belongs to.
    pub company: String,
    /// Balance sheet with its balance check.
    pub balance_sheet: BalanceSheet,
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Every registered ratio, in registry order.
    pub ratios: Vec<RatioResult>,
    /// Weighted health score over the classified ratios.
    pub health: HealthScore,
}
