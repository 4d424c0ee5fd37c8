//! Statement data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invariant::BalanceCheck;
use crate::chart::AccountType;

/// A node in a statement tree.
///
/// A group's `amount` is always the sum of its children's amounts; the
/// constructors recompute it, so it is never stored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSection {
    /// Section code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Section amount.
    pub amount: Decimal,
    /// Codes of the accounts aggregated into a leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<String>,
    /// Child sections, in definition order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StatementSection>,
}

impl StatementSection {
    /// Creates a leaf holding a direct aggregation of accounts.
    pub fn leaf(
        code: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
        accounts: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            amount,
            accounts,
            children: Vec::new(),
        }
    }

    /// Creates a group whose amount is the sum of `children`.
    pub fn group(code: impl Into<String>, name: impl Into<String>, children: Vec<Self>) -> Self {
        let amount = children.iter().map(|c| c.amount).sum();
        Self {
            code: code.into(),
            name: name.into(),
            amount,
            accounts: Vec::new(),
            children,
        }
    }

    /// Appends a child and recomputes the amount.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self.amount = self.children.iter().map(|c| c.amount).sum();
        self
    }

    /// Returns true if the section has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds a section by code in this subtree.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Self> {
        if self.code == code {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(code))
    }

    /// Returns true if every group in the subtree equals the sum of its children.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.is_leaf()
            || (self.amount == self.children.iter().map(|c| c.amount).sum::<Decimal>()
                && self.children.iter().all(Self::is_consistent))
    }
}

/// Finds a section by code in a list of trees.
#[must_use]
pub fn find_section<'a>(sections: &'a [StatementSection], code: &str) -> Option<&'a StatementSection> {
    sections.iter().find_map(|s| s.find(code))
}

/// Result of aggregating accounts into a list of section trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Top-level sections, in definition order.
    pub sections: Vec<StatementSection>,
    /// Sum of the top-level section amounts.
    pub total: Decimal,
    /// Codes of accounts that matched no leaf, in input order.
    pub unmatched: Vec<String>,
}

impl Aggregation {
    /// Finds a section by code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&StatementSection> {
        find_section(&self.sections, code)
    }

    /// Returns the amount of a section, zero when absent.
    #[must_use]
    pub fn amount_of(&self, code: &str) -> Decimal {
        self.find(code).map_or(Decimal::ZERO, |s| s.amount)
    }
}

/// Balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Assets side sections.
    pub assets: Vec<StatementSection>,
    /// Equity and liabilities side sections.
    pub equity_and_liabilities: Vec<StatementSection>,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total equity (including the result of the period).
    pub total_equity: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Liabilities plus equity.
    pub total_liabilities_and_equity: Decimal,
    /// Result of the period (revenue minus expenses) reported inside equity.
    pub period_result: Decimal,
    /// Accounting equation check.
    pub balance_check: BalanceCheck,
    /// Balance sheet accounts that matched no section.
    pub unmatched_accounts: Vec<String>,
}

impl BalanceSheet {
    /// Finds a section on either side by code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&StatementSection> {
        find_section(&self.assets, code).or_else(|| find_section(&self.equity_and_liabilities, code))
    }

    /// Returns the amount of a section, zero when absent.
    #[must_use]
    pub fn amount_of(&self, code: &str) -> Decimal {
        self.find(code).map_or(Decimal::ZERO, |s| s.amount)
    }
}

/// Income statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Statement sections.
    pub sections: Vec<StatementSection>,
    /// Net sales.
    pub revenue: Decimal,
    /// Cost of sales (supplies).
    pub cost_of_sales: Decimal,
    /// Revenue minus cost of sales.
    pub gross_profit: Decimal,
    /// Total operating income.
    pub operating_income: Decimal,
    /// Total operating expenses.
    pub operating_expenses: Decimal,
    /// Operating income minus operating expenses.
    pub operating_result: Decimal,
    /// Total financial income.
    pub financial_income: Decimal,
    /// Total financial expenses.
    pub financial_expenses: Decimal,
    /// Financial income minus financial expenses.
    pub financial_result: Decimal,
    /// Operating result plus financial result.
    pub result_before_tax: Decimal,
    /// Income tax.
    pub income_tax: Decimal,
    /// Result before tax minus income tax.
    pub net_result: Decimal,
    /// Income statement accounts that matched no section.
    pub unmatched_accounts: Vec<String>,
}

/// A trial balance line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceLine {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Debit column.
    pub debit: Decimal,
    /// Credit column.
    pub credit: Decimal,
}

/// Trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Lines sorted by account code.
    pub lines: Vec<TrialBalanceLine>,
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits within tolerance.
    pub balance_check: BalanceCheck,
}
