//! Account snapshot types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::error::ChartError;

/// Account type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned.
    Asset,
    /// Obligations owed.
    Liability,
    /// Owners' residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

/// Side on which an account type normally carries its balance.
///
/// - Asset/Expense: debit-normal
/// - Liability/Equity/Revenue: credit-normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalSide {
    /// Debit-normal.
    Debit,
    /// Credit-normal.
    Credit,
}

impl AccountType {
    /// Returns the normal balance side.
    #[must_use]
    pub const fn normal_side(self) -> NormalSide {
        match self {
            Self::Asset | Self::Expense => NormalSide::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalSide::Credit,
        }
    }

    /// Returns true for types reported on the balance sheet.
    #[must_use]
    pub const fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Returns true for types reported on the income statement.
    #[must_use]
    pub const fn is_income_statement(self) -> bool {
        matches!(self, Self::Revenue | Self::Expense)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
            Self::Revenue => write!(f, "revenue"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// An account balance in a ledger snapshot.
///
/// `balance` is expressed on the account's normal side: a positive asset
/// balance is a debit balance, a positive liability balance a credit one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Account code (digits; the prefix determines membership).
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Posted balance.
    pub balance: Decimal,
}

impl Account {
    /// Creates a new account balance.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        balance: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            account_type,
            balance,
        }
    }
}

/// Validates a ledger snapshot before aggregation.
///
/// Rejects empty or non-numeric codes and duplicate codes. With
/// `strict_signs`, also rejects negative balances.
///
/// # Errors
///
/// Returns the first violation found, identifying the offending account.
pub fn validate_accounts(accounts: &[Account], strict_signs: bool) -> Result<(), ChartError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(accounts.len());

    for (index, account) in accounts.iter().enumerate() {
        if account.code.is_empty() || !account.code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChartError::InvalidAccountCode {
                index,
                code: account.code.clone(),
            });
        }

        if let Some(&first_index) = seen.get(account.code.as_str()) {
            return Err(ChartError::DuplicateAccountCode {
                code: account.code.clone(),
                first_index,
                duplicate_index: index,
            });
        }
        seen.insert(account.code.as_str(), index);

        if strict_signs && account.balance < Decimal::ZERO {
            return Err(ChartError::NegativeBalance {
                code: account.code.clone(),
                account_type: account.account_type,
                balance: account.balance,
            });
        }
    }

    Ok(())
}
