//! Balance sheet and income statement generation.

use balanza_shared::config::BalanceConfig;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::aggregate::SectionAggregator;
use super::invariant::BalanceInvariantChecker;
use super::types::{BalanceSheet, IncomeStatement, StatementSection};
use crate::chart::{
    Account, AccountType, BalanceSheetLayout, ChartError, StatementLayout, codes,
    validate_accounts,
};

/// Service for generating financial statements from a ledger snapshot.
pub struct StatementService;

impl StatementService {
    /// Generates a balance sheet.
    ///
    /// Only asset, liability and equity accounts are aggregated. The result
    /// of the period (revenue minus expenses) is added to equity as a
    /// `period_result` leaf, so an unclosed ledger still balances.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout or the account snapshot is invalid.
    pub fn generate_balance_sheet(
        accounts: &[Account],
        layout: &BalanceSheetLayout,
        config: &BalanceConfig,
    ) -> Result<BalanceSheet, ChartError> {
        layout.validate()?;
        validate_accounts(accounts, config.strict_signs)?;

        let balance_accounts: Vec<Account> = accounts
            .iter()
            .filter(|a| a.account_type.is_balance_sheet())
            .cloned()
            .collect();

        let assets = SectionAggregator::aggregate(&balance_accounts, &layout.assets.sections);
        let liabilities_side =
            SectionAggregator::aggregate(&balance_accounts, &layout.equity_and_liabilities.sections);

        let period_result = Self::period_result(accounts);
        let equity_and_liabilities =
            Self::with_period_result(liabilities_side.sections, period_result);

        let total_assets = assets.total;
        let total_liabilities_and_equity: Decimal =
            equity_and_liabilities.iter().map(|s| s.amount).sum();
        let total_equity = equity_and_liabilities
            .iter()
            .find(|s| s.code == codes::EQUITY)
            .map_or(period_result, |s| s.amount);
        let total_liabilities = total_liabilities_and_equity - total_equity;

        let unmatched_accounts: Vec<String> = assets
            .unmatched
            .iter()
            .filter(|code| liabilities_side.unmatched.contains(code))
            .cloned()
            .collect();

        let balance_check = BalanceInvariantChecker::check(
            total_assets,
            total_liabilities_and_equity,
            config.tolerance,
        );

        if !unmatched_accounts.is_empty() {
            warn!(
                count = unmatched_accounts.len(),
                accounts = ?unmatched_accounts,
                "Balance sheet accounts matched no section"
            );
        }

        if !balance_check.is_balanced {
            warn!(
                %total_assets,
                %total_liabilities_and_equity,
                discrepancy = %balance_check.discrepancy,
                "Balance sheet is not balanced"
            );
        }

        debug!(%total_assets, %total_liabilities, %total_equity, "Generated balance sheet");

        Ok(BalanceSheet {
            assets: assets.sections,
            equity_and_liabilities,
            total_assets,
            total_equity,
            total_liabilities,
            total_liabilities_and_equity,
            period_result,
            balance_check,
            unmatched_accounts,
        })
    }

    /// Generates an income statement.
    ///
    /// Only revenue and expense accounts are aggregated. Derived figures are
    /// read from the well-known section codes in [`codes`]; a missing section
    /// counts as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout or the account snapshot is invalid.
    pub fn generate_income_statement(
        accounts: &[Account],
        layout: &StatementLayout,
        config: &BalanceConfig,
    ) -> Result<IncomeStatement, ChartError> {
        layout.validate()?;
        validate_accounts(accounts, config.strict_signs)?;

        let income_accounts: Vec<Account> = accounts
            .iter()
            .filter(|a| a.account_type.is_income_statement())
            .cloned()
            .collect();

        let aggregation = SectionAggregator::aggregate(&income_accounts, &layout.sections);

        let revenue = aggregation.amount_of(codes::NET_SALES);
        let cost_of_sales = aggregation.amount_of(codes::SUPPLIES);
        let operating_income = aggregation.amount_of(codes::OPERATING_INCOME);
        let operating_expenses = aggregation.amount_of(codes::OPERATING_EXPENSES);
        let financial_income = aggregation.amount_of(codes::FINANCIAL_INCOME);
        let financial_expenses = aggregation.amount_of(codes::FINANCIAL_EXPENSES);
        let income_tax = aggregation.amount_of(codes::INCOME_TAX);

        let gross_profit = revenue - cost_of_sales;
        let operating_result = operating_income - operating_expenses;
        let financial_result = financial_income - financial_expenses;
        let result_before_tax = operating_result + financial_result;
        let net_result = result_before_tax - income_tax;

        if !aggregation.unmatched.is_empty() {
            warn!(
                count = aggregation.unmatched.len(),
                accounts = ?aggregation.unmatched,
                "Income statement accounts matched no section"
            );
        }

        debug!(%revenue, %operating_result, %net_result, "Generated income statement");

        Ok(IncomeStatement {
            sections: aggregation.sections,
            revenue,
            cost_of_sales,
            gross_profit,
            operating_income,
            operating_expenses,
            operating_result,
            financial_income,
            financial_expenses,
            financial_result,
            result_before_tax,
            income_tax,
            net_result,
            unmatched_accounts: aggregation.unmatched,
        })
    }

    /// Revenue minus expenses over the whole snapshot.
    #[must_use]
    pub fn period_result(accounts: &[Account]) -> Decimal {
        accounts
            .iter()
            .map(|a| match a.account_type {
                AccountType::Revenue => a.balance,
                AccountType::Expense => -a.balance,
                _ => Decimal::ZERO,
            })
            .sum()
    }

    fn with_period_result(
        mut sections: Vec<StatementSection>,
        period_result: Decimal,
    ) -> Vec<StatementSection> {
        let leaf = StatementSection::leaf(
            codes::PERIOD_RESULT,
            "Resultado del ejercicio",
            period_result,
            Vec::new(),
        );

        match sections.iter().position(|s| s.code == codes::EQUITY) {
            Some(index) => {
                let equity = sections.remove(index);
                sections.insert(index, equity.with_child(leaf));
            }
            None => sections.push(leaf),
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(code: &str, account_type: AccountType, balance: Decimal) -> Account {
        Account::new(code, format!("Account {code}"), account_type, balance)
    }

    fn ledger() -> Vec<Account> {
        vec![
            account("211000", AccountType::Asset, dec!(50000)),
            account("281000", AccountType::Asset, dec!(-10000)),
            account("300000", AccountType::Asset, dec!(8000)),
            account("430000", AccountType::Asset, dec!(12000)),
            account("572000", AccountType::Asset, dec!(15000)),
            account("100000", AccountType::Equity, dec!(40000)),
            account("170000", AccountType::Liability, dec!(20000)),
            account("400000", AccountType::Liability, dec!(9000)),
            account("475000", AccountType::Liability, dec!(1000)),
            account("700000", AccountType::Revenue, dec!(60000)),
            account("600000", AccountType::Expense, dec!(30000)),
            account("640000", AccountType::Expense, dec!(15000)),
            account("662000", AccountType::Expense, dec!(2000)),
            account("769000", AccountType::Revenue, dec!(500)),
            account("630000", AccountType::Expense, dec!(3500)),
        ]
    }

    #[test]
    fn test_balance_sheet_includes_period_result() {
        let sheet = StatementService::generate_balance_sheet(
            &ledger(),
            &BalanceSheetLayout::pgc(),
            &BalanceConfig::default(),
        )
        .unwrap();

        assert_eq!(sheet.total_assets, dec!(75000));
        assert_eq!(sheet.period_result, dec!(10000));
        assert_eq!(sheet.total_equity, dec!(50000));
        assert_eq!(sheet.total_liabilities, dec!(30000));
        assert_eq!(sheet.total_liabilities_and_equity, dec!(80000));
        assert!(!sheet.balance_check.is_balanced);
        assert_eq!(sheet.balance_check.difference, dec!(-5000));
        assert_eq!(sheet.amount_of(codes::PERIOD_RESULT), dec!(10000));
        assert_eq!(sheet.amount_of(codes::CASH), dec!(15000));
        assert!(sheet.unmatched_accounts.is_empty());
    }

    #[test]
    fn test_balanced_sheet_with_period_result() {
        let mut accounts = ledger();
        accounts.push(account("570100", AccountType::Asset, dec!(5000)));

        let sheet = StatementService::generate_balance_sheet(
            &accounts,
            &BalanceSheetLayout::pgc(),
            &BalanceConfig::default(),
        )
        .unwrap();

        assert_eq!(sheet.total_assets, dec!(80000));
        assert!(sheet.balance_check.is_balanced);
        assert_eq!(sheet.balance_check.discrepancy, Decimal::ZERO);
    }

    #[test]
    fn test_income_statement_derived_figures() {
        let statement = StatementService::generate_income_statement(
            &ledger(),
            &StatementLayout::pgc_income_statement(),
            &BalanceConfig::default(),
        )
        .unwrap();

        assert_eq!(statement.revenue, dec!(60000));
        assert_eq!(statement.cost_of_sales, dec!(30000));
        assert_eq!(statement.gross_profit, dec!(30000));
        assert_eq!(statement.operating_income, dec!(60000));
        assert_eq!(statement.operating_expenses, dec!(45000));
        assert_eq!(statement.operating_result, dec!(15000));
        assert_eq!(statement.financial_result, dec!(-1500));
        assert_eq!(statement.result_before_tax, dec!(13500));
        assert_eq!(statement.income_tax, dec!(3500));
        assert_eq!(statement.net_result, dec!(10000));
        assert!(statement.unmatched_accounts.is_empty());
    }

    #[test]
    fn test_net_result_matches_period_result() {
        let accounts = ledger();
        let statement = StatementService::generate_income_statement(
            &accounts,
            &StatementLayout::pgc_income_statement(),
            &BalanceConfig::default(),
        )
        .unwrap();

        assert_eq!(statement.net_result, StatementService::period_result(&accounts));
    }

    #[test]
    fn test_unmatched_accounts_are_reported() {
        let accounts = vec![
            account("570001", AccountType::Asset, dec!(100)),
            account("450000", AccountType::Asset, dec!(25)),
            account("100001", AccountType::Equity, dec!(100)),
            account("720000", AccountType::Revenue, dec!(9)),
        ];

        let sheet = StatementService::generate_balance_sheet(
            &accounts,
            &BalanceSheetLayout::pgc(),
            &BalanceConfig::default(),
        )
        .unwrap();
        assert_eq!(sheet.unmatched_accounts, vec!["450000"]);
        assert_eq!(sheet.total_assets, dec!(100));

        let statement = StatementService::generate_income_statement(
            &accounts,
            &StatementLayout::pgc_income_statement(),
            &BalanceConfig::default(),
        )
        .unwrap();
        assert_eq!(statement.unmatched_accounts, vec!["720000"]);
    }

    #[test]
    fn test_duplicate_codes_rejected_before_aggregation() {
        let accounts = vec![
            account("570001", AccountType::Asset, dec!(100)),
            account("570001", AccountType::Asset, dec!(100)),
        ];

        let result = StatementService::generate_balance_sheet(
            &accounts,
            &BalanceSheetLayout::pgc(),
            &BalanceConfig::default(),
        );
        assert!(matches!(result, Err(ChartError::DuplicateAccountCode { .. })));
    }

    #[test]
    fn test_strict_signs_rejects_negative_balances() {
        let config = BalanceConfig {
            strict_signs: true,
            ..BalanceConfig::default()
        };

        let result =
            StatementService::generate_balance_sheet(&ledger(), &BalanceSheetLayout::pgc(), &config);
        assert!(matches!(result, Err(ChartError::NegativeBalance { .. })));
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let mut layout = BalanceSheetLayout::pgc();
        layout
            .equity_and_liabilities
            .sections
            .push(crate::chart::SectionDef::leaf("dup_cash", "Cash again", "57", "58"));

        let result = StatementService::generate_balance_sheet(
            &ledger(),
            &layout,
            &BalanceConfig::default(),
        );
        assert!(matches!(result, Err(ChartError::OverlappingRanges { .. })));
    }

    #[test]
    fn test_layout_without_equity_group_appends_period_result() {
        let layout = BalanceSheetLayout {
            assets: StatementLayout::new(vec![crate::chart::SectionDef::leaf(
                "cash", "Cash", "57", "58",
            )]),
            equity_and_liabilities: StatementLayout::new(vec![crate::chart::SectionDef::leaf(
                "capital", "Capital", "10", "11",
            )]),
        };
        let accounts = vec![
            account("570000", AccountType::Asset, dec!(150)),
            account("100000", AccountType::Equity, dec!(100)),
            account("700000", AccountType::Revenue, dec!(50)),
        ];

        let sheet =
            StatementService::generate_balance_sheet(&accounts, &layout, &BalanceConfig::default())
                .unwrap();

        assert_eq!(sheet.equity_and_liabilities.last().unwrap().code, codes::PERIOD_RESULT);
        assert!(sheet.balance_check.is_balanced);
    }
}
