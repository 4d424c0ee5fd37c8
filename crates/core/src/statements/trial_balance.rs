//! Trial balance generation.

use rust_decimal::Decimal;
use tracing::debug;

use super::invariant::BalanceInvariantChecker;
use super::service::StatementService;
use super::types::{TrialBalance, TrialBalanceLine};
use crate::chart::{Account, ChartError, NormalSide, validate_accounts};

impl StatementService {
    /// Generates a trial balance.
    ///
    /// Each balance is placed in the column of its type's normal side; a
    /// negative balance goes to the opposite column as a positive amount.
    /// Lines are sorted by account code.
    ///
    /// # Errors
    ///
    /// Returns an error if the account snapshot is invalid.
    pub fn generate_trial_balance(
        accounts: &[Account],
        tolerance: Decimal,
    ) -> Result<TrialBalance, ChartError> {
        validate_accounts(accounts, false)?;

        let mut lines: Vec<TrialBalanceLine> = accounts.iter().map(Self::trial_balance_line).collect();
        lines.sort_by(|a, b| a.code.cmp(&b.code));

        let total_debit: Decimal = lines.iter().map(|l| l.debit).sum();
        let total_credit: Decimal = lines.iter().map(|l| l.credit).sum();
        let balance_check = BalanceInvariantChecker::check(total_debit, total_credit, tolerance);

        debug!(
            lines = lines.len(),
            %total_debit,
            %total_credit,
            is_balanced = balance_check.is_balanced,
            "Generated trial balance"
        );

        Ok(TrialBalance {
            lines,
            total_debit,
            total_credit,
            balance_check,
        })
    }

    fn trial_balance_line(account: &Account) -> TrialBalanceLine {
        let amount = account.balance.abs();
        let on_normal_side = account.balance >= Decimal::ZERO;

        let (debit, credit) = match (account.account_type.normal_side(), on_normal_side) {
            (NormalSide::Debit, true) | (NormalSide::Credit, false) => (amount, Decimal::ZERO),
            (NormalSide::Credit, true) | (NormalSide::Debit, false) => (Decimal::ZERO, amount),
        };

        TrialBalanceLine {
            code: account.code.clone(),
            name: account.name.clone(),
            account_type: account.account_type,
            debit,
            credit,
        }
    }
}
