//! Hierarchical aggregation of account balances into statement sections.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{Aggregation, StatementSection};
use crate::chart::{Account, SectionDef};

/// Builds statement trees from section definitions.
pub struct SectionAggregator;

impl SectionAggregator {
    /// Aggregates accounts into the given section definitions.
    ///
    /// Leaves sum the balances of the accounts their range matches; groups
    /// sum their children. Output order follows definition order. Accounts
    /// that match no leaf are reported in `unmatched`.
    ///
    /// Definitions are expected to be validated (no overlapping leaves); an
    /// account matched by two leaves would be counted twice.
    #[must_use]
    pub fn aggregate(accounts: &[Account], defs: &[SectionDef]) -> Aggregation {
        let mut matched = vec![false; accounts.len()];

        let sections: Vec<StatementSection> = defs
            .iter()
            .map(|def| Self::build(def, accounts, &mut matched))
            .collect();

        let total: Decimal = sections.iter().map(|s| s.amount).sum();

        let unmatched: Vec<String> = accounts
            .iter()
            .zip(&matched)
            .filter(|(_, hit)| !**hit)
            .map(|(account, _)| account.code.clone())
            .collect();

        debug!(
            accounts = accounts.len(),
            sections = sections.len(),
            unmatched = unmatched.len(),
            %total,
            "Aggregated accounts into statement sections"
        );

        Aggregation {
            sections,
            total,
            unmatched,
        }
    }

    fn build(def: &SectionDef, accounts: &[Account], matched: &mut [bool]) -> StatementSection {
        if !def.is_leaf() {
            let children = def
                .children
                .iter()
                .map(|child| Self::build(child, accounts, matched))
                .collect();
            return StatementSection::group(&def.code, &def.name, children);
        }

        let mut amount = Decimal::ZERO;
        let mut codes = Vec::new();

        if let Some(range) = &def.range {
            for (account, hit) in accounts.iter().zip(matched.iter_mut()) {
                if range.matches(&account.code) {
                    amount += account.balance;
                    codes.push(account.code.clone());
                    *hit = true;
                }
            }
        }

        StatementSection::leaf(&def.code, &def.name, amount, codes)
    }
}
