//! Accounting equation check.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default tolerance: one cent.
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.01);

/// Outcome of comparing two totals that must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// True when the discrepancy is below the tolerance.
    pub is_balanced: bool,
    /// Absolute difference between the two totals.
    pub discrepancy: Decimal,
    /// Signed difference (left minus right).
    pub difference: Decimal,
}

/// Verifies `Assets == Liabilities + Equity` within a tolerance.
pub struct BalanceInvariantChecker;

impl BalanceInvariantChecker {
    /// Compares total assets against total liabilities and equity.
    ///
    /// Advisory only: the result annotates a statement, it never rejects it.
    #[must_use]
    pub fn check(
        total_assets: Decimal,
        total_liabilities_and_equity: Decimal,
        tolerance: Decimal,
    ) -> BalanceCheck {
        let difference = total_assets - total_liabilities_and_equity;
        let discrepancy = difference.abs();

        BalanceCheck {
            is_balanced: discrepancy < tolerance,
            discrepancy,
            difference,
        }
    }

    /// Same as [`Self::check`] with [`DEFAULT_TOLERANCE`].
    #[must_use]
    pub fn check_default(total_assets: Decimal, total_liabilities_and_equity: Decimal) -> BalanceCheck {
        Self::check(total_assets, total_liabilities_and_equity, DEFAULT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(dec!(1000), dec!(1000), true, dec!(0))]
    #[case(dec!(1000.004), dec!(1000), true, dec!(0.004))]
    #[case(dec!(1000.01), dec!(1000), false, dec!(0.01))]
    #[case(dec!(900), dec!(1000), false, dec!(100))]
    fn test_check_default_tolerance(
        #[case] assets: Decimal,
        #[case] le: Decimal,
        #[case] balanced: bool,
        #[case] discrepancy: Decimal,
    ) {
        let check = BalanceInvariantChecker::check_default(assets, le);
        assert_eq!(check.is_balanced, balanced);
        assert_eq!(check.discrepancy, discrepancy);
    }

    #[test]
    fn test_difference_keeps_sign() {
        let check = BalanceInvariantChecker::check(dec!(900), dec!(1000), dec!(0.01));
        assert_eq!(check.difference, dec!(-100));
        assert_eq!(check.discrepancy, dec!(100));
    }

    #[test]
    fn test_custom_tolerance() {
        let check = BalanceInvariantChecker::check(dec!(100.5), dec!(100), dec!(1));
        assert!(check.is_balanced);
    }
}
