//! One-call analysis of ledger snapshots.

use balanza_shared::EngineConfig;
use rayon::prelude::*;
use tracing::debug;

use super::error::AnalysisError;
use super::types::{FinancialAnalysis, LedgerSnapshot};
use crate::chart::{BalanceSheetLayout, StatementLayout};
use crate::ratios::{RatioEngine, RatioInputs, RatioRegistry};
use crate::statements::StatementService;

/// Runs statements, ratios and health scoring over ledger snapshots.
#[derive(Debug, Clone)]
pub struct FinancialAnalyzer {
    config: EngineConfig,
    balance_sheet_layout: BalanceSheetLayout,
    income_statement_layout: StatementLayout,
    ratio_engine: RatioEngine,
}

impl Default for FinancialAnalyzer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl FinancialAnalyzer {
    /// Creates an analyzer with the PGC layouts and the built-in ratios.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let ratio_engine = RatioEngine::new(
            RatioRegistry::builtin(),
            config.ratios.clone(),
            config.format.locale,
        );

        Self {
            config,
            balance_sheet_layout: BalanceSheetLayout::pgc(),
            income_statement_layout: StatementLayout::pgc_income_statement(),
            ratio_engine,
        }
    }

    /// Replaces the statement layouts.
    #[must_use]
    pub fn with_layouts(
        mut self,
        balance_sheet_layout: BalanceSheetLayout,
        income_statement_layout: StatementLayout,
    ) -> Self {
        self.balance_sheet_layout = balance_sheet_layout;
        self.income_statement_layout = income_statement_layout;
        self
    }

    /// Replaces the ratio registry.
    #[must_use]
    pub fn with_registry(mut self, registry: RatioRegistry) -> Self {
        self.ratio_engine = RatioEngine::new(
            registry,
            self.config.ratios.clone(),
            self.config.format.locale,
        );
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyzes one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot or a layout is invalid, or a
    /// registered ratio needs an input the statements do not provide.
    pub fn analyze(&self, snapshot: &LedgerSnapshot) -> Result<FinancialAnalysis, AnalysisError> {
        let chart_error = |source| AnalysisError::Chart {
            company: snapshot.company.clone(),
            source,
        };

        let balance_sheet = StatementService::generate_balance_sheet(
            &snapshot.accounts,
            &self.balance_sheet_layout,
            &self.config.balance,
        )
        .map_err(chart_error)?;
        let income_statement = StatementService::generate_income_statement(
            &snapshot.accounts,
            &self.income_statement_layout,
            &self.config.balance,
        )
        .map_err(chart_error)?;

        let inputs = RatioInputs::from_statements(&balance_sheet, &income_statement);
        let ratios = self
            .ratio_engine
            .compute_all(&inputs)
            .map_err(|source| AnalysisError::Ratio {
                company: snapshot.company.clone(),
                source,
            })?;
        let health = self.ratio_engine.health_score(&ratios);

        debug!(
            company = %snapshot.company,
            accounts = snapshot.accounts.len(),
            balanced = balance_sheet.balance_check.is_balanced,
            health_score = ?health.score,
            "Analyzed ledger snapshot"
        );

        Ok(FinancialAnalysis {
            company: snapshot.company.clone(),
            balance_sheet,
            income_statement,
            ratios,
            health,
        })
    }

    /// Analyzes independent snapshots in parallel.
    ///
    /// Results keep the input order; one failing snapshot does not affect
    /// the others.
    #[must_use]
    pub fn analyze_many(
        &self,
        snapshots: &[LedgerSnapshot],
    ) -> Vec<Result<FinancialAnalysis, AnalysisError>> {
        snapshots.par_iter().map(|s| self.analyze(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HealthTier;
    use crate::chart::{Account, AccountType, ChartError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn account(code: &str, account_type: AccountType, balance: Decimal) -> Account {
        Account::new(code, format!("Account {code}"), account_type, balance)
    }

    fn snapshot(company: &str) -> LedgerSnapshot {
        LedgerSnapshot::new(
            company,
            vec![
                account("211000", AccountType::Asset, dec!(50000)),
                account("281000", AccountType::Asset, dec!(-10000)),
                account("300000", AccountType::Asset, dec!(8000)),
                account("430000", AccountType::Asset, dec!(12000)),
                account("572000", AccountType::Asset, dec!(15000)),
                account("570100", AccountType::Asset, dec!(5000)),
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
            ],
        )
    }

    #[test]
    fn test_analyze_snapshot() {
        let analysis = FinancialAnalyzer::default().analyze(&snapshot("acme")).unwrap();

        assert_eq!(analysis.company, "acme");
        assert!(analysis.balance_sheet.balance_check.is_balanced);
        assert_eq!(analysis.income_statement.net_result, dec!(10000));
        assert_eq!(analysis.ratios.len(), RatioRegistry::builtin().len());
        assert!(analysis.health.score.is_some());
        assert!(analysis.health.evaluated > 0);
    }

    #[test]
    fn test_empty_registry_has_no_health() {
        let analyzer = FinancialAnalyzer::default().with_registry(RatioRegistry::new());
        let analysis = analyzer.analyze(&snapshot("acme")).unwrap();

        assert!(analysis.ratios.is_empty());
        assert_eq!(analysis.health.score, None);
        assert_eq!(analysis.health.overall_health, None::<HealthTier>);
    }

    #[test]
    fn test_analyze_many_keeps_order_and_isolates_failures() {
        let mut broken = snapshot("broken");
        broken.accounts.push(account("700000", AccountType::Revenue, dec!(1)));

        let results =
            FinancialAnalyzer::default().analyze_many(&[snapshot("a"), broken, snapshot("c")]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().company, "a");
        assert_eq!(results[2].as_ref().unwrap().company, "c");

        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.company(), "broken");
        assert!(matches!(
            err,
            AnalysisError::Chart {
                source: ChartError::DuplicateAccountCode { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let analyzer = FinancialAnalyzer::default();
        let snapshots: Vec<LedgerSnapshot> =
            (0..8).map(|i| snapshot(&format!("company-{i}"))).collect();

        let parallel = analyzer.analyze_many(&snapshots);
        let sequential: Vec<_> = snapshots.iter().map(|s| analyzer.analyze(s)).collect();

        assert_eq!(parallel, sequential);
    }
}
