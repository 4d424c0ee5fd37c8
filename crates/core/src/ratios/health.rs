//! Aggregate financial health score.

use balanza_shared::config::{HealthTierThreshold, RatioConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::definition::RatioRegistry;
use super::engine::RatioResult;
use crate::HealthTier;

/// Weighted summary of ratio statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Score from 0 to 100, `None` when no ratio could be classified.
    pub score: Option<Decimal>,
    /// Tier bucketed from the score.
    pub overall_health: Option<HealthTier>,
    /// Ratios that contributed to the score.
    pub evaluated: usize,
    /// Ratios left out of the average (neutral or weightless).
    pub excluded: usize,
}

/// Computes health scores.
pub struct HealthScorer;

impl HealthScorer {
    /// Weighted mean of status points over non-neutral ratios.
    ///
    /// Weights come from the registry; ratios it does not know weigh 1.
    /// Ratios with a non-positive weight are counted as excluded.
    #[must_use]
    pub fn score(results: &[RatioResult], registry: &RatioRegistry, config: &RatioConfig) -> HealthScore {
        let mut weighted = Decimal::ZERO;
        let mut total_weight = Decimal::ZERO;
        let mut evaluated = 0;
        let mut excluded = 0;

        for result in results {
            let Some(points) = config.status_points.points(result.status) else {
                excluded += 1;
                continue;
            };

            let weight = registry
                .get(&result.name)
                .map_or(Decimal::ONE, |d| d.weight);
            if weight <= Decimal::ZERO {
                excluded += 1;
                continue;
            }

            weighted += points * weight;
            total_weight += weight;
            evaluated += 1;
        }

        let score = weighted.checked_div(total_weight).map(|s| s.round_dp(2));
        let overall_health = score.map(|s| Self::tier(s, &config.health_tiers));

        HealthScore {
            score,
            overall_health,
            evaluated,
            excluded,
        }
    }

    /// Buckets a score; scores below every tier are `critical`.
    #[must_use]
    pub fn tier(score: Decimal, tiers: &[HealthTierThreshold]) -> HealthTier {
        tiers
            .iter()
            .find(|t| score >= t.min_score)
            .map_or(HealthTier::Critical, |t| t.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RatioStatus;
    use crate::ratios::definition::{RatioCategory, RatioFormat};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn result(name: &str, status: RatioStatus) -> RatioResult {
        RatioResult {
            name: name.to_string(),
            label: name.to_string(),
            category: RatioCategory::Liquidity,
            raw_value: Some(Decimal::ONE),
            formatted_value: "1.00x".to_string(),
            format: RatioFormat::Times,
            status,
            benchmark: Some(Decimal::ONE),
        }
    }

    #[test]
    fn test_neutral_excluded_from_average() {
        let results = vec![
            result("currentRatio", RatioStatus::Excellent),
            result("quickRatio", RatioStatus::Good),
            result("workingCapital", RatioStatus::Neutral),
        ];

        let health = HealthScorer::score(&results, &RatioRegistry::builtin(), &RatioConfig::default());

        assert_eq!(health.score, Some(dec!(87.50)));
        assert_eq!(health.overall_health, Some(HealthTier::Excellent));
        assert_eq!(health.evaluated, 2);
        assert_eq!(health.excluded, 1);
    }

    #[test]
    fn test_weights_from_registry() {
        let mut registry = RatioRegistry::new();
        let mut heavy = RatioRegistry::builtin().get("roe").cloned().unwrap();
        heavy.weight = dec!(3);
        registry.register(heavy).unwrap();

        let results = vec![
            result("roe", RatioStatus::Critical),
            result("unregistered", RatioStatus::Excellent),
        ];
        let health = HealthScorer::score(&results, &registry, &RatioConfig::default());

        // (10 * 3 + 100 * 1) / 4
        assert_eq!(health.score, Some(dec!(32.50)));
        assert_eq!(health.overall_health, Some(HealthTier::Poor));
    }

    #[test]
    fn test_zero_weight_counts_as_excluded() {
        let mut registry = RatioRegistry::builtin();
        let mut ignored = registry.get("roe").cloned().unwrap();
        ignored.name = "roeIgnored".to_string();
        ignored.weight = Decimal::ZERO;
        registry.register(ignored).unwrap();

        let results = vec![
            result("currentRatio", RatioStatus::Good),
            result("roeIgnored", RatioStatus::Critical),
        ];
        let health = HealthScorer::score(&results, &registry, &RatioConfig::default());

        assert_eq!(health.score, Some(dec!(75)));
        assert_eq!(health.evaluated, 1);
        assert_eq!(health.excluded, 1);
        assert_eq!(health.evaluated + health.excluded, results.len());
    }

    #[test]
    fn test_all_neutral_has_no_score() {
        let results = vec![result("a", RatioStatus::Neutral)];
        let health = HealthScorer::score(&results, &RatioRegistry::new(), &RatioConfig::default());

        assert_eq!(health.score, None);
        assert_eq!(health.overall_health, None);
        assert_eq!(health.excluded, 1);
    }

    #[rstest]
    #[case(dec!(100), HealthTier::Excellent)]
    #[case(dec!(80), HealthTier::Excellent)]
    #[case(dec!(79.99), HealthTier::Good)]
    #[case(dec!(60), HealthTier::Good)]
    #[case(dec!(40), HealthTier::Fair)]
    #[case(dec!(20), HealthTier::Poor)]
    #[case(dec!(19.99), HealthTier::Critical)]
    #[case(dec!(0), HealthTier::Critical)]
    fn test_tier_boundaries(#[case] score: Decimal, #[case] expected: HealthTier) {
        assert_eq!(
            HealthScorer::tier(score, &RatioConfig::default().health_tiers),
            expected
        );
    }
}
