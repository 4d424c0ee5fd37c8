//! Engine configuration management.
//!
//! Every threshold the engine classifies against lives here, so new ratios,
//! different aging policies or stricter tolerances need no code changes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::{AgingBucketKey, AgingStatus, BudgetStatus, HealthTier, Locale, RatioStatus};

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Balance checks and input validation.
    pub balance: BalanceConfig,
    /// Ratio status thresholds and health scoring.
    pub ratios: RatioConfig,
    /// Aging status policy.
    pub aging: AgingConfig,
    /// Budget variance thresholds.
    pub budget: BudgetConfig,
    /// Display formatting.
    pub format: FormatConfig,
}

/// Balance check configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Maximum discrepancy (exclusive) still considered balanced.
    pub tolerance: Decimal,
    /// Reject accounts whose balance sign contradicts their normal side.
    pub strict_signs: bool,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tolerance: dec!(0.01),
            strict_signs: false,
        }
    }
}

/// A ratio status threshold.
///
/// A ratio whose favorable deviation from its benchmark is at least
/// `min_deviation` receives `status`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThreshold {
    /// Minimum favorable relative deviation (0.10 = 10% better).
    pub min_deviation: Decimal,
    /// Status assigned at or above the deviation.
    pub status: RatioStatus,
}

/// Points awarded per ratio status in the health score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPoints {
    /// Points for `excellent`.
    pub excellent: Decimal,
    /// Points for `good`.
    pub good: Decimal,
    /// Points for `warning`.
    pub warning: Decimal,
    /// Points for `critical`.
    pub critical: Decimal,
}

impl Default for StatusPoints {
    fn default() -> Self {
        Self {
            excellent: dec!(100),
            good: dec!(75),
            warning: dec!(40),
            critical: dec!(10),
        }
    }
}

impl StatusPoints {
    /// Returns the points for a status, `None` for `neutral`.
    #[must_use]
    pub const fn points(&self, status: RatioStatus) -> Option<Decimal> {
        match status {
            RatioStatus::Excellent => Some(self.excellent),
            RatioStatus::Good => Some(self.good),
            RatioStatus::Warning => Some(self.warning),
            RatioStatus::Critical => Some(self.critical),
            RatioStatus::Neutral => None,
        }
    }
}

/// Minimum health score for an overall health tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthTierThreshold {
    /// Minimum score (inclusive).
    pub min_score: Decimal,
    /// Tier assigned at or above the score.
    pub tier: HealthTier,
}

/// Ratio evaluation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioConfig {
    /// Status thresholds, ordered from most to least favorable.
    /// Deviations below the last threshold are `critical`.
    pub status_thresholds: Vec<StatusThreshold>,
    /// Health score points per status.
    pub status_points: StatusPoints,
    /// Health tiers, ordered from highest to lowest score.
    /// Scores below the last tier are `critical`.
    pub health_tiers: Vec<HealthTierThreshold>,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            status_thresholds: vec![
                StatusThreshold {
                    min_deviation: dec!(0.10),
                    status: RatioStatus::Excellent,
                },
                StatusThreshold {
                    min_deviation: Decimal::ZERO,
                    status: RatioStatus::Good,
                },
                StatusThreshold {
                    min_deviation: dec!(-0.50),
                    status: RatioStatus::Warning,
                },
            ],
            status_points: StatusPoints::default(),
            health_tiers: vec![
                HealthTierThreshold {
                    min_score: dec!(80),
                    tier: HealthTier::Excellent,
                },
                HealthTierThreshold {
                    min_score: dec!(60),
                    tier: HealthTier::Good,
                },
                HealthTierThreshold {
                    min_score: dec!(40),
                    tier: HealthTier::Fair,
                },
                HealthTierThreshold {
                    min_score: dec!(20),
                    tier: HealthTier::Poor,
                },
            ],
        }
    }
}

/// Status assigned to the items of each aging bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgingConfig {
    /// Status for items not yet due.
    pub current: AgingStatus,
    /// Status for items 1-30 days overdue.
    pub days_1_30: AgingStatus,
    /// Status for items 31-60 days overdue.
    pub days_31_60: AgingStatus,
    /// Status for items 61-90 days overdue.
    pub days_61_90: AgingStatus,
    /// Status for items more than 90 days overdue.
    pub over_90: AgingStatus,
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            current: AgingStatus::Current,
            days_1_30: AgingStatus::Due,
            days_31_60: AgingStatus::Overdue,
            days_61_90: AgingStatus::Overdue,
            over_90: AgingStatus::Critical,
        }
    }
}

impl AgingConfig {
    /// Returns the status configured for a bucket.
    #[must_use]
    pub const fn status_for(&self, bucket: AgingBucketKey) -> AgingStatus {
        match bucket {
            AgingBucketKey::Current => self.current,
            AgingBucketKey::Days1To30 => self.days_1_30,
            AgingBucketKey::Days31To60 => self.days_31_60,
            AgingBucketKey::Days61To90 => self.days_61_90,
            AgingBucketKey::Over90 => self.over_90,
        }
    }
}

/// A budget variance threshold.
///
/// Lines whose absolute variance percentage is at most `max_percentage`
/// receive `status`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceThreshold {
    /// Maximum absolute percentage (inclusive).
    pub max_percentage: Decimal,
    /// Status assigned at or below the percentage.
    pub status: BudgetStatus,
}

/// Budget variance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Status thresholds, ordered by ascending percentage.
    /// Deviations above the last threshold are `exceeded`.
    pub status_thresholds: Vec<VarianceThreshold>,
    /// Percentage points a variance must move before the trend changes.
    pub trend_tolerance: Decimal,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            status_thresholds: vec![
                VarianceThreshold {
                    max_percentage: dec!(10),
                    status: BudgetStatus::OnTrack,
                },
                VarianceThreshold {
                    max_percentage: dec!(25),
                    status: BudgetStatus::Warning,
                },
                VarianceThreshold {
                    max_percentage: dec!(50),
                    status: BudgetStatus::Critical,
                },
            ],
            trend_tolerance: Decimal::ONE,
        }
    }
}

/// Display formatting configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Locale for currency and day formatting.
    pub locale: Locale,
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, `BALANZA__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BALANZA").separator("__"))
            .build()?;

        let engine: Self = config.try_deserialize()?;
        engine.validate()?;
        Ok(engine)
    }

    /// Validates the threshold tables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` when a table is unordered or a
    /// tolerance is negative.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.balance.tolerance < Decimal::ZERO {
            return Err(AppError::Configuration(
                "balance.tolerance cannot be negative".to_string(),
            ));
        }

        let thresholds = &self.ratios.status_thresholds;
        if thresholds
            .windows(2)
            .any(|w| w[0].min_deviation <= w[1].min_deviation)
        {
            return Err(AppError::Configuration(
                "ratios.status_thresholds must be strictly descending".to_string(),
            ));
        }
        if thresholds.iter().any(|t| t.status == RatioStatus::Neutral) {
            return Err(AppError::Configuration(
                "ratios.status_thresholds cannot map to neutral".to_string(),
            ));
        }

        if self
            .ratios
            .health_tiers
            .windows(2)
            .any(|w| w[0].min_score <= w[1].min_score)
        {
            return Err(AppError::Configuration(
                "ratios.health_tiers must be strictly descending".to_string(),
            ));
        }

        if self
            .budget
            .status_thresholds
            .windows(2)
            .any(|w| w[0].max_percentage >= w[1].max_percentage)
        {
            return Err(AppError::Configuration(
                "budget.status_thresholds must be strictly ascending".to_string(),
            ));
        }
        if self.budget.trend_tolerance < Decimal::ZERO {
            return Err(AppError::Configuration(
                "budget.trend_tolerance cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}
