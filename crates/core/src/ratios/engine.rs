//! Ratio computation.

use balanza_shared::config::RatioConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definition::{RatioCategory, RatioDefinition, RatioFormat, RatioRegistry};
use super::error::RatioError;
use super::format::format_ratio;
use super::health::{HealthScore, HealthScorer};
use super::inputs::RatioInputs;
use super::status::evaluate_status;
use crate::{Locale, RatioStatus};

/// A computed ratio.
///
/// `raw_value` is `None` when the value is undefined; the status is then
/// `neutral` and the formatted value `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioResult {
    /// Ratio name.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Ratio family.
    pub category: RatioCategory,
    /// Unrounded value.
    pub raw_value: Option<Decimal>,
    /// Display value.
    pub formatted_value: String,
    /// Display format.
    pub format: RatioFormat,
    /// Benchmark classification.
    pub status: RatioStatus,
    /// Benchmark used.
    pub benchmark: Option<Decimal>,
}

/// Computes, formats and classifies registered ratios.
#[derive(Debug, Clone)]
pub struct RatioEngine {
    registry: RatioRegistry,
    config: RatioConfig,
    locale: Locale,
}

impl Default for RatioEngine {
    fn default() -> Self {
        Self::new(RatioRegistry::builtin(), RatioConfig::default(), Locale::default())
    }
}

impl RatioEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new(registry: RatioRegistry, config: RatioConfig, locale: Locale) -> Self {
        Self {
            registry,
            config,
            locale,
        }
    }

    /// The registered ratios.
    #[must_use]
    pub fn registry(&self) -> &RatioRegistry {
        &self.registry
    }

    /// Computes one ratio by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio is unknown or an input is missing. An
    /// undefined value (zero denominator) is not an error.
    pub fn compute(&self, name: &str, inputs: &RatioInputs) -> Result<RatioResult, RatioError> {
        let definition = self
            .registry
            .get(name)
            .ok_or_else(|| RatioError::UnknownRatio(name.to_string()))?;
        self.evaluate(definition, inputs)
    }

    /// Computes every registered ratio, in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first missing-input error.
    pub fn compute_all(&self, inputs: &RatioInputs) -> Result<Vec<RatioResult>, RatioError> {
        let results = self
            .registry
            .iter()
            .map(|definition| self.evaluate(definition, inputs))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            ratios = results.len(),
            undefined = results.iter().filter(|r| r.raw_value.is_none()).count(),
            "Computed ratios"
        );

        Ok(results)
    }

    /// Aggregates computed ratios into a health score.
    #[must_use]
    pub fn health_score(&self, results: &[RatioResult]) -> HealthScore {
        HealthScorer::score(results, &self.registry, &self.config)
    }

    fn evaluate(
        &self,
        definition: &RatioDefinition,
        inputs: &RatioInputs,
    ) -> Result<RatioResult, RatioError> {
        let raw_value = definition.formula.evaluate(&definition.name, inputs)?;
        let status = evaluate_status(
            raw_value,
            definition.benchmark,
            definition.direction,
            &self.config.status_thresholds,
        );

        Ok(RatioResult {
            name: definition.name.clone(),
            label: definition.label.clone(),
            category: definition.category,
            raw_value,
            formatted_value: format_ratio(raw_value, definition.format, self.locale),
            format: definition.format,
            status,
            benchmark: definition.benchmark,
        })
    }
}
