//! Ratio definitions and the built-in registry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::RatioError;
use super::inputs::{self, RatioInputs};

/// Ratio family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    /// Short-term solvency.
    Liquidity,
    /// Capital structure.
    Solvency,
    /// Returns and margins.
    Profitability,
    /// Use of assets.
    Efficiency,
}

/// Display format of a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioFormat {
    /// Multiplied by 100 with a `%` suffix.
    Percent,
    /// With an `x` suffix.
    Times,
    /// Locale-aware money amount.
    Currency,
    /// Whole days with a locale suffix.
    Days,
}

/// Which side of the benchmark is favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Values above the benchmark are favorable.
    HigherIsBetter,
    /// Values below the benchmark are favorable.
    LowerIsBetter,
}

/// A signed reference to an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Input name.
    pub input: String,
    /// Coefficient, usually `1` or `-1`.
    pub coefficient: Decimal,
}

impl Term {
    /// Adds the input.
    pub fn plus(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            coefficient: Decimal::ONE,
        }
    }

    /// Subtracts the input.
    pub fn minus(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            coefficient: Decimal::NEGATIVE_ONE,
        }
    }
}

/// Ratio formula over named inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formula {
    /// `sum(numerator) * scale / sum(denominator)`.
    Quotient {
        /// Numerator terms.
        numerator: Vec<Term>,
        /// Denominator terms.
        denominator: Vec<Term>,
        /// Multiplier applied to the quotient.
        #[serde(default = "default_scale")]
        scale: Decimal,
    },
    /// `sum(terms)`.
    Sum {
        /// Terms.
        terms: Vec<Term>,
    },
}

fn default_scale() -> Decimal {
    Decimal::ONE
}

impl Formula {
    /// `numerator / denominator`.
    pub fn ratio(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self::Quotient {
            numerator: vec![Term::plus(numerator)],
            denominator: vec![Term::plus(denominator)],
            scale: Decimal::ONE,
        }
    }

    /// Names of every input the formula reads.
    #[must_use]
    pub fn inputs(&self) -> Vec<&str> {
        match self {
            Self::Quotient {
                numerator,
                denominator,
                ..
            } => numerator
                .iter()
                .chain(denominator)
                .map(|t| t.input.as_str())
                .collect(),
            Self::Sum { terms } => terms.iter().map(|t| t.input.as_str()).collect(),
        }
    }

    /// Evaluates the formula.
    ///
    /// Returns `Ok(None)` when the value is undefined (zero denominator or
    /// overflow).
    ///
    /// # Errors
    ///
    /// Returns `RatioError::MissingInput` if an input is absent.
    pub fn evaluate(&self, ratio: &str, inputs: &RatioInputs) -> Result<Option<Decimal>, RatioError> {
        match self {
            Self::Quotient {
                numerator,
                denominator,
                scale,
            } => {
                let num = sum_terms(ratio, numerator, inputs)?;
                let den = sum_terms(ratio, denominator, inputs)?;
                Ok(num
                    .zip(den)
                    .and_then(|(n, d)| n.checked_mul(*scale)?.checked_div(d)))
            }
            Self::Sum { terms } => sum_terms(ratio, terms, inputs),
        }
    }
}

/// Weighted sum of the terms; `Ok(None)` on overflow.
fn sum_terms(
    ratio: &str,
    terms: &[Term],
    inputs: &RatioInputs,
) -> Result<Option<Decimal>, RatioError> {
    let mut total = Some(Decimal::ZERO);
    for term in terms {
        let value = inputs
            .get(&term.input)
            .ok_or_else(|| RatioError::MissingInput {
                ratio: ratio.to_string(),
                input: term.input.clone(),
            })?;
        total = total.and_then(|acc| acc.checked_add(value.checked_mul(term.coefficient)?));
    }
    Ok(total)
}

/// A named ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioDefinition {
    /// Unique name, e.g. `currentRatio`.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Ratio family.
    pub category: RatioCategory,
    /// Formula.
    pub formula: Formula,
    /// Display format.
    pub format: RatioFormat,
    /// Favorable side of the benchmark.
    pub direction: Direction,
    /// Reference value; `None` leaves the ratio unclassified.
    pub benchmark: Option<Decimal>,
    /// Weight in the health score.
    #[serde(default = "default_weight")]
    pub weight: Decimal,
}

fn default_weight() -> Decimal {
    Decimal::ONE
}

impl RatioDefinition {
    fn builtin(
        name: &str,
        label: &str,
        category: RatioCategory,
        formula: Formula,
        format: RatioFormat,
        direction: Direction,
        benchmark: Option<Decimal>,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            category,
            formula,
            format,
            direction,
            benchmark,
            weight: Decimal::ONE,
        }
    }
}

/// Ordered collection of ratio definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioRegistry {
    definitions: Vec<RatioDefinition>,
}

impl RatioRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition.
    ///
    /// # Errors
    ///
    /// Returns `RatioError::DuplicateRatio` if the name is taken.
    pub fn register(&mut self, definition: RatioDefinition) -> Result<(), RatioError> {
        if self.get(&definition.name).is_some() {
            return Err(RatioError::DuplicateRatio(definition.name));
        }
        self.definitions.push(definition);
        Ok(())
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RatioDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Iterates definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RatioDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no ratio is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The built-in liquidity, solvency, profitability and efficiency ratios.
    #[must_use]
    pub fn builtin() -> Self {
        use Direction::{HigherIsBetter, LowerIsBetter};
        use RatioCategory::{Efficiency, Liquidity, Profitability, Solvency};
        use RatioFormat::{Currency, Days, Percent, Times};

        let days = |numerator: &str, denominator: &str| Formula::Quotient {
            numerator: vec![Term::plus(numerator)],
            denominator: vec![Term::plus(denominator)],
            scale: dec!(365),
        };

        let definitions = vec![
            RatioDefinition::builtin(
                "currentRatio",
                "Ratio de liquidez",
                Liquidity,
                Formula::ratio(inputs::CURRENT_ASSETS, inputs::CURRENT_LIABILITIES),
                Times,
                HigherIsBetter,
                Some(dec!(1.5)),
            ),
            RatioDefinition::builtin(
                "quickRatio",
                "Prueba ácida",
                Liquidity,
                Formula::Quotient {
                    numerator: vec![Term::plus(inputs::CURRENT_ASSETS), Term::minus(inputs::INVENTORY)],
                    denominator: vec![Term::plus(inputs::CURRENT_LIABILITIES)],
                    scale: Decimal::ONE,
                },
                Times,
                HigherIsBetter,
                Some(dec!(1.0)),
            ),
            RatioDefinition::builtin(
                "cashRatio",
                "Ratio de tesorería",
                Liquidity,
                Formula::ratio(inputs::CASH, inputs::CURRENT_LIABILITIES),
                Times,
                HigherIsBetter,
                Some(dec!(0.3)),
            ),
            RatioDefinition::builtin(
                "workingCapital",
                "Fondo de maniobra",
                Liquidity,
                Formula::Sum {
                    terms: vec![Term::plus(inputs::CURRENT_ASSETS), Term::minus(inputs::CURRENT_LIABILITIES)],
                },
                Currency,
                HigherIsBetter,
                None,
            ),
            RatioDefinition::builtin(
                "debtToEquity",
                "Endeudamiento",
                Solvency,
                Formula::ratio(inputs::TOTAL_LIABILITIES, inputs::EQUITY),
                Times,
                LowerIsBetter,
                Some(dec!(1.0)),
            ),
            RatioDefinition::builtin(
                "debtRatio",
                "Ratio de deuda",
                Solvency,
                Formula::ratio(inputs::TOTAL_LIABILITIES, inputs::TOTAL_ASSETS),
                Percent,
                LowerIsBetter,
                Some(dec!(0.6)),
            ),
            RatioDefinition::builtin(
                "equityRatio",
                "Autonomía financiera",
                Solvency,
                Formula::ratio(inputs::EQUITY, inputs::TOTAL_ASSETS),
                Percent,
                HigherIsBetter,
                Some(dec!(0.4)),
            ),
            RatioDefinition::builtin(
                "interestCoverage",
                "Cobertura de intereses",
                Solvency,
                Formula::ratio(inputs::OPERATING_INCOME, inputs::INTEREST_EXPENSE),
                Times,
                HigherIsBetter,
                Some(dec!(3)),
            ),
            RatioDefinition::builtin(
                "roe",
                "Rentabilidad financiera (ROE)",
                Profitability,
                Formula::ratio(inputs::NET_INCOME, inputs::EQUITY),
                Percent,
                HigherIsBetter,
                Some(dec!(0.15)),
            ),
            RatioDefinition::builtin(
                "roa",
                "Rentabilidad económica (ROA)",
                Profitability,
                Formula::ratio(inputs::NET_INCOME, inputs::TOTAL_ASSETS),
                Percent,
                HigherIsBetter,
                Some(dec!(0.05)),
            ),
            RatioDefinition::builtin(
                "grossMargin",
                "Margen bruto",
                Profitability,
                Formula::ratio(inputs::GROSS_PROFIT, inputs::REVENUE),
                Percent,
                HigherIsBetter,
                Some(dec!(0.30)),
            ),
            RatioDefinition::builtin(
                "operatingMargin",
                "Margen operativo",
                Profitability,
                Formula::ratio(inputs::OPERATING_INCOME, inputs::REVENUE),
                Percent,
                HigherIsBetter,
                Some(dec!(0.10)),
            ),
            RatioDefinition::builtin(
                "netMargin",
                "Margen neto",
                Profitability,
                Formula::ratio(inputs::NET_INCOME, inputs::REVENUE),
                Percent,
                HigherIsBetter,
                Some(dec!(0.05)),
            ),
            RatioDefinition::builtin(
                "assetTurnover",
                "Rotación de activos",
                Efficiency,
                Formula::ratio(inputs::REVENUE, inputs::TOTAL_ASSETS),
                Times,
                HigherIsBetter,
                Some(dec!(1.0)),
            ),
            RatioDefinition::builtin(
                "daysSalesOutstanding",
                "Periodo medio de cobro",
                Efficiency,
                days(inputs::RECEIVABLES, inputs::REVENUE),
                Days,
                LowerIsBetter,
                Some(dec!(45)),
            ),
            RatioDefinition::builtin(
                "daysPayablesOutstanding",
                "Periodo medio de pago",
                Efficiency,
                days(inputs::PAYABLES, inputs::COST_OF_SALES),
                Days,
                LowerIsBetter,
                Some(dec!(60)),
            ),
        ];

        Self { definitions }
    }
}
