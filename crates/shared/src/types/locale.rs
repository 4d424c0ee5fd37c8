//! Number formatting locale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used when formatting amounts and day counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Spanish (Spain): `1.234,56 €`, `45 días`.
    #[default]
    #[serde(rename = "es-ES")]
    EsEs,
    /// English (United States): `$1,234.56`, `45 days`.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// Separator between groups of thousands.
    #[must_use]
    pub const fn thousands_separator(self) -> char {
        match self {
            Self::EsEs => '.',
            Self::EnUs => ',',
        }
    }

    /// Separator between the integer and fractional part.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EsEs => ',',
            Self::EnUs => '.',
        }
    }

    /// Suffix appended to day counts.
    #[must_use]
    pub const fn days_suffix(self) -> &'static str {
        match self {
            Self::EsEs => " días",
            Self::EnUs => " days",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EsEs => write!(f, "es-ES"),
            Self::EnUs => write!(f, "en-US"),
        }
    }
}
