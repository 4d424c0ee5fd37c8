//! Ratio display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use super::definition::RatioFormat;
use crate::Locale;

/// Placeholder for undefined values.
pub const UNDEFINED: &str = "-";

/// Formats a ratio value for display.
///
/// - `percent`: value x 100, two decimals, `%` suffix (`12.50%`)
/// - `times`: two decimals, `x` suffix (`1.50x`)
/// - `currency`: locale separators and symbol (`1.234,56 €`, `$1,234.56`)
/// - `days`: rounded whole days and locale suffix (`45 días`)
///
/// Midpoints round away from zero. `None` formats as `-`.
#[must_use]
pub fn format_ratio(value: Option<Decimal>, format: RatioFormat, locale: Locale) -> String {
    let Some(value) = value else {
        return UNDEFINED.to_string();
    };

    match format {
        RatioFormat::Percent => match value.checked_mul(Decimal::ONE_HUNDRED) {
            Some(percent) => format!("{:.2}%", round(percent, 2)),
            None => UNDEFINED.to_string(),
        },
        RatioFormat::Times => format!("{:.2}x", round(value, 2)),
        RatioFormat::Currency => format_currency(value, locale),
        RatioFormat::Days => format!("{:.0}{}", round(value, 0), locale.days_suffix()),
    }
}

/// Formats a money amount with the locale's separators and symbol.
#[must_use]
pub fn format_currency(value: Decimal, locale: Locale) -> String {
    let rounded = round(value, 2);
    let number = group_digits(rounded.abs(), locale);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    match locale {
        Locale::EsEs => format!("{sign}{number} €"),
        Locale::EnUs => format!("{sign}${number}"),
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_digits(value: Decimal, locale: Locale) -> String {
    let plain = format!("{value:.2}");
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(locale.thousands_separator());
        }
        grouped.push(digit);
    }

    grouped.push(locale.decimal_separator());
    grouped.push_str(fraction);
    grouped
}
