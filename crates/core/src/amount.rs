//! Decimal normalization at the input boundary.
//!
//! Amounts reach the core as JSON numbers, decimal strings, thousands-grouped
//! strings or garbage. They are parsed exactly once here, so the engines only
//! ever see `Decimal`.

use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Rounds to two fraction digits, half away from zero (currency rounding).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::amount::round2;
///
/// assert_eq!(round2(dec!(2.345)), dec!(2.35));
/// assert_eq!(round2(dec!(-2.345)), dec!(-2.35));
/// ```
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums amounts, saturating at `Decimal::MAX` / `Decimal::MIN` instead of
/// panicking on overflow.
#[must_use]
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `value * percentage / 100`, saturating on overflow.
#[must_use]
pub fn apply_percentage(value: Decimal, percentage: Decimal) -> Decimal {
    value.saturating_mul(percentage / Decimal::ONE_HUNDRED)
}

/// Parses user or API supplied amount text.
///
/// Thousands separators (`,`) and surrounding whitespace are ignored and
/// scientific notation is accepted. Returns `None` for anything that is not a
/// finite decimal (empty text, `NaN`, `abc`).
#[must_use]
pub fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(Decimal),
    Text(String),
    // Out of range numbers, booleans, objects
    Other(IgnoredAny),
}

impl RawAmount {
    fn normalize(self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => parse_decimal_text(&text),
            Self::Other(_) => None,
        }
    }
}

/// Lenient deserializer: number or string, anything unparseable becomes `0`.
///
/// Use as `#[serde(deserialize_with = "tally_core::amount::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(raw.and_then(RawAmount::normalize).unwrap_or(Decimal::ZERO))
}

/// Lenient deserializer that keeps "absent" distinct from zero.
///
/// `null`, missing and unparseable values all become `None`.
pub fn lenient_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(raw.and_then(RawAmount::normalize))
}
