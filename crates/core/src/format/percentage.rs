//! Percentage helpers.

use rust_decimal::Decimal;

use crate::amount::round2;

/// Rounds a percentage to two decimals.
#[must_use]
pub fn round_percentage(value: Decimal) -> Decimal {
    round2(value)
}

/// `part / whole * 100`, rounded; a zero `whole` gives `0`.
///
/// A ratio too large to represent saturates with the sign of the result.
#[must_use]
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    match part.checked_div(whole) {
        Some(ratio) => round_percentage(ratio.saturating_mul(Decimal::ONE_HUNDRED)),
        None if part.is_sign_negative() == whole.is_sign_negative() => Decimal::MAX,
        None => Decimal::MIN,
    }
}

/// Renders a percentage without trailing zeros: `21%`, `12.5%`.
#[must_use]
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", round_percentage(value).normalize())
}
