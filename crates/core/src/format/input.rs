//! Parsing and formatting for interactive amount fields.

use rust_decimal::Decimal;
use tally_shared::types::Locale;

use super::currency::grouped_digits;
use crate::amount::{parse_decimal_text, round2};

/// Parses what the user typed into an amount field.
///
/// Thousands separators are ignored. Anything unparseable yields `0`, never
/// an error, so a half-typed field does not break the form.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::format::parse_amount_input;
///
/// assert_eq!(parse_amount_input("1,234.56"), dec!(1234.56));
/// assert_eq!(parse_amount_input("abc"), dec!(0));
/// ```
#[must_use]
pub fn parse_amount_input(text: &str) -> Decimal {
    parse_decimal_text(text).unwrap_or(Decimal::ZERO)
}

/// Renders an amount for an input field: grouped, exactly two decimals.
///
/// `None` renders as an empty field.
#[must_use]
pub fn format_amount_input(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let sign = if round2(value) < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{}", grouped_digits(value, Locale::EnUs))
}
