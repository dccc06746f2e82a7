//! Locale-aware currency formatting.

use rust_decimal::Decimal;
use tally_shared::types::{Currency, Locale};

use crate::amount::round2;

/// Renders `|value|` with exactly two decimals and grouped thousands.
pub(crate) fn grouped_digits(value: Decimal, locale: Locale) -> String {
    let mut rounded = round2(value.abs());
    rounded.rescale(2);
    let text = rounded.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.group_separator());
        }
        grouped.push(digit);
    }
    grouped.push(locale.decimal_separator());
    grouped.push_str(frac_part);
    grouped
}

/// Formats an amount in the default `en-US` locale, e.g. `€1,234.56`.
///
/// Display rounding is the same `round2` the engines use.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::format::format_currency;
/// use tally_shared::Currency;
///
/// assert_eq!(format_currency(dec!(-40), Currency::Eur), "-€40.00");
/// ```
#[must_use]
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    format_currency_in(amount, currency, Locale::EnUs)
}

/// Formats an amount for the given locale.
///
/// `en-US` puts the sign before the symbol (`-€40.00`); `nl-NL` separates the
/// symbol with a space and puts the sign on the number (`€ -40,00`).
#[must_use]
pub fn format_currency_in(amount: Decimal, currency: Currency, locale: Locale) -> String {
    let negative = round2(amount) < Decimal::ZERO;
    let sign = if negative { "-" } else { "" };
    let digits = grouped_digits(amount, locale);
    let symbol = currency.symbol();

    match locale {
        Locale::EnUs => format!("{sign}{symbol}{digits}"),
        Locale::NlNl => format!("{symbol} {sign}{digits}"),
    }
}
