//! Property-based tests for amount formatting and parsing.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{Currency, Locale};

use super::currency::format_currency_in;
use super::input::{format_amount_input, parse_amount_input};
use crate::amount::round2;

/// Strategy to generate signed amounts with up to 4 decimals.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Parsing a formatted input SHALL give back the amount rounded to cents.
    #[test]
    fn prop_input_round_trip(x in any_amount()) {
        prop_assert_eq!(parse_amount_input(&format_amount_input(Some(x))), round2(x));
    }

    /// Formatted input SHALL always carry exactly two decimals.
    #[test]
    fn prop_input_has_two_decimals(x in any_amount()) {
        let text = format_amount_input(Some(x));
        let (_, fraction) = text.rsplit_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    /// Both locales SHALL render the same digits, only separators differ.
    #[test]
    fn prop_locales_agree_on_digits(x in any_amount()) {
        let digits = |s: String| s.chars().filter(char::is_ascii_digit).collect::<String>();
        prop_assert_eq!(
            digits(format_currency_in(x, Currency::Eur, Locale::EnUs)),
            digits(format_currency_in(x, Currency::Eur, Locale::NlNl))
        );
    }

    /// Parsing arbitrary text SHALL never panic.
    #[test]
    fn prop_parse_never_panics(text in ".{0,20}") {
        let _ = parse_amount_input(&text);
    }
}
