//! Display formatting and input parsing for amounts.

pub mod currency;
pub mod input;
pub mod percentage;

#[cfg(test)]
mod props;

pub use currency::{format_currency, format_currency_in};
pub use input::{format_amount_input, parse_amount_input};
pub use percentage::{format_percentage, percentage_of, round_percentage};
