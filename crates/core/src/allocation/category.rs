//! Income/expense categorization by sign.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Money in (zero included).
    Income,
    /// Money out.
    Expense,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Categorizes an amount by sign. Zero is income.
#[must_use]
pub fn categorize(amount: Decimal) -> Category {
    if amount >= Decimal::ZERO {
        Category::Income
    } else {
        Category::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_categorize() {
        assert_eq!(categorize(dec!(0.01)), Category::Income);
        assert_eq!(categorize(dec!(-0.01)), Category::Expense);
        assert_eq!(categorize(Decimal::ZERO), Category::Income);
    }

    #[test]
    fn test_display_matches_labels() {
        assert_eq!(Category::Income.to_string(), "Income");
        assert_eq!(Category::Expense.to_string(), "Expense");
        assert_eq!(serde_json::to_string(&Category::Expense).unwrap(), "\"Expense\"");
    }
}
