//! Profit and loss summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{BankTransaction, Category};
use crate::amount::round2;
use crate::format::percentage_of;

/// Profit and loss figures for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAndLoss {
    /// Total income.
    pub revenue: Decimal,
    /// Total expenses, as a positive amount.
    pub expenses: Decimal,
    /// `revenue - expenses`.
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue. Zero when there is no revenue.
    pub margin: Decimal,
}

impl ProfitAndLoss {
    /// Builds the summary from revenue and (positive) expenses.
    #[must_use]
    pub fn from_amounts(revenue: Decimal, expenses: Decimal) -> Self {
        let revenue = round2(revenue);
        let expenses = round2(expenses);
        let net_profit = revenue.saturating_sub(expenses);
        Self {
            revenue,
            expenses,
            net_profit,
            margin: percentage_of(net_profit, revenue),
        }
    }

    /// Builds the summary from bank transactions, split by sign.
    #[must_use]
    pub fn from_transactions(transactions: &[BankTransaction]) -> Self {
        let (revenue, expenses) =
            transactions
                .iter()
                .fold((Decimal::ZERO, Decimal::ZERO), |(rev, exp), tx| {
                    match tx.category() {
                        Category::Income => (rev.saturating_add(tx.amount.amount), exp),
                        Category::Expense => (rev, exp.saturating_add(tx.amount.amount.abs())),
                    }
                });
        Self::from_amounts(revenue, expenses)
    }

    /// True if the period made a loss.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.net_profit < Decimal::ZERO
    }
}
