//! Line, invoice and flat-invoice total calculations.
//!
//! These are total functions: they never validate and never fail. Range
//! checks live in [`super::line::validate_lines`] and
//! [`FlatInvoiceInput::validate`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvoiceValidationError;
use super::line::{InvoiceLine, validate_vat_percentage};
use crate::amount::{apply_percentage, round2, saturating_sum};

/// Per-line derived amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotals {
    /// Line amount excluding VAT.
    pub subtotal: Decimal,
    /// VAT on the line.
    pub vat_amount: Decimal,
    /// Line amount including VAT.
    pub total_amount: Decimal,
}

/// Invoice-level derived amounts, each rounded to 2 fraction digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Sum of line amounts excluding VAT.
    pub subtotal: Decimal,
    /// Sum of line VAT amounts.
    pub vat_amount: Decimal,
    /// `subtotal + vat_amount`.
    pub total_amount: Decimal,
}

/// VAT and grand total for a non-itemized invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatInvoiceTotals {
    /// `round2(subtotal * vat / 100)`.
    pub vat_amount: Decimal,
    /// `round2(subtotal + vat_amount)`.
    pub total_amount: Decimal,
}

/// Sums `amount_excl_vat` over all lines.
///
/// `None` (no lines yet) and an empty slice both give zero. Missing line
/// amounts count as zero and credit lines subtract naturally. The sum
/// saturates instead of overflowing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::invoice::sum_line_items;
///
/// assert_eq!(sum_line_items(None), dec!(0));
/// ```
#[must_use]
pub fn sum_line_items(lines: Option<&[InvoiceLine]>) -> Decimal {
    saturating_sum(lines.unwrap_or_default().iter().map(InvoiceLine::amount))
}

/// Derives subtotal, VAT and total for one line.
#[must_use]
pub fn compute_line_totals(line: &InvoiceLine) -> LineTotals {
    let subtotal = round2(line.amount());
    let vat_amount = line
        .vat_percentage
        .map_or(Decimal::ZERO, |vat| round2(apply_percentage(line.amount(), vat)));
    LineTotals {
        subtotal,
        vat_amount,
        total_amount: round2(subtotal.saturating_add(vat_amount)),
    }
}

/// Derives the invoice totals from its lines.
///
/// VAT is rounded per line before summing, matching what each line shows.
#[must_use]
pub fn compute_invoice_totals(lines: &[InvoiceLine]) -> InvoiceTotals {
    let subtotal = round2(sum_line_items(Some(lines)));
    let vat_amount = round2(saturating_sum(
        lines.iter().map(|line| compute_line_totals(line).vat_amount),
    ));
    InvoiceTotals {
        subtotal,
        vat_amount,
        total_amount: round2(subtotal.saturating_add(vat_amount)),
    }
}

/// VAT amount and grand total of a flat (non-itemized) invoice.
///
/// Callers recompute on every change of either input.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::invoice::compute_flat_invoice_totals;
///
/// let totals = compute_flat_invoice_totals(dec!(100), dec!(21));
/// assert_eq!(totals.vat_amount, dec!(21));
/// assert_eq!(totals.total_amount, dec!(121));
/// ```
#[must_use]
pub fn compute_flat_invoice_totals(subtotal: Decimal, vat_percentage: Decimal) -> FlatInvoiceTotals {
    let vat_amount = round2(apply_percentage(subtotal, vat_percentage));
    FlatInvoiceTotals {
        vat_amount,
        total_amount: round2(subtotal.saturating_add(vat_amount)),
    }
}

/// The editable inputs of a flat invoice form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatInvoiceInput {
    /// Amount excluding VAT.
    #[serde(deserialize_with = "crate::amount::lenient")]
    pub subtotal: Decimal,
    /// VAT percentage.
    #[serde(deserialize_with = "crate::amount::lenient")]
    pub vat_percentage: Decimal,
}

impl FlatInvoiceInput {
    /// Current totals for these inputs.
    #[must_use]
    pub fn totals(&self) -> FlatInvoiceTotals {
        compute_flat_invoice_totals(self.subtotal, self.vat_percentage)
    }

    /// Form rules: `subtotal > 0` and `0 <= vat <= 100`.
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.subtotal <= Decimal::ZERO {
            return Err(InvoiceValidationError::NonPositiveSubtotal(self.subtotal));
        }
        validate_vat_percentage(self.vat_percentage)
    }
}
