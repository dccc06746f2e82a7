//! Invoice form validation errors.

use rust_decimal::Decimal;
use tally_shared::AppError;
use thiserror::Error;

/// Errors raised by the explicit invoice validation functions.
///
/// The calculation functions never produce these; they exist for the form
/// layer that decides whether an invoice may be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvoiceValidationError {
    /// Line quantity is below zero.
    #[error("Quantity cannot be negative: {0}")]
    NegativeQuantity(Decimal),

    /// VAT percentage outside 0..=100.
    #[error("VAT percentage must be between 0 and 100, got {0}")]
    VatOutOfRange(Decimal),

    /// Flat invoice subtotal is zero or negative.
    #[error("Subtotal must be greater than zero, got {0}")]
    NonPositiveSubtotal(Decimal),

    /// A specific line failed validation.
    #[error("Line {index}: {source}")]
    Line {
        /// Zero-based line position.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: Box<InvoiceValidationError>,
    },
}

impl From<InvoiceValidationError> for AppError {
    fn from(err: InvoiceValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
