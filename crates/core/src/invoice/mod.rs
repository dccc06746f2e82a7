//! Invoice line and totals rules.
//!
//! - Line items and their form validation
//! - Line, invoice and flat-invoice totals (VAT, grand total)
//! - Submission mapping with the fallback account rule

pub mod error;
pub mod line;
pub mod submission;
pub mod totals;

#[cfg(test)]
mod props;

pub use error::InvoiceValidationError;
pub use line::{InvoiceDraft, InvoiceLine, validate_lines, validate_vat_percentage};
pub use submission::{
    BackendLineRecord, FALLBACK_EXPENSE_ACCOUNT_UUID, SubmissionPolicy, TEMP_ID_PREFIX,
    transform_line_for_submission, transform_lines_for_submission,
};
pub use totals::{
    FlatInvoiceInput, FlatInvoiceTotals, InvoiceTotals, LineTotals, compute_flat_invoice_totals,
    compute_invoice_totals, compute_line_totals, sum_line_items,
};
