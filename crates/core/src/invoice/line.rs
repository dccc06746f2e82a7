//! Invoice line items as edited in the invoice form.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvoiceValidationError;

/// One line of an itemized invoice.
///
/// `amount_excl_vat` is already the line total excluding VAT, not a unit
/// price; `quantity` is informational and never multiplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// Server id, or a client-generated temporary id for unsaved lines.
    #[serde(default)]
    pub uuid: Option<String>,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Number of units.
    #[serde(default = "default_quantity", deserialize_with = "crate::amount::lenient")]
    pub quantity: Decimal,
    /// Line total excluding VAT. Negative for credit lines.
    #[serde(default, deserialize_with = "crate::amount::lenient_option")]
    pub amount_excl_vat: Option<Decimal>,
    /// VAT percentage, `None` when no VAT applies.
    #[serde(default, deserialize_with = "crate::amount::lenient_option")]
    pub vat_percentage: Option<Decimal>,
    /// Account identifier chosen in the category dropdown.
    #[serde(default)]
    pub category: Option<String>,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl InvoiceLine {
    /// Creates an empty line with a temporary id (`<prefix><unix millis>`).
    #[must_use]
    pub fn draft(temp_id_prefix: &str) -> Self {
        Self {
            uuid: Some(format!(
                "{temp_id_prefix}{}",
                Utc::now().timestamp_millis()
            )),
            description: String::new(),
            quantity: Decimal::ONE,
            amount_excl_vat: None,
            vat_percentage: None,
            category: None,
        }
    }

    /// Line total excluding VAT, missing treated as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount_excl_vat.unwrap_or(Decimal::ZERO)
    }

    /// True if the line carries a client-generated id.
    #[must_use]
    pub fn has_temporary_id(&self, temp_id_prefix: &str) -> bool {
        self.uuid
            .as_deref()
            .is_some_and(|id| id.starts_with(temp_id_prefix))
    }

    /// Checks the form rules for a single line.
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.quantity < Decimal::ZERO {
            return Err(InvoiceValidationError::NegativeQuantity(self.quantity));
        }
        if let Some(vat) = self.vat_percentage {
            validate_vat_percentage(vat)?;
        }
        Ok(())
    }
}

/// Checks that a VAT percentage lies in `0..=100`.
pub fn validate_vat_percentage(vat: Decimal) -> Result<(), InvoiceValidationError> {
    if vat < Decimal::ZERO || vat > Decimal::ONE_HUNDRED {
        return Err(InvoiceValidationError::VatOutOfRange(vat));
    }
    Ok(())
}

/// Validates every line, reporting the first failure with its position.
pub fn validate_lines(lines: &[InvoiceLine]) -> Result<(), InvoiceValidationError> {
    for (index, line) in lines.iter().enumerate() {
        line.validate()
            .map_err(|source| InvoiceValidationError::Line {
                index,
                source: Box::new(source),
            })?;
    }
    Ok(())
}

/// An itemized invoice as posted by the form. A missing `lines` key is an
/// empty invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    /// Line items.
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,
}
