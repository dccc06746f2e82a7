//! Mapping form lines to the records the invoice API accepts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::InvoiceConfig;

use super::line::InvoiceLine;

/// Prefix of ids the form assigns to lines that were never saved.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Account that uncategorized lines are booked on ("other expenses").
pub const FALLBACK_EXPENSE_ACCOUNT_UUID: &str = "00000000-0000-0000-0000-000000004999";

/// Line record in the shape the invoice endpoints expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendLineRecord {
    /// Existing line id. Omitted for new lines so the API creates them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Free text.
    pub description: String,
    /// Number of units.
    pub quantity: Decimal,
    /// Line total excluding VAT.
    pub total_amount_excl_vat: Decimal,
    /// VAT percentage.
    pub vat_percentage: Option<Decimal>,
    /// Account the line is booked on.
    pub account_uuid: String,
}

/// Rules for turning form lines into API records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// Account used when a line has no category.
    pub fallback_account_uuid: String,
    /// Ids starting with this are dropped.
    pub temp_id_prefix: String,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            fallback_account_uuid: FALLBACK_EXPENSE_ACCOUNT_UUID.to_string(),
            temp_id_prefix: TEMP_ID_PREFIX.to_string(),
        }
    }
}

impl SubmissionPolicy {
    /// Applies configured overrides on top of the defaults.
    #[must_use]
    pub fn from_config(config: &InvoiceConfig) -> Self {
        let defaults = Self::default();
        Self {
            fallback_account_uuid: config
                .fallback_account_uuid
                .clone()
                .unwrap_or(defaults.fallback_account_uuid),
            temp_id_prefix: config
                .temp_id_prefix
                .clone()
                .unwrap_or(defaults.temp_id_prefix),
        }
    }

    /// Maps one form line to an API record.
    #[must_use]
    pub fn transform(&self, line: &InvoiceLine) -> BackendLineRecord {
        let uuid = if line.has_temporary_id(&self.temp_id_prefix) {
            tracing::debug!(uuid = ?line.uuid, "dropping temporary line id");
            None
        } else {
            line.uuid.clone()
        };

        let account_uuid = match line.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => category.to_string(),
            _ => {
                tracing::debug!(
                    account = %self.fallback_account_uuid,
                    "uncategorized line booked on fallback account"
                );
                self.fallback_account_uuid.clone()
            }
        };

        BackendLineRecord {
            uuid,
            description: line.description.clone(),
            quantity: line.quantity,
            total_amount_excl_vat: line.amount(),
            vat_percentage: line.vat_percentage,
            account_uuid,
        }
    }

    /// Maps every line, preserving order.
    #[must_use]
    pub fn transform_all(&self, lines: &[InvoiceLine]) -> Vec<BackendLineRecord> {
        lines.iter().map(|line| self.transform(line)).collect()
    }
}

/// Maps a form line using the system defaults.
#[must_use]
pub fn transform_line_for_submission(line: &InvoiceLine) -> BackendLineRecord {
    SubmissionPolicy::default().transform(line)
}

/// Maps all lines using the system defaults.
#[must_use]
pub fn transform_lines_for_submission(lines: &[InvoiceLine]) -> Vec<BackendLineRecord> {
    SubmissionPolicy::default().transform_all(lines)
}
