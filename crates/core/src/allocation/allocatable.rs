//! Entities that can be allocated: bank transactions and purchase invoices.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{InvoiceId, Money, TransactionId};

use super::category::{Category, categorize};
use super::record::{AllocationRecord, compute_remainder, total_allocated};
use super::status::{AssignmentStatus, classify_allocation};

/// Anything with a total that is split over allocation records.
///
/// Implementors only supply the raw data; the derived values come from the
/// default methods so every entity follows the same rules.
pub trait Allocatable {
    /// Full signed value to be allocated.
    fn total_amount(&self) -> Decimal;

    /// Allocation records against this entity.
    fn allocations(&self) -> &[AllocationRecord];

    /// Sum of absolute allocation amounts.
    fn amount_allocated(&self) -> Decimal {
        total_allocated(self.allocations())
    }

    /// Linked / partially linked / unlinked.
    fn assignment_status(&self) -> AssignmentStatus {
        classify_allocation(self.total_amount(), Some(self.amount_allocated()))
    }

    /// Signed amount left to allocate.
    fn remainder(&self) -> Decimal {
        compute_remainder(self.total_amount(), self.allocations())
    }

    /// All derived allocation values in one record.
    fn summary(&self) -> AllocationSummary {
        let total_amount = self.total_amount();
        let amount_allocated = self.amount_allocated();
        AllocationSummary {
            status: classify_allocation(total_amount, Some(amount_allocated)),
            total_amount,
            amount_allocated,
            remainder: self.remainder(),
            category: categorize(total_amount),
            over_allocated: amount_allocated > total_amount.abs(),
        }
    }
}

/// Derived allocation state, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    /// Badge status.
    pub status: AssignmentStatus,
    /// Parent total (signed).
    pub total_amount: Decimal,
    /// Sum of absolute allocations.
    pub amount_allocated: Decimal,
    /// Signed amount left to allocate.
    pub remainder: Decimal,
    /// Income or expense.
    pub category: Category,
    /// More is allocated than the total. `status` reads `unassigned` then.
    pub over_allocated: bool,
}

/// A bank transaction as read from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Booking date.
    pub date: NaiveDate,
    /// Bank description / counterparty text.
    #[serde(default)]
    pub description: String,
    /// Signed amount: positive is money in.
    pub amount: Money,
    /// Allocations to accounts or invoices.
    #[serde(default)]
    pub allocations: Vec<AllocationRecord>,
}

impl BankTransaction {
    /// Income or expense, by sign of the amount.
    #[must_use]
    pub fn category(&self) -> Category {
        categorize(self.amount.amount)
    }
}

impl Allocatable for BankTransaction {
    fn total_amount(&self) -> Decimal {
        self.amount.amount
    }

    fn allocations(&self) -> &[AllocationRecord] {
        &self.allocations
    }
}

/// A purchase invoice as read from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Supplier's invoice number.
    #[serde(default)]
    pub invoice_number: String,
    /// Supplier name.
    #[serde(default)]
    pub contact_name: Option<String>,
    /// Invoice date.
    pub date: NaiveDate,
    /// Grand total including VAT.
    pub total: Money,
    /// Payments linked to this invoice.
    #[serde(default)]
    pub allocations: Vec<AllocationRecord>,
}

impl Allocatable for PurchaseInvoice {
    fn total_amount(&self) -> Decimal {
        self.total.amount
    }

    fn allocations(&self) -> &[AllocationRecord] {
        &self.allocations
    }
}
