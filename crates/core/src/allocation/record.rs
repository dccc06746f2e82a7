//! Allocation records and the remainder rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, InvoiceId};
use uuid::Uuid;

use crate::amount::saturating_sum;

/// Kind of bucket an allocation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A ledger account (accounting bucket).
    Account,
    /// A purchase or sales invoice.
    Invoice,
}

/// Typed view of an allocation's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationTarget {
    /// A ledger account.
    Account(AccountId),
    /// A purchase or sales invoice.
    Invoice(InvoiceId),
}

/// One portion of a parent's value assigned to an account or invoice.
///
/// Wire shape: `{"amount": "60.00", "targetKind": "account", "targetId": "<uuid>"}`.
/// The stored sign is irrelevant; every rule uses the absolute amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRecord {
    /// Allocated amount, normalized from number or string on ingress.
    #[serde(deserialize_with = "crate::amount::lenient")]
    pub amount: Decimal,
    /// Kind of target.
    pub target_kind: TargetKind,
    /// Identifier of the account or invoice.
    pub target_id: Uuid,
}

impl AllocationRecord {
    /// Allocation against a ledger account.
    #[must_use]
    pub const fn to_account(amount: Decimal, account_id: AccountId) -> Self {
        Self {
            amount,
            target_kind: TargetKind::Account,
            target_id: account_id.into_inner(),
        }
    }

    /// Allocation against an invoice.
    #[must_use]
    pub const fn to_invoice(amount: Decimal, invoice_id: InvoiceId) -> Self {
        Self {
            amount,
            target_kind: TargetKind::Invoice,
            target_id: invoice_id.into_inner(),
        }
    }

    /// Returns the target as a typed id.
    #[must_use]
    pub const fn target(&self) -> AllocationTarget {
        match self.target_kind {
            TargetKind::Account => AllocationTarget::Account(AccountId::from_uuid(self.target_id)),
            TargetKind::Invoice => AllocationTarget::Invoice(InvoiceId::from_uuid(self.target_id)),
        }
    }
}

/// Sum of the absolute allocation amounts. Never negative.
#[must_use]
pub fn total_allocated(allocations: &[AllocationRecord]) -> Decimal {
    saturating_sum(allocations.iter().map(|a| a.amount.abs()))
}

/// Signed amount of `total_amount` still left to allocate.
///
/// The remainder carries the sign of the parent total, so an expense of
/// `-100` with `60` allocated has `-40` left while income of `100` has `40`.
/// Over-allocation is not clamped: the absolute remainder goes negative and
/// the sign flips relative to the parent.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::allocation::{compute_remainder, AllocationRecord};
/// use tally_shared::types::AccountId;
///
/// let allocations = vec![AllocationRecord::to_account(dec!(60), AccountId::new())];
/// assert_eq!(compute_remainder(dec!(-100), &allocations), dec!(-40));
/// assert_eq!(compute_remainder(dec!(100), &allocations), dec!(40));
/// ```
#[must_use]
pub fn compute_remainder(total_amount: Decimal, allocations: &[AllocationRecord]) -> Decimal {
    let absolute_remainder = total_amount.abs().saturating_sub(total_allocated(allocations));
    if absolute_remainder.is_zero() {
        return Decimal::ZERO;
    }
    if total_amount.is_sign_negative() && !total_amount.is_zero() {
        -absolute_remainder
    } else {
        absolute_remainder
    }
}
