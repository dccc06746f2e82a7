//! Assignment status classification.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How much of a transaction or invoice has been linked to accounts/invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    /// The allocations exactly cover the total.
    Assigned,
    /// Something is allocated, but less than the total.
    PartiallyAssigned,
    /// Nothing is allocated (also used for over-allocation).
    Unassigned,
}

impl AssignmentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::PartiallyAssigned => "partially-assigned",
            Self::Unassigned => "unassigned",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "assigned" => Some(Self::Assigned),
            "partially-assigned" => Some(Self::PartiallyAssigned),
            "unassigned" => Some(Self::Unassigned),
            _ => None,
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies how far `total_amount` has been allocated.
///
/// Both inputs are compared by absolute value, so the sign of either side
/// never matters. A missing allocation counts as zero. Over-allocation
/// (`allocated > total`) is reported as [`AssignmentStatus::Unassigned`];
/// use [`compute_remainder`](super::compute_remainder) to tell it apart.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::allocation::{classify_allocation, AssignmentStatus};
///
/// assert_eq!(classify_allocation(dec!(100), Some(dec!(100))), AssignmentStatus::Assigned);
/// assert_eq!(classify_allocation(dec!(-100), Some(dec!(60))), AssignmentStatus::PartiallyAssigned);
/// assert_eq!(classify_allocation(dec!(100), None), AssignmentStatus::Unassigned);
/// ```
#[must_use]
pub fn classify_allocation(
    total_amount: Decimal,
    amount_allocated: Option<Decimal>,
) -> AssignmentStatus {
    let allocated = amount_allocated.unwrap_or(Decimal::ZERO).abs();
    let total = total_amount.abs();

    if allocated.is_zero() {
        AssignmentStatus::Unassigned
    } else if allocated == total {
        AssignmentStatus::Assigned
    } else if allocated < total {
        AssignmentStatus::PartiallyAssigned
    } else {
        tracing::debug!(%total, %allocated, "over-allocation classified as unassigned");
        AssignmentStatus::Unassigned
    }
}
