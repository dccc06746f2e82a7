//! Payment/allocation reconciliation rules.
//!
//! This module decides whether a transaction or invoice is linked:
//! - Assignment status (assigned, partially assigned, unassigned)
//! - Signed remainder still to allocate
//! - Income/expense categorization
//! - The `Allocatable` trait tying these to entities

pub mod allocatable;
pub mod category;
pub mod record;
pub mod status;

#[cfg(test)]
mod props;

pub use allocatable::{Allocatable, AllocationSummary, BankTransaction, PurchaseInvoice};
pub use category::{Category, categorize};
pub use record::{AllocationRecord, AllocationTarget, TargetKind, compute_remainder, total_allocated};
pub use status::{AssignmentStatus, classify_allocation};
