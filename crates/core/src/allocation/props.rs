//! Property-based tests for allocation rules.
//!
//! - Status is sign-agnostic
//! - Status is deterministic
//! - Remainder carries the parent's sign and matches the status

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::AccountId;

use super::record::{AllocationRecord, compute_remainder, total_allocated};
use super::status::{AssignmentStatus, classify_allocation};

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate allocation amounts of either sign.
fn allocation_amounts() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(
        (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        0..8,
    )
}

fn records(amounts: &[Decimal]) -> Vec<AllocationRecord> {
    amounts
        .iter()
        .map(|a| AllocationRecord::to_account(*a, AccountId::new()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* total and allocated amount, flipping either sign SHALL NOT
    /// change the status.
    #[test]
    fn prop_status_symmetric_under_sign_flip(
        total in signed_amount(),
        allocated in signed_amount(),
    ) {
        let expected = classify_allocation(total, Some(allocated));
        prop_assert_eq!(classify_allocation(-total, Some(-allocated)), expected);
        prop_assert_eq!(classify_allocation(-total, Some(allocated)), expected);
        prop_assert_eq!(classify_allocation(total, Some(-allocated)), expected);
    }

    /// Calling classify twice with the same inputs SHALL give the same result.
    #[test]
    fn prop_status_is_deterministic(
        total in signed_amount(),
        allocated in signed_amount(),
    ) {
        prop_assert_eq!(
            classify_allocation(total, Some(allocated)),
            classify_allocation(total, Some(allocated))
        );
    }

    /// A missing allocation SHALL always classify as unassigned.
    #[test]
    fn prop_missing_allocation_unassigned(total in signed_amount()) {
        prop_assert_eq!(classify_allocation(total, None), AssignmentStatus::Unassigned);
    }

    /// The absolute remainder plus what is allocated SHALL equal the
    /// absolute total.
    #[test]
    fn prop_remainder_accounts_for_everything(
        total in signed_amount(),
        amounts in allocation_amounts(),
    ) {
        let allocations = records(&amounts);
        let remainder = compute_remainder(total, &allocations);
        let allocated = total_allocated(&allocations);
        let absolute_remainder = if total < Decimal::ZERO { -remainder } else { remainder };
        prop_assert_eq!(absolute_remainder + allocated, total.abs());
    }

    /// Assigned status SHALL coincide with a zero remainder whenever
    /// anything is allocated.
    #[test]
    fn prop_assigned_iff_zero_remainder(
        total in signed_amount(),
        amounts in allocation_amounts(),
    ) {
        let allocations = records(&amounts);
        let allocated = total_allocated(&allocations);
        prop_assume!(!allocated.is_zero());

        let status = classify_allocation(total, Some(allocated));
        let remainder = compute_remainder(total, &allocations);
        prop_assert_eq!(status == AssignmentStatus::Assigned, remainder.is_zero());
    }

    /// Partial allocation SHALL leave a remainder with the parent's sign.
    #[test]
    fn prop_partial_remainder_has_parent_sign(
        total in signed_amount(),
        amounts in allocation_amounts(),
    ) {
        let allocations = records(&amounts);
        let allocated = total_allocated(&allocations);
        prop_assume!(
            classify_allocation(total, Some(allocated)) == AssignmentStatus::PartiallyAssigned
        );

        let remainder = compute_remainder(total, &allocations);
        prop_assert_eq!(remainder.is_sign_negative(), total.is_sign_negative());
    }
}
