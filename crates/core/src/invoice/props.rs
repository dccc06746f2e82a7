//! Property-based tests for invoice totals.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::line::InvoiceLine;
use super::totals::{compute_flat_invoice_totals, compute_invoice_totals, sum_line_items};

/// Strategy to generate line amounts including credits (-10,000.00 to 10,000.00).
fn line_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate VAT percentages (0 to 100, two decimals).
fn vat_percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate positive subtotals (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn lines_strategy() -> impl Strategy<Value = Vec<InvoiceLine>> {
    prop::collection::vec(
        (line_amount(), prop::option::of(vat_percentage())),
        0..10,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(amount, vat)| InvoiceLine {
                uuid: None,
                description: String::new(),
                quantity: Decimal::ONE,
                amount_excl_vat: Some(amount),
                vat_percentage: vat,
                category: None,
            })
            .collect()
    })
}

/// Lines where credits outweigh charges, so the invoice totals below zero.
fn credit_heavy_lines_strategy() -> impl Strategy<Value = Vec<InvoiceLine>> {
    lines_strategy().prop_map(|lines| {
        lines
            .into_iter()
            .map(|mut line| {
                line.amount_excl_vat = line.amount_excl_vat.map(|amount| -amount.abs());
                line
            })
            .collect()
    })
}

fn negated(lines: &[InvoiceLine]) -> Vec<InvoiceLine> {
    lines
        .iter()
        .cloned()
        .map(|mut line| {
            line.amount_excl_vat = line.amount_excl_vat.map(|amount| -amount);
            line
        })
        .collect()
}

fn has_at_most_2_decimals(value: Decimal) -> bool {
    let scaled = value * Decimal::ONE_HUNDRED;
    scaled == scaled.trunc()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Flat totals SHALL always be rounded to 2 decimals and satisfy
    /// `total = subtotal + vat` for 2-decimal subtotals.
    #[test]
    fn prop_flat_total_is_subtotal_plus_vat(
        subtotal in positive_amount(),
        vat in vat_percentage(),
    ) {
        let totals = compute_flat_invoice_totals(subtotal, vat);
        prop_assert!(has_at_most_2_decimals(totals.vat_amount));
        prop_assert!(has_at_most_2_decimals(totals.total_amount));
        prop_assert_eq!(totals.total_amount, subtotal + totals.vat_amount);
    }

    /// VAT on a positive subtotal SHALL never exceed the subtotal.
    #[test]
    fn prop_vat_bounded_by_subtotal(
        subtotal in positive_amount(),
        vat in vat_percentage(),
    ) {
        let totals = compute_flat_invoice_totals(subtotal, vat);
        prop_assert!(totals.vat_amount >= Decimal::ZERO);
        prop_assert!(totals.vat_amount <= subtotal);
    }

    /// Invoice subtotal SHALL equal the exact line sum for 2-decimal lines.
    #[test]
    fn prop_invoice_subtotal_matches_line_sum(lines in lines_strategy()) {
        let totals = compute_invoice_totals(&lines);
        prop_assert_eq!(totals.subtotal, sum_line_items(Some(&lines)));
        prop_assert_eq!(totals.total_amount, totals.subtotal + totals.vat_amount);
    }

    /// Line order SHALL NOT affect the totals.
    #[test]
    fn prop_invoice_totals_order_independent(lines in lines_strategy()) {
        let mut reversed = lines.clone();
        reversed.reverse();
        prop_assert_eq!(compute_invoice_totals(&lines), compute_invoice_totals(&reversed));
    }

    /// An invoice made of credit lines SHALL total at most zero, with
    /// VAT never positive and every figure rounded to 2 decimals.
    #[test]
    fn prop_credit_invoice_totals_not_positive(lines in credit_heavy_lines_strategy()) {
        let totals = compute_invoice_totals(&lines);
        prop_assert!(totals.subtotal <= Decimal::ZERO);
        prop_assert!(totals.vat_amount <= Decimal::ZERO);
        prop_assert!(totals.total_amount <= Decimal::ZERO);
        prop_assert!(has_at_most_2_decimals(totals.vat_amount));
        prop_assert!(has_at_most_2_decimals(totals.total_amount));
        prop_assert_eq!(totals.total_amount, totals.subtotal + totals.vat_amount);
    }

    /// Negating every line SHALL negate the totals exactly (rounding is
    /// symmetric around zero).
    #[test]
    fn prop_invoice_totals_sign_symmetric(lines in lines_strategy()) {
        let totals = compute_invoice_totals(&lines);
        let credited = compute_invoice_totals(&negated(&lines));
        prop_assert_eq!(credited.subtotal, -totals.subtotal);
        prop_assert_eq!(credited.vat_amount, -totals.vat_amount);
        prop_assert_eq!(credited.total_amount, -totals.total_amount);
    }

    /// Flat totals SHALL be sign symmetric in the subtotal.
    #[test]
    fn prop_flat_totals_sign_symmetric(
        subtotal in positive_amount(),
        vat in vat_percentage(),
    ) {
        let charge = compute_flat_invoice_totals(subtotal, vat);
        let credit = compute_flat_invoice_totals(-subtotal, vat);
        prop_assert_eq!(credit.vat_amount, -charge.vat_amount);
        prop_assert_eq!(credit.total_amount, -charge.total_amount);
    }
}
