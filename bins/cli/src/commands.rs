//! Subcommand handlers. Each returns the text to print.

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use tally_core::allocation::{
    Allocatable, AllocationRecord, AllocationTarget, BankTransaction, PurchaseInvoice,
    classify_allocation, compute_remainder,
};
use tally_core::format::{format_currency_in, parse_amount_input};
use tally_core::invoice::{
    InvoiceDraft, SubmissionPolicy, compute_flat_invoice_totals, compute_invoice_totals,
    compute_line_totals, validate_lines,
};
use tally_core::reports::ProfitAndLoss;
use tally_shared::AppConfig;
use tally_shared::types::AccountId;

use crate::input::read_json;
use crate::{Command, DocumentKind};

fn pretty<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to render output")
}

/// Dispatches a parsed subcommand.
pub fn run(command: Command, config: &AppConfig) -> anyhow::Result<String> {
    let locale = config.formatting.locale;
    let currency = config.formatting.currency;

    match command {
        Command::Status { total, allocated } => {
            info!(%total, ?allocated, "classifying allocation");
            let status = classify_allocation(total, allocated);
            pretty(&json!({ "status": status }))
        }
        Command::Remainder { total, allocations } => {
            info!(%total, count = allocations.len(), "computing remainder");
            // Target ids do not influence the remainder
            let records: Vec<AllocationRecord> = allocations
                .into_iter()
                .map(|amount| AllocationRecord::to_account(amount, AccountId::new()))
                .collect();
            let remainder = compute_remainder(total, &records);
            pretty(&json!({
                "remainder": remainder,
                "formatted": format_currency_in(remainder, currency, locale),
            }))
        }
        Command::Summarize { path, kind } => {
            info!(path = %path.display(), ?kind, "summarizing document");
            let (summary, targets) = match kind {
                DocumentKind::Transaction => {
                    let tx: BankTransaction = read_json(&path)?;
                    (tx.summary(), describe_targets(tx.allocations()))
                }
                DocumentKind::Invoice => {
                    let invoice: PurchaseInvoice = read_json(&path)?;
                    (invoice.summary(), describe_targets(invoice.allocations()))
                }
            };
            pretty(&json!({
                "summary": summary,
                "remainderFormatted": format_currency_in(summary.remainder, currency, locale),
                "targets": targets,
            }))
        }
        Command::Invoice { path } => {
            info!(path = %path.display(), "computing invoice totals");
            let draft: InvoiceDraft = read_json(&path)?;
            validate_lines(&draft.lines).map_err(tally_shared::AppError::from)?;

            let policy = SubmissionPolicy::from_config(&config.invoice);
            let line_totals: Vec<_> = draft.lines.iter().map(compute_line_totals).collect();
            let totals = compute_invoice_totals(&draft.lines);
            pretty(&json!({
                "lineTotals": line_totals,
                "totals": totals,
                "totalFormatted": format_currency_in(totals.total_amount, currency, locale),
                "records": policy.transform_all(&draft.lines),
            }))
        }
        Command::Flat { subtotal, vat } => {
            let totals = compute_flat_invoice_totals(subtotal, vat);
            pretty(&totals)
        }
        Command::Format {
            amount,
            currency: requested,
        } => Ok(format_currency_in(
            amount,
            requested.unwrap_or(currency),
            locale,
        )),
        Command::Parse { text } => Ok(parse_amount_input(&text).to_string()),
        Command::Pnl {
            path,
            revenue,
            expenses,
        } => {
            let pnl = match path {
                Some(path) => {
                    let transactions: Vec<BankTransaction> = read_json(&path)?;
                    info!(count = transactions.len(), "profit and loss from transactions");
                    ProfitAndLoss::from_transactions(&transactions)
                }
                None => ProfitAndLoss::from_amounts(
                    revenue.unwrap_or(Decimal::ZERO),
                    expenses.unwrap_or(Decimal::ZERO),
                ),
            };
            pretty(&pnl)
        }
    }
}

fn describe_targets(allocations: &[AllocationRecord]) -> Vec<String> {
    allocations
        .iter()
        .map(|record| match record.target() {
            AllocationTarget::Account(id) => format!("account:{id}"),
            AllocationTarget::Invoice(id) => format!("invoice:{id}"),
        })
        .collect()
}
