//! Reconciliation and invoice calculation rules for Tally.
//!
//! This crate contains pure calculation logic with ZERO I/O dependencies.
//! Every function is total: bad input degrades to zero or "unassigned"
//! instead of failing.
//!
//! # Modules
//!
//! - `allocation` - Linked / partially linked / unlinked status and remainders
//! - `invoice` - Line, invoice and flat-invoice totals, submission mapping
//! - `format` - Currency display, amount input parsing, percentages
//! - `reports` - Profit and loss summary
//! - `editing` - Click-to-edit allocation state machine
//! - `amount` - Decimal normalization at the input boundary

pub mod allocation;
pub mod amount;
pub mod editing;
pub mod format;
pub mod invoice;
pub mod reports;
