//! Allocation editing error types.

use rust_decimal::Decimal;
use thiserror::Error;

use super::editor::EditPhase;

/// Errors raised by [`AllocationEditor`](super::AllocationEditor) transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The action is not allowed in the current phase.
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        /// Phase the editor was in.
        from: EditPhase,
        /// Attempted action.
        action: &'static str,
    },

    /// Entered amount is larger than what can be allocated.
    #[error("Amount {amount} exceeds the total of {total}")]
    ExceedsTotal {
        /// Entered amount (absolute).
        amount: Decimal,
        /// Parent total (absolute).
        total: Decimal,
    },
}
