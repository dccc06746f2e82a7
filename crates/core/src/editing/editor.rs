//! Click-to-edit state machine for a single allocation amount.
//!
//! The editor holds no I/O; the caller performs the API request after
//! [`AllocationEditor::submit`] and reports back with `succeeded`/`failed`.
//! Valid transitions:
//! - Idle → Editing (begin)
//! - Editing → Editing (input)
//! - Editing → Submitting (submit)
//! - Editing → Error (submit, amount exceeds total)
//! - Submitting → Idle (succeeded)
//! - Submitting → Error (failed)
//! - Error → Editing (begin, input)
//! - Editing | Error → Idle (cancel)

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::EditError;
use crate::format::{format_amount_input, parse_amount_input};

/// Coarse phase of the editor, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPhase {
    /// Showing the stored amount.
    Idle,
    /// The input field is open.
    Editing,
    /// Waiting for the API.
    Submitting,
    /// Last submission failed.
    Error,
}

impl EditPhase {
    /// Returns the string representation of the phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for EditPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// Showing the stored amount.
    Idle,
    /// The input field is open with the current text.
    Editing {
        /// Raw text in the field.
        input: String,
    },
    /// The parsed amount is being sent.
    Submitting {
        /// Amount being submitted.
        amount: Decimal,
    },
    /// Submission failed; the text is kept for another attempt.
    Error {
        /// What went wrong.
        message: String,
        /// Text to restore into the field.
        input: String,
    },
}

impl EditState {
    /// Returns the phase of this state.
    #[must_use]
    pub const fn phase(&self) -> EditPhase {
        match self {
            Self::Idle => EditPhase::Idle,
            Self::Editing { .. } => EditPhase::Editing,
            Self::Submitting { .. } => EditPhase::Submitting,
            Self::Error { .. } => EditPhase::Error,
        }
    }
}

/// Editor for one allocation against a parent with a known total.
#[derive(Debug, Clone)]
pub struct AllocationEditor {
    total_amount: Decimal,
    state: EditState,
}

impl AllocationEditor {
    /// Creates an idle editor for a parent with `total_amount`.
    #[must_use]
    pub const fn new(total_amount: Decimal) -> Self {
        Self {
            total_amount,
            state: EditState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &EditState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> EditPhase {
        self.state.phase()
    }

    /// Opens the field pre-filled with the stored amount.
    pub fn begin(&mut self, current: Option<Decimal>) -> Result<(), EditError> {
        match &self.state {
            EditState::Idle => {
                self.state = EditState::Editing {
                    input: format_amount_input(current),
                };
                Ok(())
            }
            EditState::Error { input, .. } => {
                self.state = EditState::Editing {
                    input: input.clone(),
                };
                Ok(())
            }
            other => Err(Self::invalid(other.phase(), "begin editing")),
        }
    }

    /// Replaces the field text.
    pub fn input(&mut self, text: &str) -> Result<(), EditError> {
        match self.state.phase() {
            EditPhase::Editing | EditPhase::Error => {
                self.state = EditState::Editing {
                    input: text.to_string(),
                };
                Ok(())
            }
            phase => Err(Self::invalid(phase, "change input")),
        }
    }

    /// Parses the field and moves to `Submitting`.
    ///
    /// Returns the amount to send. An amount larger than the parent's
    /// absolute total moves the editor to `Error` instead.
    pub fn submit(&mut self) -> Result<Decimal, EditError> {
        let EditState::Editing { input } = &self.state else {
            return Err(Self::invalid(self.state.phase(), "submit"));
        };

        let amount = parse_amount_input(input);
        let total = self.total_amount.abs();
        if amount.abs() > total {
            let err = EditError::ExceedsTotal {
                amount: amount.abs(),
                total,
            };
            tracing::debug!(%amount, %total, "allocation edit rejected");
            self.state = EditState::Error {
                message: err.to_string(),
                input: input.clone(),
            };
            return Err(err);
        }

        self.state = EditState::Submitting { amount };
        Ok(amount)
    }

    /// The API accepted the amount.
    pub fn succeeded(&mut self) -> Result<(), EditError> {
        match self.state {
            EditState::Submitting { .. } => {
                self.state = EditState::Idle;
                Ok(())
            }
            ref other => Err(Self::invalid(other.phase(), "complete submission")),
        }
    }

    /// The API rejected the amount.
    pub fn failed(&mut self, message: impl Into<String>) -> Result<(), EditError> {
        match self.state {
            EditState::Submitting { amount } => {
                self.state = EditState::Error {
                    message: message.into(),
                    input: format_amount_input(Some(amount)),
                };
                Ok(())
            }
            ref other => Err(Self::invalid(other.phase(), "fail submission")),
        }
    }

    /// Closes the field without submitting.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        match self.state.phase() {
            EditPhase::Editing | EditPhase::Error => {
                self.state = EditState::Idle;
                Ok(())
            }
            phase => Err(Self::invalid(phase, "cancel")),
        }
    }

    const fn invalid(from: EditPhase, action: &'static str) -> EditError {
        EditError::InvalidTransition { from, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_happy_path() {
        let mut editor = AllocationEditor::new(dec!(-100));
        editor.begin(Some(dec!(60))).unwrap();
        assert_eq!(
            editor.state(),
            &EditState::Editing {
                input: "60.00".to_string()
            }
        );

        editor.input("1,00").unwrap();
        editor.input("40").unwrap();
        assert_eq!(editor.submit().unwrap(), dec!(40));
        assert_eq!(editor.phase(), EditPhase::Submitting);

        editor.succeeded().unwrap();
        assert_eq!(editor.phase(), EditPhase::Idle);
    }

    #[test]
    fn test_begin_with_nothing_allocated() {
        let mut editor = AllocationEditor::new(dec!(100));
        editor.begin(None).unwrap();
        assert_eq!(
            editor.state(),
            &EditState::Editing {
                input: String::new()
            }
        );
    }

    #[test]
    fn test_amount_above_total_rejected() {
        let mut editor = AllocationEditor::new(dec!(-100));
        editor.begin(None).unwrap();
        editor.input("100.01").unwrap();
        assert_eq!(
            editor.submit(),
            Err(EditError::ExceedsTotal {
                amount: dec!(100.01),
                total: dec!(100),
            })
        );
        assert!(matches!(
            editor.state(),
            EditState::Error { input, .. } if input == "100.01"
        ));

        // retry from the error state keeps the text
        editor.begin(None).unwrap();
        assert_eq!(
            editor.state(),
            &EditState::Editing {
                input: "100.01".to_string()
            }
        );
    }

    #[test]
    fn test_failed_submission_keeps_amount() {
        let mut editor = AllocationEditor::new(dec!(500));
        editor.begin(None).unwrap();
        editor.input("1250").unwrap();
        assert!(editor.submit().is_err());
        editor.input("250").unwrap();
        editor.submit().unwrap();
        editor.failed("network error").unwrap();
        assert_eq!(
            editor.state(),
            &EditState::Error {
                message: "network error".to_string(),
                input: "250.00".to_string(),
            }
        );
        editor.cancel().unwrap();
        assert_eq!(editor.phase(), EditPhase::Idle);
    }

    #[test]
    fn test_garbage_input_submits_zero() {
        let mut editor = AllocationEditor::new(dec!(10));
        editor.begin(None).unwrap();
        editor.input("abc").unwrap();
        assert_eq!(editor.submit().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut editor = AllocationEditor::new(dec!(10));
        assert_eq!(
            editor.submit(),
            Err(EditError::InvalidTransition {
                from: EditPhase::Idle,
                action: "submit",
            })
        );
        assert!(editor.succeeded().is_err());
        assert!(editor.failed("x").is_err());
        assert!(editor.cancel().is_err());
        assert!(editor.input("5").is_err());

        editor.begin(None).unwrap();
        editor.input("5").unwrap();
        editor.submit().unwrap();
        assert!(editor.begin(None).is_err());
        assert!(editor.cancel().is_err());
        assert!(editor.input("6").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = EditError::InvalidTransition {
            from: EditPhase::Submitting,
            action: "cancel",
        };
        assert_eq!(err.to_string(), "Cannot cancel while submitting");
    }
}
