//! Interactive allocation editing.
//!
//! Explicit state transitions for the click-to-edit allocation amount,
//! driven by the pure parsing and allocation rules.

pub mod editor;
pub mod error;

pub use editor::{AllocationEditor, EditPhase, EditState};
pub use error::EditError;
