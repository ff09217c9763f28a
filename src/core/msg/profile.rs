use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Messages specific to ProfileState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfileMsg {
    /// The Edit/Save control was triggered
    Activate,

    // Focus among inputs (edit mode only)
    FocusNext,
    FocusPrev,
    FocusField(usize),

    /// Key typed into the focused input
    EditFocused(KeyEvent),
    /// Pasted text for the focused input
    InsertText(String),
    /// Replace the value of the input at `index`
    SetValue { index: usize, value: String },
}
