//! Reusable UI widgets
//!
//! Widgets are plain ratatui `Widget`s that render borrowed data and keep
//! no state of their own.

pub mod field_row;
pub mod toggle_button;

pub use field_row::FieldRow;
pub use toggle_button::ToggleButton;
