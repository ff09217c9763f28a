//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering `AppState`
//! - Reusable widgets
//! - Screen layout shared with mouse hit-testing
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
