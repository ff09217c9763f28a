//! # proftui - profile screen with an in-place edit mode
//!
//! A terminal screen showing a profile as labeled read-only fields, with a
//! single Edit/Save control. "Edit" swaps every value for an input seeded
//! with it; "Save" turns the inputs back into read-only values and emits
//! the collected `{key: value}` data set.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): application state
//! - **Message** (`msg`): events that can change the state
//! - **Update** (`update`): functions that transform state
//! - **Command** (`cmd`): side effects (trace output, terminal resizes)
//! - **View** (`presentation`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use proftui::{
//!     core::{msg::{profile::ProfileMsg, Msg}, state::AppState, update::update},
//!     domain::field::Field,
//! };
//!
//! let state = AppState::new("Ada", vec![Field::new("Name", "Ada")]);
//!
//! // Enter edit mode, then save
//! let (state, _) = update(Msg::Profile(ProfileMsg::Activate), state);
//! assert_eq!(state.profile.toggle_label(), "Save");
//! let (state, _) = update(Msg::Profile(ProfileMsg::Activate), state);
//!
//! assert_eq!(state.profile.toggle_label(), "Edit");
//! assert_eq!(state.profile.last_commit().and_then(|d| d.get("name")), Some("Ada"));
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
