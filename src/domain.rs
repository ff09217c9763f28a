//! Domain logic
//!
//! This module contains the profile form model:
//! - Fields and their visible representation
//! - Input kinds and the rules that pick them
//! - The data set collected on save
//! - Date and text helpers

pub mod date;
pub mod error;
pub mod field;
pub mod field_kind;
pub mod input;
pub mod text;
pub mod updated_data;
