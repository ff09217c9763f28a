//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and in-memory test backend)
//! - CLI argument processing
//! - Layered configuration
//! - Profile document loading

pub mod cli;
pub mod config;
pub mod profile_source;
pub mod tui;
