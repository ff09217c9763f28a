//! Integration layer
//!
//! Wires the pure core to the terminal:
//! - `Runtime`: message and command queues around `update`
//! - `Renderer`: draws `AppState` through the presentation components
//! - `AppRunner`: the main loop
//! - `Coalescer`: per-turn render and resize decisions

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
