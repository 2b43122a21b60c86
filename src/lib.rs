//! Shed heater firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod clock;
pub mod config;
pub mod control;
pub mod sensors;

mod error;
mod pins;

pub use error::{Error, Result, SensorError};

// Re-export the ESP-IDF-leaning modules so the crate compiles on both
// targets; the hardware implementations are guarded by cfg attributes
// inside.
pub mod adapters;
pub mod drivers;
