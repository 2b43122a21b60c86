//! Output drivers and ESP-IDF peripheral bring-up.

pub mod relay;

#[cfg(target_os = "espidf")]
pub mod hw_init;

pub use relay::{HeaterBank, Relay};
