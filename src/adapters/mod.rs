//! Adapters binding the port traits to the outside world.

pub mod log_sink;

#[cfg(target_os = "espidf")]
pub mod hardware;
