//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (serial,
//! MQTT, a captive-portal UI) that the
//! [`AppService`](super::service::AppService) interprets between ticks.

use crate::config::SystemConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Replace the running configuration.  Applied between ticks only;
    /// the new record is sanitized before use.
    UpdateConfig(SystemConfig),
}
