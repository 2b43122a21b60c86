//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, publish over MQTT,
//! render a status page, etc.

use serde::Serialize;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The application service has started.
    Started,

    /// The heater relay state changed.
    HeaterChanged { on: bool },

    /// The fan relay state changed.
    FanChanged { on: bool },

    /// A scheduled circulation run began.
    ScheduledRunStarted,

    /// The scheduled circulation run finished.
    ScheduledRunFinished,

    /// Periodic status snapshot.
    Telemetry(StatusSnapshot),
}

/// A point-in-time, read-only view of the controller state, suitable
/// for logging or transmission.  Producing one never mutates the core.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusSnapshot {
    /// Internal temperature (`None` = no valid reading yet).
    pub internal_temperature_c: Option<f32>,
    /// Internal relative humidity.
    pub humidity_pct: Option<f32>,
    /// Smoothed external temperature.
    pub external_temperature_c: Option<f32>,
    pub heater_on: bool,
    pub fan_on: bool,
    /// A scheduled circulation run is currently active.
    pub fan_scheduled_run: bool,
    /// Seconds since the last genuine heater shutoff, `None` if the
    /// heater has never been on.
    pub secs_since_heater_off: Option<u32>,
    /// Fan on-time accumulated in the current schedule window (ms).
    pub fan_runtime_accumulated_ms: u32,
}
