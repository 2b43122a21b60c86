//! System configuration parameters
//!
//! All tunable parameters for the shed heater.  Defaults match the values
//! the device has shipped with; the configuration collaborator (serial,
//! MQTT, whatever is wired up) may replace the whole record between
//! control ticks via `AppCommand::UpdateConfig`.

use serde::{Deserialize, Serialize};

/// Which temperature reading feeds the thermostat.
///
/// Thermostat-grade installations use the internal DHT22; outdoor-probe
/// installations run the loop off the smoothed external thermistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlSensor {
    #[default]
    Internal,
    External,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Thermostat ---
    /// Target temperature to maintain (Celsius)
    pub setpoint_c: f32,
    /// Hysteresis half-width around the setpoint (Celsius)
    pub hysteresis_c: f32,
    /// Which sensor drives the thermostat
    pub control_sensor: ControlSensor,

    // --- Fan ---
    /// Fan overrun time after the heater turns off (seconds)
    pub fan_overrun_secs: u32,
    /// Air-circulation schedule period (seconds, 0 = disabled)
    pub fan_schedule_period_secs: u32,
    /// Air-circulation run time per schedule period (seconds)
    pub fan_schedule_run_secs: u32,

    // --- Timing ---
    /// Internal DHT22 read interval (milliseconds)
    pub internal_read_interval_ms: u32,
    /// External thermistor read interval (milliseconds)
    pub external_read_interval_ms: u32,
    /// Telemetry/status report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Thermostat
            setpoint_c: 5.0,
            hysteresis_c: 0.5,
            control_sensor: ControlSensor::Internal,

            // Fan
            fan_overrun_secs: 30,
            fan_schedule_period_secs: 3600, // hourly circulation
            fan_schedule_run_secs: 300,     // 5 min per hour

            // Timing
            internal_read_interval_ms: 2000, // DHT22 conversion cadence
            external_read_interval_ms: 100,
            telemetry_interval_secs: 1,
        }
    }
}

/// Setpoints outside this window are treated as corrupt, not as intent.
const SETPOINT_MIN_C: f32 = -40.0;
const SETPOINT_MAX_C: f32 = 60.0;

impl SystemConfig {
    /// Clamp out-of-range values to safe equivalents.
    ///
    /// The control loop never rejects a configuration outright: a bad
    /// field degrades to "feature off" or the shipped default so the
    /// tick keeps running.  Zero durations are legal and mean the
    /// corresponding feature is disabled.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.setpoint_c.is_finite()
            || !(SETPOINT_MIN_C..=SETPOINT_MAX_C).contains(&self.setpoint_c)
        {
            log::warn!(
                "config: setpoint {} out of range, using default {}",
                self.setpoint_c,
                defaults.setpoint_c
            );
            self.setpoint_c = defaults.setpoint_c;
        }
        if !self.hysteresis_c.is_finite() || self.hysteresis_c < 0.0 {
            log::warn!("config: hysteresis {} invalid, clamping to 0", self.hysteresis_c);
            self.hysteresis_c = 0.0;
        }
        if self.internal_read_interval_ms == 0 {
            self.internal_read_interval_ms = defaults.internal_read_interval_ms;
        }
        if self.external_read_interval_ms == 0 {
            self.external_read_interval_ms = defaults.external_read_interval_ms;
        }
        self
    }

    // Millisecond views of the second-denominated fields.  Saturating so
    // an absurd (but in-range u32) value can never wrap the ms domain.

    pub fn fan_overrun_ms(&self) -> u32 {
        self.fan_overrun_secs.saturating_mul(1000)
    }

    pub fn fan_schedule_period_ms(&self) -> u32 {
        self.fan_schedule_period_secs.saturating_mul(1000)
    }

    pub fn fan_schedule_run_ms(&self) -> u32 {
        self.fan_schedule_run_secs.saturating_mul(1000)
    }

    pub fn telemetry_interval_ms(&self) -> u32 {
        self.telemetry_interval_secs.saturating_mul(1000)
    }
}
