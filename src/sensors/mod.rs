//! Temperature acquisition — sensor drivers and the aggregating
//! [`TemperatureReader`].
//!
//! The reader owns everything between the raw transducers and the
//! controllers: poll-interval gating, fault filtering, stale-value
//! retention, and the moving-average smoothing of the noisy external
//! channel.  It drives no actuator and exposes only last-known-good
//! values; a channel that has never read successfully stays `None` and
//! downstream consumers must treat that as *unknown*, not as cold.

pub mod dht22;
pub mod smoothing;
pub mod thermistor;

use log::debug;

use crate::app::ports::SensorPort;
use crate::clock::Instant;
use crate::config::{ControlSensor, SystemConfig};
use smoothing::SmoothingWindow;

/// Last-known-good internal (DHT22) reading.
#[derive(Debug, Clone, Copy)]
pub struct InternalReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub captured_at: Instant,
}

/// Interval-gated sensor front end.
pub struct TemperatureReader {
    last_internal_poll: Instant,
    last_external_poll: Instant,
    internal: Option<InternalReading>,
    window: SmoothingWindow,
}

impl TemperatureReader {
    /// Seed the poll timestamps so both channels sample on the very
    /// first tick after boot.
    pub fn new(boot: Instant, config: &SystemConfig) -> Self {
        Self {
            last_internal_poll: boot.back_dated(config.internal_read_interval_ms),
            last_external_poll: boot.back_dated(config.external_read_interval_ms),
            internal: None,
            window: SmoothingWindow::new(),
        }
    }

    /// Sample whichever channels are due this tick.
    ///
    /// The poll timestamp advances even when a read fails, so a sensor
    /// inside its refractory period (or with a broken wire) is not
    /// hammered faster than its configured interval.  Failures retain
    /// the previous good value; the external smoothing window is only
    /// touched by accepted samples.
    pub fn poll(&mut self, now: Instant, port: &mut impl SensorPort, config: &SystemConfig) {
        if now.since(self.last_internal_poll) >= config.internal_read_interval_ms {
            match port.measure_internal() {
                Ok(m) => {
                    self.internal = Some(InternalReading {
                        temperature_c: m.temperature_c,
                        humidity_pct: m.humidity_pct,
                        captured_at: now,
                    });
                }
                Err(e) => debug!("internal sensor read failed: {e}"),
            }
            self.last_internal_poll = now;
        }

        if now.since(self.last_external_poll) >= config.external_read_interval_ms {
            match port.measure_external() {
                Ok(raw_c) => self.window.push(raw_c),
                Err(e) => debug!("external sensor read failed: {e}"),
            }
            self.last_external_poll = now;
        }
    }

    pub fn internal_temperature(&self) -> Option<f32> {
        self.internal.map(|r| r.temperature_c)
    }

    pub fn humidity(&self) -> Option<f32> {
        self.internal.map(|r| r.humidity_pct)
    }

    /// Smoothed external temperature (mean over the valid window slots).
    pub fn external_temperature(&self) -> Option<f32> {
        self.window.mean()
    }

    /// The reading that feeds the thermostat.
    pub fn control_temperature(&self, sensor: ControlSensor) -> Option<f32> {
        match sensor {
            ControlSensor::Internal => self.internal_temperature(),
            ControlSensor::External => self.external_temperature(),
        }
    }
}
