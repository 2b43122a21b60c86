//! Mock hardware adapter for integration tests.
//!
//! Records every actuator write so tests can assert on the full command
//! history without touching real GPIO, and lets each test script the
//! sensor results tick by tick.

use shedheater::SensorError;
use shedheater::app::events::AppEvent;
use shedheater::app::ports::{ActuatorPort, EventSink, SensorPort};
use shedheater::sensors::dht22::Measurement;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Heater(bool),
    Fan(bool),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub internal: Result<Measurement, SensorError>,
    pub external: Result<f32, SensorError>,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            internal: Ok(Measurement {
                temperature_c: 20.0,
                humidity_pct: 50.0,
            }),
            external: Ok(10.0),
            calls: Vec::new(),
        }
    }

    /// Script the internal sensor to report `temp_c`.
    pub fn set_internal_temp(&mut self, temp_c: f32) {
        self.internal = Ok(Measurement {
            temperature_c: temp_c,
            humidity_pct: 50.0,
        });
    }

    /// Script the internal sensor to fail every read.
    pub fn fail_internal(&mut self) {
        self.internal = Err(SensorError::ReadFailed);
    }

    pub fn heater_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Heater(on) => Some(*on),
                ActuatorCall::Fan(_) => None,
            })
            .unwrap_or(false)
    }

    pub fn fan_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Fan(on) => Some(*on),
                ActuatorCall::Heater(_) => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn measure_internal(&mut self) -> Result<Measurement, SensorError> {
        self.internal
    }

    fn measure_external(&mut self) -> Result<f32, SensorError> {
        self.external
    }
}

impl ActuatorPort for MockHardware {
    fn set_heater(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Heater(on));
    }

    fn set_fan(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Fan(on));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_scheduled_starts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ScheduledRunStarted))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
