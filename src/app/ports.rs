//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them
//! via generics, so the domain core never touches hardware directly.

use crate::error::SensorError;
use crate::sensors::dht22::Measurement;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: raw, un-gated access to the transducers.
///
/// Both methods are cheap and callable at any time; poll-interval
/// gating (including the DHT22's ~2 s refractory period) is the
/// domain's responsibility, not the adapter's.
pub trait SensorPort {
    /// One internal DHT22 conversion (temperature + humidity, atomic).
    fn measure_internal(&mut self) -> Result<Measurement, SensorError>;

    /// One raw external thermistor conversion, pre-smoothing.
    fn measure_external(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
///
/// Implementations must be idempotent — re-asserting the current state
/// is a no-op — and are assumed infallible (there is no feedback loop
/// from the relays).
pub trait ActuatorPort {
    fn set_heater(&mut self, on: bool);

    fn set_fan(&mut self, on: bool);

    /// Kill both outputs — safe shutdown.
    fn all_off(&mut self) {
        self.set_heater(false);
        self.set_fan(false);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, MQTT,
/// whatever status publisher is wired up).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
