//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the temperature reader and both controllers and
//! runs the fixed per-tick pipeline:
//!
//! ```text
//!  SensorPort ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!                 │         AppService          │
//! ActuatorPort ◀──│  Reader · Heater · Fan      │
//!                 └─────────────────────────────┘
//! ```
//!
//! Ordering inside one tick is strict: sensors are polled first, the
//! heater evaluates second, the fan third, actuators last — so the fan
//! always reacts to the same tick's heater decision, never a stale one.
//! Ticks are bounded synchronous computations; configuration swaps
//! happen only between ticks via [`handle_command`](AppService::handle_command).

use log::info;

use crate::clock::Instant;
use crate::config::SystemConfig;
use crate::control::{FanControl, HeaterControl};
use crate::sensors::TemperatureReader;

use super::commands::AppCommand;
use super::events::{AppEvent, StatusSnapshot};
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    reader: TemperatureReader,
    heater: HeaterControl,
    fan: FanControl,
    tick_count: u64,
}

impl AppService {
    /// Construct the service.  `boot` is the current counter value;
    /// all "last event" timestamps are seeded from it so the first
    /// ticks neither skip sensor reads nor spuriously run the fan.
    pub fn new(boot: Instant, config: SystemConfig) -> Self {
        let config = config.sanitized();
        Self {
            reader: TemperatureReader::new(boot, &config),
            heater: HeaterControl::new(),
            fan: FanControl::new(boot),
            config,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force both outputs off and announce the operating parameters.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        info!(
            "shed heater: setpoint {:.1} C, hysteresis {:.1} C, overrun {} s, \
             circulation {} s every {} s",
            self.config.setpoint_c,
            self.config.hysteresis_c,
            self.config.fan_overrun_secs,
            self.config.fan_schedule_run_secs,
            self.config.fan_schedule_period_secs,
        );
        sink.emit(&AppEvent::Started);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: poll sensors → heater → fan → actuators.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now: Instant,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sample whichever sensors are due.
        self.reader.poll(now, hw, &self.config);

        // 2. Thermostat, against this tick's control temperature.
        let control_temp = self.reader.control_temperature(self.config.control_sensor);
        let heater_changed = self.heater.evaluate(now, control_temp, &self.config);

        // 3. Fan triggers, fed by the heater decision just made.
        let sched_before = self.fan.scheduled_run_active();
        let fan_changed = self.fan.evaluate(
            now,
            self.heater.is_on(),
            self.heater.last_off_at(),
            &self.config,
        );
        let sched_after = self.fan.scheduled_run_active();

        // 4. Apply outputs (idempotent on the adapter side).
        hw.set_heater(self.heater.is_on());
        hw.set_fan(self.fan.is_on());

        // 5. Events for genuine changes only.
        if heater_changed {
            sink.emit(&AppEvent::HeaterChanged {
                on: self.heater.is_on(),
            });
        }
        if fan_changed {
            sink.emit(&AppEvent::FanChanged {
                on: self.fan.is_on(),
            });
        }
        if sched_after && !sched_before {
            sink.emit(&AppEvent::ScheduledRunStarted);
        } else if sched_before && !sched_after {
            sink.emit(&AppEvent::ScheduledRunFinished);
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.  Must be called between ticks, never
    /// concurrently with [`tick`](AppService::tick).
    pub fn handle_command(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::UpdateConfig(new_config) => {
                self.config = new_config.sanitized();
                info!("configuration updated at runtime");
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a read-only status snapshot.  Never mutates the core.
    pub fn snapshot(&self, now: Instant) -> StatusSnapshot {
        StatusSnapshot {
            internal_temperature_c: self.reader.internal_temperature(),
            humidity_pct: self.reader.humidity(),
            external_temperature_c: self.reader.external_temperature(),
            heater_on: self.heater.is_on(),
            fan_on: self.fan.is_on(),
            fan_scheduled_run: self.fan.scheduled_run_active(),
            secs_since_heater_off: self.heater.last_off_at().map(|off| now.since(off) / 1000),
            fan_runtime_accumulated_ms: self.fan.accumulated_ms(),
        }
    }

    pub fn heater_on(&self) -> bool {
        self.heater.is_on()
    }

    pub fn fan_on(&self) -> bool {
        self.fan.is_on()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration (for read-back or delta updates).
    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }
}
