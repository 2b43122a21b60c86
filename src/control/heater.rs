//! Hysteresis thermostat.
//!
//! Two states, one rule: turn on at or below `setpoint - hysteresis`,
//! off above `setpoint + hysteresis`, and *never* transition inside the
//! dead band.  An unknown control temperature forces the heater off for that
//! tick — the fault heals itself as soon as a valid reading returns.

use log::{info, warn};

use crate::clock::Instant;
use crate::config::SystemConfig;

pub struct HeaterControl {
    on: bool,
    /// `None` until the first genuine transition, so boot is never
    /// mistaken for a fresh switch-on or shutoff.
    last_on_at: Option<Instant>,
    last_off_at: Option<Instant>,
}

impl HeaterControl {
    pub fn new() -> Self {
        Self {
            on: false,
            last_on_at: None,
            last_off_at: None,
        }
    }

    /// Evaluate the thermostat against this tick's control temperature.
    /// Returns `true` if the heater state changed.
    pub fn evaluate(
        &mut self,
        now: Instant,
        control_temp: Option<f32>,
        config: &SystemConfig,
    ) -> bool {
        let Some(t) = control_temp else {
            // Fail-safe: unknown temperature means no heating.
            if self.on {
                warn!("control temperature unknown, forcing heater off");
                self.turn_off(now);
                return true;
            }
            return false;
        };

        // The lower band edge counts as cold: at exactly
        // `setpoint - hysteresis` the heater turns on.
        if t <= config.setpoint_c - config.hysteresis_c && !self.on {
            info!("heater on ({t:.2} C <= {:.2} C)", config.setpoint_c - config.hysteresis_c);
            self.turn_on(now);
            return true;
        }
        if t > config.setpoint_c + config.hysteresis_c && self.on {
            info!("heater off ({t:.2} C > {:.2} C)", config.setpoint_c + config.hysteresis_c);
            self.turn_off(now);
            return true;
        }
        false
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn last_on_at(&self) -> Option<Instant> {
        self.last_on_at
    }

    /// Timestamp of the last genuine shutoff, `None` if the heater has
    /// never been on.
    pub fn last_off_at(&self) -> Option<Instant> {
        self.last_off_at
    }

    // Timestamps move only on genuine transitions; re-asserting the
    // current state is a no-op.

    fn turn_on(&mut self, now: Instant) {
        if !self.on {
            self.on = true;
            self.last_on_at = Some(now);
        }
    }

    fn turn_off(&mut self, now: Instant) {
        if self.on {
            self.on = false;
            self.last_off_at = Some(now);
        }
    }
}

impl Default for HeaterControl {
    fn default() -> Self {
        Self::new()
    }
}
