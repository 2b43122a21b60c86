//! Fan controller — three triggers, strict priority order.
//!
//! The fan output is the OR of:
//!
//! 1. heater interlock — the fan always runs while the heater is on;
//! 2. overrun — the fan keeps running for a configured window after
//!    every heater shutoff to flush residual heat, re-arming on each
//!    shutoff;
//! 3. scheduled circulation — the enclosure gets `run` ms of airflow in
//!    every `period` ms window.  Runtime already provided by the first
//!    two triggers counts toward the quota, so a window the heater kept
//!    ventilated gets no dedicated run.
//!
//! Runtime accounting: every tick the fan is physically on, for any
//! reason, the elapsed slice is added to the window accumulator.  At
//! each period rollover the quota decision is taken first, then the
//! accumulator resets for the new window.  It resets again when a
//! dedicated run completes, because that run straddles the rollover
//! into the new window and must not count against the next quota.

use log::info;

use crate::clock::Instant;
use crate::config::SystemConfig;

pub struct FanControl {
    on: bool,
    scheduled_run: bool,
    /// Start of the current schedule window; also the reference point a
    /// running scheduled run is measured against.
    last_schedule_mark: Instant,
    /// Start of the current on-slice (meaningful while `on`).
    run_started_at: Instant,
    /// Fan on-time accumulated inside the current schedule window.
    accumulated_ms: u32,
}

impl FanControl {
    /// The schedule starts a full period after boot, as if the fan had
    /// just finished a run.
    pub fn new(boot: Instant) -> Self {
        Self {
            on: false,
            scheduled_run: false,
            last_schedule_mark: boot,
            run_started_at: boot,
            accumulated_ms: 0,
        }
    }

    /// Evaluate all triggers for this tick.  `heater_on` and
    /// `heater_last_off` come from the heater controller evaluated
    /// earlier in the same tick.  Returns `true` if the fan state changed.
    pub fn evaluate(
        &mut self,
        now: Instant,
        heater_on: bool,
        heater_last_off: Option<Instant>,
        config: &SystemConfig,
    ) -> bool {
        self.update_schedule(now, config);

        let in_overrun = heater_last_off
            .is_some_and(|off| now.since(off) < config.fan_overrun_ms());
        let want = if heater_on {
            // Interlock: the fan cannot be denied while heating.
            true
        } else if in_overrun {
            true
        } else {
            self.scheduled_run
        };

        let changed = want != self.on;
        if want {
            self.turn_on(now);
        } else {
            self.turn_off(now);
        }
        changed
    }

    /// Window bookkeeping: period rollover, quota decision, run expiry.
    fn update_schedule(&mut self, now: Instant, config: &SystemConfig) {
        let period_ms = config.fan_schedule_period_ms();
        let run_ms = config.fan_schedule_run_ms();

        // Period of zero disables scheduled circulation entirely.
        if period_ms > 0 && now.since(self.last_schedule_mark) >= period_ms {
            if self.accumulated_ms < run_ms {
                info!(
                    "scheduled circulation run (only {} ms of {} ms quota)",
                    self.accumulated_ms, run_ms
                );
                self.scheduled_run = true;
            } else {
                info!("circulation quota met ({} ms), skipping scheduled run", self.accumulated_ms);
            }
            self.last_schedule_mark = now;
            self.accumulated_ms = 0;
        }

        if self.scheduled_run && now.since(self.last_schedule_mark) >= run_ms {
            info!("scheduled circulation run complete");
            self.scheduled_run = false;
            // The run itself took place inside the new window; discard
            // its runtime so it cannot satisfy this window's quota and
            // suppress the next run.
            self.accumulated_ms = 0;
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn scheduled_run_active(&self) -> bool {
        self.scheduled_run
    }

    /// Fan on-time accumulated in the current schedule window.
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    // On-time is accumulated in slices: one slice per tick while on,
    // plus the final slice when the fan stops.

    fn turn_on(&mut self, now: Instant) {
        if !self.on {
            self.on = true;
            self.run_started_at = now;
        }
        self.accumulated_ms = self
            .accumulated_ms
            .saturating_add(now.since(self.run_started_at));
        self.run_started_at = now;
    }

    fn turn_off(&mut self, now: Instant) {
        if self.on {
            self.on = false;
            self.accumulated_ms = self
                .accumulated_ms
                .saturating_add(now.since(self.run_started_at));
            self.run_started_at = now;
        }
    }
}
