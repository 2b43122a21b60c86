//! Event sink that forwards application events to the log.
//!
//! The default sink on a bare board: every state change and telemetry
//! snapshot ends up on the serial console.  A status publisher (MQTT or
//! similar) would implement [`EventSink`] the same way.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("controller started"),
            AppEvent::HeaterChanged { on } => {
                info!("heater: {}", if *on { "ON" } else { "OFF" });
            }
            AppEvent::FanChanged { on } => {
                info!("fan: {}", if *on { "ON" } else { "OFF" });
            }
            AppEvent::ScheduledRunStarted => info!("circulation run: started"),
            AppEvent::ScheduledRunFinished => info!("circulation run: finished"),
            AppEvent::Telemetry(snap) => {
                info!(
                    "status | int: {} C, {} %RH | ext: {} C | heater: {} | fan: {} | \
                     sched run: {} | since heater off: {} s | fan runtime: {} s",
                    fmt_opt(snap.internal_temperature_c),
                    fmt_opt(snap.humidity_pct),
                    fmt_opt(snap.external_temperature_c),
                    if snap.heater_on { "ON" } else { "OFF" },
                    if snap.fan_on { "ON" } else { "OFF" },
                    if snap.fan_scheduled_run { "YES" } else { "NO" },
                    match snap.secs_since_heater_off {
                        Some(s) => s.to_string(),
                        None => "-".to_string(),
                    },
                    snap.fan_runtime_accumulated_ms / 1000,
                );
            }
        }
    }
}

fn fmt_opt(v: Option<f32>) -> String {
    match v {
        Some(x) => format!("{x:.2}"),
        None => "?".to_string(),
    }
}
