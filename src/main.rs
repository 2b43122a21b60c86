//! Shed heater firmware — main entry point.
//!
//! The control loop is single-threaded and cooperative: one bounded
//! tick per pass (sensors → heater → fan → outputs), then a short
//! yield.  Everything interesting lives in the library; this file is
//! ESP-IDF bootstrap and wiring.

#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyOutputPin;
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use shedheater::adapters::hardware::HardwareAdapter;
use shedheater::adapters::log_sink::LogEventSink;
use shedheater::app::events::AppEvent;
use shedheater::app::ports::EventSink;
use shedheater::app::service::AppService;
use shedheater::clock;
use shedheater::config::SystemConfig;
use shedheater::drivers::hw_init;

/// Pause between control-loop passes.  Short enough that the 100 ms
/// external sensor cadence is honored.
const LOOP_DELAY_MS: u32 = 20;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init().context("logger init")?;

    info!("Shed Heater {} starting", env!("CARGO_PKG_VERSION"));

    hw_init::init_peripherals().context("peripheral init")?;

    let peripherals = Peripherals::take().context("peripherals taken twice")?;
    let mut hw = HardwareAdapter::new(
        AnyOutputPin::from(peripherals.pins.gpio12),
        AnyOutputPin::from(peripherals.pins.gpio13),
        AnyOutputPin::from(peripherals.pins.gpio4),
    )
    .context("hardware adapter init")?;
    let mut sink = LogEventSink;

    let config = SystemConfig::default();
    let telemetry_interval_ms = config.telemetry_interval_ms();
    let boot = clock::uptime();
    let mut app = AppService::new(boot, config);
    app.start(&mut hw, &mut sink);

    let mut last_telemetry = boot;
    loop {
        let now = clock::uptime();
        app.tick(now, &mut hw, &mut sink);

        if now.since(last_telemetry) >= telemetry_interval_ms {
            sink.emit(&AppEvent::Telemetry(app.snapshot(now)));
            last_telemetry = now;
        }

        FreeRtos::delay_ms(LOOP_DELAY_MS);
    }
}
