//! Internal DHT22 temperature/humidity sensor.
//!
//! The DHT22 delivers temperature and humidity as one atomic
//! measurement and needs roughly 2 s between conversions; honoring that
//! refractory period is the reader's job, not this driver's.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: single-wire read via `hw_init`.
//! On host/test: reads from static atomics for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU32, Ordering};

use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// One atomic temperature + humidity conversion.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_MILLI_C: AtomicI32 = AtomicI32::new(20_000);
#[cfg(not(target_os = "espidf"))]
static SIM_HUMIDITY_MILLI_PCT: AtomicU32 = AtomicU32::new(50_000);
#[cfg(not(target_os = "espidf"))]
static SIM_FAILING: AtomicBool = AtomicBool::new(false);

/// Inject a measurement for host tests.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_measurement(temperature_c: f32, humidity_pct: f32) {
    SIM_TEMP_MILLI_C.store((temperature_c * 1000.0) as i32, Ordering::Relaxed);
    SIM_HUMIDITY_MILLI_PCT.store((humidity_pct * 1000.0) as u32, Ordering::Relaxed);
}

/// Make every subsequent host read fail (wiring fault simulation).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_failing(failing: bool) {
    SIM_FAILING.store(failing, Ordering::Relaxed);
}

pub struct Dht22;

impl Dht22 {
    pub fn new() -> Self {
        Self
    }

    /// Attempt one conversion.  Cheap to call; the caller gates the
    /// interval between attempts.
    pub fn measure(&mut self) -> Result<Measurement, SensorError> {
        let m = self.read_raw()?;
        // Datasheet operating range, with a little margin.
        if !(-45.0..=85.0).contains(&m.temperature_c)
            || !(0.0..=100.0).contains(&m.humidity_pct)
        {
            return Err(SensorError::OutOfRange);
        }
        Ok(m)
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&mut self) -> Result<Measurement, SensorError> {
        hw_init::dht22_read()
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&mut self) -> Result<Measurement, SensorError> {
        if SIM_FAILING.load(Ordering::Relaxed) {
            return Err(SensorError::ReadFailed);
        }
        Ok(Measurement {
            temperature_c: SIM_TEMP_MILLI_C.load(Ordering::Relaxed) as f32 / 1000.0,
            humidity_pct: SIM_HUMIDITY_MILLI_PCT.load(Ordering::Relaxed) as f32 / 1000.0,
        })
    }
}

impl Default for Dht22 {
    fn default() -> Self {
        Self::new()
    }
}
