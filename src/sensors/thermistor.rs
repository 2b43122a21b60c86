//! External NTC thermistor sensor (10 kOhm @ 25 C, B = 3950).
//!
//! Wired in a voltage-divider with a fixed 10 kOhm resistor and read
//! through the single 10-bit ADC input.  The simplified Beta
//! (Steinhart-Hart) equation converts resistance to temperature.
//! Readings clipped against either supply rail mean a disconnected or
//! shorted probe and are reported as faults, never as a temperature.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ADC via `hw_init`.
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_THERM_ADC: AtomicU16 = AtomicU16::new(512);

/// Inject a raw ADC value for host tests (0..=1023).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(raw: u16) {
    SIM_THERM_ADC.store(raw, Ordering::Relaxed);
}

const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;
const ADC_MAX: f32 = 1023.0;
const V_REF: f32 = 3.3;

pub struct Thermistor;

impl Thermistor {
    pub fn new() -> Self {
        Self
    }

    /// One raw (pre-smoothing) temperature conversion.
    pub fn measure(&mut self) -> Result<f32, SensorError> {
        let raw = self.read_adc();
        adc_to_celsius(raw)
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::thermistor_adc_read()
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_THERM_ADC.load(Ordering::Relaxed)
    }
}

impl Default for Thermistor {
    fn default() -> Self {
        Self::new()
    }
}

fn adc_to_celsius(raw: u16) -> Result<f32, SensorError> {
    let voltage = (f32::from(raw.min(1023)) / ADC_MAX) * V_REF;
    // Either rail means an open or shorted divider.
    if voltage <= 0.01 || voltage >= (V_REF - 0.01) {
        return Err(SensorError::OutOfRange);
    }
    let r_ntc = R_DIVIDER * voltage / (V_REF - voltage);
    let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
    if inv_t <= 0.0 {
        return Err(SensorError::OutOfRange);
    }
    let celsius = (1.0 / inv_t) - 273.15;
    if celsius.is_finite() {
        Ok(celsius)
    } else {
        Err(SensorError::OutOfRange)
    }
}
