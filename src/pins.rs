//! GPIO assignments for the shed heater board.

#![cfg(target_os = "espidf")]
#![allow(dead_code)]

/// Fan relay output.
pub const FAN_GPIO: i32 = 4;
/// Heater relay channel 1.
pub const HEATER_1_GPIO: i32 = 12;
/// Heater relay channel 2.
pub const HEATER_2_GPIO: i32 = 13;
/// DHT22 single-wire data line.
pub const DHT_GPIO: i32 = 14;
/// Thermistor divider on ADC1 channel 0.
pub const THERMISTOR_ADC_CHANNEL: u32 = 0;
