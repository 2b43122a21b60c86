//! ESP-IDF peripheral bring-up and raw sensor access.
//!
//! Only compiled for the device target.  Holds the pieces the safe HAL
//! does not cover: the legacy one-shot ADC read for the thermistor
//! divider and the bit-banged DHT22 single-wire protocol.

use esp_idf_sys as sys;

use crate::error::{Error, SensorError};
use crate::pins;
use crate::sensors::dht22::Measurement;

/// Configure the ADC channel and the DHT22 data line.
///
/// Relay pins are owned by the hardware adapter through the safe HAL;
/// they are not touched here.
pub fn init_peripherals() -> Result<(), Error> {
    unsafe {
        if sys::adc1_config_width(sys::adc_bits_width_t_ADC_WIDTH_BIT_12) != sys::ESP_OK {
            return Err(Error::Init("adc width config failed"));
        }
        if sys::adc1_config_channel_atten(
            pins::THERMISTOR_ADC_CHANNEL,
            sys::adc_atten_t_ADC_ATTEN_DB_12,
        ) != sys::ESP_OK
        {
            return Err(Error::Init("adc attenuation config failed"));
        }
        // DHT22 line idles high (external pull-up); open-drain output.
        if sys::gpio_set_direction(
            pins::DHT_GPIO,
            sys::gpio_mode_t_GPIO_MODE_INPUT_OUTPUT_OD,
        ) != sys::ESP_OK
        {
            return Err(Error::Init("dht gpio config failed"));
        }
        sys::gpio_set_level(pins::DHT_GPIO, 1);
    }
    Ok(())
}

/// One thermistor conversion, scaled to the 10-bit range the divider
/// maths are calibrated for.
pub fn thermistor_adc_read() -> u16 {
    let raw12 = unsafe { sys::adc1_get_raw(pins::THERMISTOR_ADC_CHANNEL) };
    if raw12 < 0 {
        // Out-of-band value; the conversion layer rejects it as a rail.
        return 0;
    }
    (raw12 as u16) >> 2
}

/// One DHT22 conversion: 1 ms start pulse, then 40 data bits encoded in
/// high-pulse widths (~27 us = 0, ~70 us = 1), then checksum.
pub fn dht22_read() -> Result<Measurement, SensorError> {
    let mut bytes = [0u8; 5];

    unsafe {
        // Start signal: pull the line low for >1 ms, then release.
        sys::gpio_set_level(pins::DHT_GPIO, 0);
        sys::esp_rom_delay_us(1100);
        sys::gpio_set_level(pins::DHT_GPIO, 1);

        // Sensor response: ~80 us low, ~80 us high.
        wait_for_level(0, 100)?;
        wait_for_level(1, 100)?;
        wait_for_level(0, 100)?;

        for bit in 0..40 {
            // Each bit: ~50 us low preamble, then the width-coded high.
            wait_for_level(1, 80)?;
            let high_us = pulse_width(1, 100)?;
            if high_us > 40 {
                bytes[bit / 8] |= 1 << (7 - (bit % 8));
            }
        }
    }

    let sum = bytes[0]
        .wrapping_add(bytes[1])
        .wrapping_add(bytes[2])
        .wrapping_add(bytes[3]);
    if sum != bytes[4] {
        return Err(SensorError::ReadFailed);
    }

    let humidity_pct = f32::from(u16::from_be_bytes([bytes[0], bytes[1]])) / 10.0;
    let raw_temp = u16::from_be_bytes([bytes[2], bytes[3]]);
    // Sign is carried in the top bit, not two's complement.
    let magnitude = f32::from(raw_temp & 0x7FFF) / 10.0;
    let temperature_c = if raw_temp & 0x8000 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(Measurement {
        temperature_c,
        humidity_pct,
    })
}

/// Spin until the line reads `level`, or fail after `timeout_us`.
unsafe fn wait_for_level(level: i32, timeout_us: u32) -> Result<(), SensorError> {
    for _ in 0..timeout_us {
        if unsafe { sys::gpio_get_level(pins::DHT_GPIO) } == level {
            return Ok(());
        }
        unsafe { sys::esp_rom_delay_us(1) };
    }
    Err(SensorError::ReadFailed)
}

/// Measure how long the line holds `level`, in microseconds.
unsafe fn pulse_width(level: i32, timeout_us: u32) -> Result<u32, SensorError> {
    for elapsed in 0..timeout_us {
        if unsafe { sys::gpio_get_level(pins::DHT_GPIO) } != level {
            return Ok(elapsed);
        }
        unsafe { sys::esp_rom_delay_us(1) };
    }
    Err(SensorError::ReadFailed)
}
