//! ESP-IDF hardware adapter.
//!
//! Binds the sensor drivers and relay outputs into the [`SensorPort`] +
//! [`ActuatorPort`] pair the application service consumes.

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::{HeaterBank, Relay};
use crate::error::{Error, SensorError};
use crate::sensors::dht22::{Dht22, Measurement};
use crate::sensors::thermistor::Thermistor;

type OutPin = PinDriver<'static, AnyOutputPin, Output>;

pub struct HardwareAdapter {
    dht: Dht22,
    thermistor: Thermistor,
    heater: HeaterBank<OutPin>,
    fan: Relay<OutPin>,
}

impl HardwareAdapter {
    /// Take ownership of the relay pins.  The ADC and DHT line must
    /// already be configured via `drivers::hw_init::init_peripherals`.
    pub fn new(
        heater_1: AnyOutputPin,
        heater_2: AnyOutputPin,
        fan: AnyOutputPin,
    ) -> Result<Self, Error> {
        let heater_1 = PinDriver::output(heater_1).map_err(|_| Error::Init("heater pin 1"))?;
        let heater_2 = PinDriver::output(heater_2).map_err(|_| Error::Init("heater pin 2"))?;
        let fan = PinDriver::output(fan).map_err(|_| Error::Init("fan pin"))?;
        Ok(Self {
            dht: Dht22::new(),
            thermistor: Thermistor::new(),
            heater: HeaterBank::new(heater_1, heater_2),
            fan: Relay::new(fan),
        })
    }
}

impl SensorPort for HardwareAdapter {
    fn measure_internal(&mut self) -> Result<Measurement, SensorError> {
        self.dht.measure()
    }

    fn measure_external(&mut self) -> Result<f32, SensorError> {
        self.thermistor.measure()
    }
}

impl ActuatorPort for HardwareAdapter {
    fn set_heater(&mut self, on: bool) {
        self.heater.set(on);
    }

    fn set_fan(&mut self, on: bool) {
        self.fan.set(on);
    }
}
