//! Idempotent relay outputs.
//!
//! A [`Relay`] latches its commanded state and writes the pin only on a
//! genuine change, so the control loop can re-assert the desired state
//! every tick without chattering the output or the driver transistor.

use embedded_hal::digital::OutputPin;
use log::error;

pub struct Relay<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Wrap a pin, driving it low (off) to establish a known state.
    pub fn new(mut pin: P) -> Self {
        if pin.set_low().is_err() {
            error!("relay init write failed");
        }
        Self { pin, on: false }
    }

    /// Command the relay.  A no-op when the state is unchanged.
    pub fn set(&mut self, on: bool) {
        if on == self.on {
            return;
        }
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            // Relay pins have no feedback path; nothing to do but log.
            error!("relay pin write failed");
        }
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// The heater element is switched through two parallel relay channels
/// that must always act together.
pub struct HeaterBank<P: OutputPin> {
    primary: Relay<P>,
    secondary: Relay<P>,
}

impl<P: OutputPin> HeaterBank<P> {
    pub fn new(primary: P, secondary: P) -> Self {
        Self {
            primary: Relay::new(primary),
            secondary: Relay::new(secondary),
        }
    }

    pub fn set(&mut self, on: bool) {
        self.primary.set(on);
        self.secondary.set(on);
    }

    pub fn is_on(&self) -> bool {
        self.primary.is_on()
    }
}
