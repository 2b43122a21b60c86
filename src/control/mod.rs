//! Heater and fan controllers.
//!
//! Both controllers are plain owned structs evaluated once per tick,
//! strictly after the sensor reader and in heater-then-fan order so the
//! fan always reacts to the current tick's heater decision.

pub mod fan;
pub mod heater;

pub use fan::FanControl;
pub use heater::HeaterControl;
