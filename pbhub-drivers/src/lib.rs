//! Hardware driver implementations for the PbHub
//!
//! The [`PbHub`] owns the I2C bus and the hub address. Logical devices
//! borrow it and each translate their operations into single register
//! exchanges:
//!
//! - [`DigitalInput`], [`DigitalOutput`]
//! - [`AnalogInput`] (12-bit)
//! - [`PwmOutput`] (8-bit)
//! - [`Servo`] (angle or pulse width)
//! - [`LedStrip`] (addressable LEDs, up to 74 per channel)
//!
//! ```ignore
//! let hub = PbHub::new(i2c);
//! let mut servo = Servo::new(&hub, 0, 1)?;
//! servo.set_pulse(1500)?;
//!
//! let strip = LedStrip::new(&hub, 2, 10, 0.5)?;
//! strip.set(0, 0xFF0000_u32)?;
//! strip.set(1..3, [0, 255, 255])?;
//! strip.fill(0xFFFF00_u32)?;
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod fmt;
#[cfg(test)]
mod testing;

pub mod device;
pub mod hub;

pub use device::{AnalogInput, DigitalInput, DigitalOutput, LedStrip, PwmOutput, Servo};
pub use hub::{HubError, PbHub};
pub use pbhub_core::{ArgumentError, Color, Error, LedSelection};
