//! Board-agnostic core logic for the PbHub driver
//!
//! Nothing in this crate touches the bus. It contains:
//!
//! - The register map: (channel, function, io) to register selector
//! - Validated channel endpoints that keep their selectors current
//! - Payload encoding, range checks and unit conversions
//! - LED colour handling
//! - Error taxonomy
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod fmt;

pub mod codec;
pub mod color;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod led;
pub mod register;

pub use color::Color;
pub use endpoint::ChannelEndpoint;
pub use error::{ArgumentError, Error};
pub use led::{LedSelection, LedSpan, MAX_LEDS};
pub use register::{register, Channel, Function, Io, CHANNEL_BASE, FIRMWARE_VERSION};
