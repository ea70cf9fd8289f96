//! PbHub Hardware Abstraction Layer
//!
//! This crate defines the bus side of the driver: a minimal I2C master
//! trait and a shared device handle that hands out one scoped exchange at a
//! time. Anything implementing [`embedded_hal::i2c::I2c`] can be used as the
//! bus without extra glue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pbhub-drivers (PbHub + device types)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pbhub-hal (this crate - bus exchange)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 I2C implementation│
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod fmt;
pub mod i2c;

pub use i2c::{Exchange, I2cBus, I2cDevice};
