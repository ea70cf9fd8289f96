//! Configuration types
//!
//! Board-agnostic description of what is wired to the hub: its bus
//! address, the device type on each channel endpoint, and any LED strips.
//! With the `serde` feature these deserialize from any serde format.

pub mod hardware;

pub use hardware::*;
