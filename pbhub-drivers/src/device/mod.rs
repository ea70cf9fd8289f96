//! Logical devices on hub channels
//!
//! Every channel device wraps a [`ChannelEndpoint`](pbhub_core::ChannelEndpoint)
//! holding its validated channel/io and register selectors, and a shared
//! reference to the [`PbHub`](crate::PbHub) that carries out its exchanges.
//! Values are never cached: each get reads the hub.

pub mod analog;
pub mod digital;
pub mod led_strip;
pub mod pwm;
pub mod servo;

pub use analog::AnalogInput;
pub use digital::{DigitalInput, DigitalOutput};
pub use led_strip::LedStrip;
pub use pwm::PwmOutput;
pub use servo::Servo;

/// Channel getter and setter backed by the device's endpoint
macro_rules! channel_accessors {
    ($device:ident) => {
        impl<B: pbhub_hal::I2cBus> $device<'_, B> {
            /// Hub channel (0-5)
            pub fn channel(&self) -> u8 {
                self.endpoint.channel()
            }

            /// Move to another channel
            ///
            /// Fails with [`ArgumentError::Channel`](pbhub_core::ArgumentError::Channel)
            /// outside 0-5, leaving the device untouched.
            pub fn set_channel(&mut self, channel: u8) -> Result<(), pbhub_core::ArgumentError> {
                self.endpoint.set_channel(channel)
            }
        }
    };
}

/// IO pin getter and setter backed by the device's endpoint
macro_rules! io_accessors {
    ($device:ident) => {
        impl<B: pbhub_hal::I2cBus> $device<'_, B> {
            /// IO pin within the channel (0-1)
            pub fn io(&self) -> u8 {
                self.endpoint.io()
            }

            /// Move to the other IO pin
            ///
            /// Fails with [`ArgumentError::Io`](pbhub_core::ArgumentError::Io)
            /// outside 0-1, leaving the device untouched.
            pub fn set_io(&mut self, io: u8) -> Result<(), pbhub_core::ArgumentError> {
                self.endpoint.set_io(io)
            }
        }
    };
}

pub(crate) use channel_accessors;
pub(crate) use io_accessors;
