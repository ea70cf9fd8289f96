//! Analog input
//!
//! Always on IO pin 0. The hub returns a 12-bit reading (0-4095) as two
//! little-endian bytes; the value is passed through as reported.

use pbhub_core::config::{EndpointConfig, EndpointKind};
use pbhub_core::{ArgumentError, ChannelEndpoint, Function};
use pbhub_hal::I2cBus;

use super::channel_accessors;
use crate::hub::{HubError, PbHub};

/// Analog input on a hub channel
pub struct AnalogInput<'a, B> {
    hub: &'a PbHub<B>,
    endpoint: ChannelEndpoint<1>,
}

impl<'a, B: I2cBus> AnalogInput<'a, B> {
    /// Input on `channel` (0-5)
    pub fn new(hub: &'a PbHub<B>, channel: u8) -> Result<Self, ArgumentError> {
        Ok(Self {
            hub,
            endpoint: ChannelEndpoint::new(channel, 0, [Function::AnalogInput])?,
        })
    }

    /// Input described by an `analog_input` endpoint entry
    pub fn from_config(hub: &'a PbHub<B>, config: &EndpointConfig) -> Result<Self, ArgumentError> {
        config.expect_kind(EndpointKind::AnalogInput)?;
        config.validate()?;
        Self::new(hub, config.channel)
    }

    /// Current reading (0-4095)
    pub fn value(&self) -> Result<u16, HubError<B>> {
        self.hub.read_u16(self.endpoint.register(0))
    }
}

channel_accessors!(AnalogInput);
