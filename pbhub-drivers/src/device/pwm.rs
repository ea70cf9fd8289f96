//! PWM output
//!
//! 8-bit duty (0-255), written as `[selector, duty]` and read back as one
//! byte. Also usable through [`embedded_hal::pwm::SetDutyCycle`].

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use pbhub_core::codec::{pwm_value, write_u8, PWM_MAX};
use pbhub_core::config::{EndpointConfig, EndpointKind};
use pbhub_core::{ArgumentError, ChannelEndpoint, Function};
use pbhub_hal::I2cBus;

use super::{channel_accessors, io_accessors};
use crate::hub::{HubError, PbHub};

/// PWM output on a hub channel
pub struct PwmOutput<'a, B> {
    hub: &'a PbHub<B>,
    endpoint: ChannelEndpoint<1>,
}

impl<'a, B: I2cBus> PwmOutput<'a, B> {
    /// Output on `channel` (0-5), pin `io` (0-1)
    pub fn new(hub: &'a PbHub<B>, channel: u8, io: u8) -> Result<Self, ArgumentError> {
        Ok(Self {
            hub,
            endpoint: ChannelEndpoint::new(channel, io, [Function::Pwm])?,
        })
    }

    /// Output described by a `pwm_output` endpoint entry
    pub fn from_config(hub: &'a PbHub<B>, config: &EndpointConfig) -> Result<Self, ArgumentError> {
        config.expect_kind(EndpointKind::PwmOutput)?;
        Self::new(hub, config.channel, config.io)
    }

    /// Duty as reported by the hub (0-255)
    pub fn value(&self) -> Result<u8, HubError<B>> {
        self.hub.read_u8(self.endpoint.register(0))
    }

    /// Set the duty (0-255)
    pub fn set_value(&self, value: i32) -> Result<(), HubError<B>> {
        let duty = pwm_value(value)?;
        self.hub.write(&write_u8(self.endpoint.register(0), duty))
    }
}

channel_accessors!(PwmOutput);
io_accessors!(PwmOutput);

impl<B: I2cBus> ErrorType for PwmOutput<'_, B> {
    type Error = HubError<B>;
}

impl<B: I2cBus> SetDutyCycle for PwmOutput<'_, B> {
    fn max_duty_cycle(&self) -> u16 {
        u16::from(PWM_MAX)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.set_value(i32::from(duty))
    }
}
