//! RC servo output
//!
//! A servo can be positioned either by angle (0-180°, one byte) or by
//! pulse width (500-2500 µs at 50 Hz, two little-endian bytes). The two
//! use separate registers; both follow the endpoint when it moves.

use pbhub_core::codec::{servo_angle, servo_pulse, write_u16, write_u8};
use pbhub_core::config::{EndpointConfig, EndpointKind};
use pbhub_core::{ArgumentError, ChannelEndpoint, Function};
use pbhub_hal::I2cBus;

use super::{channel_accessors, io_accessors};
use crate::hub::{HubError, PbHub};

const ANGLE: usize = 0;
const PULSE: usize = 1;

/// RC servo on a hub channel
pub struct Servo<'a, B> {
    hub: &'a PbHub<B>,
    endpoint: ChannelEndpoint<2>,
}

impl<'a, B: I2cBus> Servo<'a, B> {
    /// Servo on `channel` (0-5), pin `io` (0-1)
    pub fn new(hub: &'a PbHub<B>, channel: u8, io: u8) -> Result<Self, ArgumentError> {
        Ok(Self {
            hub,
            endpoint: ChannelEndpoint::new(
                channel,
                io,
                [Function::ServoAngle, Function::ServoPulse],
            )?,
        })
    }

    /// Servo described by a `servo` endpoint entry
    pub fn from_config(hub: &'a PbHub<B>, config: &EndpointConfig) -> Result<Self, ArgumentError> {
        config.expect_kind(EndpointKind::Servo)?;
        Self::new(hub, config.channel, config.io)
    }

    /// Angle in degrees as reported by the hub
    pub fn angle(&self) -> Result<u8, HubError<B>> {
        self.hub.read_u8(self.endpoint.register(ANGLE))
    }

    /// Move to `angle` degrees (0-180)
    pub fn set_angle(&self, angle: i32) -> Result<(), HubError<B>> {
        let angle = servo_angle(angle)?;
        self.hub
            .write(&write_u8(self.endpoint.register(ANGLE), angle))
    }

    /// Pulse width in microseconds as reported by the hub
    pub fn pulse(&self) -> Result<u16, HubError<B>> {
        self.hub.read_u16(self.endpoint.register(PULSE))
    }

    /// Set the pulse width in microseconds (500-2500)
    ///
    /// 1500 µs is the centre position.
    pub fn set_pulse(&self, pulse_us: i32) -> Result<(), HubError<B>> {
        let pulse = servo_pulse(pulse_us)?;
        self.hub
            .write(&write_u16(self.endpoint.register(PULSE), pulse))
    }
}

channel_accessors!(Servo);
io_accessors!(Servo);
