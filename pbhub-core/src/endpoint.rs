//! Channel endpoints
//!
//! A [`ChannelEndpoint`] is the validated (channel, io) pair behind every
//! channel device, together with the register selectors of the `N`
//! functions that device uses. The selectors are recomputed whenever the
//! channel or io changes, so a device never talks to a stale address.

use crate::error::ArgumentError;
use crate::fmt::debug;
use crate::register::{register, Channel, Function, Io};

/// Validated channel/io pair with cached register selectors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelEndpoint<const N: usize> {
    channel: Channel,
    io: Io,
    functions: [Function; N],
    registers: [u8; N],
}

impl<const N: usize> ChannelEndpoint<N> {
    /// Create an endpoint, validating `channel` and `io`
    pub fn new(channel: u8, io: u8, functions: [Function; N]) -> Result<Self, ArgumentError> {
        let channel = Channel::new(channel)?;
        let io = Io::new(io)?;
        Ok(Self {
            channel,
            io,
            functions,
            registers: Self::selectors(channel, io, &functions),
        })
    }

    fn selectors(channel: Channel, io: Io, functions: &[Function; N]) -> [u8; N] {
        core::array::from_fn(|slot| register(channel, functions[slot], io))
    }

    fn retarget(&mut self, channel: Channel, io: Io) {
        self.channel = channel;
        self.io = io;
        self.registers = Self::selectors(channel, io, &self.functions);
        debug!(
            "endpoint retargeted to channel {=u8} io {=u8}, first register {=u8:#x}",
            channel.get(),
            io.get(),
            self.registers.first().copied().unwrap_or(0)
        );
    }

    /// Channel number (0-5)
    pub fn channel(&self) -> u8 {
        self.channel.get()
    }

    /// IO pin (0-1)
    pub fn io(&self) -> u8 {
        self.io.get()
    }

    /// Move the endpoint to another channel
    ///
    /// On error the endpoint is left unchanged.
    pub fn set_channel(&mut self, channel: u8) -> Result<(), ArgumentError> {
        let channel = Channel::new(channel)?;
        self.retarget(channel, self.io);
        Ok(())
    }

    /// Move the endpoint to another IO pin
    ///
    /// On error the endpoint is left unchanged.
    pub fn set_io(&mut self, io: u8) -> Result<(), ArgumentError> {
        let io = Io::new(io)?;
        self.retarget(self.channel, io);
        Ok(())
    }

    /// Selector for the function in `slot`
    ///
    /// # Panics
    ///
    /// Panics if `slot >= N`.
    pub fn register(&self, slot: usize) -> u8 {
        self.registers[slot]
    }

    /// All selectors, in function order
    pub fn registers(&self) -> [u8; N] {
        self.registers
    }
}
