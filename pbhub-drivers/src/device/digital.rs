//! Digital input and output
//!
//! Both read one byte back from the hub; `1` means high. Outputs are set
//! by writing `[selector, 0x01 | 0x00]`.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use pbhub_core::codec::write_u8;
use pbhub_core::config::{EndpointConfig, EndpointKind};
use pbhub_core::{ArgumentError, ChannelEndpoint, Function};
use pbhub_hal::I2cBus;

use super::{channel_accessors, io_accessors};
use crate::hub::{HubError, PbHub};

/// Digital input on a hub channel
pub struct DigitalInput<'a, B> {
    hub: &'a PbHub<B>,
    endpoint: ChannelEndpoint<1>,
}

impl<'a, B: I2cBus> DigitalInput<'a, B> {
    /// Input on `channel` (0-5), pin `io` (0-1)
    pub fn new(hub: &'a PbHub<B>, channel: u8, io: u8) -> Result<Self, ArgumentError> {
        Ok(Self {
            hub,
            endpoint: ChannelEndpoint::new(channel, io, [Function::DigitalInput])?,
        })
    }

    /// Input described by a `digital_input` endpoint entry
    pub fn from_config(hub: &'a PbHub<B>, config: &EndpointConfig) -> Result<Self, ArgumentError> {
        config.expect_kind(EndpointKind::DigitalInput)?;
        Self::new(hub, config.channel, config.io)
    }

    /// Current input level
    pub fn value(&self) -> Result<bool, HubError<B>> {
        Ok(self.hub.read_u8(self.endpoint.register(0))? == 1)
    }
}

channel_accessors!(DigitalInput);
io_accessors!(DigitalInput);

impl<B: I2cBus> ErrorType for DigitalInput<'_, B> {
    type Error = HubError<B>;
}

impl<B: I2cBus> InputPin for DigitalInput<'_, B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.value()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.value().map(|high| !high)
    }
}

/// Digital output on a hub channel
pub struct DigitalOutput<'a, B> {
    hub: &'a PbHub<B>,
    endpoint: ChannelEndpoint<1>,
}

impl<'a, B: I2cBus> DigitalOutput<'a, B> {
    /// Output on `channel` (0-5), pin `io` (0-1)
    pub fn new(hub: &'a PbHub<B>, channel: u8, io: u8) -> Result<Self, ArgumentError> {
        Ok(Self {
            hub,
            endpoint: ChannelEndpoint::new(channel, io, [Function::DigitalOutput])?,
        })
    }

    /// Output described by a `digital_output` endpoint entry
    pub fn from_config(hub: &'a PbHub<B>, config: &EndpointConfig) -> Result<Self, ArgumentError> {
        config.expect_kind(EndpointKind::DigitalOutput)?;
        Self::new(hub, config.channel, config.io)
    }

    /// Output level as reported by the hub
    pub fn value(&self) -> Result<bool, HubError<B>> {
        Ok(self.hub.read_u8(self.endpoint.register(0))? == 1)
    }

    /// Drive the output high (`true`) or low
    pub fn set_value(&self, high: bool) -> Result<(), HubError<B>> {
        self.hub
            .write(&write_u8(self.endpoint.register(0), u8::from(high)))
    }
}

channel_accessors!(DigitalOutput);
io_accessors!(DigitalOutput);

impl<B: I2cBus> ErrorType for DigitalOutput<'_, B> {
    type Error = HubError<B>;
}

impl<B: I2cBus> OutputPin for DigitalOutput<'_, B> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(true)
    }
}

impl<B: I2cBus> StatefulOutputPin for DigitalOutput<'_, B> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.value()
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.value().map(|high| !high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::EchoHub;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use pbhub_core::Error;
    use std::vec;

    #[test]
    fn test_input_reads_level() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0x55]),
            I2cTransaction::read(0x61, vec![0x01]),
            I2cTransaction::write(0x61, vec![0x55]),
            I2cTransaction::read(0x61, vec![0x00]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        let mut input = DigitalInput::new(&hub, 1, 1).unwrap();
        assert_eq!(input.value(), Ok(true));
        assert_eq!(input.is_low(), Ok(true));

        i2c.done();
    }

    #[test]
    fn test_output_write_payload() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0x60, 0x01]),
            I2cTransaction::write(0x61, vec![0x60, 0x00]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        let mut output = DigitalOutput::new(&hub, 2, 0).unwrap();
        output.set_high().unwrap();
        output.set_value(false).unwrap();

        i2c.done();
    }

    #[test]
    fn test_output_round_trip() {
        let hub = PbHub::new(EchoHub::new());
        {
            let mut output = DigitalOutput::new(&hub, 3, 1).unwrap();
            output.set_value(true).unwrap();
            assert_eq!(output.value(), Ok(true));
            assert_eq!(output.is_set_high(), Ok(true));

            output.set_low().unwrap();
            assert_eq!(output.value(), Ok(false));
        }
        assert_eq!(hub.release().sets, 2);
    }

    #[test]
    fn test_retarget_uses_new_register() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0x44]),
            I2cTransaction::read(0x61, vec![0x00]),
            I2cTransaction::write(0x61, vec![0xA5]),
            I2cTransaction::read(0x61, vec![0x01]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        let mut input = DigitalInput::new(&hub, 0, 0).unwrap();
        assert_eq!(input.value(), Ok(false));

        input.set_channel(5).unwrap();
        input.set_io(1).unwrap();
        assert_eq!((input.channel(), input.io()), (5, 1));
        assert_eq!(input.value(), Ok(true));

        i2c.done();
    }

    #[test]
    fn test_invalid_endpoint_touches_no_bus() {
        let mut i2c = I2cMock::new(&[]);
        let hub = PbHub::new(i2c.clone());

        assert_eq!(
            DigitalOutput::new(&hub, 6, 0).err(),
            Some(ArgumentError::Channel(6))
        );
        assert_eq!(
            DigitalInput::new(&hub, 0, 2).err(),
            Some(ArgumentError::Io(2))
        );

        let mut output = DigitalOutput::new(&hub, 1, 0).unwrap();
        assert_eq!(output.set_io(7), Err(ArgumentError::Io(7)));
        assert_eq!((output.channel(), output.io()), (1, 0));

        i2c.done();
    }

    #[test]
    fn test_from_config_checks_kind() {
        let mut i2c = I2cMock::new(&[]);
        let hub = PbHub::new(i2c.clone());

        let config = EndpointConfig {
            kind: EndpointKind::DigitalOutput,
            channel: 4,
            io: 1,
        };
        let output = DigitalOutput::from_config(&hub, &config).unwrap();
        assert_eq!((output.channel(), output.io()), (4, 1));

        assert_eq!(
            DigitalInput::from_config(&hub, &config).err(),
            Some(ArgumentError::Kind {
                expected: EndpointKind::DigitalInput,
                found: EndpointKind::DigitalOutput,
            })
        );

        i2c.done();
    }

    #[test]
    fn test_transport_failure() {
        let expectations =
            [I2cTransaction::write(0x61, vec![0x40, 0x01]).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        let output = DigitalOutput::new(&hub, 0, 0).unwrap();
        assert_eq!(
            output.set_value(true),
            Err(Error::Transport(ErrorKind::Other))
        );

        i2c.done();
    }
}
