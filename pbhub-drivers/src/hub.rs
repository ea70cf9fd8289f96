//! PbHub handle
//!
//! One [`PbHub`] exists per physical hub. It owns the bus and address and
//! performs the register exchanges for every device attached to it.
//!
//! # Wire protocol
//!
//! - Set: write `[selector, payload...]` in one write
//! - Get: write `[selector]`, then read 1 or 2 bytes
//! - Firmware version: write `[0xFE]`, read 1 byte
//!
//! Each get or set is a single scoped exchange; the bus is released when it
//! ends, whether it succeeded or not.

use pbhub_core::codec::u16_from_wire;
use pbhub_core::config::{HubConfig, DEFAULT_ADDRESS};
use pbhub_core::{Error, FIRMWARE_VERSION};
use pbhub_hal::{I2cBus, I2cDevice};

/// Error type of operations on a hub with bus `B`
pub type HubError<B> = Error<<B as I2cBus>::Error>;

/// Handle to a PbHub on an I2C bus
#[derive(Debug)]
pub struct PbHub<B> {
    device: I2cDevice<B>,
}

impl<B: I2cBus> PbHub<B> {
    /// Hub at the factory-default address (0x61)
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Hub at a custom address
    pub fn with_address(bus: B, address: u8) -> Self {
        Self {
            device: I2cDevice::new(bus, address),
        }
    }

    /// Hub described by `config`
    pub fn with_config(bus: B, config: &HubConfig) -> Self {
        Self::with_address(bus, config.address)
    }

    /// I2C address of the hub
    pub fn address(&self) -> u8 {
        self.device.address()
    }

    /// Firmware version reported by the hub
    pub fn firmware_version(&self) -> Result<u8, HubError<B>> {
        self.read_u8(FIRMWARE_VERSION)
    }

    /// Give the bus back to the caller
    pub fn release(self) -> B {
        self.device.release()
    }

    /// Select `register` and fill `buf` from the response
    pub(crate) fn read_into(&self, register: u8, buf: &mut [u8]) -> Result<(), HubError<B>> {
        let mut exchange = self.device.exchange();
        exchange.write(&[register]).map_err(Error::Transport)?;
        exchange.read_into(buf).map_err(Error::Transport)
    }

    /// One-byte get
    pub(crate) fn read_u8(&self, register: u8) -> Result<u8, HubError<B>> {
        let mut buf = [0u8; 1];
        self.read_into(register, &mut buf)?;
        Ok(buf[0])
    }

    /// Two-byte little-endian get
    pub(crate) fn read_u16(&self, register: u8) -> Result<u16, HubError<B>> {
        let mut buf = [0u8; 2];
        self.read_into(register, &mut buf)?;
        Ok(u16_from_wire(buf))
    }

    /// Set: selector and payload in a single write
    pub(crate) fn write(&self, payload: &[u8]) -> Result<(), HubError<B>> {
        self.device
            .exchange()
            .write(payload)
            .map_err(Error::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec;

    #[test]
    fn test_firmware_version() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0xFE]),
            I2cTransaction::read(0x61, vec![0x03]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        assert_eq!(hub.address(), 0x61);
        assert_eq!(hub.firmware_version(), Ok(3));

        i2c.done();
    }

    #[test]
    fn test_configured_address() {
        let expectations = [
            I2cTransaction::write(0x62, vec![0xFE]),
            I2cTransaction::read(0x62, vec![0x01]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::with_config(i2c.clone(), &HubConfig { address: 0x62 });

        assert_eq!(hub.firmware_version(), Ok(1));

        i2c.done();
    }

    #[test]
    fn test_transport_failure_passes_through() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0xFE]),
            I2cTransaction::read(0x61, vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        assert_eq!(
            hub.firmware_version(),
            Err(Error::Transport(ErrorKind::Other))
        );

        i2c.done();
    }

    #[test]
    fn test_read_failure_releases_bus() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0x46]),
            I2cTransaction::read(0x61, vec![0x00, 0x00]).with_error(ErrorKind::Other),
            I2cTransaction::write(0x61, vec![0xFE]),
            I2cTransaction::read(0x61, vec![0x02]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let hub = PbHub::new(i2c.clone());

        assert_eq!(hub.read_u16(0x46), Err(Error::Transport(ErrorKind::Other)));
        assert_eq!(hub.firmware_version(), Ok(2));

        i2c.done();
    }
}
