//! I2C bus abstractions
//!
//! Provides the bus trait the driver talks to and a shared device handle
//! that serialises access to it. Every register operation is one
//! [`Exchange`]: the bus is borrowed when the exchange is opened and
//! released when it is dropped, on success and error paths alike.

use core::cell::{RefCell, RefMut};

use crate::fmt::{trace, warning};

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. Implemented for every [`embedded_hal::i2c::I2c`].
pub trait I2cBus {
    /// Error type for I2C operations
    type Error: core::fmt::Debug;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: embedded_hal::i2c::I2c> I2cBus for T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::read(self, address, buf)
    }
}

/// A bus shared between all users of one peripheral address
///
/// Owns the bus and hands out exclusive [`Exchange`]s. The driver is
/// single-threaded; if the underlying bus is itself shared with other
/// peripherals, its own locking governs that.
#[derive(Debug)]
pub struct I2cDevice<B> {
    bus: RefCell<B>,
    address: u8,
}

impl<B: I2cBus> I2cDevice<B> {
    /// Wrap a bus for the peripheral at `address`
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            bus: RefCell::new(bus),
            address,
        }
    }

    /// Peripheral address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Open a scoped exchange with the peripheral
    ///
    /// # Panics
    ///
    /// Panics if another exchange from the same device is still open.
    pub fn exchange(&self) -> Exchange<'_, B> {
        Exchange {
            bus: self.bus.borrow_mut(),
            address: self.address,
        }
    }

    /// Give the bus back to the caller
    pub fn release(self) -> B {
        self.bus.into_inner()
    }
}

/// One scoped bus exchange
///
/// Holds the bus for as long as it lives. Dropping it releases the bus.
pub struct Exchange<'a, B: I2cBus> {
    bus: RefMut<'a, B>,
    address: u8,
}

impl<B: I2cBus> Exchange<'_, B> {
    /// Write `data` to the peripheral
    pub fn write(&mut self, data: &[u8]) -> Result<(), B::Error> {
        trace!(
            "i2c {=u8:#x}: write {=usize} bytes, first {=u8:#x}",
            self.address,
            data.len(),
            data.first().copied().unwrap_or(0)
        );
        self.bus.write(self.address, data).inspect_err(|_| {
            warning!("i2c {=u8:#x}: write failed", self.address);
        })
    }

    /// Fill `buf` from the peripheral
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<(), B::Error> {
        trace!("i2c {=u8:#x}: read {=usize} bytes", self.address, buf.len());
        self.bus.read(self.address, buf).inspect_err(|_| {
            warning!("i2c {=u8:#x}: read failed", self.address);
        })
    }
}

impl<B: I2cBus> Drop for Exchange<'_, B> {
    fn drop(&mut self) {
        trace!("i2c {=u8:#x}: exchange released", self.address);
    }
}
