//! Echoing fake hub for round-trip tests
//!
//! Behaves like a hub whose registers simply store what was written:
//! a write stores up to two payload bytes under its selector, a read
//! returns the bytes stored under the last selector.

use core::convert::Infallible;

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};

pub(crate) struct EchoHub {
    registers: [[u8; 2]; 256],
    selected: u8,
    /// Writes that carried a payload
    pub(crate) sets: usize,
    /// Full payload of the most recent set
    pub(crate) last_set: [u8; 8],
}

impl EchoHub {
    pub(crate) fn new() -> Self {
        Self {
            registers: [[0; 2]; 256],
            selected: 0,
            sets: 0,
            last_set: [0; 8],
        }
    }

    /// Preload a register as the hub firmware would
    pub(crate) fn preset(mut self, register: u8, bytes: [u8; 2]) -> Self {
        self.registers[usize::from(register)] = bytes;
        self
    }
}

impl ErrorType for EchoHub {
    type Error = Infallible;
}

impl I2c<SevenBitAddress> for EchoHub {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let Some((&register, payload)) = bytes.split_first() else {
                        continue;
                    };
                    self.selected = register;
                    if !payload.is_empty() {
                        let n = payload.len().min(2);
                        self.registers[usize::from(register)][..n].copy_from_slice(&payload[..n]);
                        self.last_set = [0; 8];
                        let len = bytes.len().min(8);
                        self.last_set[..len].copy_from_slice(&bytes[..len]);
                        self.sets += 1;
                    }
                }
                Operation::Read(buf) => {
                    let n = buf.len().min(2);
                    buf[..n].copy_from_slice(&self.registers[usize::from(self.selected)][..n]);
                }
            }
        }
        Ok(())
    }
}
