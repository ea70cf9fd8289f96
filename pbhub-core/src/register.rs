//! PbHub register map
//!
//! Every operation on the hub starts by writing a one-byte register
//! selector. Channel-relative selectors are the channel's base byte OR'd
//! with a function code:
//!
//! ```text
//!   channel   0     1     2     3     4     5
//!   base     0x40  0x50  0x60  0x70  0x80  0xA0
//!
//!   selector = base[channel] | code(function, io)
//! ```
//!
//! Functions that exist once per IO pin use `code | io`; LED and analog
//! functions ignore the IO pin. The firmware version lives at a fixed,
//! channel-independent selector.

use crate::error::ArgumentError;

/// Base selector of each channel
pub const CHANNEL_BASE: [u8; Channel::COUNT] = [0x40, 0x50, 0x60, 0x70, 0x80, 0xA0];

/// Firmware version selector (not channel-relative)
pub const FIRMWARE_VERSION: u8 = 0xFE;

/// One of the six hub channels (0-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

impl Channel {
    /// Number of channels on the hub
    pub const COUNT: usize = 6;

    /// Validate a channel number
    pub const fn new(channel: u8) -> Result<Self, ArgumentError> {
        if (channel as usize) < Self::COUNT {
            Ok(Self(channel))
        } else {
            Err(ArgumentError::Channel(channel))
        }
    }

    /// Channel number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Base register selector for this channel
    pub const fn base(self) -> u8 {
        CHANNEL_BASE[self.0 as usize]
    }
}

impl TryFrom<u8> for Channel {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}

/// IO pin within a channel (0 or 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Io(u8);

impl Io {
    /// Number of IO pins per channel
    pub const COUNT: usize = 2;

    /// IO pin 0, the only pin for analog and LED functions
    pub const PIN0: Self = Self(0);

    /// IO pin 1
    pub const PIN1: Self = Self(1);

    /// Validate an IO pin number
    pub const fn new(io: u8) -> Result<Self, ArgumentError> {
        if (io as usize) < Self::COUNT {
            Ok(Self(io))
        } else {
            Err(ArgumentError::Io(io))
        }
    }

    /// IO pin number
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Io {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Io> for u8 {
    fn from(io: Io) -> Self {
        io.0
    }
}

/// Logical function addressed by a register selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Function {
    /// Digital output level (0x00 / 0x01)
    DigitalOutput,
    /// PWM duty (0x02 / 0x03)
    Pwm,
    /// Digital input level (0x04 / 0x05)
    DigitalInput,
    /// 12-bit analog input (0x06, IO 0 only)
    AnalogInput,
    /// Number of LEDs on the strip (0x08)
    LedCount,
    /// Colour of a single LED (0x09)
    LedPixel,
    /// Colour of a run of LEDs (0x0A)
    LedRange,
    /// LED brightness (0x0B)
    LedBrightness,
    /// Servo angle in degrees (0x0C / 0x0D)
    ServoAngle,
    /// Servo pulse width in microseconds (0x0E / 0x0F)
    ServoPulse,
}

impl Function {
    const fn base_code(self) -> u8 {
        match self {
            Function::DigitalOutput => 0x00,
            Function::Pwm => 0x02,
            Function::DigitalInput => 0x04,
            Function::AnalogInput => 0x06,
            Function::LedCount => 0x08,
            Function::LedPixel => 0x09,
            Function::LedRange => 0x0A,
            Function::LedBrightness => 0x0B,
            Function::ServoAngle => 0x0C,
            Function::ServoPulse => 0x0E,
        }
    }

    /// Whether the function exists once per IO pin
    const fn per_io(self) -> bool {
        matches!(
            self,
            Function::DigitalOutput
                | Function::Pwm
                | Function::DigitalInput
                | Function::ServoAngle
                | Function::ServoPulse
        )
    }

    /// Function code for the given IO pin
    pub const fn code(self, io: Io) -> u8 {
        if self.per_io() {
            self.base_code() | io.get()
        } else {
            self.base_code()
        }
    }
}

/// Register selector for a function on a channel
pub const fn register(channel: Channel, function: Function, io: Io) -> u8 {
    channel.base() | function.code(io)
}
