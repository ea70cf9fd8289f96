//! Driver errors
//!
//! Two kinds of failure exist. Argument errors are detected before the
//! bus is touched and leave all state as it was. Transport errors come
//! from the bus and are passed through untouched.

use core::fmt;

use crate::config::EndpointKind;

/// A caller-supplied value outside its documented range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Channel not in 0-5
    Channel(u8),
    /// IO pin not in 0-1 (or non-zero where only IO 0 exists)
    Io(u8),
    /// PWM value not in 0-255
    PwmValue(i32),
    /// Servo angle not in 0-180 degrees
    ServoAngle(i32),
    /// Servo pulse not in 500-2500 µs
    ServoPulse(i32),
    /// LED count not in 0-74
    LedCount(i32),
    /// LED index not in 0-73
    LedIndex(i32),
    /// LED range bounds outside 0-74 or stop before start
    LedRange { start: i32, stop: i32 },
    /// Brightness not a number in 0.0-1.0
    Brightness,
    /// Endpoint configuration describes a different device type
    Kind {
        expected: EndpointKind,
        found: EndpointKind,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::Channel(v) => write!(f, "channel {v} not in 0-5"),
            ArgumentError::Io(v) => write!(f, "io {v} not valid for this channel function"),
            ArgumentError::PwmValue(v) => write!(f, "pwm value {v} not in 0-255"),
            ArgumentError::ServoAngle(v) => write!(f, "servo angle {v} not in 0-180"),
            ArgumentError::ServoPulse(v) => write!(f, "servo pulse {v} not in 500-2500 us"),
            ArgumentError::LedCount(v) => write!(f, "led count {v} not in 0-74"),
            ArgumentError::LedIndex(v) => write!(f, "led index {v} not in 0-73"),
            ArgumentError::LedRange { start, stop } => {
                write!(f, "led range {start}..{stop} invalid")
            }
            ArgumentError::Brightness => f.write_str("brightness not in 0.0-1.0"),
            ArgumentError::Kind { expected, found } => {
                write!(f, "expected {expected:?} endpoint, found {found:?}")
            }
        }
    }
}

/// Error from a driver operation
///
/// `E` is the bus error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Rejected before any bus traffic
    InvalidArgument(ArgumentError),
    /// The bus reported a failure
    Transport(E),
}

impl<E> From<ArgumentError> for Error<E> {
    fn from(e: ArgumentError) -> Self {
        Error::InvalidArgument(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Error::Transport(e) => write!(f, "bus transport failure: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl<E: fmt::Debug> embedded_hal::pwm::Error for Error<E> {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}
