//! Hardware configuration types
//!
//! These types describe how devices are attached to the hub.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::brightness_to_wire;
use crate::error::ArgumentError;
use crate::led::led_count;
use crate::register::{Channel, Io};

/// Factory-default I2C address of the hub
pub const DEFAULT_ADDRESS: u8 = 0x61;

/// Brightness a strip starts with unless configured otherwise
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Maximum channel endpoints per board (six channels, two IO pins each)
pub const MAX_ENDPOINTS: usize = 12;

/// Maximum LED strips per board (one per channel)
pub const MAX_STRIPS: usize = 6;

/// Hub bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HubConfig {
    /// 7-bit I2C address
    pub address: u8,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
        }
    }
}

/// Device type attached to a channel endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndpointKind {
    /// Digital input
    DigitalInput,
    /// Digital output
    DigitalOutput,
    /// 12-bit analog input (IO 0 only)
    AnalogInput,
    /// 8-bit PWM output
    PwmOutput,
    /// RC servo
    Servo,
}

/// A device on one (channel, io) endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EndpointConfig {
    /// Device type
    pub kind: EndpointKind,
    /// Channel (0-5)
    pub channel: u8,
    /// IO pin (0-1)
    #[cfg_attr(feature = "serde", serde(default))]
    pub io: u8,
}

impl EndpointConfig {
    /// Check channel and io ranges for this device type
    pub fn validate(&self) -> Result<(), ArgumentError> {
        Channel::new(self.channel)?;
        Io::new(self.io)?;
        if self.kind == EndpointKind::AnalogInput && self.io != 0 {
            return Err(ArgumentError::Io(self.io));
        }
        Ok(())
    }

    /// Check that this endpoint describes a `kind` device
    pub fn expect_kind(&self, kind: EndpointKind) -> Result<(), ArgumentError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(ArgumentError::Kind {
                expected: kind,
                found: self.kind,
            })
        }
    }
}

/// An addressable LED strip on one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedStripConfig {
    /// Channel (0-5)
    pub channel: u8,
    /// Number of LEDs (0-74)
    pub led_count: u16,
    /// Initial brightness (0.0-1.0)
    #[cfg_attr(feature = "serde", serde(default = "default_brightness"))]
    pub brightness: f32,
}

#[cfg(feature = "serde")]
fn default_brightness() -> f32 {
    DEFAULT_BRIGHTNESS
}

impl LedStripConfig {
    /// Strip on `channel` with default brightness
    pub const fn new(channel: u8, led_count: u16) -> Self {
        Self {
            channel,
            led_count,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Check channel, count and brightness ranges
    pub fn validate(&self) -> Result<(), ArgumentError> {
        Channel::new(self.channel)?;
        led_count(i32::from(self.led_count))?;
        brightness_to_wire(self.brightness)?;
        Ok(())
    }
}

/// Errors found while validating a [`BoardConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An entry has an out-of-range value
    Invalid(ArgumentError),
    /// Two entries claim the same channel endpoint
    EndpointInUse { channel: u8, io: u8 },
    /// A strip shares its channel with another strip or endpoint
    ChannelInUse { channel: u8 },
}

impl From<ArgumentError> for ConfigError {
    fn from(e: ArgumentError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Everything attached to one hub
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Bus settings
    pub hub: HubConfig,
    /// Channel devices
    pub endpoints: Vec<EndpointConfig, MAX_ENDPOINTS>,
    /// LED strips
    pub strips: Vec<LedStripConfig, MAX_STRIPS>,
}

impl BoardConfig {
    /// Validate every entry and check that no two claim the same pins
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, ep) in self.endpoints.iter().enumerate() {
            ep.validate()?;
            let clash = self.endpoints[..i]
                .iter()
                .any(|other| other.channel == ep.channel && other.io == ep.io);
            if clash {
                return Err(ConfigError::EndpointInUse {
                    channel: ep.channel,
                    io: ep.io,
                });
            }
        }

        for (i, strip) in self.strips.iter().enumerate() {
            strip.validate()?;
            let clash = self.strips[..i].iter().any(|s| s.channel == strip.channel)
                || self.endpoints.iter().any(|ep| ep.channel == strip.channel);
            if clash {
                return Err(ConfigError::ChannelInUse {
                    channel: strip.channel,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(kind: EndpointKind, channel: u8, io: u8) -> EndpointConfig {
        EndpointConfig { kind, channel, io }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(HubConfig::default().address, 0x61);
        assert_eq!(LedStripConfig::new(2, 10).brightness, 0.5);
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(endpoint(EndpointKind::Servo, 5, 1).validate().is_ok());
        assert_eq!(
            endpoint(EndpointKind::Servo, 6, 0).validate(),
            Err(ArgumentError::Channel(6))
        );
        assert_eq!(
            endpoint(EndpointKind::DigitalInput, 0, 2).validate(),
            Err(ArgumentError::Io(2))
        );
        assert_eq!(
            endpoint(EndpointKind::AnalogInput, 0, 1).validate(),
            Err(ArgumentError::Io(1))
        );
    }

    #[test]
    fn test_expect_kind() {
        let ep = endpoint(EndpointKind::PwmOutput, 0, 0);
        assert!(ep.expect_kind(EndpointKind::PwmOutput).is_ok());
        assert_eq!(
            ep.expect_kind(EndpointKind::Servo),
            Err(ArgumentError::Kind {
                expected: EndpointKind::Servo,
                found: EndpointKind::PwmOutput,
            })
        );
    }

    #[test]
    fn test_strip_validation() {
        assert!(LedStripConfig::new(0, 74).validate().is_ok());
        assert_eq!(
            LedStripConfig::new(0, 75).validate(),
            Err(ArgumentError::LedCount(75))
        );
        let mut strip = LedStripConfig::new(1, 10);
        strip.brightness = 1.5;
        assert_eq!(strip.validate(), Err(ArgumentError::Brightness));
    }

    #[test]
    fn test_board_conflicts() {
        let mut board = BoardConfig::default();
        board
            .endpoints
            .push(endpoint(EndpointKind::DigitalInput, 0, 0))
            .unwrap();
        board
            .endpoints
            .push(endpoint(EndpointKind::DigitalOutput, 0, 1))
            .unwrap();
        assert!(board.validate().is_ok());

        board
            .endpoints
            .push(endpoint(EndpointKind::AnalogInput, 0, 0))
            .unwrap();
        assert_eq!(
            board.validate(),
            Err(ConfigError::EndpointInUse { channel: 0, io: 0 })
        );

        board.endpoints.pop();
        board.strips.push(LedStripConfig::new(0, 8)).unwrap();
        assert_eq!(
            board.validate(),
            Err(ConfigError::ChannelInUse { channel: 0 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_board_from_toml() {
        let input = r#"
            [hub]
            address = 0x62

            [[endpoints]]
            kind = "servo"
            channel = 1
            io = 1

            [[endpoints]]
            kind = "analog_input"
            channel = 2

            [[strips]]
            channel = 3
            led_count = 30
        "#;

        let board: BoardConfig = toml::from_str(input).unwrap();
        assert_eq!(board.hub.address, 0x62);
        assert_eq!(board.endpoints.len(), 2);
        assert_eq!(board.endpoints[0], endpoint(EndpointKind::Servo, 1, 1));
        assert_eq!(board.endpoints[1].io, 0);
        assert_eq!(board.strips[0].brightness, DEFAULT_BRIGHTNESS);
        assert!(board.validate().is_ok());
    }
}
