//! Addressable LED strip
//!
//! The hub drives up to 74 LEDs on a channel. It keeps the LED count and
//! brightness itself; this driver holds neither and reads them back on
//! demand.
//!
//! Brightness is applied by the hub when colours are written. Changing it
//! does not alter LEDs that are already lit; rewrite them to see the new
//! level.
//!
//! ```ignore
//! let strip = LedStrip::new(&hub, 0, 10, 0.5)?;
//!
//! strip.set(0, 0xFF0000_u32)?;          // one LED
//! strip.set(1..3, [0, 255, 255])?;      // LEDs 1 and 2
//! strip.fill(RGB8::new(255, 255, 0))?;  // whole strip
//! ```

use pbhub_core::codec::{brightness_from_wire, brightness_to_wire, write_u16, write_u8};
use pbhub_core::config::LedStripConfig;
use pbhub_core::led::{led_count, led_index, pixel_payload, span_payload};
use pbhub_core::{ChannelEndpoint, Color, Function, LedSelection, LedSpan};
use pbhub_hal::I2cBus;

use crate::fmt::{debug, trace};
use crate::hub::{HubError, PbHub};

const COUNT: usize = 0;
const PIXEL: usize = 1;
const RANGE: usize = 2;
const BRIGHTNESS: usize = 3;

/// Addressable LED strip on a hub channel
pub struct LedStrip<'a, B> {
    hub: &'a PbHub<B>,
    endpoint: ChannelEndpoint<4>,
}

impl<'a, B: I2cBus> LedStrip<'a, B> {
    /// Strip on `channel` (0-5) with `count` LEDs (0-74) at `brightness`
    /// (0.0-1.0)
    ///
    /// All arguments are checked first; then the count and brightness are
    /// written to the hub.
    pub fn new(
        hub: &'a PbHub<B>,
        channel: u8,
        count: i32,
        brightness: f32,
    ) -> Result<Self, HubError<B>> {
        let endpoint = ChannelEndpoint::new(
            channel,
            0,
            [
                Function::LedCount,
                Function::LedPixel,
                Function::LedRange,
                Function::LedBrightness,
            ],
        )?;
        let count = led_count(count)?;
        let level = brightness_to_wire(brightness)?;

        let strip = Self { hub, endpoint };
        strip
            .hub
            .write(&write_u16(strip.endpoint.register(COUNT), count))?;
        strip
            .hub
            .write(&write_u8(strip.endpoint.register(BRIGHTNESS), level))?;

        debug!(
            "led strip on channel {=u8}: {=u16} leds, brightness {=u8}",
            channel,
            count,
            level
        );
        Ok(strip)
    }

    /// Strip described by a strip config entry
    pub fn with_config(hub: &'a PbHub<B>, config: &LedStripConfig) -> Result<Self, HubError<B>> {
        Self::new(
            hub,
            config.channel,
            i32::from(config.led_count),
            config.brightness,
        )
    }

    /// Hub channel the strip is on
    pub fn channel(&self) -> u8 {
        self.endpoint.channel()
    }

    /// Number of LEDs as configured on the hub
    pub fn led_count(&self) -> Result<u16, HubError<B>> {
        self.hub.read_u16(self.endpoint.register(COUNT))
    }

    /// Set the number of LEDs (0-74)
    pub fn set_led_count(&self, count: i32) -> Result<(), HubError<B>> {
        let count = led_count(count)?;
        self.hub
            .write(&write_u16(self.endpoint.register(COUNT), count))
    }

    /// Brightness as reported by the hub, rounded to two decimals
    ///
    /// The hub protocol answers this query from the LED count selector,
    /// not the brightness selector, and that is what is sent here.
    pub fn brightness(&self) -> Result<f32, HubError<B>> {
        let byte = self.hub.read_u8(self.endpoint.register(COUNT))?;
        Ok(brightness_from_wire(byte))
    }

    /// Set the brightness (0.0-1.0) used for subsequent colour writes
    pub fn set_brightness(&self, value: f32) -> Result<(), HubError<B>> {
        let level = brightness_to_wire(value)?;
        self.hub
            .write(&write_u8(self.endpoint.register(BRIGHTNESS), level))
    }

    /// Set the colour of the LED at `index` (0-73)
    pub fn set_pixel(&self, index: i32, color: impl Into<Color>) -> Result<(), HubError<B>> {
        let index = led_index(index)?;
        self.hub.write(&pixel_payload(
            self.endpoint.register(PIXEL),
            index,
            color.into(),
        ))
    }

    /// Set the colour of LEDs `start..stop`
    ///
    /// Bounds must be in 0-74 with `stop >= start`. An empty range sends
    /// nothing.
    pub fn set_range(
        &self,
        start: i32,
        stop: i32,
        color: impl Into<Color>,
    ) -> Result<(), HubError<B>> {
        let Some(span) = LedSpan::new(start, stop)? else {
            trace!("led range {=i32}..{=i32} empty, nothing sent", start, stop);
            return Ok(());
        };
        self.hub.write(&span_payload(
            self.endpoint.register(RANGE),
            span,
            color.into(),
        ))
    }

    /// Set the colour of one LED or a range of LEDs
    pub fn set(
        &self,
        selection: impl Into<LedSelection>,
        color: impl Into<Color>,
    ) -> Result<(), HubError<B>> {
        match selection.into() {
            LedSelection::Single(index) => self.set_pixel(index, color),
            LedSelection::Range(start, stop) => self.set_range(start, stop, color),
        }
    }

    /// Set every LED to `color`
    ///
    /// The LED count is read from the hub first, so the fill always
    /// covers the strip as currently configured there.
    pub fn fill(&self, color: impl Into<Color>) -> Result<(), HubError<B>> {
        let count = self.led_count()?;
        self.set_range(0, i32::from(count), color)
    }
}
