//! Addressable LED strip payloads
//!
//! A strip hangs off one channel. The hub keeps the LED count and
//! brightness itself; colours are written either one LED at a time or as a
//! run of identical LEDs:
//!
//! ```text
//!   pixel:  [sel, idx_lo, idx_hi, R, G, B]
//!   range:  [sel, start_lo, start_hi, count_lo, count_hi, R, G, B]
//! ```

use core::ops::Range;

use crate::color::Color;
use crate::error::ArgumentError;

/// Largest strip the hub firmware drives
pub const MAX_LEDS: u16 = 74;

/// Validate an LED count
pub fn led_count(count: i32) -> Result<u16, ArgumentError> {
    match u16::try_from(count) {
        Ok(c) if c <= MAX_LEDS => Ok(c),
        _ => Err(ArgumentError::LedCount(count)),
    }
}

/// Validate a single LED index
pub fn led_index(index: i32) -> Result<u16, ArgumentError> {
    match u16::try_from(index) {
        Ok(i) if i < MAX_LEDS => Ok(i),
        _ => Err(ArgumentError::LedIndex(index)),
    }
}

/// Half-open run of LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedSpan {
    /// First LED
    pub start: u16,
    /// Number of LEDs
    pub count: u16,
}

impl LedSpan {
    /// Validate `start..stop`
    ///
    /// Both bounds must be in 0-74 and `stop >= start`. An empty range is
    /// valid and yields `None`: there is nothing to send.
    pub fn new(start: i32, stop: i32) -> Result<Option<Self>, ArgumentError> {
        let invalid = ArgumentError::LedRange { start, stop };
        let lo = u16::try_from(start).map_err(|_| invalid)?;
        let hi = u16::try_from(stop).map_err(|_| invalid)?;
        if lo > MAX_LEDS || hi > MAX_LEDS || hi < lo {
            return Err(invalid);
        }

        let count = hi - lo;
        Ok((count > 0).then_some(Self { start: lo, count }))
    }
}

/// Target of a colour assignment: one LED or a half-open run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedSelection {
    /// A single LED index
    Single(i32),
    /// `start..stop`
    Range(i32, i32),
}

impl From<i32> for LedSelection {
    fn from(index: i32) -> Self {
        LedSelection::Single(index)
    }
}

impl From<Range<i32>> for LedSelection {
    fn from(range: Range<i32>) -> Self {
        LedSelection::Range(range.start, range.end)
    }
}

/// Build a single-LED colour write
pub const fn pixel_payload(register: u8, index: u16, color: Color) -> [u8; 6] {
    let [lo, hi] = index.to_le_bytes();
    let [r, g, b] = color.to_bytes();
    [register, lo, hi, r, g, b]
}

/// Build a run colour write
pub const fn span_payload(register: u8, span: LedSpan, color: Color) -> [u8; 8] {
    let [start_lo, start_hi] = span.start.to_le_bytes();
    let [count_lo, count_hi] = span.count.to_le_bytes();
    let [r, g, b] = color.to_bytes();
    [register, start_lo, start_hi, count_lo, count_hi, r, g, b]
}
