//! LED colours
//!
//! The hub takes colours as three bytes, red first. Callers can hand over
//! either a packed `0xRRGGBB` integer or explicit components; both reduce
//! to the same wire bytes.

use smart_leds::RGB8;

/// Colour of one or more LEDs
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Packed `0xRRGGBB`; bits above 24 are ignored
    Packed(u32),
    /// Explicit red, green, blue
    Rgb(u8, u8, u8),
}

impl Color {
    /// Wire bytes `[R, G, B]`
    pub const fn to_bytes(self) -> [u8; 3] {
        match self {
            Color::Packed(c) => [(c >> 16) as u8, (c >> 8) as u8, c as u8],
            Color::Rgb(r, g, b) => [r, g, b],
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Color {}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color::Packed(packed)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<RGB8> for Color {
    fn from(c: RGB8) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_and_triplet_match() {
        let packed = Color::from(0xFF00FF_u32);
        let triplet = Color::from([255_u8, 0, 255]);

        assert_eq!(packed.to_bytes(), [0xFF, 0x00, 0xFF]);
        assert_eq!(packed.to_bytes(), triplet.to_bytes());
        assert_eq!(packed, triplet);
    }

    #[test]
    fn test_packed_ignores_high_bits() {
        assert_eq!(Color::Packed(0xAB12_3456).to_bytes(), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_rgb8_conversion() {
        let c = Color::from(RGB8::new(1, 2, 3));
        assert_eq!(c.to_bytes(), [1, 2, 3]);
        assert_eq!(c, Color::from((1, 2, 3)));
    }
}
