//! RGB565 color representation
use core::fmt;

use embedded_graphics_core::pixelcolor::{raw::RawU16, IntoStorage, Rgb565};

/// A 16-bit panel color, stored exactly as the controller expects it
/// (5 bits red, 6 bits green, 5 bits blue).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const WHITE: Color = Color(0xFFFF);
    pub const BLACK: Color = Color(0x0000);
    pub const BLUE: Color = Color(0x001F);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const CYAN: Color = Color(0x7FFF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const BROWN: Color = Color(0xBC40);
    pub const BRRED: Color = Color(0xFC07);
    pub const GRAY: Color = Color(0x8430);
    pub const NAVY: Color = Color(0x000F);
    pub const DARKBLUE: Color = Color(0x01CF);
    pub const LIGHTBLUE: Color = Color(0x7D7C);
    pub const GRAYBLUE: Color = Color(0x5458);
    pub const LIGHTGREEN: Color = Color(0x841F);
    pub const LGRAY: Color = Color(0xC618);

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Pack 8-bit channels into RGB565 by truncating the low bits.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(RawU16::new(self.0))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Self(color.into_storage())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        color.to_rgb565()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#06X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_core::pixelcolor::RgbColor;

    #[test_log::test]
    fn from_rgb_matches_named_constants() {
        assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb(255, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb(0, 255, 0), Color::GREEN);
        assert_eq!(Color::from_rgb(0, 0, 255), Color::BLUE);
    }

    #[test_log::test]
    fn passes_through_embedded_graphics_unchanged() {
        assert_eq!(Color::RED.to_rgb565(), Rgb565::RED);
        assert_eq!(Color::from(Rgb565::CYAN).raw(), Rgb565::CYAN.into_storage());
        assert_eq!(Color::from(Color::DARKBLUE.to_rgb565()), Color::DARKBLUE);
    }
}
