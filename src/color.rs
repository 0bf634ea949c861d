//! Packed 16-bit 5-6-5 color representation
use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics_core::pixelcolor::{BinaryColor, Rgb565};

/// A 16-bit packed RGB color: 5 bits red, 6 bits green, 5 bits blue.
///
/// The drawing layer never looks inside a color; it is handed to the
/// surface as-is. Monochrome surfaces treat any non-zero value as "on".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const GRAY: Color = Color(0x8410);
    pub const DARK_GRAY: Color = Color(0x4208);
    pub const LIGHT_GRAY: Color = Color(0xC618);

    /// Monochrome aliases used by 1-bit surfaces
    pub const OFF: Color = Color::BLACK;
    pub const ON: Color = Color(0x0001);

    /// Pack 8-bit channels into 5-6-5, truncating the low bits.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Map an 8-bit intensity to the gray it represents by replicating it
    /// into every channel.
    pub const fn from_gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// True for every color a 1-bit surface would light up.
    pub const fn is_on(self) -> bool {
        self.0 != 0
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(RawU16::from(color).into_inner())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::ON,
            BinaryColor::Off => Color::OFF,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        if color.is_on() {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }
}
