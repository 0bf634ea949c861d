//! # Rotation Transform
//!
//! Maps the logical (rotated) coordinate space that every drawing call uses
//! onto the raw coordinate space of the physical surface.
//!
//! | rotation | raw x           | raw y           |
//! |----------|-----------------|-----------------|
//! | 0        | x               | y               |
//! | 1        | y               | raw_h - 1 - x   |
//! | 2        | raw_w - 1 - x   | raw_h - 1 - y   |
//! | 3        | raw_w - 1 - y   | x               |

/// One of the four cardinal orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// Only the low two bits are significant, so `5` selects `Rotate90`.
    pub const fn from_u8(value: u8) -> Self {
        match value & 3 {
            0 => Rotation::Rotate0,
            1 => Rotation::Rotate90,
            2 => Rotation::Rotate180,
            _ => Rotation::Rotate270,
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 1,
            Rotation::Rotate180 => 2,
            Rotation::Rotate270 => 3,
        }
    }

    /// True when logical width/height are the raw height/width.
    pub const fn is_transposed(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

impl From<u8> for Rotation {
    fn from(value: u8) -> Self {
        Rotation::from_u8(value)
    }
}

/// Raw dimensions fixed at construction plus the current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    raw_width: i16,
    raw_height: i16,
    rotation: Rotation,
}

impl Geometry {
    pub const fn new(raw_width: i16, raw_height: i16) -> Self {
        Self {
            raw_width,
            raw_height,
            rotation: Rotation::Rotate0,
        }
    }

    pub const fn raw_width(&self) -> i16 {
        self.raw_width
    }

    pub const fn raw_height(&self) -> i16 {
        self.raw_height
    }

    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Width as seen through the current rotation
    pub const fn width(&self) -> i16 {
        if self.rotation.is_transposed() {
            self.raw_height
        } else {
            self.raw_width
        }
    }

    /// Height as seen through the current rotation
    pub const fn height(&self) -> i16 {
        if self.rotation.is_transposed() {
            self.raw_width
        } else {
            self.raw_height
        }
    }

    pub const fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    /// Remap a logical point to raw coordinates. No clipping is applied.
    pub const fn to_raw(&self, x: i16, y: i16) -> (i16, i16) {
        match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (y, self.raw_height - 1 - x),
            Rotation::Rotate180 => (self.raw_width - 1 - x, self.raw_height - 1 - y),
            Rotation::Rotate270 => (self.raw_width - 1 - y, x),
        }
    }
}
