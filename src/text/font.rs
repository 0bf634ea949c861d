//! # Proportional Fonts
//!
//! A [`GfxFont`] is a borrowed, read-only description of a proportional
//! font: one packed bitmap for all glyphs plus a metrics table indexed by
//! `code - first`.
//!
//! ## Glyph bitmaps
//!
//! Each glyph starts on a byte boundary at `bitmap_offset`. Its bits run MSB
//! first and continue across rows without padding, so a 3x3 glyph uses 9
//! bits. Offsets are relative to the glyph's origin on the baseline; a
//! negative `y_offset` places the top row above it.

/// Metrics for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// Cursor advance after drawing, in unscaled pixels
    pub x_advance: u8,
    pub x_offset: i8,
    pub y_offset: i8,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// True when the glyph has no pixels to draw (a space, typically).
    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Set pixels of this glyph as `(column, row)` pairs, read from `bitmap`.
    /// Bits past the end of `bitmap` read as clear.
    pub fn pixels<'b>(&self, bitmap: &'b [u8]) -> impl Iterator<Item = (u8, u8)> + 'b {
        let (w, h) = (self.width, self.height);
        let base = usize::from(self.bitmap_offset);
        (0..h).flat_map(move |row| (0..w).map(move |col| (col, row))).filter(move |&(col, row)| {
            let bit = usize::from(row) * usize::from(w) + usize::from(col);
            bitmap
                .get(base + bit / 8)
                .is_some_and(|byte| byte & (0x80 >> (bit & 7)) != 0)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GfxFont<'a> {
    pub bitmap: &'a [u8],
    pub glyphs: &'a [Glyph],
    pub first: u16,
    pub last: u16,
    /// Line height, in unscaled pixels
    pub y_advance: u8,
}

impl<'a> GfxFont<'a> {
    pub const fn new(
        bitmap: &'a [u8],
        glyphs: &'a [Glyph],
        first: u16,
        last: u16,
        y_advance: u8,
    ) -> Self {
        Self {
            bitmap,
            glyphs,
            first,
            last,
            y_advance,
        }
    }

    /// Metrics for `c`, or `None` when `c` is outside `first..=last` or the
    /// glyph table is shorter than the declared range.
    pub fn glyph(&self, c: u8) -> Option<&'a Glyph> {
        let c = u16::from(c);
        if c < self.first || c > self.last {
            return None;
        }
        self.glyphs.get(usize::from(c - self.first))
    }
}
