//! # Bitmap and Mask Compositor
//!
//! Blits caller-owned source images onto a [`Gfx`]. Sources are trusted to
//! match the declared `w` x `h`; a short slice panics on index like any
//! other slice access.
//!
//! ## Source layouts
//!
//! - 1-bit: rows of `ceil(w / 8)` bytes, MSB first (`draw_xbitmap` reads
//!   XBM, which is LSB first).
//! - 8-bit grayscale: `w * h` intensity samples.
//! - 16-bit color: `w * h` packed 5-6-5 samples.
//! - Masks: 1-bit, MSB first, same row padding as a 1-bit source. A clear
//!   mask bit skips the source pixel.
//!
//! Everything is written through the clipping pixel path, so an origin that
//! is partly or fully off-surface is fine.

use crate::color::Color;
use crate::gfx::Gfx;
use crate::surface::Surface;

/// Bytes in one row of a packed 1-bit image.
pub const fn row_bytes(w: i16) -> usize {
    if w <= 0 {
        0
    } else {
        (w as usize + 7) / 8
    }
}

/// Whether bit `i` of an MSB-first packed row is set.
#[inline]
fn msb_bit(row: &[u8], i: usize) -> bool {
    row[i / 8] & (0x80 >> (i & 7)) != 0
}

#[inline]
fn lsb_bit(row: &[u8], i: usize) -> bool {
    row[i / 8] & (0x01 << (i & 7)) != 0
}

impl<S: Surface> Gfx<'_, S> {
    /// Walk a `w` x `h` source row-major, handing each visible position and
    /// its index to `pixel`. Rows or columns that fall off the surface are
    /// skipped without reading the source.
    fn blit(
        &mut self,
        x: i16,
        y: i16,
        w: i16,
        h: i16,
        mut pixel: impl FnMut(usize, usize) -> Option<Color>,
    ) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        self.batch(|g| {
            for j in 0..h as usize {
                let py = i32::from(y) + j as i32;
                if py < 0 || py >= height {
                    continue;
                }
                for i in 0..w as usize {
                    let px = i32::from(x) + i as i32;
                    if px < 0 || px >= width {
                        continue;
                    }
                    if let Some(color) = pixel(i, j) {
                        g.write_pixel(px as i16, py as i16, color);
                    }
                }
            }
        });
    }

    /// 1-bit bitmap; clear bits are left untouched.
    pub fn draw_bitmap(&mut self, x: i16, y: i16, bitmap: &[u8], w: i16, h: i16, color: Color) {
        let bw = row_bytes(w);
        self.blit(x, y, w, h, |i, j| {
            msb_bit(&bitmap[j * bw..], i).then_some(color)
        });
    }

    /// 1-bit bitmap; clear bits are painted with `bg`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bitmap_bg(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &[u8],
        w: i16,
        h: i16,
        color: Color,
        bg: Color,
    ) {
        let bw = row_bytes(w);
        self.blit(x, y, w, h, |i, j| {
            Some(if msb_bit(&bitmap[j * bw..], i) { color } else { bg })
        });
    }

    /// XBM image (LSB first within each byte), foreground only.
    pub fn draw_xbitmap(&mut self, x: i16, y: i16, bitmap: &[u8], w: i16, h: i16, color: Color) {
        let bw = row_bytes(w);
        self.blit(x, y, w, h, |i, j| {
            lsb_bit(&bitmap[j * bw..], i).then_some(color)
        });
    }

    /// 8-bit grayscale image, one sample per pixel.
    pub fn draw_grayscale_bitmap(&mut self, x: i16, y: i16, bitmap: &[u8], w: i16, h: i16) {
        let stride = w.max(0) as usize;
        self.blit(x, y, w, h, |i, j| Some(Color::from_gray(bitmap[j * stride + i])));
    }

    /// 8-bit grayscale image with a 1-bit transparency mask.
    pub fn draw_grayscale_bitmap_masked(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &[u8],
        mask: &[u8],
        w: i16,
        h: i16,
    ) {
        let stride = w.max(0) as usize;
        let bw = row_bytes(w);
        self.blit(x, y, w, h, |i, j| {
            msb_bit(&mask[j * bw..], i).then(|| Color::from_gray(bitmap[j * stride + i]))
        });
    }

    /// 16-bit 5-6-5 color image, one sample per pixel.
    pub fn draw_rgb_bitmap(&mut self, x: i16, y: i16, bitmap: &[u16], w: i16, h: i16) {
        let stride = w.max(0) as usize;
        self.blit(x, y, w, h, |i, j| Some(Color(bitmap[j * stride + i])));
    }

    /// 16-bit 5-6-5 color image with a 1-bit transparency mask.
    pub fn draw_rgb_bitmap_masked(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &[u16],
        mask: &[u8],
        w: i16,
        h: i16,
    ) {
        let stride = w.max(0) as usize;
        let bw = row_bytes(w);
        self.blit(x, y, w, h, |i, j| {
            msb_bit(&mask[j * bw..], i).then(|| Color(bitmap[j * stride + i]))
        });
    }
}
