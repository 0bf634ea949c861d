//! # Packed 1-bit Canvas
//!
//! An in-memory monochrome [`Surface`]. Pixels are packed eight to a byte,
//! MSB first, rows padded to a whole byte:
//!
//! ```text
//! bytes_per_row = ceil(width / 8)
//! buffer.len()  = bytes_per_row * height
//! ```
//!
//! Any non-zero [`Color`] sets a bit; zero clears it.
//!
//! ## No buffer
//!
//! [`Canvas1::new`] never fails. If the buffer cannot be allocated the
//! canvas keeps its dimensions but has no storage: drawing is a no-op,
//! [`Canvas1::get_pixel`] reads `false` and [`Canvas1::buffer`] is `None`.
//! Use [`Canvas1::try_new`] to get the allocation error instead.

use alloc::vec::Vec;

use log::{debug, error};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::gfx::Gfx;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas1 {
    width: u16,
    height: u16,
    buffer: Option<Vec<u8>>,
}

impl Canvas1 {
    /// Allocate a cleared `width` x `height` canvas. Dimensions above
    /// `i16::MAX` are reduced to it.
    pub fn new(width: u16, height: u16) -> Self {
        match Self::try_new(width, height) {
            Ok(canvas) => canvas,
            Err(e) => {
                error!("canvas: {}", e);
                let (width, height) = clamp_dims(width, height);
                Self {
                    width,
                    height,
                    buffer: None,
                }
            }
        }
    }

    pub fn try_new(width: u16, height: u16) -> Result<Self> {
        let (width, height) = clamp_dims(width, height);
        let bytes = usize::from(width).div_ceil(8) * usize::from(height);

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| Error::OutOfMemory {
                width,
                height,
                bytes,
            })?;
        buffer.resize(bytes, 0);

        debug!("canvas: {}x{}, {} bytes", width, height, bytes);
        Ok(Self {
            width,
            height,
            buffer: Some(buffer),
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        usize::from(self.width).div_ceil(8)
    }

    /// Packed pixel data, or `None` if allocation failed.
    pub fn buffer(&self) -> Option<&[u8]> {
        self.buffer.as_deref()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut [u8]> {
        self.buffer.as_deref_mut()
    }

    /// Raw pixel state. Off-canvas or unallocated reads are `false`.
    pub fn get_pixel(&self, x: i16, y: i16) -> bool {
        match (self.position(x, y), self.buffer.as_deref()) {
            (Some((index, mask)), Some(buffer)) => buffer[index] & mask != 0,
            _ => false,
        }
    }

    /// Byte index and bit mask for an on-canvas pixel.
    fn position(&self, x: i16, y: i16) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as u16 >= self.width || y as u16 >= self.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * self.bytes_per_row() + x / 8, 0x80 >> (x & 7)))
    }

    fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let bpr = self.bytes_per_row();
        self.buffer
            .as_deref_mut()
            .and_then(|b| b.get_mut(y * bpr..(y + 1) * bpr))
    }
}

fn clamp_dims(width: u16, height: u16) -> (u16, u16) {
    let max = i16::MAX as u16;
    (width.min(max), height.min(max))
}

/// Clip `start..start + len` to `0..limit`.
fn clip(start: i16, len: i16, limit: u16) -> Option<(usize, usize)> {
    let a = i32::from(start).max(0);
    let b = (i32::from(start) + i32::from(len.max(0))).min(i32::from(limit));
    (a < b).then_some((a as usize, b as usize))
}

impl Surface for Canvas1 {
    fn dimensions(&self) -> (i16, i16) {
        (self.width as i16, self.height as i16)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
        let Some((index, mask)) = self.position(x, y) else {
            return;
        };
        if let Some(buffer) = self.buffer.as_deref_mut() {
            if color.is_on() {
                buffer[index] |= mask;
            } else {
                buffer[index] &= !mask;
            }
        }
    }

    fn fill_span_h(&mut self, x: i16, y: i16, w: i16, color: Color) {
        if y < 0 || y as u16 >= self.height {
            return;
        }
        let Some((mut x, end)) = clip(x, w, self.width) else {
            return;
        };
        let on = color.is_on();
        let Some(row) = self.row_mut(y as usize) else {
            return;
        };
        // whole or partial bytes, left to right
        while x < end {
            let bit = x & 7;
            let n = (8 - bit).min(end - x);
            let mask = ((0xFF00u16 >> n) as u8) >> bit;
            if on {
                row[x / 8] |= mask;
            } else {
                row[x / 8] &= !mask;
            }
            x += n;
        }
    }

    fn fill_span_v(&mut self, x: i16, y: i16, h: i16, color: Color) {
        if x < 0 || x as u16 >= self.width {
            return;
        }
        let Some((y0, y1)) = clip(y, h, self.height) else {
            return;
        };
        let bpr = self.bytes_per_row();
        let (byte, mask) = (x as usize / 8, 0x80u8 >> (x & 7));
        let Some(buffer) = self.buffer.as_deref_mut() else {
            return;
        };
        for row in buffer.chunks_exact_mut(bpr).take(y1).skip(y0) {
            if color.is_on() {
                row[byte] |= mask;
            } else {
                row[byte] &= !mask;
            }
        }
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if let Some((y0, y1)) = clip(y, h, self.height) {
            for yy in y0..y1 {
                self.fill_span_h(x, yy as i16, w, color);
            }
        }
    }

    fn fill_screen(&mut self, color: Color) {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        if let Some(buffer) = self.buffer.as_deref_mut() {
            buffer.fill(fill);
        }
    }
}

impl Gfx<'_, Canvas1> {
    /// Pixel state at a logical (rotated) position.
    pub fn get_pixel(&self, x: i16, y: i16) -> bool {
        if !self.geometry.contains(x, y) {
            return false;
        }
        let (rx, ry) = self.geometry.to_raw(x, y);
        self.surface.get_pixel(rx, ry)
    }
}
