//! # Drawing Context
//!
//! [`Gfx`] wraps a [`Surface`] with everything the surface does not know
//! about: the rotation, the text cursor and style, and the attached font.
//! All coordinates taken by `Gfx` are logical (rotated); they are clipped
//! against the rotated bounds and remapped to raw space before the surface
//! sees them.
//!
//! ## Naming
//!
//! - `draw_*` / `fill_*` bracket themselves with a surface batch.
//! - `write_*` do not, and are meant for use between
//!   [`Gfx::start_write`] and [`Gfx::end_write`].

use crate::color::Color;
use crate::rotation::{Geometry, Rotation};
use crate::surface::Surface;
use crate::text::TextState;

use log::debug;

pub struct Gfx<'f, S> {
    pub(crate) surface: S,
    pub(crate) geometry: Geometry,
    pub(crate) text: TextState<'f>,
}

impl<'f, S: Surface> Gfx<'f, S> {
    pub fn new(surface: S) -> Self {
        let (width, height) = surface.dimensions();
        debug!("gfx: new {}x{} surface", width, height);
        Self {
            surface,
            geometry: Geometry::new(width, height),
            text: TextState::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_inner(self) -> S {
        self.surface
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Width in pixels, accounting for the current rotation
    pub fn width(&self) -> i16 {
        self.geometry.width()
    }

    /// Height in pixels, accounting for the current rotation
    pub fn height(&self) -> i16 {
        self.geometry.height()
    }

    /// Current rotation, 0 through 3
    pub fn rotation(&self) -> u8 {
        self.geometry.rotation().as_u8()
    }

    /// Select one of the four orientations. Only the low two bits of
    /// `rotation` are used. Cursor and font are left alone.
    pub fn set_rotation(&mut self, rotation: u8) {
        let rotation = Rotation::from(rotation);
        debug!("gfx: rotation {:?}", rotation);
        self.geometry.set_rotation(rotation);
    }

    pub fn invert_display(&mut self, invert: bool) {
        self.surface.invert_display(invert);
    }

    // =========================================================================
    // TRANSACTIONS
    // =========================================================================

    pub fn start_write(&mut self) {
        self.surface.start_batch();
    }

    pub fn end_write(&mut self) {
        self.surface.end_batch();
    }

    /// Run `f` inside one surface batch.
    pub(crate) fn batch(&mut self, f: impl FnOnce(&mut Self)) {
        self.surface.start_batch();
        f(self);
        self.surface.end_batch();
    }

    // =========================================================================
    // PIXELS AND SPANS
    // =========================================================================

    /// Set one logical pixel; silently dropped when off-surface.
    pub fn write_pixel(&mut self, x: i16, y: i16, color: Color) {
        if !self.geometry.contains(x, y) {
            return;
        }
        let (rx, ry) = self.geometry.to_raw(x, y);
        self.surface.set_pixel(rx, ry, color);
    }

    pub(crate) fn write_pixel_i32(&mut self, x: i32, y: i32, color: Color) {
        if let (Ok(x), Ok(y)) = (i16::try_from(x), i16::try_from(y)) {
            self.write_pixel(x, y, color);
        }
    }

    pub fn draw_pixel(&mut self, x: i16, y: i16, color: Color) {
        self.write_pixel(x, y, color);
    }

    /// Horizontal line of `w` pixels. A negative `w` extends leftwards and
    /// ends at `x`.
    pub fn write_fast_hline(&mut self, x: i16, y: i16, w: i16, color: Color) {
        self.hspan(i32::from(x), i32::from(y), i32::from(w), color);
    }

    /// Vertical line of `h` pixels. A negative `h` extends upwards and ends
    /// at `y`.
    pub fn write_fast_vline(&mut self, x: i16, y: i16, h: i16, color: Color) {
        self.vspan(i32::from(x), i32::from(y), i32::from(h), color);
    }

    pub fn draw_fast_hline(&mut self, x: i16, y: i16, w: i16, color: Color) {
        self.batch(|g| g.write_fast_hline(x, y, w, color));
    }

    pub fn draw_fast_vline(&mut self, x: i16, y: i16, h: i16, color: Color) {
        self.batch(|g| g.write_fast_vline(x, y, h, color));
    }

    pub(crate) fn hspan(&mut self, x: i32, y: i32, w: i32, color: Color) {
        let (x, w) = if w < 0 { (x + w + 1, -w) } else { (x, w) };
        let width = i32::from(self.width());
        if w == 0 || y < 0 || y >= i32::from(self.height()) {
            return;
        }
        let x0 = x.max(0);
        let x1 = (x + w).min(width);
        if x0 >= x1 {
            return;
        }
        self.raw_hspan(x0, y, x1 - x0, color);
    }

    pub(crate) fn vspan(&mut self, x: i32, y: i32, h: i32, color: Color) {
        let (y, h) = if h < 0 { (y + h + 1, -h) } else { (y, h) };
        let height = i32::from(self.height());
        if h == 0 || x < 0 || x >= i32::from(self.width()) {
            return;
        }
        let y0 = y.max(0);
        let y1 = (y + h).min(height);
        if y0 >= y1 {
            return;
        }
        self.raw_vspan(x, y0, y1 - y0, color);
    }

    // Arguments are clipped logical coordinates, so every result fits in i16.
    fn raw_hspan(&mut self, x: i32, y: i32, w: i32, color: Color) {
        let rw = i32::from(self.geometry.raw_width());
        let rh = i32::from(self.geometry.raw_height());
        let s = &mut self.surface;
        match self.geometry.rotation() {
            Rotation::Rotate0 => s.fill_span_h(x as i16, y as i16, w as i16, color),
            Rotation::Rotate90 => s.fill_span_v(y as i16, (rh - x - w) as i16, w as i16, color),
            Rotation::Rotate180 => {
                s.fill_span_h((rw - x - w) as i16, (rh - 1 - y) as i16, w as i16, color)
            }
            Rotation::Rotate270 => s.fill_span_v((rw - 1 - y) as i16, x as i16, w as i16, color),
        }
    }

    fn raw_vspan(&mut self, x: i32, y: i32, h: i32, color: Color) {
        let rw = i32::from(self.geometry.raw_width());
        let rh = i32::from(self.geometry.raw_height());
        let s = &mut self.surface;
        match self.geometry.rotation() {
            Rotation::Rotate0 => s.fill_span_v(x as i16, y as i16, h as i16, color),
            Rotation::Rotate90 => s.fill_span_h(y as i16, (rh - 1 - x) as i16, h as i16, color),
            Rotation::Rotate180 => {
                s.fill_span_v((rw - 1 - x) as i16, (rh - y - h) as i16, h as i16, color)
            }
            Rotation::Rotate270 => s.fill_span_h((rw - y - h) as i16, x as i16, h as i16, color),
        }
    }

    // =========================================================================
    // RECTANGLES
    // =========================================================================

    /// Solid rectangle. Zero or negative extents draw nothing.
    pub fn write_fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        self.rect_i32(i32::from(x), i32::from(y), i32::from(w), i32::from(h), color);
    }

    pub fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        self.batch(|g| g.write_fill_rect(x, y, w, h, color));
    }

    pub fn fill_screen(&mut self, color: Color) {
        self.batch(|g| g.surface.fill_screen(color));
    }

    pub(crate) fn rect_i32(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(i32::from(self.width()));
        let y1 = (y + h).min(i32::from(self.height()));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let (ax, ay) = self.geometry.to_raw(x0 as i16, y0 as i16);
        let (bx, by) = self.geometry.to_raw((x1 - 1) as i16, (y1 - 1) as i16);
        let (left, right) = (ax.min(bx), ax.max(bx));
        let (top, bottom) = (ay.min(by), ay.max(by));
        self.surface
            .fill_rect(left, top, right - left + 1, bottom - top + 1, color);
    }
}
