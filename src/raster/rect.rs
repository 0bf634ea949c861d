use crate::color::Color;
use crate::gfx::Gfx;
use crate::raster::circle::Corners;
use crate::surface::Surface;

/// Largest usable corner radius for a `w` x `h` box.
fn clamp_radius(w: i32, h: i32, r: i32) -> i32 {
    r.clamp(0, w.min(h) / 2)
}

impl<S: Surface> Gfx<'_, S> {
    /// One-pixel rectangle outline. Zero or negative extents draw nothing.
    pub fn draw_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        self.batch(|g| {
            g.hspan(x, y, w, color);
            g.hspan(x, y + h - 1, w, color);
            g.vspan(x, y, h, color);
            g.vspan(x + w - 1, y, h, color);
        });
    }

    /// Outline with quarter-circle corners. The radius is capped at half the
    /// shorter side.
    pub fn draw_round_rect(&mut self, x: i16, y: i16, w: i16, h: i16, r: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        let r = clamp_radius(w, h, i32::from(r));
        self.batch(|g| {
            g.hspan(x + r, y, w - 2 * r, color);
            g.hspan(x + r, y + h - 1, w - 2 * r, color);
            g.vspan(x, y + r, h - 2 * r, color);
            g.vspan(x + w - 1, y + r, h - 2 * r, color);

            let (left, right) = (x + r, x + w - r - 1);
            let (top, bottom) = (y + r, y + h - r - 1);
            g.circle_arcs(left, top, r, Corners::TOP_LEFT, color);
            g.circle_arcs(right, top, r, Corners::TOP_RIGHT, color);
            g.circle_arcs(right, bottom, r, Corners::BOTTOM_RIGHT, color);
            g.circle_arcs(left, bottom, r, Corners::BOTTOM_LEFT, color);
        });
    }

    /// Solid rectangle with quarter-circle corners.
    pub fn fill_round_rect(&mut self, x: i16, y: i16, w: i16, h: i16, r: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y, w, h) = (i32::from(x), i32::from(y), i32::from(w), i32::from(h));
        let r = clamp_radius(w, h, i32::from(r));
        self.batch(|g| {
            g.rect_i32(x, y + r, w, h - 2 * r, color);
            let delta = w - 2 * r - 1;
            g.fill_arcs(x + r, y + r, r, Corners::TOP, delta, color);
            g.fill_arcs(x + r, y + h - r - 1, r, Corners::BOTTOM, delta, color);
        });
    }
}
