use bitflags::bitflags;

use crate::color::Color;
use crate::gfx::Gfx;
use crate::surface::Surface;

bitflags! {
    /// Quadrant selector for the circle helpers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Corners: u8 {
        const TOP_LEFT = 0x1;
        const TOP_RIGHT = 0x2;
        const BOTTOM_RIGHT = 0x4;
        const BOTTOM_LEFT = 0x8;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

/// Midpoint circle state, advanced one column at a time.
struct Midpoint {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl Midpoint {
    fn new(r: i32) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }

    /// Step to the next octant point; false once the octant is done.
    fn step(&mut self) -> bool {
        if self.x >= self.y {
            return false;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        true
    }
}

impl<S: Surface> Gfx<'_, S> {
    /// Circle outline. A zero radius plots the center; negative draws nothing.
    pub fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) {
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        self.batch(|g| {
            g.write_pixel_i32(cx, cy + r, color);
            g.write_pixel_i32(cx, cy - r, color);
            g.write_pixel_i32(cx + r, cy, color);
            g.write_pixel_i32(cx - r, cy, color);
            g.circle_arcs(cx, cy, r, Corners::all(), color);
        });
    }

    /// Quarter-circle outlines for the selected corners, excluding the four
    /// axis points. Used for rounded rectangle corners.
    pub fn draw_circle_helper(&mut self, x0: i16, y0: i16, r: i16, corners: Corners, color: Color) {
        if r < 0 {
            return;
        }
        self.batch(|g| {
            g.circle_arcs(i32::from(x0), i32::from(y0), i32::from(r), corners, color)
        });
    }

    pub(crate) fn circle_arcs(&mut self, cx: i32, cy: i32, r: i32, corners: Corners, color: Color) {
        let mut m = Midpoint::new(r);
        while m.step() {
            let (x, y) = (m.x, m.y);
            if corners.contains(Corners::BOTTOM_RIGHT) {
                self.write_pixel_i32(cx + x, cy + y, color);
                self.write_pixel_i32(cx + y, cy + x, color);
            }
            if corners.contains(Corners::TOP_RIGHT) {
                self.write_pixel_i32(cx + x, cy - y, color);
                self.write_pixel_i32(cx + y, cy - x, color);
            }
            if corners.contains(Corners::BOTTOM_LEFT) {
                self.write_pixel_i32(cx - y, cy + x, color);
                self.write_pixel_i32(cx - x, cy + y, color);
            }
            if corners.contains(Corners::TOP_LEFT) {
                self.write_pixel_i32(cx - y, cy - x, color);
                self.write_pixel_i32(cx - x, cy - y, color);
            }
        }
    }

    /// Solid disc. A zero radius plots the center; negative draws nothing.
    pub fn fill_circle(&mut self, x0: i16, y0: i16, r: i16, color: Color) {
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (i32::from(x0), i32::from(y0), i32::from(r));
        self.batch(|g| {
            g.hspan(cx - r, cy, 2 * r + 1, color);
            g.fill_arcs(cx, cy, r, Corners::all(), 0, color);
        });
    }

    /// Filled upper and/or lower half-disc bands, stretched horizontally by
    /// `delta` extra pixels. With `delta = 0` and both halves this completes
    /// a filled circle around an already drawn center row; rounded rectangle
    /// fills pass the straight-edge length as `delta`.
    pub fn fill_circle_helper(
        &mut self,
        x0: i16,
        y0: i16,
        r: i16,
        corners: Corners,
        delta: i16,
        color: Color,
    ) {
        if r < 0 {
            return;
        }
        self.batch(|g| {
            g.fill_arcs(
                i32::from(x0),
                i32::from(y0),
                i32::from(r),
                corners,
                i32::from(delta),
                color,
            )
        });
    }

    pub(crate) fn fill_arcs(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        corners: Corners,
        delta: i32,
        color: Color,
    ) {
        let lower = corners.intersects(Corners::BOTTOM);
        let upper = corners.intersects(Corners::TOP);
        let delta = delta + 1;
        let mut m = Midpoint::new(r);
        let (mut px, mut py) = (m.x, m.y);
        while m.step() {
            let (x, y) = (m.x, m.y);
            // the two checks below keep rows from being filled twice
            if x < y + 1 {
                if lower {
                    self.hspan(cx - y, cy + x, 2 * y + delta, color);
                }
                if upper {
                    self.hspan(cx - y, cy - x, 2 * y + delta, color);
                }
            }
            if y != py {
                if lower {
                    self.hspan(cx - px, cy + py, 2 * px + delta, color);
                }
                if upper {
                    self.hspan(cx - px, cy - py, 2 * px + delta, color);
                }
                py = y;
            }
            px = x;
        }
    }
}
