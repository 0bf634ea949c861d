//! # Surface Contract
//!
//! The one capability a concrete display must provide: set a single pixel in
//! raw (unrotated) coordinates. Every other operation here has a generic body
//! written in terms of [`Surface::set_pixel`], so a driver gets correct output
//! by implementing two methods and may override any subset for speed.
//!
//! ## Caller guarantees
//!
//! - Span and rectangle lengths handed to a surface are never negative.
//! - [`crate::Gfx`] clips before calling, but a surface used on its own may
//!   still see off-surface coordinates; `set_pixel` must ignore them.
//!
//! ## Batching
//!
//! `start_batch`/`end_batch` bracket every compound drawing call and can
//! nest. A surface that coalesces bus transactions keeps its own depth
//! counter and flushes only when the outermost batch ends.

use crate::color::Color;
use crate::raster::line::bresenham;

pub trait Surface {
    /// Raw width and height in pixels. Must not change over the surface's life.
    fn dimensions(&self) -> (i16, i16);

    /// Set one pixel in raw coordinates. Off-surface coordinates are ignored.
    fn set_pixel(&mut self, x: i16, y: i16, color: Color);

    fn start_batch(&mut self) {}

    fn end_batch(&mut self) {}

    /// Horizontal run of `w` pixels starting at (x, y).
    fn fill_span_h(&mut self, x: i16, y: i16, w: i16, color: Color) {
        for xx in span(x, w) {
            self.set_pixel(xx, y, color);
        }
    }

    /// Vertical run of `h` pixels starting at (x, y).
    fn fill_span_v(&mut self, x: i16, y: i16, h: i16, color: Color) {
        for yy in span(y, h) {
            self.set_pixel(x, yy, color);
        }
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        for xx in span(x, w) {
            self.fill_span_v(xx, y, h, color);
        }
    }

    fn fill_screen(&mut self, color: Color) {
        let (w, h) = self.dimensions();
        self.fill_rect(0, 0, w, h, color);
    }

    /// Arbitrary line between two raw points, both ends inclusive.
    fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        if x0 == x1 {
            let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
            for yy in top..=bottom {
                self.set_pixel(x0, yy, color);
            }
        } else if y0 == y1 {
            let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
            for xx in left..=right {
                self.set_pixel(xx, y0, color);
            }
        } else {
            bresenham(x0, y0, x1, y1, |x, y| self.set_pixel(x, y, color));
        }
    }

    /// Hardware color inversion, where the panel supports it.
    fn invert_display(&mut self, _invert: bool) {}
}

/// `len` consecutive coordinates from `start`, stopping at the i16 limit.
fn span(start: i16, len: i16) -> impl Iterator<Item = i16> {
    let end = (i32::from(start) + i32::from(len.max(0))).min(i32::from(i16::MAX) + 1);
    (i32::from(start)..end).map(|v| v as i16)
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn dimensions(&self) -> (i16, i16) {
        (**self).dimensions()
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
        (**self).set_pixel(x, y, color)
    }

    fn start_batch(&mut self) {
        (**self).start_batch()
    }

    fn end_batch(&mut self) {
        (**self).end_batch()
    }

    fn fill_span_h(&mut self, x: i16, y: i16, w: i16, color: Color) {
        (**self).fill_span_h(x, y, w, color)
    }

    fn fill_span_v(&mut self, x: i16, y: i16, h: i16, color: Color) {
        (**self).fill_span_v(x, y, h, color)
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        (**self).fill_rect(x, y, w, h, color)
    }

    fn fill_screen(&mut self, color: Color) {
        (**self).fill_screen(color)
    }

    fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        (**self).draw_line(x0, y0, x1, y1, color)
    }

    fn invert_display(&mut self, invert: bool) {
        (**self).invert_display(invert)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Minimal surface: only the two mandatory methods, plus a batch depth
    /// counter so tests can check begin/end pairing.
    pub(crate) struct Recorder {
        pub width: i16,
        pub height: i16,
        pub pixels: BTreeMap<(i16, i16), Color>,
        pub depth: i32,
        pub max_depth: i32,
        pub flushes: usize,
        pub inverted: bool,
    }

    impl Recorder {
        pub fn new(width: i16, height: i16) -> Self {
            Self {
                width,
                height,
                pixels: BTreeMap::new(),
                depth: 0,
                max_depth: 0,
                flushes: 0,
                inverted: false,
            }
        }

        pub fn lit(&self) -> Vec<(i16, i16)> {
            self.pixels.keys().copied().collect()
        }
    }

    impl Surface for Recorder {
        fn dimensions(&self) -> (i16, i16) {
            (self.width, self.height)
        }

        fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
            if x >= 0 && y >= 0 && x < self.width && y < self.height {
                self.pixels.insert((x, y), color);
            }
        }

        fn start_batch(&mut self) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }

        fn end_batch(&mut self) {
            self.depth -= 1;
            if self.depth == 0 {
                self.flushes += 1;
            }
        }

        fn invert_display(&mut self, invert: bool) {
            self.inverted = invert;
        }
    }

    #[test]
    fn default_rect_goes_through_set_pixel() {
        let mut r = Recorder::new(8, 8);
        r.fill_rect(6, 6, 4, 4, Color::WHITE);
        assert_eq!(r.lit(), vec![(6, 6), (6, 7), (7, 6), (7, 7)]);
    }

    #[test]
    fn default_line_is_endpoint_inclusive() {
        let mut r = Recorder::new(8, 8);
        r.draw_line(5, 2, 1, 2, Color::WHITE);
        assert_eq!(r.lit(), vec![(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
    }

    #[test]
    fn span_stops_at_coordinate_limit() {
        assert_eq!(span(i16::MAX - 1, 10).count(), 2);
        assert_eq!(span(3, -4).count(), 0);
    }

    #[test]
    fn fill_screen_covers_surface() {
        let mut r = Recorder::new(3, 2);
        r.fill_screen(Color::RED);
        assert_eq!(r.pixels.len(), 6);
        assert!(r.pixels.values().all(|c| *c == Color::RED));
    }
}
