//! # embedded-graphics Interop
//!
//! Two bridges between this crate and the `embedded-graphics` ecosystem:
//!
//! - [`Canvas1`] is a `DrawTarget<Color = BinaryColor>`, so embedded-graphics
//!   primitives, fonts and images can be drawn straight into it.
//! - [`DrawTargetSurface`] wraps any `DrawTarget<Color = Rgb565>` (a display
//!   driver from another crate, say) as a [`Surface`], so [`crate::Gfx`] can
//!   draw onto it.

use core::convert::Infallible;
use core::iter;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

use crate::canvas::Canvas1;
use crate::color::Color;
use crate::surface::Surface;

// =============================================================================
// CANVAS AS DRAW TARGET
// =============================================================================

impl DrawTarget for Canvas1 {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if let (Ok(x), Ok(y)) = (i16::try_from(x), i16::try_from(y)) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if let Some((x, y, w, h)) = clip_area(area, self.bounding_box()) {
            self.fill_rect(x, y, w, h, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color.into());
        Ok(())
    }
}

impl OriginDimensions for Canvas1 {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

/// `area` intersected with `bounds`, as surface coordinates.
fn clip_area(area: &Rectangle, bounds: Rectangle) -> Option<(i16, i16, i16, i16)> {
    let r = area.intersection(&bounds);
    if r.is_zero_sized() {
        return None;
    }
    Some((
        i16::try_from(r.top_left.x).ok()?,
        i16::try_from(r.top_left.y).ok()?,
        i16::try_from(r.size.width).ok()?,
        i16::try_from(r.size.height).ok()?,
    ))
}

// =============================================================================
// DRAW TARGET AS SURFACE
// =============================================================================

/// [`Surface`] over an RGB565 embedded-graphics draw target.
///
/// The target's size is read once, in [`DrawTargetSurface::new`], and its
/// bounding box is taken to start at the origin. Errors from
/// the target are not propagated, since drawing through [`crate::Gfx`]
/// cannot fail; each one is counted instead and can be read back with
/// [`DrawTargetSurface::errors`].
pub struct DrawTargetSurface<D> {
    target: D,
    width: i16,
    height: i16,
    errors: usize,
}

impl<D: Dimensions> DrawTargetSurface<D> {
    pub fn new(target: D) -> Self {
        let size = target.bounding_box().size;
        let clamp = |v: u32| v.min(i16::MAX as u32) as i16;
        Self {
            target,
            width: clamp(size.width),
            height: clamp(size.height),
            errors: 0,
        }
    }
}

impl<D> DrawTargetSurface<D> {
    /// Number of draw calls the target has rejected so far.
    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn inner(&self) -> &D {
        &self.target
    }

    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D: DrawTarget<Color = Rgb565>> DrawTargetSurface<D> {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.width as u32, self.height as u32),
        )
    }

    fn record<E>(&mut self, result: Result<(), E>) {
        if result.is_err() {
            self.errors += 1;
        }
    }
}

impl<D: DrawTarget<Color = Rgb565>> Surface for DrawTargetSurface<D> {
    fn dimensions(&self) -> (i16, i16) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let pixel = Pixel(Point::new(i32::from(x), i32::from(y)), color.into());
        let result = self.target.draw_iter(iter::once(pixel));
        self.record(result);
    }

    fn fill_span_h(&mut self, x: i16, y: i16, w: i16, color: Color) {
        self.fill_rect(x, y, w, 1, color);
    }

    fn fill_span_v(&mut self, x: i16, y: i16, h: i16, color: Color) {
        self.fill_rect(x, y, 1, h, color);
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let area = Rectangle::new(
            Point::new(i32::from(x), i32::from(y)),
            Size::new(w as u32, h as u32),
        );
        let area = area.intersection(&self.bounds());
        if area.is_zero_sized() {
            return;
        }
        let result = self.target.fill_solid(&area, color.into());
        self.record(result);
    }

    fn fill_screen(&mut self, color: Color) {
        let result = self.target.clear(color.into());
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Gfx;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Circle, PrimitiveStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn canvas_takes_embedded_graphics_primitives() {
        let mut canvas = Canvas1::new(16, 8);
        Rectangle::new(Point::new(2, 1), Size::new(4, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .ok();
        assert_eq!(canvas.size(), Size::new(16, 8));
        let set: Vec<_> = (0..8)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y))
            .collect();
        assert_eq!(set.len(), 12);
        assert!(canvas.get_pixel(2, 1) && canvas.get_pixel(5, 3));
    }

    #[test]
    fn canvas_draw_target_clips() {
        let mut canvas = Canvas1::new(8, 8);
        Circle::new(Point::new(-20, -20), 100)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut canvas)
            .ok();
        Rectangle::new(Point::new(6, 6), Size::new(50, 50))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .ok();
        assert!(canvas.get_pixel(7, 7));
        assert!(!canvas.get_pixel(5, 5));
        canvas.clear(BinaryColor::On).ok();
        assert!(canvas.buffer().is_some_and(|b| b.iter().all(|&v| v == 0xFF)));
    }

    #[test]
    fn gfx_draws_onto_a_foreign_target() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        let mut g = Gfx::new(DrawTargetSurface::new(display));
        assert_eq!((g.width(), g.height()), (64, 64));
        g.fill_rect(60, 60, 10, 10, Color::RED);
        g.draw_pixel(1, 2, Color::GREEN);
        g.draw_line(0, 10, 5, 12, Color::BLUE);
        assert_eq!(g.surface().errors(), 0);
        let display = g.into_inner().into_inner();

        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(59, 59)), None);
        assert_eq!(display.get_pixel(Point::new(1, 2)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(5, 12)), Some(Rgb565::BLUE));
    }

    /// Target that rejects everything right of `limit` and counts how often
    /// its size is asked for.
    struct Picky {
        limit: i32,
        size_queries: core::cell::Cell<usize>,
    }

    impl Picky {
        fn new(limit: i32) -> Self {
            Self {
                limit,
                size_queries: Default::default(),
            }
        }
    }

    impl OriginDimensions for Picky {
        fn size(&self) -> Size {
            self.size_queries.set(self.size_queries.get() + 1);
            Size::new(16, 16)
        }
    }

    impl DrawTarget for Picky {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, _) in pixels {
                if p.x > self.limit {
                    return Err(());
                }
            }
            Ok(())
        }
    }

    #[test]
    fn target_errors_are_counted_not_raised() {
        let mut g = Gfx::new(DrawTargetSurface::new(Picky::new(7)));
        g.draw_pixel(3, 3, Color::WHITE);
        g.draw_pixel(9, 3, Color::WHITE);
        g.fill_rect(0, 0, 16, 2, Color::WHITE);
        g.draw_pixel(40, 3, Color::WHITE);
        assert_eq!(g.surface().errors(), 2);
        assert_eq!(g.into_inner().into_inner().limit, 7);
    }

    #[test]
    fn target_size_is_read_once() {
        let mut surface = DrawTargetSurface::new(Picky::new(100));
        let queries = surface.inner().size_queries.get();
        assert_eq!(surface.dimensions(), (16, 16));
        for i in 0..16 {
            surface.set_pixel(i, i, Color::WHITE);
        }
        surface.set_pixel(16, 0, Color::WHITE);
        assert_eq!(surface.inner().size_queries.get(), queries);
        assert_eq!(surface.errors(), 0);
    }
}
