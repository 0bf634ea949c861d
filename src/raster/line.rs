use crate::color::Color;
use crate::gfx::Gfx;
use crate::rotation::Rotation;
use crate::surface::Surface;

/// Integer Bresenham between two points, both ends inclusive.
///
/// Endpoints are put in a canonical order (major axis increasing) before
/// stepping, so swapping them yields the same pixel set.
pub fn bresenham(x0: i16, y0: i16, x1: i16, y1: i16, mut plot: impl FnMut(i16, i16)) {
    let (mut x0, mut y0, mut x1, mut y1) = (
        i32::from(x0),
        i32::from(y0),
        i32::from(x1),
        i32::from(y1),
    );
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        core::mem::swap(&mut x0, &mut y0);
        core::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        core::mem::swap(&mut x0, &mut x1);
        core::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let mut err = dx / 2;
    let ystep = if y0 < y1 { 1 } else { -1 };

    let mut y = y0;
    for x in x0..=x1 {
        // both coordinates stay between the endpoints, so the casts are exact
        if steep {
            plot(y as i16, x as i16);
        } else {
            plot(x as i16, y as i16);
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }
}

impl<S: Surface> Gfx<'_, S> {
    /// Line between two logical points without opening a batch.
    pub fn write_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        if x0 == x1 {
            let (top, bottom) = (y0.min(y1), y0.max(y1));
            self.vspan(
                i32::from(x0),
                i32::from(top),
                i32::from(bottom) - i32::from(top) + 1,
                color,
            );
        } else if y0 == y1 {
            let (left, right) = (x0.min(x1), x0.max(x1));
            self.hspan(
                i32::from(left),
                i32::from(y0),
                i32::from(right) - i32::from(left) + 1,
                color,
            );
        } else if self.geometry.rotation() == Rotation::Rotate0 {
            // raw space is logical space; let the surface use its own line
            self.surface.draw_line(x0, y0, x1, y1, color);
        } else {
            bresenham(x0, y0, x1, y1, |x, y| self.write_pixel(x, y, color));
        }
    }

    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        self.batch(|g| g.write_line(x0, y0, x1, y1, color));
    }
}
