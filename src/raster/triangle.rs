use crate::color::Color;
use crate::gfx::Gfx;
use crate::surface::Surface;

impl<S: Surface> Gfx<'_, S> {
    /// Triangle outline: three lines.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        self.batch(|g| {
            g.write_line(x0, y0, x1, y1, color);
            g.write_line(x1, y1, x2, y2, color);
            g.write_line(x2, y2, x0, y0, color);
        });
    }

    /// Solid triangle, filled one scanline at a time.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        let mut v = [
            (i32::from(x0), i32::from(y0)),
            (i32::from(x1), i32::from(y1)),
            (i32::from(x2), i32::from(y2)),
        ];
        v.sort_by_key(|p| p.1);
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        self.batch(|g| {
            if y0 == y2 {
                // all on one scanline
                let a = x0.min(x1).min(x2);
                let b = x0.max(x1).max(x2);
                g.hspan(a, y0, b - a + 1, color);
                return;
            }

            // Accumulators reach dx * dy, which overflows i32 for far
            // off-surface vertices. Each quotient lies between two vertex
            // x values, so it narrows back to i32.
            let (x0, y0, x1, y1, x2, y2) = (
                i64::from(x0),
                i64::from(y0),
                i64::from(x1),
                i64::from(y1),
                i64::from(x2),
                i64::from(y2),
            );
            let (dx01, dy01) = (x1 - x0, y1 - y0);
            let (dx02, dy02) = (x2 - x0, y2 - y0);
            let (dx12, dy12) = (x2 - x1, y2 - y1);
            let (mut sa, mut sb) = (0i64, 0i64);

            // Upper part: edges 0-1 and 0-2. The y1 scanline belongs here only
            // when the bottom edge is flat, so it is never drawn twice.
            let last = if y1 == y2 { y1 } else { y1 - 1 };
            let mut y = y0;
            while y <= last {
                let a = x0 + sa / dy01;
                let b = x0 + sb / dy02;
                sa += dx01;
                sb += dx02;
                g.scanline(a, b, y, color);
                y += 1;
            }

            // Lower part: edges 1-2 and 0-2.
            sa = dx12 * (y - y1);
            sb = dx02 * (y - y0);
            while y <= y2 {
                let a = x1 + sa / dy12;
                let b = x0 + sb / dy02;
                sa += dx12;
                sb += dx02;
                g.scanline(a, b, y, color);
                y += 1;
            }
        });
    }

    fn scanline(&mut self, a: i64, b: i64, y: i64, color: Color) {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        // every value lies between two i16 vertex coordinates
        let (a, b, y) = (a as i32, b as i32, y as i32);
        self.hspan(a, y, b - a + 1, color);
    }
}
