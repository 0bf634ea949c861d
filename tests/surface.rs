//! A driver that only implements the two required methods still gets every
//! drawing operation, and its batches stay balanced.

use std::collections::BTreeMap;

use pixelgfx::{Canvas1, Color, Gfx, Surface};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Panel {
    pixels: BTreeMap<(i16, i16), Color>,
    depth: u32,
    flushes: u32,
    unbalanced: bool,
}

impl Surface for Panel {
    fn dimensions(&self) -> (i16, i16) {
        (32, 20)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
        let (w, h) = self.dimensions();
        if (0..w).contains(&x) && (0..h).contains(&y) {
            self.pixels.insert((x, y), color);
        }
    }

    fn start_batch(&mut self) {
        self.depth += 1;
    }

    fn end_batch(&mut self) {
        match self.depth {
            0 => self.unbalanced = true,
            1 => {
                self.depth = 0;
                self.flushes += 1;
            }
            _ => self.depth -= 1,
        }
    }
}

/// Exercises every raster path plus text and bitmaps.
fn scene<S: Surface>(g: &mut Gfx<'_, S>) {
    g.set_rotation(3);
    g.fill_round_rect(1, 1, 14, 9, 3, Color::WHITE);
    g.draw_triangle(0, 31, 19, 20, 10, 25, Color::WHITE);
    g.draw_bitmap(12, 12, &[0b1010_0000, 0b0101_0000], 4, 2, Color::WHITE);
    g.set_cursor(2, 14);
    g.print("Ab");
    g.fill_circle(-2, -2, 4, Color::WHITE);
}

#[test]
fn bare_panel_matches_optimized_canvas() {
    let mut panel = Gfx::new(Panel::default());
    scene(&mut panel);
    let mut canvas = Gfx::new(Canvas1::new(32, 20));
    scene(&mut canvas);

    let from_panel: Vec<_> = panel.surface().pixels.keys().copied().collect();
    let canvas = canvas.into_inner();
    let from_canvas: Vec<_> = (0..32)
        .flat_map(|x| (0..20).map(move |y| (x, y)))
        .filter(|&(x, y)| canvas.get_pixel(x, y))
        .collect();
    assert!(!from_panel.is_empty());
    assert_eq!(from_panel, from_canvas);

    let p = panel.surface();
    assert_eq!(p.depth, 0);
    assert!(!p.unbalanced);
    assert!(p.flushes > 0);
}

#[test]
fn caller_batch_wraps_everything_in_one_flush() {
    let mut g = Gfx::new(Panel::default());
    g.start_write();
    g.draw_circle(10, 10, 6, Color::RED);
    g.print("x");
    g.draw_rgb_bitmap(0, 0, &[Color::BLUE.0; 4], 2, 2);
    g.end_write();
    assert_eq!(g.surface().flushes, 1);
    assert_eq!(g.surface().depth, 0);
}

#[test]
fn everything_off_surface_is_silent() {
    let mut g = Gfx::new(Panel::default());
    g.draw_line(-100, -100, -5, -40, Color::WHITE);
    g.fill_triangle(40, 40, 60, 50, 45, 70, Color::WHITE);
    g.draw_round_rect(100, 0, 20, 10, 4, Color::WHITE);
    g.set_cursor(200, 200);
    g.print("hidden");
    g.draw_grayscale_bitmap(-10, -10, &[0xFF; 4], 2, 2);
    assert!(g.surface().pixels.is_empty());
}
