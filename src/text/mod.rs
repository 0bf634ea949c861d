//! # Glyph Renderer
//!
//! Text output for [`Gfx`]: a cursor, a style, and either the built-in 5x8
//! font or an attached [`GfxFont`].
//!
//! ## Cursor model
//!
//! With the built-in font the cursor is the top-left corner of a 6x8 cell
//! (five glyph columns plus one spacing column), scaled by the text size.
//! With a custom font it sits on the baseline and each glyph's offsets place
//! it relative to that point.
//!
//! `'\n'` returns the cursor to column 0 and moves down one line. `'\r'` is
//! ignored. When wrapping is on, a glyph that would cross the right edge is
//! moved to the start of the next line first.
//!
//! ## Code page 437
//!
//! The built-in table skips one slot just above 0xAF. Codes 176 and up are
//! therefore drawn from the entry one past them unless [`Gfx::cp437`] is
//! enabled, which keeps old sketches pixel-identical. Code 255 in that mode
//! has no entry and draws no foreground.
//!
//! ## Bounds
//!
//! [`Gfx::text_bounds`] walks a string with the same layout rules as
//! drawing, without touching the surface.

pub mod font;
pub mod glcdfont;

use core::fmt;

use log::debug;

use crate::color::Color;
use crate::gfx::Gfx;
use crate::surface::Surface;

pub use font::{GfxFont, Glyph};

/// Built-in cell size, including the spacing column.
const CELL_W: i32 = 6;
const CELL_H: i32 = 8;

// =============================================================================
// TEXT STATE
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextState<'f> {
    pub cursor_x: i16,
    pub cursor_y: i16,
    pub color: Color,
    /// Equal to `color` for a transparent background
    pub bg: Color,
    pub size_x: u8,
    pub size_y: u8,
    pub wrap: bool,
    pub cp437: bool,
    pub font: Option<&'f GfxFont<'f>>,
}

impl Default for TextState<'_> {
    fn default() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            color: Color::WHITE,
            bg: Color::WHITE,
            size_x: 1,
            size_y: 1,
            wrap: true,
            cp437: false,
            font: None,
        }
    }
}

/// Result of [`Gfx::text_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub x: i16,
    pub y: i16,
    pub w: u16,
    pub h: u16,
    /// Cursor position after the last character
    pub cursor_x: i16,
    pub cursor_y: i16,
}

/// Where one character lands: the origin it is drawn from and the inclusive
/// box it may cover.
#[derive(Debug, Clone, Copy)]
struct Placement {
    x: i16,
    y: i16,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

fn saturate(v: i32) -> i16 {
    v.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Built-in table entry for `c`.
fn builtin_index(c: u8, cp437: bool) -> usize {
    if !cp437 && c >= 176 {
        usize::from(c) + 1
    } else {
        usize::from(c)
    }
}

impl<'f, S: Surface> Gfx<'f, S> {
    // =========================================================================
    // STYLE
    // =========================================================================

    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.text.cursor_x = x;
        self.text.cursor_y = y;
    }

    pub fn cursor_x(&self) -> i16 {
        self.text.cursor_x
    }

    pub fn cursor_y(&self) -> i16 {
        self.text.cursor_y
    }

    /// Foreground color with a transparent background.
    pub fn set_text_color(&mut self, color: Color) {
        self.text.color = color;
        self.text.bg = color;
    }

    /// Foreground and background color. Passing the same color twice gives a
    /// transparent background.
    pub fn set_text_color_bg(&mut self, color: Color, bg: Color) {
        self.text.color = color;
        self.text.bg = bg;
    }

    pub fn text_color(&self) -> (Color, Color) {
        (self.text.color, self.text.bg)
    }

    /// Uniform magnification. Zero is treated as one.
    pub fn set_text_size(&mut self, size: u8) {
        self.set_text_size_xy(size, size);
    }

    pub fn set_text_size_xy(&mut self, size_x: u8, size_y: u8) {
        self.text.size_x = size_x.max(1);
        self.text.size_y = size_y.max(1);
    }

    pub fn text_size(&self) -> (u8, u8) {
        (self.text.size_x, self.text.size_y)
    }

    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.text.wrap = wrap;
    }

    pub fn text_wrap(&self) -> bool {
        self.text.wrap
    }

    /// Use the true code page 437 layout of the built-in table.
    pub fn cp437(&mut self, enable: bool) {
        self.text.cp437 = enable;
    }

    pub fn is_cp437(&self) -> bool {
        self.text.cp437
    }

    /// Attach a proportional font, or `None` to go back to the built-in one.
    /// The cursor is not moved.
    pub fn set_font(&mut self, font: Option<&'f GfxFont<'f>>) {
        match font {
            Some(f) => debug!(
                "gfx: font 0x{:02X}..=0x{:02X}, {} glyphs",
                f.first,
                f.last,
                f.glyphs.len()
            ),
            None => debug!("gfx: built-in font"),
        }
        self.text.font = font;
    }

    pub fn font(&self) -> Option<&'f GfxFont<'f>> {
        self.text.font
    }

    // =========================================================================
    // LAYOUT
    // =========================================================================

    /// Advance `cx`/`cy` past `c` the way [`Gfx::write`] does and report
    /// where the glyph goes, if anything is drawn for it.
    fn place(&self, c: u8, cx: &mut i32, cy: &mut i32) -> Option<Placement> {
        let t = &self.text;
        let (sx, sy) = (i32::from(t.size_x), i32::from(t.size_y));
        let width = i32::from(self.width());

        let line_height = match t.font {
            None => CELL_H * sy,
            Some(f) => i32::from(f.y_advance) * sy,
        };
        match c {
            b'\n' => {
                *cx = 0;
                *cy += line_height;
                return None;
            }
            b'\r' => return None,
            _ => {}
        }

        match t.font {
            None => {
                if t.wrap && *cx + CELL_W * sx > width {
                    *cx = 0;
                    *cy += line_height;
                }
                let p = Placement {
                    x: saturate(*cx),
                    y: saturate(*cy),
                    x1: *cx,
                    y1: *cy,
                    x2: *cx + CELL_W * sx - 1,
                    y2: *cy + CELL_H * sy - 1,
                };
                *cx += CELL_W * sx;
                Some(p)
            }
            Some(f) => {
                let g = f.glyph(c)?;
                let advance = i32::from(g.x_advance) * sx;
                if g.is_blank() {
                    *cx += advance;
                    return None;
                }
                let (xo, yo) = (i32::from(g.x_offset), i32::from(g.y_offset));
                let (w, h) = (i32::from(g.width), i32::from(g.height));
                if t.wrap && *cx + (xo + w) * sx > width {
                    *cx = 0;
                    *cy += line_height;
                }
                let (x1, y1) = (*cx + xo * sx, *cy + yo * sy);
                let p = Placement {
                    x: saturate(*cx),
                    y: saturate(*cy),
                    x1,
                    y1,
                    x2: x1 + w * sx - 1,
                    y2: y1 + h * sy - 1,
                };
                *cx += advance;
                Some(p)
            }
        }
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Draw one byte at the cursor and advance it. Always reports one byte
    /// consumed.
    pub fn write(&mut self, c: u8) -> usize {
        let (mut cx, mut cy) = (i32::from(self.text.cursor_x), i32::from(self.text.cursor_y));
        if let Some(p) = self.place(c, &mut cx, &mut cy) {
            let t = self.text;
            self.draw_char(p.x, p.y, c, t.color, t.bg, t.size_x, t.size_y);
        }
        self.text.cursor_x = saturate(cx);
        self.text.cursor_y = saturate(cy);
        1
    }

    /// Write every byte of `s`; returns the number of bytes consumed.
    pub fn print(&mut self, s: &str) -> usize {
        s.bytes().map(|c| self.write(c)).sum()
    }

    pub fn println(&mut self, s: &str) -> usize {
        self.print(s) + self.write(b'\n')
    }

    /// Draw a single character with an explicit style, leaving the cursor
    /// alone. `(x, y)` is the cell's top-left corner for the built-in font
    /// and the baseline origin for a custom one. Custom-font glyphs never
    /// paint a background.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        x: i16,
        y: i16,
        c: u8,
        color: Color,
        bg: Color,
        size_x: u8,
        size_y: u8,
    ) {
        let (x, y) = (i32::from(x), i32::from(y));
        let (sx, sy) = (i32::from(size_x.max(1)), i32::from(size_y.max(1)));
        match self.text.font {
            None => self.draw_builtin_char(x, y, c, color, bg, sx, sy),
            Some(f) => {
                if let Some(g) = f.glyph(c) {
                    self.draw_font_glyph(x, y, f, g, color, sx, sy);
                }
            }
        }
    }

    /// One magnified pixel: a single write at size 1, a block otherwise.
    fn put_cell(&mut self, x: i32, y: i32, sx: i32, sy: i32, color: Color) {
        if sx == 1 && sy == 1 {
            self.write_pixel_i32(x, y, color);
        } else {
            self.rect_i32(x, y, sx, sy, color);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_builtin_char(
        &mut self,
        x: i32,
        y: i32,
        c: u8,
        color: Color,
        bg: Color,
        sx: i32,
        sy: i32,
    ) {
        if x >= i32::from(self.width())
            || y >= i32::from(self.height())
            || x + CELL_W * sx - 1 < 0
            || y + CELL_H * sy - 1 < 0
        {
            return;
        }
        let columns = glcdfont::columns(builtin_index(c, self.text.cp437)).unwrap_or(&[0; 5]);
        let opaque = bg != color;
        self.batch(|g| {
            for (i, &column) in columns.iter().enumerate() {
                let px = x + i as i32 * sx;
                for j in 0..CELL_H {
                    let py = y + j * sy;
                    if column & (1 << j) != 0 {
                        g.put_cell(px, py, sx, sy, color);
                    } else if opaque {
                        g.put_cell(px, py, sx, sy, bg);
                    }
                }
            }
            if opaque {
                // spacing column
                g.rect_i32(x + 5 * sx, y, sx, CELL_H * sy, bg);
            }
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_font_glyph(
        &mut self,
        x: i32,
        y: i32,
        font: &GfxFont<'_>,
        glyph: &Glyph,
        color: Color,
        sx: i32,
        sy: i32,
    ) {
        let (xo, yo) = (i32::from(glyph.x_offset), i32::from(glyph.y_offset));
        self.batch(|g| {
            for (col, row) in glyph.pixels(font.bitmap) {
                let px = x + (xo + i32::from(col)) * sx;
                let py = y + (yo + i32::from(row)) * sy;
                g.put_cell(px, py, sx, sy, color);
            }
        });
    }

    // =========================================================================
    // MEASUREMENT
    // =========================================================================

    /// Box `s` would cover if printed from `(x, y)` with the current font,
    /// size and wrap setting, plus where the cursor would end up. Nothing is
    /// drawn and the real cursor is not moved. A string that draws nothing
    /// has a zero-sized box at `(x, y)`.
    pub fn text_bounds(&self, s: &str, x: i16, y: i16) -> TextBounds {
        let (mut cx, mut cy) = (i32::from(x), i32::from(y));
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        for c in s.bytes() {
            if let Some(p) = self.place(c, &mut cx, &mut cy) {
                min_x = min_x.min(p.x1);
                min_y = min_y.min(p.y1);
                max_x = max_x.max(p.x2);
                max_y = max_y.max(p.y2);
            }
        }

        let mut bounds = TextBounds {
            x,
            y,
            cursor_x: saturate(cx),
            cursor_y: saturate(cy),
            ..TextBounds::default()
        };
        if max_x >= min_x {
            bounds.x = saturate(min_x);
            bounds.w = (max_x - min_x + 1).min(i32::from(u16::MAX)) as u16;
        }
        if max_y >= min_y {
            bounds.y = saturate(min_y);
            bounds.h = (max_y - min_y + 1).min(i32::from(u16::MAX)) as u16;
        }
        bounds
    }
}

impl<S: Surface> fmt::Write for Gfx<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::tests::Recorder;
    use core::fmt::Write as _;
    use super::font::tests::PLUS;
    use pretty_assertions::assert_eq;

    /// Inclusive box around every touched pixel, as `(x, y, w, h)`.
    fn extent(g: &Gfx<'_, Recorder>) -> (i16, i16, u16, u16) {
        let px = &g.surface().pixels;
        let x0 = px.keys().map(|p| p.0).min().unwrap_or(0);
        let x1 = px.keys().map(|p| p.0).max().unwrap_or(-1);
        let y0 = px.keys().map(|p| p.1).min().unwrap_or(0);
        let y1 = px.keys().map(|p| p.1).max().unwrap_or(-1);
        (x0, y0, (x1 - x0 + 1) as u16, (y1 - y0 + 1) as u16)
    }

    #[test]
    fn defaults() {
        let g = Gfx::new(Recorder::new(8, 8));
        assert_eq!((g.cursor_x(), g.cursor_y()), (0, 0));
        assert_eq!(g.text_color(), (Color::WHITE, Color::WHITE));
        assert_eq!(g.text_size(), (1, 1));
        assert!(g.text_wrap());
        assert!(!g.is_cp437());
        assert!(g.font().is_none());
    }

    #[test]
    fn builtin_glyph_is_five_columns_with_spacing() {
        let mut g = Gfx::new(Recorder::new(32, 16));
        assert_eq!(g.write(b'!'), 1);
        assert_eq!(g.surface().lit(), (0..5).map(|y| (2, y)).chain([(2, 6)]).collect::<Vec<_>>());
        assert_eq!((g.cursor_x(), g.cursor_y()), (6, 0));
    }

    #[test]
    fn size_zero_is_size_one() {
        let mut g = Gfx::new(Recorder::new(32, 16));
        g.set_text_size(0);
        assert_eq!(g.text_size(), (1, 1));
        g.set_text_size_xy(2, 0);
        assert_eq!(g.text_size(), (2, 1));
    }

    #[test]
    fn opaque_background_fills_the_whole_cell() {
        let mut g = Gfx::new(Recorder::new(32, 32));
        g.set_text_color_bg(Color::WHITE, Color::BLUE);
        g.set_text_size_xy(2, 3);
        g.set_cursor(1, 2);
        g.print("A");
        assert_eq!(g.surface().pixels.len(), 12 * 24);
        assert_eq!(extent(&g), (1, 2, 12, 24));
        let b = g.text_bounds("A", 1, 2);
        assert_eq!((b.x, b.y, b.w, b.h), (1, 2, 12, 24));
        assert_eq!((b.cursor_x, b.cursor_y), (g.cursor_x(), g.cursor_y()));
    }

    #[test]
    fn bounds_match_rendered_cells_across_wrap() {
        let mut g = Gfx::new(Recorder::new(40, 40));
        g.set_text_color_bg(Color::WHITE, Color::BLACK);
        let text = "hello\nwrap!";
        let b = g.text_bounds(text, 3, 1);
        g.set_cursor(3, 1);
        g.print(text);
        // bg draws are recorded too, so the extent is the union of cells
        assert_eq!(extent(&g), (b.x, b.y, b.w, b.h));
        assert_eq!((b.cursor_x, b.cursor_y), (g.cursor_x(), g.cursor_y()));
        assert_eq!((b.x, b.y, b.w, b.h), (0, 1, 33, 16));
    }

    #[test]
    fn wrap_moves_glyph_that_would_cross_the_edge() {
        let mut g = Gfx::new(Recorder::new(14, 40));
        g.print("abc");
        assert_eq!((g.cursor_x(), g.cursor_y()), (6, 8));

        let mut g = Gfx::new(Recorder::new(14, 40));
        g.set_text_wrap(false);
        g.print("abc");
        assert_eq!((g.cursor_x(), g.cursor_y()), (18, 0));
    }

    #[test]
    fn newline_and_carriage_return() {
        let mut g = Gfx::new(Recorder::new(64, 64));
        g.set_text_size(2);
        g.set_cursor(10, 3);
        g.print("a\r\nb");
        assert_eq!((g.cursor_x(), g.cursor_y()), (12, 19));
        g.println("");
        assert_eq!((g.cursor_x(), g.cursor_y()), (0, 35));
    }

    #[test]
    fn cp437_toggle_shifts_only_the_upper_range() {
        let render = |c: u8, cp437: bool| {
            let mut g = Gfx::new(Recorder::new(8, 8));
            g.cp437(cp437);
            g.write(c);
            g.surface().lit()
        };
        for c in [b'A', 0x80, 175] {
            assert_eq!(render(c, false), render(c, true));
        }
        // 0xB0 is a light shade in the table; 0xB1 is medium
        assert_eq!(render(176, true).len(), 12);
        assert_eq!(render(176, false).len(), 20);
        assert!(render(255, false).is_empty());
    }

    #[test]
    fn code_255_without_cp437_still_advances() {
        let mut g = Gfx::new(Recorder::new(32, 8));
        g.write(255);
        assert_eq!(g.cursor_x(), 6);
        assert!(g.surface().pixels.is_empty());
    }

    #[test]
    fn char_off_surface_is_skipped() {
        let mut g = Gfx::new(Recorder::new(16, 16));
        g.set_text_color_bg(Color::WHITE, Color::BLACK);
        g.draw_char(-6, 0, b'A', Color::WHITE, Color::BLACK, 1, 1);
        g.draw_char(0, 16, b'A', Color::WHITE, Color::BLACK, 1, 1);
        g.draw_char(-3, 0, b'A', Color::WHITE, Color::BLACK, 1, 1);
        assert!(g.surface().pixels.keys().all(|p| p.0 < 3));
        assert_eq!(g.surface().pixels.len(), 3 * 8);
    }

    #[test]
    fn custom_font_draws_relative_to_baseline() {
        let mut g = Gfx::new(Recorder::new(32, 32));
        g.set_font(Some(&PLUS));
        g.set_cursor(4, 10);
        g.print(" +");
        // space advances by 4, then '+' sits one to the right and above
        assert_eq!(
            g.surface().lit(),
            vec![(9, 8), (10, 7), (10, 8), (10, 9), (11, 8)]
        );
        assert_eq!((g.cursor_x(), g.cursor_y()), (13, 10));

        let b = g.text_bounds(" +", 4, 10);
        assert_eq!((b.x, b.y, b.w, b.h), (9, 7, 3, 3));
        assert_eq!((b.cursor_x, b.cursor_y), (13, 10));
    }

    #[test]
    fn custom_font_scaling_and_missing_glyphs() {
        let mut g = Gfx::new(Recorder::new(64, 64));
        g.set_font(Some(&PLUS));
        g.set_text_size(2);
        g.set_cursor(0, 20);
        g.print("Z+");
        assert_eq!(g.cursor_x(), 10);
        assert_eq!(g.surface().pixels.len(), 5 * 4);
        let b = g.text_bounds("Z+", 0, 20);
        assert_eq!((b.x, b.y, b.w, b.h), extent(&g));

        g.print("\n");
        assert_eq!((g.cursor_x(), g.cursor_y()), (0, 34));
    }

    #[test]
    fn custom_font_wraps_on_glyph_extent() {
        let mut g = Gfx::new(Recorder::new(12, 40));
        g.set_font(Some(&PLUS));
        g.set_cursor(9, 10);
        g.write(b'+');
        assert_eq!((g.cursor_x(), g.cursor_y()), (5, 17));

        g.set_font(None);
        assert!(g.font().is_none());
    }

    #[test]
    fn empty_string_has_empty_bounds() {
        let g = Gfx::new(Recorder::new(16, 16));
        let b = g.text_bounds("", 5, 6);
        assert_eq!(
            b,
            TextBounds {
                x: 5,
                y: 6,
                w: 0,
                h: 0,
                cursor_x: 5,
                cursor_y: 6
            }
        );
        let b = g.text_bounds("\n", 5, 6);
        assert_eq!((b.w, b.h, b.cursor_x, b.cursor_y), (0, 0, 0, 14));
    }

    #[test]
    fn fmt_write_goes_through_the_cursor() {
        let mut g = Gfx::new(Recorder::new(64, 16));
        write!(g, "{}", 42).ok();
        assert_eq!(g.cursor_x(), 12);
        assert!(!g.surface().pixels.is_empty());
    }
}
