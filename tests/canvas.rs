//! End-to-end drawing on the packed canvas through the public API.

use pixelgfx::{Canvas1, Color, Corners, Gfx, GfxFont, Glyph, Surface};
use pretty_assertions::assert_eq;

fn dump(g: &Gfx<'_, Canvas1>) -> Vec<String> {
    (0..g.height())
        .map(|y| {
            (0..g.width())
                .map(|x| if g.get_pixel(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

fn count(g: &Gfx<'_, Canvas1>) -> usize {
    dump(g).iter().map(|row| row.matches('#').count()).sum()
}

#[test]
fn rotated_dimensions() {
    let mut g = Gfx::new(Canvas1::new(30, 12));
    for (r, dims) in [(0, (30, 12)), (1, (12, 30)), (2, (30, 12)), (3, (12, 30)), (5, (12, 30))] {
        g.set_rotation(r);
        assert_eq!((g.width(), g.height()), dims, "rotation {r}");
    }
}

#[test]
fn same_logical_picture_in_every_rotation() {
    let mut pictures = Vec::new();
    for r in 0..4 {
        let mut g = Gfx::new(Canvas1::new(24, 24));
        g.set_rotation(r);
        g.draw_line(1, 2, 17, 9, Color::ON);
        g.fill_triangle(3, 20, 10, 12, 14, 22, Color::ON);
        g.draw_circle(17, 16, 5, Color::ON);
        g.draw_fast_hline(0, 0, 5, Color::ON);
        pictures.push(dump(&g));
    }
    for p in &pictures[1..] {
        assert_eq!(&pictures[0], p);
    }
}

#[test]
fn rotation_maps_origin_to_each_corner() {
    let corners = [(0, 0), (0, 5), (9, 5), (9, 0)];
    for (r, &(rx, ry)) in corners.iter().enumerate() {
        let mut g = Gfx::new(Canvas1::new(10, 6));
        g.set_rotation(r as u8);
        g.draw_pixel(0, 0, Color::ON);
        let canvas = g.into_inner();
        assert!(canvas.get_pixel(rx, ry), "rotation {r}");
    }
}

#[test]
fn fill_screen_sets_every_byte() {
    let mut g = Gfx::new(Canvas1::new(13, 3));
    g.fill_screen(Color::WHITE);
    assert_eq!(count(&g), 13 * 3);
    assert_eq!(g.surface().buffer().map(<[u8]>::len), Some(6));
    g.fill_screen(Color::BLACK);
    assert_eq!(count(&g), 0);
}

#[test]
fn rounded_box_and_disc() {
    let mut g = Gfx::new(Canvas1::new(11, 7));
    g.draw_round_rect(0, 0, 11, 7, 2, Color::ON);
    assert_eq!(
        dump(&g),
        vec![
            ".#########.",
            "#.........#",
            "#.........#",
            "#.........#",
            "#.........#",
            "#.........#",
            ".#########.",
        ]
    );

    let mut g = Gfx::new(Canvas1::new(7, 7));
    g.fill_circle(3, 3, 3, Color::ON);
    assert_eq!(
        dump(&g),
        vec![
            "..###..",
            ".#####.",
            "#######",
            "#######",
            "#######",
            ".#####.",
            "..###..",
        ]
    );
}

#[test]
fn quadrant_helper_on_canvas() {
    let mut g = Gfx::new(Canvas1::new(8, 8));
    g.fill_circle_helper(4, 4, 3, Corners::BOTTOM, 0, Color::ON);
    assert!(dump(&g)[..4].iter().all(|row| !row.contains('#')));
    assert!(g.get_pixel(4, 7));
}

#[test]
fn text_bounds_cover_exactly_what_is_drawn() {
    let mut g = Gfx::new(Canvas1::new(64, 64));
    g.set_text_size(2);
    g.fill_screen(Color::OFF);
    // opaque background makes every cell fully visible on a mono canvas
    g.set_text_color_bg(Color::OFF, Color::ON);
    let text = "Hi there\nok";
    let b = g.text_bounds(text, 2, 3);
    g.set_cursor(2, 3);
    g.print(text);

    let rows = dump(&g);
    let lit: Vec<(usize, usize)> = rows
        .iter()
        .enumerate()
        .flat_map(|(y, row)| row.char_indices().filter(|c| c.1 == '#').map(move |(x, _)| (x, y)))
        .collect();
    let min_x = lit.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = lit.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = lit.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = lit.iter().map(|p| p.1).max().unwrap_or(0);
    assert_eq!(
        (b.x as usize, b.y as usize, b.w as usize, b.h as usize),
        (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    );
    assert_eq!((b.cursor_x, b.cursor_y), (g.cursor_x(), g.cursor_y()));
}

#[test]
fn custom_font_end_to_end() {
    // 2x2 block for 'a', blank for 'b'
    static BITMAP: [u8; 1] = [0b1111_0000];
    static GLYPHS: [Glyph; 2] = [Glyph::new(0, 2, 2, 3, 0, -2), Glyph::new(0, 0, 0, 2, 0, 0)];
    static FONT: GfxFont<'static> = GfxFont::new(&BITMAP, &GLYPHS, b'a' as u16, b'b' as u16, 4);

    let mut g = Gfx::new(Canvas1::new(8, 8));
    g.set_font(Some(&FONT));
    g.set_cursor(0, 3);
    g.print("aba");
    assert_eq!(
        dump(&g),
        vec![
            "........",
            "##...##.",
            "##...##.",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]
    );
    assert_eq!((g.cursor_x(), g.cursor_y()), (8, 3));

    // next glyph would reach x = 10 on an 8 wide surface
    g.print("a");
    assert_eq!((g.cursor_x(), g.cursor_y()), (3, 7));
    assert!(g.get_pixel(0, 5) && g.get_pixel(1, 6));
}

#[test]
fn batches_can_be_opened_by_the_caller() {
    let mut g = Gfx::new(Canvas1::new(16, 16));
    g.start_write();
    g.write_pixel(1, 1, Color::ON);
    g.write_fast_hline(0, 3, 4, Color::ON);
    g.write_fast_vline(8, 0, -3, Color::ON);
    g.write_fill_rect(10, 10, 2, 2, Color::ON);
    g.write_line(0, 15, 3, 12, Color::ON);
    g.end_write();
    assert_eq!(count(&g), 1 + 4 + 1 + 4 + 4);
}

#[test]
fn canvas_works_through_a_borrow() {
    let mut canvas = Canvas1::new(8, 8);
    {
        let mut g = Gfx::new(&mut canvas);
        g.fill_rect(0, 0, 2, 2, Color::ON);
    }
    assert!(canvas.get_pixel(1, 1));
    assert_eq!(canvas.dimensions(), (8, 8));
}
