//! Tests for the icon-render crate.

use icon_spec::Color;

const ORANGE: Color = Color::rgb(0xFF, 0xA5, 0x00);
const INK: Color = Color::rgb(0x1C, 0x1C, 0x1C);

/// Read the RGBA pixel at the given coordinates.
fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * width + x) * 4) as usize;
    pixels[idx..idx + 4].try_into().unwrap()
}

#[test]
fn fill_covers_whole_canvas() {
    let pixels = icon_render::fill(3, 2, ORANGE);

    assert_eq!(pixels.len(), 3 * 2 * 4);
    for chunk in pixels.chunks_exact(4) {
        assert_eq!(chunk, [0xFF, 0xA5, 0x00, 0xFF]);
    }
}

#[test]
fn blend_opaque_source_replaces() {
    let mut dst = [0xFF, 0xA5, 0x00, 0xFF];
    icon_render::blend_pixel(&mut dst, [0x1C, 0x1C, 0x1C, 0xFF]);
    assert_eq!(dst, [0x1C, 0x1C, 0x1C, 0xFF]);
}

#[test]
fn blend_transparent_source_keeps_destination() {
    let mut dst = [0xFF, 0xA5, 0x00, 0xFF];
    icon_render::blend_pixel(&mut dst, [0x1C, 0x1C, 0x1C, 0x00]);
    assert_eq!(dst, [0xFF, 0xA5, 0x00, 0xFF]);
}

#[test]
fn blend_half_coverage_mixes_over_opaque() {
    let mut dst = [200, 100, 0, 255];
    icon_render::blend_pixel(&mut dst, [0, 0, 0, 128]);

    // 200 * 127 / 255 and 100 * 127 / 255, rounded.
    assert_eq!(dst, [100, 50, 0, 255]);
}

#[test]
fn blend_over_transparent_takes_source_color() {
    let mut dst = [0, 0, 0, 0];
    icon_render::blend_pixel(&mut dst, [10, 20, 30, 64]);
    assert_eq!(dst, [10, 20, 30, 64]);
}

#[test]
fn empty_database_has_no_fonts() {
    let db = cosmic_text::fontdb::Database::new();
    assert!(!icon_render::has_fonts(&db));
}

#[test]
fn loading_missing_font_file_fails() {
    let mut db = cosmic_text::fontdb::Database::new();
    let result = icon_render::load_font_file(&mut db, std::path::Path::new("/nonexistent/font.ttf"));
    assert!(result.is_err());
    assert!(!icon_render::has_fonts(&db));
}

#[test]
fn render_keeps_corners_and_centers_label_vertically() {
    let mut font_system = cosmic_text::FontSystem::new();
    if !icon_render::has_fonts(font_system.db()) {
        eprintln!("no fonts available on this host, skipping");
        return;
    }
    let mut cache = cosmic_text::SwashCache::new();

    let size = 192;
    let params = icon_render::Params {
        text: "KOKO",
        width: size,
        height: size,
        font_size: 67.0,
        background: ORANGE,
        text_color: INK,
    };
    let pixels = icon_render::render(&params, &mut font_system, &mut cache);

    assert_eq!(pixels.len(), (size * size * 4) as usize);

    let background = ORANGE.to_array();
    for (x, y) in [(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
        assert_eq!(pixel(&pixels, size, x, y), background, "corner {x},{y}");
    }

    let middle_row = size / 2;
    let touched = (0..size)
        .filter(|&x| pixel(&pixels, size, x, middle_row) != background)
        .count();
    assert!(touched > 0, "label should cross the middle row");

    let inked_rows: Vec<u32> = (0..size)
        .filter(|&y| (0..size).any(|x| pixel(&pixels, size, x, y) != background))
        .collect();
    let top = inked_rows[0];
    let bottom = size - 1 - inked_rows[inked_rows.len() - 1];
    assert!(
        top.abs_diff(bottom) <= size / 20,
        "{top}px above the label, {bottom}px below"
    );
}
