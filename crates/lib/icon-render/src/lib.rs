//! Library for rendering square icon images with a centered text label.

use icon_spec::Color;

/// Parameters of a single render.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    /// The text to draw.
    pub text: &'a str,

    /// Canvas width.
    pub width: u32,

    /// Canvas height.
    pub height: u32,

    /// Font size, in pixels.
    pub font_size: f32,

    /// Color the canvas is filled with before drawing the text.
    pub background: Color,

    /// Text color.
    pub text_color: Color,
}

/// Whether the font database has at least one face to draw text with.
pub fn has_fonts(db: &cosmic_text::fontdb::Database) -> bool {
    db.faces().next().is_some()
}

/// Loads an extra font file into a `fontdb` of some [`cosmic_text::FontSystem`].
pub fn load_font_file(
    db: &mut cosmic_text::fontdb::Database,
    path: &std::path::Path,
) -> std::io::Result<()> {
    let before = db.len();
    db.load_font_file(path)?;
    tracing::debug!(
        path = %path.display(),
        faces = db.len() - before,
        "loaded font file"
    );
    Ok(())
}

/// Allocates an RGBA canvas filled with a single color.
pub fn fill(width: u32, height: u32, color: Color) -> Box<[u8]> {
    color
        .to_array()
        .repeat(width as usize * height as usize)
        .into_boxed_slice()
}

/// Composites a straight-alpha `src` color over the RGBA pixel at `dst`.
pub fn blend_pixel(dst: &mut [u8], src: [u8; 4]) {
    let src_a = u32::from(src[3]);
    if src_a == 0 {
        return;
    }

    let dst_a = u32::from(dst[3]);
    let inv_a = 255 - src_a;

    // Output alpha, scaled by 255.
    let out_a = src_a * 255 + dst_a * inv_a;

    for (d, s) in dst[..3].iter_mut().zip(&src[..3]) {
        let value = u32::from(*s) * src_a * 255 + u32::from(*d) * dst_a * inv_a;
        *d = ((value + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

/// Draws text centered horizontally and vertically over the `pixels`.
///
/// The text is laid out as a single line as tall as the canvas, so the line
/// box spans the whole height and the glyphs sit in its middle. Glyph
/// coverage is blended over what is already on the canvas.
///
/// The font system must have at least one font loaded, see [`has_fonts`].
pub fn draw_text(
    pixels: &mut [u8],
    params: &Params<'_>,
    font_system: &mut cosmic_text::FontSystem,
    cache: &mut cosmic_text::SwashCache,
) {
    let Params {
        text,
        width,
        height,
        font_size,
        text_color,
        ..
    } = *params;

    let mut buffer = cosmic_text::Buffer::new_empty(cosmic_text::Metrics::new(
        font_size,
        height as f32,
    ));
    let mut buffer = buffer.borrow_with(font_system);

    buffer.set_size(Some(width as f32), Some(height as f32));
    buffer.set_wrap(cosmic_text::Wrap::None);

    let attrs = cosmic_text::Attrs::new().weight(cosmic_text::Weight::BOLD);
    buffer.set_text(
        text,
        &attrs,
        cosmic_text::Shaping::Advanced,
        Some(cosmic_text::Align::Center),
    );
    buffer.shape_until_scroll(false);

    let [r, g, b, a] = text_color.to_array();
    let width = width as usize;
    let height = height as usize;

    buffer.draw(
        cache,
        cosmic_text::Color::rgba(r, g, b, a),
        |x, y, w, h, color| {
            for gy in 0..h as i32 {
                for gx in 0..w as i32 {
                    let (Ok(px), Ok(py)) = (usize::try_from(x + gx), usize::try_from(y + gy))
                    else {
                        continue;
                    };
                    if px >= width || py >= height {
                        continue;
                    }

                    let idx = (py * width + px) * 4;
                    blend_pixel(&mut pixels[idx..idx + 4], color.as_rgba());
                }
            }
        },
    );
}

/// Renders the text over a filled background as an RGBA image.
pub fn render(
    params: &Params<'_>,
    font_system: &mut cosmic_text::FontSystem,
    cache: &mut cosmic_text::SwashCache,
) -> Box<[u8]> {
    let mut pixels = fill(params.width, params.height, params.background);
    draw_text(&mut pixels, params, font_system, cache);
    pixels
}
