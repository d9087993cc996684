//! Icon descriptions for the app icon generator.

use std::path::{Path, PathBuf};

mod color;

pub use color::Color;

/// The text drawn on every icon.
pub const LABEL: &str = "KOKO";

/// The icon background color.
pub const BACKGROUND: Color = Color::rgb(0xFF, 0xA5, 0x00);

/// The label color.
pub const TEXT_COLOR: Color = Color::rgb(0x1C, 0x1C, 0x1C);

/// Font size relative to the icon size.
pub const FONT_SCALE: f32 = 0.35;

/// Sizes of the icons in the standard set, in pixels.
pub const STANDARD_SIZES: [u32; 2] = [192, 512];

/// A single square icon to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    /// Width and height of the icon, in pixels.
    pub size: u32,

    /// The text drawn in the center of the icon.
    pub label: String,

    /// The color the whole icon is filled with.
    pub background: Color,

    /// The color of the label.
    pub text_color: Color,

    /// Where the PNG file is written to.
    pub output_path: PathBuf,
}

impl IconSpec {
    /// Create a spec with the fixed label and colors.
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            label: LABEL.to_owned(),
            background: BACKGROUND,
            text_color: TEXT_COLOR,
            output_path: output_path.into(),
        }
    }

    /// The label font size, in whole pixels.
    pub fn font_size(&self) -> f32 {
        (self.size as f32 * FONT_SCALE).floor()
    }
}

/// The file name used for an icon of the given size.
pub fn file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// The standard icon set, with files placed in `dir`.
pub fn standard_set(dir: &Path) -> Vec<IconSpec> {
    STANDARD_SIZES
        .iter()
        .map(|&size| IconSpec::new(size, dir.join(file_name(size))))
        .collect()
}
