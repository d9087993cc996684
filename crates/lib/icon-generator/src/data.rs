//! Rendered icon data.

use crate::GenerateError;

/// A rendered icon, before encoding.
///
/// The pixel buffer always holds exactly `width * height` RGBA pixels.
pub struct Icon {
    /// Image pixels, as the RGBA byte sequences, row by row.
    pixels: Box<[u8]>,

    /// Image width.
    width: u32,

    /// Image height.
    height: u32,
}

impl Icon {
    /// Wrap a rendered RGBA buffer, checking it matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Box<[u8]>) -> Result<Self, GenerateError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(GenerateError::Canvas {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Image width.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA value at the given coordinates, if they are inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].try_into().ok()
    }

    /// Take the raw RGBA buffer out.
    pub fn into_pixels(self) -> Box<[u8]> {
        self.pixels
    }
}

impl core::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Icon({}x{})", self.width, self.height)
    }
}
