//! PNG encoding and output.

use std::path::Path;

use crate::{GenerateError, Icon};

/// Encode the icon as an RGBA8 PNG in memory.
pub fn encode(icon: Icon) -> Result<Vec<u8>, GenerateError> {
    let (width, height) = (icon.width(), icon.height());
    let pixels = icon.into_pixels();
    let len = pixels.len();

    let img = image::RgbaImage::from_raw(width, height, pixels.into_vec()).ok_or(
        GenerateError::Canvas {
            len,
            width,
            height,
        },
    )?;

    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(GenerateError::Encode)?;

    tracing::debug!(width, height, bytes = bytes.len(), "encoded png");
    Ok(bytes)
}

/// Encode the icon and write it to `path`, replacing any existing file.
///
/// Nothing is written unless encoding succeeds.
pub fn write(icon: Icon, path: &Path) -> Result<(), GenerateError> {
    let bytes = encode(icon)?;

    std::fs::write(path, &bytes).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote icon");
    Ok(())
}
