//! Icon generation errors.

use std::path::PathBuf;

/// Error returned while generating an icon.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No font faces are loaded, so the label cannot be drawn.
    #[error("no fonts available to draw text with")]
    FontsUnavailable,

    /// The requested icon size is zero.
    #[error("icon size must be positive")]
    EmptySize,

    /// The pixel buffer does not match the icon dimensions.
    #[error("canvas of {len} bytes does not fit a {width}x{height} RGBA image")]
    Canvas {
        /// Pixel buffer length, in bytes.
        len: usize,

        /// Expected width.
        width: u32,

        /// Expected height.
        height: u32,
    },

    /// PNG encoding failed.
    #[error("png encoding: {0}")]
    Encode(#[source] image::ImageError),

    /// Writing the PNG file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output file path.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
