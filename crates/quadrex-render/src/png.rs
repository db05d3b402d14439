//! PNG encoding of the finished pixel buffer.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::colorize::PixelBuffer;
use crate::error::RenderError;

/// Encode `buffer` as a PNG at `path`, overwriting any existing file.
///
/// This is the render's only I/O, and it runs strictly after the full
/// pixel buffer exists — a failing write leaves no partial image of
/// ours behind.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), RenderError> {
    let side = buffer.side();
    let image = RgbImage::from_fn(side, side, |x, y| {
        let px = buffer.get(y, x);
        image::Rgb([px.r, px.g, px.b])
    });
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::ImageWrite {
            path: path.to_path_buf(),
            source,
        })
}
