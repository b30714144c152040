//! Source reader backed by the `image` crate.

use tracing::debug;
use image::RgbImage;

use crate::image_pipeline::common::error::{RecolorError, Result};
use crate::image_pipeline::source::reader::SourceReader;

/// Reads any format the `image` crate was built with (JPEG and PNG here).
pub struct StandardImageReader;

impl SourceReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<RgbImage> {
        debug!("Decoding source image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| RecolorError::DecodeError(e.to_string()))?;
        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| RecolorError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} ({:?})",
            format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use image::{ImageFormat, Rgb, Rgba, RgbaImage};
    use super::*;

    #[test]
    fn test_decodes_png_and_drops_alpha() {
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([100, 100, 101, 7]));
        let mut encoded = Cursor::new(Vec::new());
        rgba.write_to(&mut encoded, ImageFormat::Png).unwrap();

        let image = StandardImageReader.read_image(encoded.get_ref()).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|p| *p == Rgb([100, 100, 101])));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = StandardImageReader.read_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RecolorError::DecodeError(_)));
    }
}
