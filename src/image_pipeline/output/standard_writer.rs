use std::io::{Cursor, Write};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbImage};
use tiff::encoder::{colortype, compression::DeflateLevel, Compression, TiffEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{RecolorError, Result};
use crate::image_pipeline::output::types::{OutputFormat, TiffCompression};
use crate::image_pipeline::output::writer::OutputWriter;

pub struct StandardImageWriter;

impl StandardImageWriter {
    fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
            encoder
                .encode(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)
                .map_err(|e| RecolorError::EncodeError(e.to_string()))?;
        }
        Ok(buffer)
    }

    fn encode_tiff(image: &RgbImage, compression: TiffCompression) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        let compression = match compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        {
            let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
                .map_err(|e| RecolorError::EncodeError(e.to_string()))?
                .with_compression(compression);

            encoder
                .write_image::<colortype::RGB8>(image.width(), image.height(), image.as_raw())
                .map_err(|e| RecolorError::EncodeError(e.to_string()))?;
        }

        Ok(buffer)
    }
}

impl OutputWriter for StandardImageWriter {
    fn write_image(&self, image: &RgbImage, output: &mut dyn Write, format: OutputFormat) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", format, image.width(), image.height());

        let buffer = match format {
            OutputFormat::Jpeg { quality } => Self::encode_jpeg(image, quality)?,
            OutputFormat::Tiff { compression } => Self::encode_tiff(image, compression)?,
        };

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tiff::decoder::{Decoder, DecodingResult};
    use super::*;

    fn checker() -> RgbImage {
        RgbImage::from_fn(6, 4, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([20, 0, 0])
            } else {
                Rgb([200, 50, 60])
            }
        })
    }

    #[test]
    fn test_tiff_output_is_lossless() {
        for compression in [
            TiffCompression::None,
            TiffCompression::Lzw,
            TiffCompression::DeflateFast,
            TiffCompression::DeflateBest,
        ] {
            let image = checker();
            let mut output = Vec::new();
            StandardImageWriter
                .write_image(&image, &mut output, OutputFormat::Tiff { compression })
                .unwrap();

            let mut decoder = Decoder::new(Cursor::new(output)).unwrap();
            assert_eq!(decoder.dimensions().unwrap(), (6, 4));
            match decoder.read_image().unwrap() {
                DecodingResult::U8(data) => assert_eq!(&data, image.as_raw()),
                _ => panic!("expected 8-bit samples"),
            }
        }
    }

    #[test]
    fn test_jpeg_output_decodes_to_same_size() {
        let image = checker();
        let mut output = Vec::new();
        StandardImageWriter
            .write_image(&image, &mut output, OutputFormat::default())
            .unwrap();

        assert_eq!(&output[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }
}
