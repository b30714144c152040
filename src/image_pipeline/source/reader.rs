use image::RgbImage;

use crate::image_pipeline::common::error::Result;

pub trait SourceReader {
    fn read_image(&self, data: &[u8]) -> Result<RgbImage>;
}
