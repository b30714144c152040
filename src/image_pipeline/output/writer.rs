use std::io::Write;

use image::RgbImage;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::output::types::OutputFormat;

pub trait OutputWriter {
    fn write_image(&self, image: &RgbImage, output: &mut dyn Write, format: OutputFormat) -> Result<()>;
}
