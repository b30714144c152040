use image::RgbImage;

use crate::image_pipeline::common::error::{RecolorError, Result};
use crate::image_pipeline::recolor::transform_pixel;
use crate::image_pipeline::region::types::Region;

const CHANNELS: usize = 3;

/// Recolors `region` of `source` into the same coordinates of `dest`.
///
/// The region is clamped to the smaller of the two images, so nothing outside
/// either buffer is ever read or written.
pub fn process_region(source: &RgbImage, dest: &mut RgbImage, region: Region) {
    let region = region
        .clamp_to(source.width(), source.height())
        .clamp_to(dest.width(), dest.height());

    for y in region.y..region.bottom() as u32 {
        for x in region.x..region.right() as u32 {
            dest.put_pixel(x, y, transform_pixel(*source.get_pixel(x, y)));
        }
    }
}

/// Recolors `region` into a band of destination rows owned by the caller.
///
/// `band` holds rows `region.y .. region.bottom()` of a destination image as
/// wide as `source`, row-major with three bytes per pixel. Only the columns
/// inside `region` are written.
pub fn process_band(source: &RgbImage, band: &mut [u8], region: Region) -> Result<()> {
    let width = source.width();
    let stride = width as usize * CHANNELS;
    let expected = stride * region.height as usize;
    if band.len() != expected {
        return Err(RecolorError::BandMismatch {
            expected,
            actual: band.len(),
        });
    }
    if !region.fits_within(width, source.height()) {
        return Err(RecolorError::InvalidPartition(format!(
            "band {:?} exceeds {}x{}",
            region,
            width,
            source.height()
        )));
    }
    if region.is_empty() {
        return Ok(());
    }

    for (row, y) in band.chunks_exact_mut(stride).zip(region.y..) {
        for x in region.x..region.right() as u32 {
            let offset = x as usize * CHANNELS;
            let out = transform_pixel(*source.get_pixel(x, y));
            row[offset..offset + CHANNELS].copy_from_slice(&out.0);
        }
    }
    Ok(())
}
