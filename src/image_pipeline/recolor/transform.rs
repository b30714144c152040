use image::Rgb;

use crate::image_pipeline::recolor::classifier::is_gray;

const RED_SHIFT: u8 = 10;
const GREEN_SHIFT: u8 = 80;
const BLUE_SHIFT: u8 = 20;

const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Warms up gray pixels, leaves colored ones alone.
///
/// Gray is decided by [`is_gray`]. Saturating arithmetic keeps every channel
/// in `0..=255`, so 255 stays 255 on red and 0 stays 0 on green and blue.
#[inline]
pub fn transform(red: u8, green: u8, blue: u8) -> (u8, u8, u8) {
    if is_gray(red, green, blue) {
        (
            red.saturating_add(RED_SHIFT),
            green.saturating_sub(GREEN_SHIFT),
            blue.saturating_sub(BLUE_SHIFT),
        )
    } else {
        (red, green, blue)
    }
}

#[inline]
pub fn transform_pixel(pixel: Rgb<u8>) -> Rgb<u8> {
    let Rgb([r, g, b]) = pixel;
    let (r, g, b) = transform(r, g, b);
    Rgb([r, g, b])
}

/// Packs channels as `0xAARRGGBB` with alpha forced to fully opaque.
pub fn pack_opaque(red: u8, green: u8, blue: u8) -> u32 {
    OPAQUE_ALPHA | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// Splits a packed `0xAARRGGBB` value into its color channels, ignoring alpha.
pub fn unpack(argb: u32) -> (u8, u8, u8) {
    (
        ((argb >> 16) & 0xFF) as u8,
        ((argb >> 8) & 0xFF) as u8,
        (argb & 0xFF) as u8,
    )
}
