/// Largest pairwise channel difference (exclusive) that still counts as gray.
pub const GRAY_THRESHOLD: i16 = 30;

/// Returns true when every pair of channels is closer than [`GRAY_THRESHOLD`].
#[inline]
pub fn is_gray(red: u8, green: u8, blue: u8) -> bool {
    let (r, g, b) = (red as i16, green as i16, blue as i16);
    (r - g).abs() < GRAY_THRESHOLD
        && (r - b).abs() < GRAY_THRESHOLD
        && (g - b).abs() < GRAY_THRESHOLD
}
