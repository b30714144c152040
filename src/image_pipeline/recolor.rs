//! Per-pixel recolor module
//!
//! Classifies near-gray pixels and shifts them toward a warm tint.
//! Everything else passes through unchanged.

mod classifier;
mod transform;

#[cfg(test)]
mod tests;

pub use classifier::{is_gray, GRAY_THRESHOLD};
pub use transform::{pack_opaque, transform, transform_pixel, unpack};
