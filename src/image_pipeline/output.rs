//! Output writing module
//!
//! Encodes the recolored image as lossy JPEG (the default) or lossless TIFF.

mod writer;
mod standard_writer;
pub mod types;

pub use writer::OutputWriter;
pub use standard_writer::StandardImageWriter;
pub use types::{OutputFormat, TiffCompression, DEFAULT_JPEG_QUALITY};
