//! Source image reading module
//!
//! Decodes an encoded image into an RGB pixel grid. Format support comes from
//! the `image` crate; alpha is dropped on load.

mod reader;
mod standard_reader;

pub use reader::SourceReader;
pub use standard_reader::StandardImageReader;
