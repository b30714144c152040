//! Region module
//!
//! Rectangular work areas, the partitioner that hands one band to each
//! worker, and the processor that walks a region applying the recolor.

mod partitioner;
mod processor;
pub mod types;


pub use partitioner::{partition, Partition};
pub use processor::{process_band, process_region};
pub use types::Region;
