//! Image recolor pipeline module
//!
//! Decodes a source image, shifts near-gray pixels toward a warm tint and
//! encodes the result, timing a single-threaded run against runs split
//! across worker threads.

pub mod common;
pub mod conversions;
pub mod execution;
pub mod output;
pub mod recolor;
pub mod region;
pub mod source;

pub use common::{
    RecolorConfig,
    RecolorConfigBuilder,
    RecolorError,
    Result,
    PipelineTimings,
    Timer,
};

pub use recolor::{
    is_gray,
    transform,
    transform_pixel,
};

pub use region::{
    partition,
    Partition,
    Region,
};

pub use execution::{
    run_parallel,
    run_sequential,
    RunOutcome,
};

pub use source::{
    SourceReader,
    StandardImageReader,
};

pub use output::{
    OutputFormat,
    OutputWriter,
    StandardImageWriter,
    TiffCompression,
};

pub use conversions::{
    ExperimentReport,
    RecolorPipeline,
};
