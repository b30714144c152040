//! Pipeline conversions module
//!
//! Orchestrates a full recolor experiment: decode, time the sequential and
//! parallel runs, report, encode.

mod recolor_pipeline;
mod report;


pub use recolor_pipeline::RecolorPipeline;
pub use report::{ExperimentReport, RunSummary};
