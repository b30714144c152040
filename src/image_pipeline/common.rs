//! Common utilities module
//!
//! This module contains the error type, run configuration and timing helpers
//! shared across the image pipeline.

pub mod config;
pub mod error;
pub mod timing;

pub use config::{RecolorConfig, RecolorConfigBuilder};
pub use error::{RecolorError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
