//! Run configuration for the recolor experiment

use std::path::PathBuf;

use crate::image_pipeline::output::types::OutputFormat;

pub const DEFAULT_SOURCE_FILE: &str = "./resources/many-flowers.jpg";
pub const DEFAULT_DESTINATION_FILE: &str = "./out/many-flowers.jpg";

/// Configuration for a recolor run
#[derive(Debug, Clone)]
pub struct RecolorConfig {
    /// Image to read
    pub input_path: PathBuf,
    /// Where the parallel result is written
    pub output_path: PathBuf,
    /// One parallel run per entry, in order. The last run's output is persisted.
    pub worker_counts: Vec<usize>,
    /// Encoding used for the output file
    pub output_format: OutputFormat,
    /// Whether to reject empty or oversized images before processing
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<u32>,
    /// Compare every parallel output against the sequential one
    pub verify_parallel: bool,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_SOURCE_FILE),
            output_path: PathBuf::from(DEFAULT_DESTINATION_FILE),
            worker_counts: vec![2],
            output_format: OutputFormat::default(),
            validate_dimensions: true,
            max_dimension: Some(50_000),
            verify_parallel: true,
        }
    }
}

impl RecolorConfig {
    pub fn builder() -> RecolorConfigBuilder {
        RecolorConfigBuilder::default()
    }
}

/// Builder for RecolorConfig
#[derive(Default)]
pub struct RecolorConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    worker_counts: Option<Vec<usize>>,
    output_format: Option<OutputFormat>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
    verify_parallel: Option<bool>,
}

impl RecolorConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Shorthand for a single parallel run with `workers` threads
    pub fn workers(mut self, workers: usize) -> Self {
        self.worker_counts = Some(vec![workers]);
        self
    }

    pub fn worker_counts(mut self, counts: Vec<usize>) -> Self {
        self.worker_counts = Some(counts);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn verify_parallel(mut self, verify: bool) -> Self {
        self.verify_parallel = Some(verify);
        self
    }

    pub fn build(self) -> RecolorConfig {
        let default = RecolorConfig::default();
        RecolorConfig {
            input_path: self.input_path.unwrap_or(default.input_path),
            output_path: self.output_path.unwrap_or(default.output_path),
            worker_counts: self.worker_counts.unwrap_or(default.worker_counts),
            output_format: self.output_format.unwrap_or(default.output_format),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            verify_parallel: self.verify_parallel.unwrap_or(default.verify_parallel),
        }
    }
}
