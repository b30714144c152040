//! Types for execution runs

use std::time::Duration;

use image::RgbImage;

/// Result of one timed run over a full image
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Label printed next to the duration, e.g. `sequential` or `parallel(4)`
    pub label: String,
    /// Fully populated destination image
    pub image: RgbImage,
    /// Wall-clock time of the run, including thread spawn and join for parallel runs
    pub duration: Duration,
    /// Number of threads that did the work
    pub workers: usize,
}

impl RunOutcome {
    pub fn millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

pub fn parallel_label(workers: usize) -> String {
    format!("parallel({})", workers)
}

pub const SEQUENTIAL_LABEL: &str = "sequential";
