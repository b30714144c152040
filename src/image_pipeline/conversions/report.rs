use std::time::Duration;

use crate::image_pipeline::common::timing::PipelineTimings;
use crate::image_pipeline::execution::types::SEQUENTIAL_LABEL;
use crate::image_pipeline::execution::RunOutcome;

/// Timing of one run, without its image
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub label: String,
    pub workers: usize,
    pub duration: Duration,
    /// `None` for the sequential run or when verification is disabled
    pub matches_sequential: Option<bool>,
}

impl RunSummary {
    pub(crate) fn from_outcome(outcome: &RunOutcome, matches_sequential: Option<bool>) -> Self {
        Self {
            label: outcome.label.clone(),
            workers: outcome.workers,
            duration: outcome.duration,
            matches_sequential,
        }
    }

    pub fn millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Everything a recolor experiment measured
#[derive(Debug, Default)]
pub struct ExperimentReport {
    pub width: u32,
    pub height: u32,
    /// Sequential run first, then parallel runs in configured order
    pub runs: Vec<RunSummary>,
    /// Every pipeline step, I/O included
    pub timings: PipelineTimings,
}

impl ExperimentReport {
    pub fn sequential(&self) -> Option<&RunSummary> {
        self.runs.iter().find(|run| run.label == SEQUENTIAL_LABEL)
    }

    pub fn parallel(&self) -> impl Iterator<Item = &RunSummary> {
        self.runs.iter().filter(|run| run.label != SEQUENTIAL_LABEL)
    }

    /// Sequential time divided by the parallel time for `workers` threads.
    /// Below 1.0 means the threads made things slower.
    pub fn speedup(&self, workers: usize) -> Option<f64> {
        let sequential = self.sequential()?.duration.as_secs_f64();
        let parallel = self.parallel().find(|run| run.workers == workers)?.duration.as_secs_f64();
        if parallel > 0.0 {
            Some(sequential / parallel)
        } else {
            None
        }
    }

    /// One line per run: elapsed milliseconds then the run label.
    pub fn lines(&self) -> Vec<String> {
        self.runs
            .iter()
            .map(|run| format!("{:.3}ms {}", run.millis(), run.label))
            .collect()
    }

    pub fn print_runs(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}
