use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::{
        config::RecolorConfig,
        error::{RecolorError, Result},
        timing::Timer,
    },
    conversions::report::{ExperimentReport, RunSummary},
    execution::{run_parallel, run_sequential, RunOutcome},
    output::{OutputWriter, StandardImageWriter},
    source::{SourceReader, StandardImageReader},
};

pub struct RecolorPipeline<R: SourceReader, W: OutputWriter> {
    reader: R,
    writer: W,
    config: RecolorConfig,
}

impl RecolorPipeline<StandardImageReader, StandardImageWriter> {
    pub fn new(config: RecolorConfig) -> Result<Self> {
        Self::with_custom(StandardImageReader, StandardImageWriter, config)
    }
}

impl<R: SourceReader, W: OutputWriter> RecolorPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: RecolorConfig) -> Result<Self> {
        validate_worker_counts(&config.worker_counts)?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(RecolorError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(RecolorError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data`, times a sequential run and every configured
    /// parallel run, then encodes the last parallel result into `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn run(&self, input_data: &[u8], output: &mut dyn Write) -> Result<ExperimentReport> {
        info!("Starting recolor experiment");
        let mut report = ExperimentReport::default();

        let source = {
            let _span = tracing::info_span!("decode_source").entered();
            let timer = Timer::start("decode_source");
            let source = self.reader.read_image(input_data)?;
            let (name, duration) = timer.stop();
            report.timings.add_step(name, duration);
            source
        };
        report.width = source.width();
        report.height = source.height();

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = source.width(),
                height = source.height()
            ).entered();
            self.validate_dimensions(source.width(), source.height())?;
        }

        let sequential = run_sequential(&source);
        info!("{}: {:.3}ms", sequential.label, sequential.millis());
        report.timings.add_step(sequential.label.clone(), sequential.duration);
        report.runs.push(RunSummary::from_outcome(&sequential, None));

        let mut persisted: Option<RunOutcome> = None;
        for &workers in &self.config.worker_counts {
            let parallel = run_parallel(&source, workers)?;
            info!("{}: {:.3}ms", parallel.label, parallel.millis());

            let matches = if self.config.verify_parallel {
                let matches = parallel.image.as_raw() == sequential.image.as_raw();
                if !matches {
                    warn!("{} output differs from the sequential output", parallel.label);
                }
                Some(matches)
            } else {
                None
            };

            report.timings.add_step(parallel.label.clone(), parallel.duration);
            report.runs.push(RunSummary::from_outcome(&parallel, matches));
            persisted = Some(parallel);
        }

        // worker_counts is never empty, checked in with_custom
        let persisted = persisted.ok_or(RecolorError::InvalidWorkerCount(0))?;

        {
            let _span = tracing::info_span!("encode_output").entered();
            let timer = Timer::start("encode_output");
            self.writer.write_image(&persisted.image, output, self.config.output_format)?;
            let (name, duration) = timer.stop();
            report.timings.add_step(name, duration);
        }

        if let Some(speedup) = report.speedup(persisted.workers) {
            info!(
                workers = persisted.workers,
                "Parallel speedup over sequential: {:.2}x", speedup
            );
        }

        info!(
            width = report.width,
            height = report.height,
            "Recolor complete"
        );
        Ok(report)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn run_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ExperimentReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Recoloring file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                RecolorError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let report = self.run(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RecolorError::OutputWriteError(format!("{}: {}", parent.display(), e))
                })?;
            }
            std::fs::write(output_path, &encoded).map_err(|e| {
                RecolorError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(report)
    }

    /// Runs against the input and output paths from the configuration.
    pub fn run_configured(&self) -> Result<ExperimentReport> {
        self.run_file(&self.config.input_path, &self.config.output_path)
    }

    pub fn config(&self) -> &RecolorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RecolorConfig) -> Result<()> {
        validate_worker_counts(&config.worker_counts)?;
        self.config = config;
        Ok(())
    }
}

fn validate_worker_counts(counts: &[usize]) -> Result<()> {
    match counts.iter().find(|&&n| n == 0) {
        Some(&n) => Err(RecolorError::InvalidWorkerCount(n)),
        None if counts.is_empty() => Err(RecolorError::InvalidWorkerCount(0)),
        None => Ok(()),
    }
}
