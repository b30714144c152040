use gray_recolor_rs::image_pipeline::{RecolorConfig, RecolorPipeline};
use gray_recolor_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting gray_recolor...");

    let config = RecolorConfig::builder()
        .workers(2)
        .build();
    let pipeline = RecolorPipeline::new(config)?;

    info!("Recolor pipeline initialized");
    info!("Workers: {:?}", pipeline.config().worker_counts);
    info!("Output format: {:?}", pipeline.config().output_format);

    match pipeline.run_configured() {
        Ok(report) => {
            report.print_runs();
            report.timings.print_summary();
            info!("Recolor successful!");
            Ok(())
        }
        Err(e) => {
            error!("Recolor failed: {}", e);
            Err(e.into())
        }
    }
}
