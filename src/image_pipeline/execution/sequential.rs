use image::RgbImage;
use tracing::{debug, instrument};

use crate::image_pipeline::common::timing::Timer;
use crate::image_pipeline::execution::types::{RunOutcome, SEQUENTIAL_LABEL};
use crate::image_pipeline::region::{process_region, Region};

/// Recolors the whole image on the calling thread.
#[instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn run_sequential(source: &RgbImage) -> RunOutcome {
    let timer = Timer::start(SEQUENTIAL_LABEL);

    let mut dest = RgbImage::new(source.width(), source.height());
    process_region(source, &mut dest, Region::full(source.width(), source.height()));

    let (label, duration) = timer.stop();
    debug!("{} finished in {:.3}ms", label, duration.as_secs_f64() * 1000.0);

    RunOutcome {
        label,
        image: dest,
        duration,
        workers: 1,
    }
}
