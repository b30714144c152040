use std::any::Any;
use std::thread;

use image::RgbImage;
use tracing::{debug, error, instrument};

use crate::image_pipeline::common::error::{RecolorError, Result};
use crate::image_pipeline::common::timing::Timer;
use crate::image_pipeline::execution::types::{parallel_label, RunOutcome};
use crate::image_pipeline::region::{partition, process_band, Region};

const CHANNELS: usize = 3;

/// Recolors the image with one scoped thread per horizontal band.
///
/// The destination is split into disjoint row slices up front and each worker
/// owns exactly one of them. Every worker is joined; if any of them panicked
/// or returned an error the run fails with [`RecolorError::WorkerFailed`]
/// instead of handing back a partially written image.
#[instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn run_parallel(source: &RgbImage, workers: usize) -> Result<RunOutcome> {
    run_parallel_with(source, workers, process_band)
}

pub(crate) fn run_parallel_with<F>(source: &RgbImage, workers: usize, worker: F) -> Result<RunOutcome>
where
    F: Fn(&RgbImage, &mut [u8], Region) -> Result<()> + Sync,
{
    let (width, height) = source.dimensions();
    let timer = Timer::start(parallel_label(workers));

    let partition = partition(width, height, workers)?;
    let mut dest = RgbImage::new(width, height);
    let bands = split_bands(&mut dest, width, partition.regions())?;

    let worker = &worker;
    let failed = thread::scope(|scope| {
        let handles: Vec<_> = bands
            .into_iter()
            .enumerate()
            .map(|(index, (region, band))| {
                thread::Builder::new()
                    .name(format!("recolor-{}", index))
                    .spawn_scoped(scope, move || {
                        let _span = tracing::debug_span!(
                            "worker",
                            index,
                            top = region.y,
                            rows = region.height
                        )
                        .entered();
                        worker(source, band, region)
                    })
            })
            .collect();

        // every worker is joined before any failure is reported
        let mut failed = Vec::new();
        for (index, handle) in handles.into_iter().enumerate() {
            match handle {
                Err(e) => {
                    error!(worker = index, "Failed to spawn worker: {}", e);
                    failed.push(index);
                }
                Ok(handle) => match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        error!(worker = index, "Worker returned an error: {}", e);
                        failed.push(index);
                    }
                    Err(payload) => {
                        error!(worker = index, "Worker panicked: {}", panic_message(payload.as_ref()));
                        failed.push(index);
                    }
                },
            }
        }
        failed
    });

    if !failed.is_empty() {
        return Err(RecolorError::WorkerFailed {
            failed,
            total: workers,
        });
    }

    let (label, duration) = timer.stop();
    debug!("{} finished in {:.3}ms", label, duration.as_secs_f64() * 1000.0);

    Ok(RunOutcome {
        label,
        image: dest,
        duration,
        workers,
    })
}

/// Cuts `dest` into one mutable row slice per full-width band, top to bottom.
fn split_bands<'a>(
    dest: &'a mut RgbImage,
    width: u32,
    regions: &[Region],
) -> Result<Vec<(Region, &'a mut [u8])>> {
    let stride = width as usize * CHANNELS;
    let mut rest: &'a mut [u8] = dest;
    let mut next_row = 0u32;
    let mut bands = Vec::with_capacity(regions.len());

    for region in regions {
        if region.x != 0 || region.width != width || region.y != next_row {
            return Err(RecolorError::InvalidPartition(format!(
                "{:?} is not the full-width band starting at row {}",
                region, next_row
            )));
        }
        let (band, tail) = std::mem::take(&mut rest).split_at_mut(region.height as usize * stride);
        bands.push((*region, band));
        rest = tail;
        next_row += region.height;
    }

    Ok(bands)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
