use tracing::debug;

use crate::image_pipeline::common::error::{RecolorError, Result};
use crate::image_pipeline::region::types::Region;

/// One region per worker, checked to cover the image exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    width: u32,
    height: u32,
    regions: Vec<Region>,
}

/// Splits a `width`x`height` image into `workers` horizontal bands.
///
/// Band `i` covers rows `[i * height / workers, (i + 1) * height / workers)`
/// across the full width, so band heights differ by at most one row. With more
/// workers than rows some bands are empty; they are kept so that the result
/// always holds exactly `workers` regions.
pub fn partition(width: u32, height: u32, workers: usize) -> Result<Partition> {
    if workers == 0 {
        return Err(RecolorError::InvalidWorkerCount(workers));
    }

    let n = workers as u64;
    let h = height as u64;
    let regions = (0..n)
        .map(|i| {
            let top = (i * h / n) as u32;
            let bottom = ((i + 1) * h / n) as u32;
            Region::rows(width, top, bottom)
        })
        .collect();

    let partition = Partition::from_regions(width, height, regions)?;
    debug!(
        "Partitioned {}x{} into {} bands: {:?}",
        width,
        height,
        workers,
        partition.regions.iter().map(|r| r.height).collect::<Vec<_>>()
    );
    Ok(partition)
}

impl Partition {
    /// Wraps an arbitrary region list, rejecting it unless it tiles the image.
    pub fn from_regions(width: u32, height: u32, regions: Vec<Region>) -> Result<Self> {
        let partition = Self { width, height, regions };
        partition.validate()?;
        Ok(partition)
    }

    /// In bounds, pairwise disjoint, and the areas add up to the image.
    /// Together those mean every pixel is covered exactly once.
    pub fn validate(&self) -> Result<()> {
        for (i, region) in self.regions.iter().enumerate() {
            if !region.fits_within(self.width, self.height) {
                return Err(RecolorError::InvalidPartition(format!(
                    "region {} {:?} exceeds {}x{}",
                    i, region, self.width, self.height
                )));
            }
        }

        for (i, a) in self.regions.iter().enumerate() {
            for (j, b) in self.regions.iter().enumerate().skip(i + 1) {
                if a.intersects(b) {
                    return Err(RecolorError::InvalidPartition(format!(
                        "regions {} and {} overlap",
                        i, j
                    )));
                }
            }
        }

        let covered: u64 = self.regions.iter().map(Region::area).sum();
        let expected = self.width as u64 * self.height as u64;
        if covered != expected {
            return Err(RecolorError::InvalidPartition(format!(
                "regions cover {} of {} pixels",
                covered, expected
            )));
        }

        Ok(())
    }

    /// How many regions cover each pixel, row-major.
    pub fn coverage_counts(&self) -> Vec<u32> {
        let mut counts = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let covering = self.regions.iter().filter(|r| r.contains(x, y)).count();
                counts.push(covering as u32);
            }
        }
        counts
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
