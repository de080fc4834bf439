//! The elevation dataset: raw samples plus computed statistics.

use crate::error::CoreError;
use crate::stats::{is_invalid_sample, ElevationStatistics};

/// A decoded single-band elevation raster with its statistics.
///
/// This is the shared model consumed by both the colorizer and the mesh
/// builder. It is immutable after construction: a new file produces a new
/// dataset, never a partial mutation of an existing one, so concurrent
/// readers need no coordination.
#[derive(Debug, Clone)]
pub struct ElevationDataset {
    /// Raster width in pixels.
    width: u32,
    /// Raster height in pixels.
    height: u32,
    /// Elevation samples in row-major order (top to bottom).
    samples: Vec<f64>,
    /// Statistics computed once over the samples.
    stats: ElevationStatistics,
}

impl ElevationDataset {
    /// Build a dataset from decoded raster samples.
    ///
    /// Statistics are computed here, once. Fails if the sample count does
    /// not match `width * height`, or if no sample is valid (statistics
    /// would be undefined and the dataset must not be published).
    pub fn new(width: u32, height: u32, samples: Vec<f64>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(CoreError::DimensionMismatch {
                width,
                height,
                samples: samples.len(),
            });
        }

        let stats = ElevationStatistics::compute(&samples);
        if stats.valid_count == 0 {
            return Err(CoreError::EmptyDataset);
        }

        Ok(Self {
            width,
            height,
            samples,
            stats,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Computed statistics.
    pub fn statistics(&self) -> &ElevationStatistics {
        &self.stats
    }

    /// Elevation at a pixel coordinate. `x` must be < width, `y` < height.
    pub fn sample(&self, x: u32, y: u32) -> f64 {
        self.samples[(y * self.width + x) as usize]
    }

    /// Whether a sample value denotes a missing measurement for this
    /// dataset: NaN, below the global invalid floor, or equal to the
    /// recorded nodata marker.
    pub fn is_nodata(&self, value: f64) -> bool {
        is_invalid_sample(value) || self.stats.nodata.is_some_and(|nd| value == nd)
    }

    /// Rescale an elevation linearly to [0, 1] using the dataset min/max.
    ///
    /// Returns `None` for nodata values. For a flat raster (`max == min`)
    /// the division yields NaN, which the color scales clamp downstream;
    /// this mirrors the display behavior rather than failing.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if self.is_nodata(value) {
            return None;
        }
        Some((value - self.stats.min) / (self.stats.max - self.stats.min))
    }
}
