//! Elevation statistics over a raw sample sequence.
//!
//! Works on a borrowed `&[f64]` to avoid copies. Uses the classic two-pass
//! algorithm: one pass for min/max/mean, a second for the population
//! variance.

/// Elevations below this are treated as missing regardless of any recorded
/// sentinel. Common DEM formats use large negative fill values (-9999,
/// -32768) for cells with no measurement.
pub const INVALID_ELEVATION_FLOOR: f64 = -9000.0;

/// Whether a raw sample denotes a missing measurement.
///
/// A sample is invalid iff it is NaN or below [`INVALID_ELEVATION_FLOOR`].
#[inline]
pub fn is_invalid_sample(value: f64) -> bool {
    value.is_nan() || value < INVALID_ELEVATION_FLOOR
}

/// Summary statistics of an elevation sample sequence.
///
/// `min`, `max`, `mean`, and `std_dev` are computed over valid samples only.
/// With zero valid samples, `min`/`max` stay at their infinities and
/// `mean`/`std_dev` are the NaN results of dividing by zero; `compute` is
/// total and never fails. Callers that need an explicit empty-dataset error
/// should check `valid_count` (see `ElevationDataset::new`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElevationStatistics {
    /// Minimum valid elevation.
    pub min: f64,
    /// Maximum valid elevation.
    pub max: f64,
    /// Arithmetic mean of valid elevations.
    pub mean: f64,
    /// Population standard deviation of valid elevations.
    pub std_dev: f64,
    /// First invalid sample encountered in iteration order, if any.
    ///
    /// This is a scan artifact, not a value read from raster metadata: any
    /// sample below the floor counts as invalid even when it differs from
    /// the recorded marker.
    pub nodata: Option<f64>,
    /// Number of valid samples.
    pub valid_count: usize,
}

impl ElevationStatistics {
    /// Compute statistics from a raw sample sequence.
    pub fn compute(samples: &[f64]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut valid_count = 0usize;
        let mut nodata = None;

        for &value in samples {
            if is_invalid_sample(value) {
                if nodata.is_none() {
                    nodata = Some(value);
                }
                continue;
            }
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
            sum += value;
            valid_count += 1;
        }

        let mean = sum / valid_count as f64;

        let mut sum_squared_diff = 0.0;
        for &value in samples {
            if is_invalid_sample(value) {
                continue;
            }
            sum_squared_diff += (value - mean) * (value - mean);
        }
        let std_dev = (sum_squared_diff / valid_count as f64).sqrt();

        Self {
            min,
            max,
            mean,
            std_dev,
            nodata,
            valid_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_statistics() {
        let stats = ElevationStatistics::compute(&[10.0, 20.0, -9999.0, 30.0]);

        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.mean, 20.0);
        // Population std dev: sqrt((100 + 0 + 100) / 3)
        assert_relative_eq!(stats.std_dev, (200.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_eq!(stats.nodata, Some(-9999.0));
        assert_eq!(stats.valid_count, 3);
    }

    #[test]
    fn test_mean_between_min_and_max() {
        let stats = ElevationStatistics::compute(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        assert!(stats.min <= stats.mean);
        assert!(stats.mean <= stats.max);
        assert!(stats.std_dev >= 0.0);
        assert_eq!(stats.nodata, None);
    }

    #[test]
    fn test_flat_sequence() {
        let stats = ElevationStatistics::compute(&[5.0; 16]);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.valid_count, 16);
    }

    #[test]
    fn test_all_invalid_propagates_nan() {
        let stats = ElevationStatistics::compute(&[f64::NAN, -32768.0]);
        assert_eq!(stats.valid_count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.std_dev.is_nan());
        assert_eq!(stats.min, f64::INFINITY);
        assert_eq!(stats.max, f64::NEG_INFINITY);
        // First invalid sample wins, even a NaN.
        assert!(stats.nodata.is_some_and(|v| v.is_nan()));
    }

    #[test]
    fn test_nodata_records_first_invalid_only() {
        let stats = ElevationStatistics::compute(&[-9999.0, 1.0, -12345.0]);
        assert_eq!(stats.nodata, Some(-9999.0));
        assert_eq!(stats.valid_count, 1);
    }

    #[test]
    fn test_floor_is_exclusive() {
        // Exactly -9000 is a legal (if unusual) elevation.
        let stats = ElevationStatistics::compute(&[-9000.0, 0.0]);
        assert_eq!(stats.nodata, None);
        assert_eq!(stats.min, -9000.0);
        assert_eq!(stats.valid_count, 2);
    }
}
