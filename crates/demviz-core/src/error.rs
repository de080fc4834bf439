//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur when building datasets, scales, or meshes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Sample count does not match the declared raster dimensions.
    #[error("dimension mismatch: {width}x{height} raster cannot hold {samples} samples")]
    DimensionMismatch {
        /// Declared raster width in pixels.
        width: u32,
        /// Declared raster height in pixels.
        height: u32,
        /// Number of samples actually provided.
        samples: usize,
    },

    /// Every sample in the raster is nodata; statistics are undefined.
    #[error("dataset contains no valid elevation samples")]
    EmptyDataset,

    /// Color scale name is not in the registry.
    #[error("unknown color scale '{0}' (supported: viridis, plasma, inferno, magma, terrain, rainbow, gray)")]
    UnknownScale(String),

    /// Dataset dimensions do not match the mesh vertex grid.
    #[error("mesh grid is {expected_width}x{expected_height} but dataset is {actual_width}x{actual_height}")]
    GridMismatch {
        /// Mesh grid width (fixed at creation).
        expected_width: u32,
        /// Mesh grid height (fixed at creation).
        expected_height: u32,
        /// Width of the dataset passed to the update.
        actual_width: u32,
        /// Height of the dataset passed to the update.
        actual_height: u32,
    },
}
