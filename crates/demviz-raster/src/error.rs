//! Error types for the raster decode boundary.

use thiserror::Error;

/// Errors that can occur while decoding an elevation raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoding error (malformed or unsupported file).
    #[error("TIFF decode error: {0}")]
    TiffDecode(#[from] tiff::TiffError),

    /// The raster is not a single-band grid the viewer can use.
    #[error("unsupported raster layout: {width}x{height} image decoded to {samples} samples (expected one band)")]
    UnsupportedLayout {
        /// Decoded raster width in pixels.
        width: u32,
        /// Decoded raster height in pixels.
        height: u32,
        /// Number of samples the decoder produced.
        samples: usize,
    },

    /// The raster has zero pixels.
    #[error("raster has no pixels ({width}x{height})")]
    EmptyRaster {
        /// Decoded raster width in pixels.
        width: u32,
        /// Decoded raster height in pixels.
        height: u32,
    },
}
