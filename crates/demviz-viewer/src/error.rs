//! Error types for the viewer layer.

use crate::session::SessionState;
use thiserror::Error;

/// Errors that can occur while orchestrating the viewer pipeline.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// File rejected at the drop boundary, before decode is attempted.
    #[error("unsupported file type '{0}' (expected .tif or .tiff)")]
    UnsupportedFileType(String),

    /// Decoding the raster failed.
    #[error("decode failed: {0}")]
    Decode(#[from] demviz_raster::RasterError),

    /// Dataset construction or a renderer configuration failed.
    #[error(transparent)]
    Core(#[from] demviz_core::CoreError),

    /// Operation invoked in a state that does not permit it.
    #[error("'{operation}' is not valid in the {state:?} state")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The session state at the time.
        state: SessionState,
    },

    /// Writing an exported image failed.
    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error writing an export file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the statistics report failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
