//! # demviz-viewer
//!
//! Orchestration for the DEM visualization pipeline: the session state
//! machine that takes a dropped GeoTIFF through decode, statistics, and
//! publication, and dispatches the two renderers (false-color raster and
//! heightmap mesh) over the published dataset.
//!
//! The dataset is immutable once published and shared by reference;
//! renderers never mutate it. Failed loads never publish anything.
//!
//! ## Example
//!
//! ```no_run
//! use demviz_viewer::ViewerSession;
//!
//! let mut session = ViewerSession::new();
//! session.load_file("dem_data/n47w122.tif")?;
//!
//! let image = session.colorize("terrain")?;
//! let mesh = session.build_or_update_mesh(2.0)?;
//! assert_eq!(image.width(), mesh.dimensions().0);
//! # Ok::<(), demviz_viewer::ViewerError>(())
//! ```

mod error;
mod export;
mod session;

pub use error::ViewerError;
pub use export::{write_obj, write_png};
pub use session::{SessionState, ViewerSession, MAX_VERTICAL_SCALE};

/// Result type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
