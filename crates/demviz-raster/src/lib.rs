//! # demviz-raster
//!
//! The GeoTIFF decode boundary for the DEM viewer: raw file bytes in,
//! `(width, height, f64 samples, optional nodata sentinel)` out.
//!
//! Only single-band rasters are supported; every TIFF sample type is
//! widened to f64 on the way out so the rest of the pipeline works with a
//! single numeric representation. The GDAL_NODATA tag is surfaced when
//! present but no sentinel is ever invented for files without one.
//!
//! ## Example
//!
//! ```no_run
//! use demviz_raster::DecodedRaster;
//!
//! let raster = DecodedRaster::from_file("dem_data/n47w122.tif")?;
//! println!("{}x{}, {} samples", raster.width, raster.height, raster.samples.len());
//! # Ok::<(), demviz_raster::RasterError>(())
//! ```

mod decode;
mod error;

pub use decode::DecodedRaster;
pub use error::RasterError;

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
