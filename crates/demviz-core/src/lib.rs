//! # demviz-core
//!
//! The raster-to-visualization pipeline for single-band elevation data:
//! statistics, normalization, color-scale mapping, false-color
//! rasterization, and heightmap mesh construction.
//!
//! ## Overview
//!
//! An [`ElevationDataset`] is built once from decoded raster samples and is
//! immutable afterwards; it is the single source of truth shared by both
//! renderers. [`colorize`] turns it into an RGBA [`PixelBuffer`] (2D image
//! and 3D texture alike) using one of the seven registered [`ColorScale`]s,
//! and [`HeightmapMesh`] turns it into a vertex grid whose heights carry
//! the vertically exaggerated elevation.
//!
//! Nodata handling is deliberately asymmetric: the colorizer makes nodata
//! pixels transparent, while the mesh builder flattens them to height zero.
//!
//! ## Example
//!
//! ```
//! use demviz_core::{colorize, ColorScale, ElevationDataset, HeightmapMesh};
//!
//! let dataset = ElevationDataset::new(2, 2, vec![10.0, 20.0, -9999.0, 30.0])?;
//! assert_eq!(dataset.statistics().mean, 20.0);
//!
//! let image = colorize(&dataset, ColorScale::from_name("viridis")?);
//! assert_eq!(image.data().len(), 2 * 2 * 4);
//!
//! let mesh = HeightmapMesh::build(&dataset, 2.0);
//! assert_eq!(mesh.height_at(1, 1), 60.0);
//! # Ok::<(), demviz_core::CoreError>(())
//! ```

mod colorize;
mod dataset;
mod error;
mod mesh;
mod scale;
mod stats;

pub use colorize::{colorize, PixelBuffer};
pub use dataset::ElevationDataset;
pub use error::CoreError;
pub use mesh::HeightmapMesh;
pub use scale::ColorScale;
pub use stats::{is_invalid_sample, ElevationStatistics, INVALID_ELEVATION_FLOOR};

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
