//! The viewer session: dataset lifecycle and renderer dispatch.
//!
//! State machine: `Empty -> Loading -> Ready` on a successful load,
//! `Loading -> Error` on failure, `Error -> Empty` once the failure has
//! been surfaced. Recoloring and re-exaggeration run synchronously from
//! `Ready` and return there; neither renderer may be invoked in any other
//! state.

use crate::error::ViewerError;
use demviz_core::{colorize, ColorScale, ElevationDataset, HeightmapMesh, PixelBuffer};
use demviz_raster::DecodedRaster;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Upper bound for the vertical exaggeration factor, matching the UI
/// slider range.
pub const MAX_VERTICAL_SCALE: f64 = 10.0;

/// Lifecycle state of a viewer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No dataset; nothing to render.
    #[default]
    Empty,
    /// A load is in flight; new loads are refused.
    Loading,
    /// A dataset is published; both renderers may read it.
    Ready,
    /// The last load failed; the message is retained until acknowledged.
    Error,
}

/// Owns the published dataset and the cached heightmap mesh.
///
/// The dataset is published behind an `Arc` and never mutated, so the 2D
/// and 3D renderers can read it without coordination. A new load replaces
/// it wholesale and invalidates the mesh. The mesh itself is created once
/// per dataset; later exaggeration changes only rewrite heights and
/// normals.
#[derive(Debug, Default)]
pub struct ViewerSession {
    state: SessionState,
    dataset: Option<Arc<ElevationDataset>>,
    mesh: Option<HeightmapMesh>,
    last_error: Option<String>,
}

impl ViewerSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The published dataset, if any.
    pub fn dataset(&self) -> Option<&Arc<ElevationDataset>> {
        self.dataset.as_ref()
    }

    /// Message from the last failed load, if the session is in `Error`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Load a GeoTIFF from disk and publish it as the current dataset.
    ///
    /// The extension is checked before any decode work; a rejected file
    /// leaves the session (and any published dataset) untouched.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<ElevationDataset>, ViewerError> {
        let path = path.as_ref();
        self.check_extension(path)?;
        self.begin_load("load_file")?;
        let result = DecodedRaster::from_file(path).map_err(ViewerError::from);
        self.finish_load(result)
    }

    /// Load a GeoTIFF from raw bytes, using `name` for the extension gate.
    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<Arc<ElevationDataset>, ViewerError> {
        self.check_extension(Path::new(name))?;
        self.begin_load("load_bytes")?;
        let result = DecodedRaster::from_bytes(bytes).map_err(ViewerError::from);
        self.finish_load(result)
    }

    /// Publish an already-decoded raster (the external decoder boundary).
    pub fn load_raster(&mut self, raster: DecodedRaster) -> Result<Arc<ElevationDataset>, ViewerError> {
        self.begin_load("load_raster")?;
        self.finish_load(Ok(raster))
    }

    /// Produce a false-color RGBA buffer for the published dataset.
    ///
    /// The scale name is validated against the registry first; an unknown
    /// name is a local configuration error and leaves the dataset intact.
    pub fn colorize(&self, scale_name: &str) -> Result<PixelBuffer, ViewerError> {
        let dataset = self.ready_dataset("colorize")?;
        let scale = ColorScale::from_name(scale_name)?;
        debug!(scale = %scale, "colorizing dataset");
        Ok(colorize(dataset, scale))
    }

    /// Build the heightmap mesh, or rewrite its heights if it exists.
    ///
    /// The factor is clamped to `0.0..=MAX_VERTICAL_SCALE`. Topology is
    /// allocated on the first call per dataset; afterwards only heights
    /// and normals change.
    pub fn build_or_update_mesh(&mut self, vertical_scale: f64) -> Result<&HeightmapMesh, ViewerError> {
        let dataset = Arc::clone(self.ready_dataset("build_or_update_mesh")?);

        let clamped = vertical_scale.clamp(0.0, MAX_VERTICAL_SCALE);
        if clamped != vertical_scale {
            warn!(
                requested = vertical_scale,
                clamped, "vertical exaggeration clamped to the supported range"
            );
        }

        let created = self.mesh.is_none();
        let mesh = self
            .mesh
            .get_or_insert_with(|| HeightmapMesh::build(&dataset, clamped));
        if created {
            debug!(vertical_scale = clamped, "built heightmap mesh");
        } else {
            debug!(vertical_scale = clamped, "re-exaggerating existing mesh");
            mesh.update_heights(&dataset, clamped)?;
        }
        Ok(mesh)
    }

    /// The cached mesh, if one has been built for the current dataset.
    pub fn mesh(&self) -> Option<&HeightmapMesh> {
        self.mesh.as_ref()
    }

    /// Return from `Error` to `Empty` once the failure has been surfaced.
    pub fn acknowledge_error(&mut self) {
        if self.state == SessionState::Error {
            self.state = SessionState::Empty;
            self.last_error = None;
        }
    }

    /// Reject anything that is not a `.tif`/`.tiff` at the drop boundary.
    fn check_extension(&self, path: &Path) -> Result<(), ViewerError> {
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("tif") || e.eq_ignore_ascii_case("tiff"));
        if supported {
            Ok(())
        } else {
            Err(ViewerError::UnsupportedFileType(
                path.display().to_string(),
            ))
        }
    }

    /// Enter `Loading`, refusing reentrant loads.
    fn begin_load(&mut self, operation: &'static str) -> Result<(), ViewerError> {
        if self.state == SessionState::Loading {
            return Err(ViewerError::InvalidState {
                operation,
                state: self.state,
            });
        }
        self.state = SessionState::Loading;
        Ok(())
    }

    /// Publish the dataset or record the failure, leaving `Loading` either
    /// way. No partial dataset ever survives a failure.
    fn finish_load(
        &mut self,
        result: Result<DecodedRaster, ViewerError>,
    ) -> Result<Arc<ElevationDataset>, ViewerError> {
        let outcome = result.and_then(build_dataset);
        match outcome {
            Ok(dataset) => {
                let stats = dataset.statistics();
                info!(
                    width = dataset.width(),
                    height = dataset.height(),
                    min = stats.min,
                    max = stats.max,
                    mean = stats.mean,
                    std_dev = stats.std_dev,
                    "dataset published"
                );
                self.dataset = Some(Arc::clone(&dataset));
                self.mesh = None;
                self.last_error = None;
                self.state = SessionState::Ready;
                Ok(dataset)
            }
            Err(err) => {
                warn!(error = %err, "load failed; discarding dataset");
                self.dataset = None;
                self.mesh = None;
                self.last_error = Some(err.to_string());
                self.state = SessionState::Error;
                Err(err)
            }
        }
    }

    /// The dataset, or `InvalidState` when not `Ready`.
    fn ready_dataset(&self, operation: &'static str) -> Result<&Arc<ElevationDataset>, ViewerError> {
        if self.state != SessionState::Ready {
            return Err(ViewerError::InvalidState {
                operation,
                state: self.state,
            });
        }
        self.dataset.as_ref().ok_or(ViewerError::InvalidState {
            operation,
            state: self.state,
        })
    }
}

/// Turn a decoded raster into a publishable dataset.
///
/// When the file declared an explicit nodata sentinel, matching samples are
/// masked to NaN here at the boundary; the core statistics scan never reads
/// metadata itself.
fn build_dataset(raster: DecodedRaster) -> Result<Arc<ElevationDataset>, ViewerError> {
    let DecodedRaster {
        width,
        height,
        mut samples,
        nodata,
    } = raster;

    if let Some(sentinel) = nodata {
        let mut masked = 0usize;
        for sample in &mut samples {
            if *sample == sentinel {
                *sample = f64::NAN;
                masked += 1;
            }
        }
        if masked > 0 {
            debug!(sentinel, masked, "masked declared nodata samples");
        }
    }

    Ok(Arc::new(ElevationDataset::new(width, height, samples)?))
}
