//! Heightmap mesh construction and re-exaggeration.
//!
//! The vertex grid topology (width x height vertices, two triangles per
//! cell) is fixed when the mesh is created; changing the vertical scale
//! only rewrites heights and normals, so re-exaggeration never reallocates
//! geometry.

use crate::dataset::ElevationDataset;
use crate::error::CoreError;

/// A regular vertex grid whose z channel encodes exaggerated elevation.
///
/// Vertices sit at integer grid coordinates `(x, y)` in row-major order
/// matching the raster; placement in a scene (centering, orientation) is
/// the 3D runtime's concern. Normals are unit length, recomputed after
/// every height pass by averaging adjacent face normals.
#[derive(Debug, Clone)]
pub struct HeightmapMesh {
    width: u32,
    height: u32,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl HeightmapMesh {
    /// Build a mesh for a dataset, applying the vertical exaggeration.
    pub fn build(dataset: &ElevationDataset, vertical_scale: f64) -> Self {
        let mut mesh = Self::with_grid(dataset.width(), dataset.height());
        mesh.apply_heights(dataset, vertical_scale);
        mesh
    }

    /// Allocate the fixed topology: positions on the grid plane, a
    /// triangulated index buffer, and placeholder normals.
    fn with_grid(width: u32, height: u32) -> Self {
        let vertex_count = width as usize * height as usize;

        let mut positions = Vec::with_capacity(vertex_count);
        for y in 0..height {
            for x in 0..width {
                positions.push([x as f32, y as f32, 0.0]);
            }
        }

        // Two counter-clockwise triangles per cell, +z facing.
        let mut indices = Vec::new();
        if width > 0 && height > 0 {
            for y in 0..height - 1 {
                for x in 0..width - 1 {
                    let a = y * width + x;
                    let b = a + 1;
                    let c = a + width;
                    let d = c + 1;
                    indices.extend_from_slice(&[a, b, c, b, d, c]);
                }
            }
        }

        Self {
            width,
            height,
            positions,
            normals: vec![[0.0, 0.0, 1.0]; vertex_count],
            indices,
        }
    }

    /// Rewrite vertex heights from a dataset and recompute normals.
    ///
    /// The dataset must have the same dimensions the mesh was created
    /// with; topology is never rebuilt here.
    pub fn update_heights(
        &mut self,
        dataset: &ElevationDataset,
        vertical_scale: f64,
    ) -> Result<(), CoreError> {
        if dataset.width() != self.width || dataset.height() != self.height {
            return Err(CoreError::GridMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: dataset.width(),
                actual_height: dataset.height(),
            });
        }
        self.apply_heights(dataset, vertical_scale);
        Ok(())
    }

    /// Set every vertex height, then recompute normals once.
    ///
    /// Nodata elevations become height 0 (not transparent as in the
    /// colorizer; the mesh has no alpha to drop a vertex into).
    fn apply_heights(&mut self, dataset: &ElevationDataset, vertical_scale: f64) {
        for (position, &value) in self.positions.iter_mut().zip(dataset.samples()) {
            let elevation = if dataset.is_nodata(value) { 0.0 } else { value };
            position[2] = (elevation * vertical_scale) as f32;
        }
        self.recompute_normals();
    }

    /// Average adjacent face normals into per-vertex normals.
    ///
    /// Face normals are accumulated unnormalized (area-weighted), then each
    /// vertex normal is normalized. Degenerate vertices fall back to +z.
    fn recompute_normals(&mut self) {
        for normal in &mut self.normals {
            *normal = [0.0, 0.0, 0.0];
        }

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let p1 = self.positions[i1];
            let p2 = self.positions[i2];

            let e1 = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
            let e2 = [p2[0] - p0[0], p2[1] - p0[1], p2[2] - p0[2]];
            let face = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];

            for &i in &[i0, i1, i2] {
                self.normals[i][0] += face[0];
                self.normals[i][1] += face[1];
                self.normals[i][2] += face[2];
            }
        }

        for normal in &mut self.normals {
            let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2])
                .sqrt();
            if len > 0.0 && len.is_finite() {
                normal[0] /= len;
                normal[1] /= len;
                normal[2] /= len;
            } else {
                *normal = [0.0, 0.0, 1.0];
            }
        }
    }

    /// Grid dimensions `(width, height)` in vertices.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Vertex positions in row-major grid order.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Unit vertex normals, parallel to `positions`.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Triangle index buffer, three indices per face.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex height at a grid coordinate.
    pub fn height_at(&self, x: u32, y: u32) -> f32 {
        self.positions[(y * self.width + x) as usize][2]
    }
}
