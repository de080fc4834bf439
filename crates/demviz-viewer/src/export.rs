//! File exporters for the colorized raster and the heightmap mesh.

use crate::error::ViewerError;
use demviz_core::{HeightmapMesh, PixelBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write a colorized pixel buffer as an RGBA PNG.
pub fn write_png<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), ViewerError> {
    let path = path.as_ref();
    let image = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
        .ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
    image.save(path)?;
    info!(path = %path.display(), width = buffer.width(), height = buffer.height(), "wrote PNG");
    Ok(())
}

/// Write a heightmap mesh as a Wavefront OBJ with vertex normals.
pub fn write_obj<P: AsRef<Path>>(mesh: &HeightmapMesh, path: P) -> Result<(), ViewerError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "# demviz heightmap mesh")?;
    for p in mesh.positions() {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for n in mesh.normals() {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    // OBJ indices are 1-based; each vertex reuses its own normal.
    for tri in mesh.indices().chunks_exact(3) {
        writeln!(
            out,
            "f {a}//{a} {b}//{b} {c}//{c}",
            a = tri[0] + 1,
            b = tri[1] + 1,
            c = tri[2] + 1
        )?;
    }
    out.flush()?;

    let (width, height) = mesh.dimensions();
    info!(path = %path.display(), width, height, faces = mesh.indices().len() / 3, "wrote OBJ");
    Ok(())
}
