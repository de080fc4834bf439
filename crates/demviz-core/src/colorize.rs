//! False-color rasterization of an elevation dataset.

use crate::dataset::ElevationDataset;
use crate::scale::ColorScale;

/// A width x height RGBA byte buffer, row-major, top-to-bottom.
///
/// Transient output of [`colorize`]; rebuilt on every request. The same
/// buffer serves as the 2D display image and the 3D terrain's diffuse
/// texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, yielding the raw RGBA bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// Produce a false-color RGBA buffer from a dataset and a color scale.
///
/// Nodata cells become fully transparent black; valid cells get the scale
/// color at the normalized elevation with alpha 255. A flat raster
/// normalizes every sample to NaN, which the scale clamps to a defined
/// color; the output is always `width * height * 4` bytes and is
/// deterministic for a given dataset and scale.
pub fn colorize(dataset: &ElevationDataset, scale: ColorScale) -> PixelBuffer {
    let width = dataset.width();
    let height = dataset.height();
    let mut data = vec![0u8; width as usize * height as usize * 4];

    for (i, &value) in dataset.samples().iter().enumerate() {
        // Nodata pixels stay at the zeroed default: transparent black.
        if let Some(t) = dataset.normalize(value) {
            let [r, g, b] = scale.eval(t);
            let offset = i * 4;
            data[offset] = r;
            data[offset + 1] = g;
            data[offset + 2] = b;
            data[offset + 3] = 255;
        }
    }

    PixelBuffer {
        width,
        height,
        data,
    }
}
