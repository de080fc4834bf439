//! GeoTIFF decoding into a flat elevation sample sequence.

use crate::error::RasterError;
use crate::Result;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

/// GDAL stores the nodata sentinel as an ASCII string in this private tag.
const GDAL_NODATA_TAG: u16 = 42113;

/// A decoded single-band elevation raster.
///
/// Output of the decode boundary: dimensions, row-major f64 samples, and
/// the nodata sentinel if (and only if) the file declared one. Statistics
/// and rendering live downstream in `demviz-core`.
#[derive(Debug, Clone)]
pub struct DecodedRaster {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Elevation samples in row-major order (top to bottom).
    pub samples: Vec<f64>,
    /// Nodata sentinel from the GDAL_NODATA tag, if the file carried one.
    /// Never inferred when the tag is absent.
    pub nodata: Option<f64>,
}

impl DecodedRaster {
    /// Decode a GeoTIFF from raw file bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(Decoder::new(Cursor::new(bytes))?)
    }

    /// Decode a GeoTIFF from a file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::decode(Decoder::new(file)?)
    }

    fn decode<R: Read + Seek>(decoder: Decoder<R>) -> Result<Self> {
        // Raise the decoder limits; survey-grade DEM tiles run to
        // hundreds of megabytes of f32 samples.
        let mut limits = Limits::default();
        limits.decoding_buffer_size = 1024 * 1024 * 1024; // 1 GB
        limits.intermediate_buffer_size = 1024 * 1024 * 1024; // 1 GB
        limits.ifd_value_size = 1024 * 1024 * 1024;
        let mut decoder = decoder.with_limits(limits);

        let (width, height) = decoder.dimensions()?;
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyRaster { width, height });
        }

        let samples = widen_to_f64(decoder.read_image()?);

        // Anything other than exactly one sample per pixel means extra
        // bands, which the viewer does not handle.
        if samples.len() != width as usize * height as usize {
            return Err(RasterError::UnsupportedLayout {
                width,
                height,
                samples: samples.len(),
            });
        }

        let nodata = read_nodata_tag(&mut decoder);

        Ok(Self {
            width,
            height,
            samples,
            nodata,
        })
    }
}

/// Widen whatever sample type the file used to f64.
fn widen_to_f64(result: DecodingResult) -> Vec<f64> {
    match result {
        DecodingResult::F64(data) => data,
        DecodingResult::F32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::I64(data) => data.into_iter().map(|v| v as f64).collect(),
        DecodingResult::U8(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U16(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U32(data) => data.into_iter().map(f64::from).collect(),
        DecodingResult::U64(data) => data.into_iter().map(|v| v as f64).collect(),
    }
}

/// Read the GDAL_NODATA sentinel if the file declares one.
fn read_nodata_tag<R: Read + Seek>(decoder: &mut Decoder<R>) -> Option<f64> {
    decoder
        .get_tag_ascii_string(Tag::Unknown(GDAL_NODATA_TAG))
        .ok()
        .and_then(|s| s.trim().trim_end_matches('\0').parse().ok())
}
