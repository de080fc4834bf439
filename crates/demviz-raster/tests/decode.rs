//! Decoder tests against GeoTIFF bytes synthesized with the tiff encoder.

use demviz_raster::DecodedRaster;
use std::io::Cursor;
use tiff::encoder::{colortype, TiffEncoder};

/// Encode a single-band f32 grayscale TIFF in memory.
fn encode_gray_f32(width: u32, height: u32, samples: &[f32]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut buf).expect("create encoder");
        encoder
            .write_image::<colortype::Gray32Float>(width, height, samples)
            .expect("write image");
    }
    buf.into_inner()
}

#[test]
fn test_decode_f32_roundtrip() {
    let samples = vec![10.0_f32, 20.0, -9999.0, 30.0, 40.0, 50.0];
    let bytes = encode_gray_f32(3, 2, &samples);

    let raster = DecodedRaster::from_bytes(&bytes).expect("decode");

    assert_eq!(raster.width, 3);
    assert_eq!(raster.height, 2);
    assert_eq!(raster.samples.len(), 6);
    for (decoded, original) in raster.samples.iter().zip(&samples) {
        assert_eq!(*decoded, f64::from(*original));
    }
}

#[test]
fn test_no_nodata_tag_means_none() {
    // The encoder writes no GDAL_NODATA tag, so the sentinel must stay
    // absent rather than defaulting to a conventional value.
    let bytes = encode_gray_f32(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let raster = DecodedRaster::from_bytes(&bytes).expect("decode");
    assert_eq!(raster.nodata, None);
}

#[test]
fn test_decode_u16_widens_to_f64() {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut buf).expect("create encoder");
        encoder
            .write_image::<colortype::Gray16>(2, 2, &[100_u16, 200, 300, 400])
            .expect("write image");
    }

    let raster = DecodedRaster::from_bytes(&buf.into_inner()).expect("decode");
    assert_eq!(raster.samples, vec![100.0, 200.0, 300.0, 400.0]);
}

#[test]
fn test_truncated_file_fails() {
    let bytes = encode_gray_f32(16, 16, &[0.5; 256]);
    let truncated = &bytes[..bytes.len() / 2];
    assert!(DecodedRaster::from_bytes(truncated).is_err());
}
