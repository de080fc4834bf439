//! Cross-module tests driving a dataset through both renderers.

use approx::assert_relative_eq;
use demviz_core::{colorize, ColorScale, ElevationDataset, HeightmapMesh};

/// The reference 2x2 scenario: one cell below the -9000 floor.
fn scenario_dataset() -> ElevationDataset {
    ElevationDataset::new(2, 2, vec![10.0, 20.0, -9999.0, 30.0]).unwrap()
}

#[test]
fn scenario_statistics() {
    let ds = scenario_dataset();
    let stats = ds.statistics();

    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 30.0);
    assert_eq!(stats.mean, 20.0);
    assert_relative_eq!(stats.std_dev, 8.164965809277, epsilon = 1e-9);
    assert_eq!(stats.nodata, Some(-9999.0));
}

#[test]
fn scenario_normalized_values() {
    let ds = scenario_dataset();
    let normalized: Vec<Option<f64>> = ds.samples().iter().map(|&v| ds.normalize(v)).collect();
    assert_eq!(normalized, vec![Some(0.0), Some(0.5), None, Some(1.0)]);
}

#[test]
fn scenario_colorized_alpha() {
    let ds = scenario_dataset();
    let buffer = colorize(&ds, ColorScale::Viridis);
    let alpha: Vec<u8> = buffer.data().iter().skip(3).step_by(4).copied().collect();
    assert_eq!(alpha, vec![255, 255, 0, 255]);
}

#[test]
fn scenario_mesh_heights_for_various_exaggerations() {
    let ds = scenario_dataset();
    for scale in [0.0, 0.1, 1.0, 2.5, 10.0] {
        let mesh = HeightmapMesh::build(&ds, scale);
        assert_eq!(mesh.height_at(0, 0), (10.0 * scale) as f32);
        assert_eq!(mesh.height_at(1, 0), (20.0 * scale) as f32);
        assert_eq!(mesh.height_at(0, 1), 0.0);
        assert_eq!(mesh.height_at(1, 1), (30.0 * scale) as f32);
    }
}

#[test]
fn same_buffer_serves_image_and_texture() {
    // The 2D view and the 3D texture are the same colorization; the
    // transform has no hidden state to diverge on.
    let ds = scenario_dataset();
    let image = colorize(&ds, ColorScale::Terrain);
    let texture = colorize(&ds, ColorScale::Terrain);
    assert_eq!(image, texture);
}

#[test]
fn flat_raster_renders_and_meshes() {
    let ds = ElevationDataset::new(4, 4, vec![5.0; 16]).unwrap();
    let stats = ds.statistics();
    assert_eq!(stats.min, 5.0);
    assert_eq!(stats.max, 5.0);
    assert_eq!(stats.std_dev, 0.0);

    for scale in ColorScale::ALL {
        let buffer = colorize(&ds, scale);
        assert_eq!(buffer.data().len(), 4 * 4 * 4);
    }

    let mesh = HeightmapMesh::build(&ds, 3.0);
    assert!(mesh.positions().iter().all(|p| p[2] == 15.0));
}

#[test]
fn dataset_replacement_is_wholesale() {
    // A mesh created for one dataset refuses heights from a differently
    // shaped one; the orchestration layer must rebuild instead.
    let ds = scenario_dataset();
    let mut mesh = HeightmapMesh::build(&ds, 1.0);

    let other = ElevationDataset::new(3, 3, vec![1.0; 9]).unwrap();
    assert!(mesh.update_heights(&other, 1.0).is_err());

    // Same-shape replacement works and only rewrites heights.
    let replacement = ElevationDataset::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    mesh.update_heights(&replacement, 1.0).unwrap();
    assert_eq!(mesh.height_at(0, 1), 3.0);
}
