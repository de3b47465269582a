//! Volume-to-raster-to-comparison pipeline tests.

use image_stats::{compare, load_normalized, TargetSize};
use sweep_raster::{rasterize, RasterConfig, REFLECTIVITY};
use tempfile::TempDir;
use test_utils::synthetic_volume;

#[test]
fn every_sweep_of_a_synthetic_volume_rasterizes() {
    let volume = synthetic_volume(4, 36, 16);
    let config = RasterConfig { image_size: 128 };

    for idx in 0..volume.sweep_count() {
        let sweep = volume.sweep(idx).expect("synthetic bounds are valid");
        let canvas = rasterize(&sweep, &config, &REFLECTIVITY)
            .unwrap()
            .expect("non-empty sweep");
        assert!(
            canvas.non_background_count() > 0,
            "sweep {} rendered nothing",
            idx
        );
    }
}

#[test]
fn saved_raster_compares_equal_to_itself() {
    let volume = synthetic_volume(1, 36, 16);
    let sweep = volume.sweep(0).unwrap();
    let canvas = rasterize(&sweep, &RasterConfig { image_size: 128 }, &REFLECTIVITY)
        .unwrap()
        .unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("RDR_SSP_FQC_202501081335_sweep_0.png");
    canvas.save_png(&path).unwrap();

    let target = TargetSize::default();
    let (a, original_size) = load_normalized(&path, target).unwrap();
    let (b, _) = load_normalized(&path, target).unwrap();
    assert_eq!(original_size, (128, 128));

    let report = compare(&a, &b).unwrap();
    assert_eq!(report.mae, 0.0);
    assert_eq!(report.significant_diff_ratio, 0.0);
}
