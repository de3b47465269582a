//! Filesystem-level tests for the case reorganizer.

use std::fs;

use dataset_reorg::{reorganize, ReorgConfig};
use tempfile::TempDir;

fn touch_png(dir: &std::path::Path, name: &str) {
    // Content is irrelevant to the reorganizer; it only copies bytes.
    fs::write(dir.join(name), b"png-bytes").unwrap();
}

#[test]
fn copies_lowest_sweeps_into_cases() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    // 3 timestamps x several sweeps, frames_per_case = 3 -> one case.
    for ts in ["202501081335", "202501081340", "202501081345"] {
        for sweep in [2, 0, 1] {
            touch_png(
                source.path(),
                &format!("RDR_SSP_FQC_{}_sweep_{}.png", ts, sweep),
            );
        }
    }
    touch_png(source.path(), "not_a_radar_file.png");

    let summary = reorganize(
        source.path(),
        target.path(),
        &ReorgConfig { frames_per_case: 3 },
    )
    .unwrap();

    assert_eq!(summary.files_scanned, 10);
    assert_eq!(summary.files_unrecognized, 1);
    assert_eq!(summary.timestamps, 3);
    assert_eq!(summary.cases_created, 1);
    assert_eq!(summary.files_copied, 3);
    assert_eq!(summary.files_dropped, 0);

    let case_dir = target.path().join("00000");
    for frame in 0..3 {
        assert!(
            case_dir.join(format!("00000-{:02}.png", frame)).is_file(),
            "frame {} missing",
            frame
        );
    }
}

#[test]
fn remainder_timestamps_are_dropped() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    for i in 0..7 {
        touch_png(
            source.path(),
            &format!("RDR_SSP_FQC_2025010813{:02}_sweep_0.png", i),
        );
    }

    let summary = reorganize(
        source.path(),
        target.path(),
        &ReorgConfig { frames_per_case: 3 },
    )
    .unwrap();

    assert_eq!(summary.cases_created, 2);
    assert_eq!(summary.files_copied, 6);
    assert_eq!(summary.files_dropped, 1);
    assert!(target.path().join("00001").is_dir());
    assert!(!target.path().join("00002").exists());
}

#[test]
fn scans_nested_directories() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let nested = source.path().join("batch1");
    fs::create_dir_all(&nested).unwrap();
    touch_png(&nested, "RDR_SSP_FQC_202501081335_sweep_0.png");
    touch_png(source.path(), "RDR_SSP_FQC_202501081340_sweep_0.png");

    let summary = reorganize(
        source.path(),
        target.path(),
        &ReorgConfig { frames_per_case: 2 },
    )
    .unwrap();
    assert_eq!(summary.files_copied, 2);
}

#[test]
fn copied_frames_preserve_image_bytes() {
    let source = test_utils::SweepPngDir::new();
    let target = TempDir::new().unwrap();

    let img = test_utils::gradient_image(16, 16, 3);
    let original = source.add_sweep_image("202501081335", 0, &img);
    source.add_sweep_image("202501081335", 1, &test_utils::gradient_image(16, 16, 9));
    source.add_sweep_image("202501081340", 0, &img);

    reorganize(
        source.path(),
        target.path(),
        &ReorgConfig { frames_per_case: 2 },
    )
    .unwrap();

    let copied = target.path().join("00000").join("00000-00.png");
    assert_eq!(
        fs::read(&copied).unwrap(),
        fs::read(&original).unwrap(),
        "copy must be byte-identical to the selected lowest sweep"
    );
}

#[test]
fn plan_without_copying_matches_the_real_run() {
    let source = test_utils::SweepPngDir::new();
    for i in 0..5 {
        source.add_sweep(&format!("2025010813{:02}", i), 0);
    }

    let config = ReorgConfig { frames_per_case: 2 };
    let plan = dataset_reorg::plan_cases(source.path(), &config);
    assert_eq!(plan.cases.len(), 2);
    assert_eq!(plan.dropped, 1);

    // Planning writes nothing.
    let target = TempDir::new().unwrap();
    assert_eq!(fs::read_dir(target.path()).unwrap().count(), 0);

    let summary = reorganize(source.path(), target.path(), &config).unwrap();
    assert_eq!(summary.cases_created, plan.cases.len());
    assert_eq!(summary.files_dropped, plan.dropped);
}

#[test]
fn empty_source_creates_no_cases() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let summary = reorganize(source.path(), target.path(), &ReorgConfig::default()).unwrap();
    assert_eq!(summary.cases_created, 0);
    assert_eq!(summary.files_scanned, 0);
}
