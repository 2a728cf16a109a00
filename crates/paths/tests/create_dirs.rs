//! Integration tests: materialising a run layout on disk.

use chrono::NaiveDate;
use snowrun_paths::{PathError, RunConfig, build_paths};

fn rme_config(root: &std::path::Path) -> RunConfig {
    let start = NaiveDate::from_ymd_opt(1986, 2, 17)
        .unwrap()
        .and_hms_opt(1, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(1986, 2, 17)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    RunConfig::new(root, "rme_test", start, end)
}

#[test]
fn create_dirs_builds_whole_tree() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = build_paths(&rme_config(dir.path())).unwrap();

    paths.create_dirs().expect("create succeeds");

    assert!(paths.water_year().is_dir());
    assert!(paths.data().is_dir());
    assert!(paths.run().is_dir());
    assert!(paths.log_dir().is_dir());
}

#[test]
fn create_dirs_is_idempotent() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paths = build_paths(&rme_config(dir.path())).unwrap();

    paths.create_dirs().expect("first create succeeds");
    std::fs::write(paths.run().join("results.nc"), b"x").unwrap();
    paths.create_dirs().expect("second create succeeds");

    assert!(paths.run().join("results.nc").is_file());
}

#[test]
fn create_dirs_reports_blocking_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    // A regular file where the water-year folder should go.
    std::fs::write(dir.path().join("wy1986"), b"").unwrap();
    let paths = build_paths(&rme_config(dir.path())).unwrap();

    let err = paths.create_dirs().unwrap_err();
    assert!(matches!(err, PathError::CreateDir { .. }));
}
