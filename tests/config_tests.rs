mod common;

use attendlog::config::Config;
use attendlog::core::storage::{create_unique, discard, stage_upload, write_unique};
use std::io::Write;
use attendlog::errors::AppError;
use common::Workspace;
use std::fs;

#[test]
fn test_missing_config_gives_defaults() {
    let ws = Workspace::new();
    let cfg = Config::load(Some(&ws.config_file())).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.log_date_column, "Log Date");
    assert_eq!(cfg.output_stem, "Attendance");
    assert!(cfg.identifier_column.is_none());
}

#[test]
fn test_save_and_reload() {
    let ws = Workspace::new();
    let cfg = Config {
        upload_dir: ws.uploads().to_string_lossy().to_string(),
        output_dir: ws.outputs().to_string_lossy().to_string(),
        identifier_column: Some("Device id".into()),
        ..Config::default()
    };

    let path = ws.path().join("nested").join("attendlog.conf");
    cfg.save(&path).unwrap();

    assert_eq!(Config::load(Some(&path)).unwrap(), cfg);
}

#[test]
fn test_partial_config_uses_defaults() {
    let ws = Workspace::new();
    let path = ws.write("partial.conf", "log_date_column: Timestamp\n");

    let cfg = Config::load(Some(&path)).unwrap();
    assert_eq!(cfg.log_date_column, "Timestamp");
    assert_eq!(cfg.output_stem, "Attendance");
}

#[test]
fn test_invalid_config_is_reported() {
    let ws = Workspace::new();
    let path = ws.write("bad.conf", "log_date_column: [unclosed\n");

    assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));
}

#[test]
fn test_ensure_dirs_creates_both() {
    let ws = Workspace::new();
    let cfg = Config {
        upload_dir: ws.uploads().to_string_lossy().to_string(),
        output_dir: ws.outputs().to_string_lossy().to_string(),
        ..Config::default()
    };

    cfg.ensure_dirs().unwrap();
    assert!(ws.uploads().is_dir());
    assert!(ws.outputs().is_dir());
}

#[test]
fn test_unique_files_are_distinct() {
    let ws = Workspace::new();

    let paths: Vec<_> = (0..5)
        .map(|_| create_unique(&ws.outputs(), "Attendance", "csv").unwrap().0)
        .collect();

    let mut dedup = paths.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), 5);
}

#[test]
fn test_stage_upload_copies_and_discard_removes() {
    let ws = Workspace::new();
    let src = ws.write("punches.CSV", "Device id,Log Date\n");

    let staged = stage_upload(&src, &ws.uploads()).unwrap();

    assert!(staged.starts_with(ws.uploads()));
    assert_eq!(staged.extension().unwrap(), "csv");
    assert_eq!(fs::read_to_string(&staged).unwrap(), "Device id,Log Date\n");

    discard(&staged);
    assert!(!staged.exists());
    assert!(src.exists());
}

#[test]
fn test_write_unique_keeps_complete_file() {
    let ws = Workspace::new();

    let path = write_unique(&ws.outputs(), "Attendance", "html", |_, mut file| {
        file.write_all(b"<table></table>")?;
        Ok(())
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "<table></table>");
}

#[test]
fn test_write_unique_removes_file_on_failure() {
    let ws = Workspace::new();

    let err = write_unique(&ws.outputs(), "Attendance", "html", |path, mut file| {
        assert!(path.exists());
        file.write_all(b"<table>")?;
        Err(AppError::Parse("render failed".into()))
    })
    .unwrap_err();

    assert!(matches!(err, AppError::Parse(_)));
    assert!(Workspace::files_in(&ws.outputs()).is_empty());
}
