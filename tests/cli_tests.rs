mod common;

use common::{TWO_DAY_CSV, Workspace, atl};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_convert_to_explicit_output() {
    let ws = Workspace::new();
    let input = ws.write("log.txt", "A\tB\tC\n1\t2\t3\n");
    let out = ws.path().join("converted.csv");

    atl(&ws)
        .args(["convert"])
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "A,B,C\r\n1,2,3\r\n");
}

#[test]
fn test_convert_into_output_dir_prints_path() {
    let ws = Workspace::new();
    let input = ws.write("log.txt", "Device id\tLog Date\n1\t2024-01-01 09:00\n");

    let output = atl(&ws).arg("convert").arg(&input).output().unwrap();
    assert!(output.status.success());

    let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let files = Workspace::files_in(&ws.outputs());
    assert_eq!(files.len(), 1);
    assert_eq!(printed, files[0].display().to_string());
    assert_eq!(
        fs::read_to_string(&files[0]).unwrap(),
        "Device id,Log Date\r\n1,2024-01-01 09:00\r\n"
    );
}

#[test]
fn test_convert_empty_file_fails_cleanly() {
    let ws = Workspace::new();
    let input = ws.write("empty.txt", "");

    atl(&ws)
        .arg("convert")
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Empty input"));
}

#[test]
fn test_convert_does_not_overwrite_without_force() {
    let ws = Workspace::new();
    let input = ws.write("log.txt", "A\tB\n1\t2\n");
    let out = ws.write("existing.csv", "keep me");

    atl(&ws)
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    atl(&ws)
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "A,B\r\n1,2\r\n");
}

#[test]
fn test_summary_table_on_stdout() {
    let ws = Workspace::new();
    let input = ws.write("att.csv", TWO_DAY_CSV);

    atl(&ws)
        .arg("summary")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hours Worked (HH:MM)"))
        .stdout(predicate::str::contains("8 hours 30 minute"))
        .stdout(predicate::str::contains("7 hours 15 minute"))
        .stdout(predicate::str::contains("Total Hours Worked: 15 hours 45 minute"));
}

#[test]
fn test_summary_json_to_file() {
    let ws = Workspace::new();
    let input = ws.write("att.csv", TWO_DAY_CSV);
    let out = ws.path().join("summary.json");

    atl(&ws)
        .args(["summary", "--format", "json", "--output"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["total_hours_formatted"], "15 hours 45 minute");
}

#[test]
fn test_summary_xlsx_goes_to_output_dir() {
    let ws = Workspace::new();
    let input = ws.write("att.csv", TWO_DAY_CSV);

    atl(&ws)
        .args(["summary", "--format", "xlsx"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(".xlsx"));

    let files = Workspace::files_in(&ws.outputs());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().unwrap(), "xlsx");
}

#[test]
fn test_summary_missing_log_date_column() {
    let ws = Workspace::new();
    let input = ws.write("att.csv", "Device id,When\ndev1,2024-01-01 09:00\n");

    atl(&ws)
        .arg("summary")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("Log Date"));
}

#[test]
fn test_summary_uses_configured_column() {
    let ws = Workspace::new();
    fs::write(ws.config_file(), "log_date_column: When\n").unwrap();
    let input = ws.write("att.csv", "Device id,When\ndev1,2024-01-01 09:00\ndev1,2024-01-01 10:30\n");

    atl(&ws)
        .arg("summary")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 hours 30 minute"));
}

#[test]
fn test_process_csv_writes_html_and_cleans_upload() {
    let ws = Workspace::new();
    let input = ws.write("att.csv", TWO_DAY_CSV);

    atl(&ws)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Hours Worked: 15 hours 45 minute"));

    let outputs = Workspace::files_in(&ws.outputs());
    assert_eq!(outputs.len(), 1);
    let html = fs::read_to_string(&outputs[0]).unwrap();
    assert!(html.contains("<td>8 hours 30 minute</td>"));

    assert!(Workspace::files_in(&ws.uploads()).is_empty());
    assert!(input.exists());
}

#[test]
fn test_process_txt_converts() {
    let ws = Workspace::new();
    let input = ws.write("log.txt", "A\tB\tC\n1\t2\t3\n");

    atl(&ws).arg("process").arg(&input).assert().success();

    let outputs = Workspace::files_in(&ws.outputs());
    assert_eq!(outputs.len(), 1);
    assert_eq!(fs::read_to_string(&outputs[0]).unwrap(), "A,B,C\r\n1,2,3\r\n");
    assert!(Workspace::files_in(&ws.uploads()).is_empty());
}

#[test]
fn test_process_rejects_other_file_types() {
    let ws = Workspace::new();
    let input = ws.write("report.pdf", "%PDF-1.4");

    atl(&ws)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));

    assert!(Workspace::files_in(&ws.uploads()).is_empty());
    assert!(Workspace::files_in(&ws.outputs()).is_empty());
}

#[test]
fn test_process_bad_csv_cleans_upload() {
    let ws = Workspace::new();
    let input = ws.write("att.csv", "Device id,Log Date\ndev1,garbage\n");

    atl(&ws)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp"));

    assert!(Workspace::files_in(&ws.uploads()).is_empty());
    assert!(Workspace::files_in(&ws.outputs()).is_empty());
}

#[test]
fn test_init_and_print_config() {
    let ws = Workspace::new();

    atl(&ws).arg("init").assert().success();

    assert!(ws.config_file().exists());
    assert!(ws.uploads().is_dir());
    assert!(ws.outputs().is_dir());

    atl(&ws)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log_date_column: Log Date"));
}
