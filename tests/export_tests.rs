//! CLI integration tests for export and backup.

mod common;
use common::{add_cabinet, add_panel, add_project, ledcat, setup_data_dir, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_panels_csv() {
    let data = setup_data_dir("export_panels_csv");
    add_panel(&data, "Wall One", "Lumen");
    add_panel(&data, "Wall Two", "Brightline");

    let out = temp_out("export_panels_csv", "csv");

    ledcat()
        .args([
            "--data", &data, "export", "--entity", "panel", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,name,manufacturer,model"));
    assert!(content.contains("Wall One"));
    assert!(content.contains("Wall Two"));

    // Every record lines up with the header, weight column included.
    let mut lines = content.lines();
    let header_fields = lines.next().expect("header line").split(',').count();
    for line in lines.filter(|l| !l.is_empty()) {
        assert_eq!(line.split(',').count(), header_fields, "misaligned record: {}", line);
    }
    assert!(content.contains("IP65,7.5,1000"));
}

#[test]
fn test_export_projects_json_parses() {
    let data = setup_data_dir("export_projects_json");
    add_project(&data, "Mall Facade", "Acme");

    let out = temp_out("export_projects_json", "json");

    ledcat()
        .args([
            "--data", &data, "export", "--entity", "project", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let items = value.as_array().expect("array of projects");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Mall Facade");
    assert_eq!(items[0]["client"], "Acme");
}

#[test]
fn test_export_cabinets_xlsx_creates_file() {
    let data = setup_data_dir("export_cabinets_xlsx");
    add_cabinet(&data, "Tile A", "indoor");

    let out = temp_out("export_cabinets_xlsx", "xlsx");

    ledcat()
        .args([
            "--data", &data, "export", "--entity", "cabinet", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export written"));

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_empty_collection_still_writes() {
    let data = setup_data_dir("export_empty");
    let out = temp_out("export_empty", "csv");

    ledcat()
        .args([
            "--data", &data, "export", "--entity", "panel", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // Header only.
    assert!(content.starts_with("id,name,manufacturer"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let data = setup_data_dir("export_force");
    add_panel(&data, "Wall One", "Lumen");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed stale file");

    ledcat()
        .args([
            "--data", &data, "export", "--entity", "panel", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Wall One"));
}

#[test]
fn test_backup_archives_data_directory() {
    let data = setup_data_dir("backup_basic");
    add_panel(&data, "Wall One", "Lumen");
    add_project(&data, "Mall Facade", "Acme");

    let out = temp_out("backup_basic", "zip");

    ledcat()
        .args([
            "--data", &data, "backup", "--file", &out, "--compress", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let meta = fs::metadata(&out).expect("archive exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_empty_data_dir_fails() {
    let data = setup_data_dir("backup_empty");
    let out = temp_out("backup_empty", "zip");

    ledcat()
        .args(["--data", &data, "backup", "--file", &out, "--force"])
        .assert()
        .failure()
        .stderr(contains("Nothing to back up"));
}
