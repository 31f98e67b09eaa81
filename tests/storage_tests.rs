//! CLI integration tests for the storage backends and the `store`
//! maintenance subcommand.

mod common;
use common::{add_panel, ledcat, setup_data_dir};
use predicates::str::contains;
use std::fs;

#[test]
fn test_sqlite_backend_roundtrip() {
    let data = setup_data_dir("storage_sqlite");

    ledcat()
        .args([
            "--data",
            &data,
            "--storage",
            "sqlite",
            "panel",
            "add",
            "--name",
            "DB Wall",
            "--manufacturer",
            "Lumen",
            "--model",
            "LX",
            "--width",
            "500",
            "--height",
            "500",
            "--pitch",
            "2.5",
            "--power",
            "150",
            "--voltage",
            "220",
            "--brightness",
            "1200",
            "--refresh",
            "3840",
            "--temp-min",
            "-20",
            "--temp-max",
            "60",
            "--ip",
            "IP65",
            "--weight",
            "7.5",
        ])
        .assert()
        .success();

    ledcat()
        .args(["--data", &data, "--storage", "sqlite", "panel", "list"])
        .assert()
        .success()
        .stdout(contains("DB Wall"));

    // The json backend over the same directory sees nothing.
    ledcat()
        .args(["--data", &data, "--storage", "json", "panel", "list"])
        .assert()
        .success()
        .stdout(contains("No panels found."));
}

#[test]
fn test_unknown_storage_backend_fails() {
    let data = setup_data_dir("storage_unknown");

    ledcat()
        .args(["--data", &data, "--storage", "redis", "panel", "list"])
        .assert()
        .failure()
        .stderr(contains("Unknown storage backend"));
}

#[test]
fn test_corrupt_document_banner_does_not_block_listing() {
    let data = setup_data_dir("storage_corrupt_banner");
    fs::write(format!("{}/panels.json", data), "{broken").expect("write corrupt doc");

    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("Failed to load panel data"))
        .stdout(contains("No panels found."));
}

#[test]
fn test_store_check_reports_document_state() {
    let data = setup_data_dir("store_check");
    add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "store", "--check"])
        .assert()
        .success()
        .stdout(contains("panels: ok (1 item(s))"))
        .stdout(contains("cabinets: absent"))
        .stdout(contains("All documents parse"));
}

#[test]
fn test_store_migrate_upgrades_legacy_document() {
    let data = setup_data_dir("store_migrate");
    add_panel(&data, "Wall One", "Lumen");

    // Strip the envelope to simulate a legacy bare-array document.
    let path = format!("{}/panels.json", data);
    let raw = fs::read_to_string(&path).expect("read document");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse document");
    let items = value["items"].clone();
    fs::write(&path, serde_json::to_string(&items).expect("serialize")).expect("write legacy");

    ledcat()
        .args(["--data", &data, "store", "--migrate"])
        .assert()
        .success()
        .stdout(contains("migrated to schema version 1"));

    // The rewritten document carries the envelope.
    let rewritten = fs::read_to_string(&path).expect("read migrated document");
    let value: serde_json::Value = serde_json::from_str(&rewritten).expect("parse migrated");
    assert_eq!(value["version"], 1);

    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("Wall One"));
}

#[test]
fn test_store_migrate_is_idempotent() {
    let data = setup_data_dir("store_migrate_noop");
    add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "store", "--migrate"])
        .assert()
        .success()
        .stdout(contains("already at the current schema version"));
}

#[test]
fn test_store_info_lists_counts() {
    let data = setup_data_dir("store_info");
    add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "store", "--info"])
        .assert()
        .success()
        .stdout(contains("json files in"))
        .stdout(contains("panels: 1 item(s)"))
        .stdout(contains("projects: 0 item(s)"));
}
