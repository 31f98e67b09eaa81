//! CLI integration tests for the panel subcommands.

mod common;
use common::{add_panel, ledcat, setup_data_dir};
use predicates::str::contains;

#[test]
fn test_panel_add_and_list() {
    let data = setup_data_dir("panel_add_list");
    add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("Wall One"))
        .stdout(contains("Lumen"))
        .stdout(contains("1 panel(s)"));
}

#[test]
fn test_panel_list_empty() {
    let data = setup_data_dir("panel_list_empty");

    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("No panels found."));
}

#[test]
fn test_panel_search_is_case_insensitive() {
    let data = setup_data_dir("panel_search");
    add_panel(&data, "Stadium Screen", "Lumen");
    add_panel(&data, "Lobby Wall", "Brightline");

    ledcat()
        .args(["--data", &data, "panel", "list", "--search", "STADIUM"])
        .assert()
        .success()
        .stdout(contains("Stadium Screen"))
        .stdout(contains("1 panel(s)"));
}

#[test]
fn test_panel_filter_by_manufacturer() {
    let data = setup_data_dir("panel_filter");
    add_panel(&data, "P1", "Lumen");
    add_panel(&data, "P2", "Brightline");

    ledcat()
        .args(["--data", &data, "panel", "list", "--manufacturer", "Lumen"])
        .assert()
        .success()
        .stdout(contains("Lumen"))
        .stdout(contains("1 panel(s)"));
}

#[test]
fn test_panel_sort_by_name_descending() {
    let data = setup_data_dir("panel_sort");
    add_panel(&data, "Alpha", "Lumen");
    add_panel(&data, "Zulu", "Lumen");

    let output = ledcat()
        .args(["--data", &data, "panel", "list", "--sort", "name", "--desc"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zulu = stdout.find("Zulu").expect("Zulu listed");
    let alpha = stdout.find("Alpha").expect("Alpha listed");
    assert!(zulu < alpha, "descending sort puts Zulu first");
}

#[test]
fn test_panel_invalid_sort_key_fails() {
    let data = setup_data_dir("panel_bad_sort");
    add_panel(&data, "Alpha", "Lumen");

    ledcat()
        .args(["--data", &data, "panel", "list", "--sort", "wattage"])
        .assert()
        .failure()
        .stderr(contains("Invalid sort key"));
}

#[test]
fn test_panel_show_prints_derived_metrics() {
    let data = setup_data_dir("panel_show");
    let id = add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "panel", "show", &id])
        .assert()
        .success()
        .stdout(contains("Wall One"))
        .stdout(contains("Resolution:"))
        .stdout(contains("Viewing:"))
        .stdout(contains("Price per m²:"));
}

#[test]
fn test_panel_edit_changes_only_given_fields() {
    let data = setup_data_dir("panel_edit");
    let id = add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "panel", "edit", &id, "--name", "Wall Two"])
        .assert()
        .success()
        .stdout(contains("Wall Two"));

    ledcat()
        .args(["--data", &data, "panel", "show", &id])
        .assert()
        .success()
        .stdout(contains("Wall Two"))
        .stdout(contains("Lumen"));
}

#[test]
fn test_panel_edit_unknown_id_fails() {
    let data = setup_data_dir("panel_edit_missing");
    add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args([
            "--data", &data, "panel", "edit", "deadbeef", "--name", "Ghost",
        ])
        .assert()
        .failure()
        .stderr(contains("No panel found"));
}

#[test]
fn test_panel_del_removes_entry() {
    let data = setup_data_dir("panel_del");
    let id = add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "panel", "del", &id])
        .assert()
        .success()
        .stdout(contains("deleted"));

    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("No panels found."));
}

#[test]
fn test_panel_dup_appends_copy_suffix() {
    let data = setup_data_dir("panel_dup");
    let id = add_panel(&data, "Wall One", "Lumen");

    ledcat()
        .args(["--data", &data, "panel", "dup", &id])
        .assert()
        .success()
        .stdout(contains("Wall One (Copy)"));

    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("2 panel(s)"));
}

#[test]
fn test_panel_add_rejects_invalid_brightness() {
    let data = setup_data_dir("panel_bad_brightness");

    ledcat()
        .args([
            "--data",
            &data,
            "panel",
            "add",
            "--name",
            "Dim",
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
            "50",
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
        .failure()
        .stderr(contains("between 100 and 10000"));

    // Nothing was stored.
    ledcat()
        .args(["--data", &data, "panel", "list"])
        .assert()
        .success()
        .stdout(contains("No panels found."));
}

#[test]
fn test_panel_add_rejects_inverted_temperature_range() {
    let data = setup_data_dir("panel_bad_temps");

    ledcat()
        .args([
            "--data",
            &data,
            "panel",
            "add",
            "--name",
            "Hot",
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
            "60",
            "--temp-max",
            "20",
            "--ip",
            "IP65",
            "--weight",
            "7.5",
        ])
        .assert()
        .failure()
        .stderr(contains("below the maximum"));
}

#[test]
fn test_panel_stats() {
    let data = setup_data_dir("panel_stats");
    add_panel(&data, "P1", "Lumen");
    add_panel(&data, "P2", "Lumen");
    add_panel(&data, "P3", "Brightline");

    ledcat()
        .args(["--data", &data, "panel", "list", "--stats"])
        .assert()
        .success()
        .stdout(contains("Total panels:  3"))
        .stdout(contains("Lumen: 2"))
        .stdout(contains("Brightline: 1"));
}
