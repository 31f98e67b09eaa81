//! CLI integration tests for the project subcommands, in particular the
//! create-only delivery date rule.

mod common;
use common::{add_project, future_date, ledcat, past_date, setup_data_dir};
use predicates::str::contains;

#[test]
fn test_project_add_and_list() {
    let data = setup_data_dir("project_add_list");
    add_project(&data, "Mall Facade", "Acme Retail");

    ledcat()
        .args(["--data", &data, "project", "list"])
        .assert()
        .success()
        .stdout(contains("Mall Facade"))
        .stdout(contains("Acme Retail"))
        .stdout(contains("Planning"))
        .stdout(contains("1 project(s)"));
}

#[test]
fn test_project_add_rejects_past_delivery_date() {
    let data = setup_data_dir("project_past_delivery");

    ledcat()
        .args([
            "--data",
            &data,
            "project",
            "add",
            "--name",
            "Late",
            "--client",
            "Acme",
            "--delivery",
            &past_date(),
        ])
        .assert()
        .failure()
        .stderr(contains("cannot be in the past"));

    // The rejected project never reached the store.
    ledcat()
        .args(["--data", &data, "project", "list"])
        .assert()
        .success()
        .stdout(contains("No projects found."));
}

#[test]
fn test_project_edit_allows_past_delivery_date() {
    let data = setup_data_dir("project_edit_past");
    let id = add_project(&data, "Mall Facade", "Acme");

    // Editing an existing project may move the date into the past.
    ledcat()
        .args([
            "--data",
            &data,
            "project",
            "edit",
            &id,
            "--delivery",
            &past_date(),
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    ledcat()
        .args(["--data", &data, "project", "show", &id])
        .assert()
        .success()
        .stdout(contains("(overdue)"));
}

#[test]
fn test_project_add_rejects_malformed_date() {
    let data = setup_data_dir("project_bad_date");

    ledcat()
        .args([
            "--data",
            &data,
            "project",
            "add",
            "--name",
            "X",
            "--client",
            "Acme",
            "--delivery",
            "31/12/2030",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_project_add_rejects_unknown_status() {
    let data = setup_data_dir("project_bad_status");

    ledcat()
        .args([
            "--data",
            &data,
            "project",
            "add",
            "--name",
            "X",
            "--client",
            "Acme",
            "--delivery",
            &future_date(),
            "--status",
            "paused",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid project status"));
}

#[test]
fn test_project_status_transition_and_filter() {
    let data = setup_data_dir("project_status_filter");
    let id = add_project(&data, "Mall Facade", "Acme");
    add_project(&data, "Airport Wall", "AeroCorp");

    ledcat()
        .args([
            "--data",
            &data,
            "project",
            "edit",
            &id,
            "--status",
            "in-progress",
        ])
        .assert()
        .success();

    ledcat()
        .args(["--data", &data, "project", "list", "--status", "in-progress"])
        .assert()
        .success()
        .stdout(contains("Mall Facade"))
        .stdout(contains("1 project(s)"));

    ledcat()
        .args(["--data", &data, "project", "list", "--status", "planning"])
        .assert()
        .success()
        .stdout(contains("Airport Wall"))
        .stdout(contains("1 project(s)"));
}

#[test]
fn test_project_search_matches_client() {
    let data = setup_data_dir("project_search");
    add_project(&data, "Mall Facade", "Acme Retail");
    add_project(&data, "Airport Wall", "AeroCorp");

    ledcat()
        .args(["--data", &data, "project", "list", "--search", "aero"])
        .assert()
        .success()
        .stdout(contains("Airport Wall"))
        .stdout(contains("1 project(s)"));
}

#[test]
fn test_project_del() {
    let data = setup_data_dir("project_del");
    let id = add_project(&data, "Mall Facade", "Acme");

    ledcat()
        .args(["--data", &data, "project", "del", &id])
        .assert()
        .success()
        .stdout(contains("deleted"));

    ledcat()
        .args(["--data", &data, "project", "list"])
        .assert()
        .success()
        .stdout(contains("No projects found."));
}

#[test]
fn test_project_stats_counts_overdue() {
    let data = setup_data_dir("project_stats");
    let id = add_project(&data, "Mall Facade", "Acme");
    add_project(&data, "Airport Wall", "AeroCorp");

    // Push one delivery into the past so it counts as overdue.
    ledcat()
        .args([
            "--data",
            &data,
            "project",
            "edit",
            &id,
            "--delivery",
            &past_date(),
        ])
        .assert()
        .success();

    ledcat()
        .args(["--data", &data, "project", "list", "--stats"])
        .assert()
        .success()
        .stdout(contains("Total projects: 2"))
        .stdout(contains("Planning:       2"))
        .stdout(contains("Overdue:        1"));
}
