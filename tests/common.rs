#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ledcat() -> Command {
    cargo_bin_cmd!("ledcat")
}

/// Create a unique, empty data directory inside the system temp dir.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ledcat_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path and remove any leftover from a
/// previous run.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A delivery date safely in the future.
pub fn future_date() -> String {
    (Local::now().date_naive() + Duration::days(30))
        .format("%Y-%m-%d")
        .to_string()
}

/// A delivery date safely in the past.
pub fn past_date() -> String {
    (Local::now().date_naive() - Duration::days(30))
        .format("%Y-%m-%d")
        .to_string()
}

/// Pull the short id out of an "added (id xxxxxxxx)" success line.
pub fn extract_id(stdout: &str) -> String {
    let start = stdout.find("(id ").expect("no id in output") + 4;
    let rest = &stdout[start..];
    let end = rest.find([')', ',']).expect("unterminated id");
    rest[..end].to_string()
}

/// Add a panel with sensible defaults via the CLI and return its short id.
pub fn add_panel(data_dir: &str, name: &str, manufacturer: &str) -> String {
    let output = ledcat()
        .args([
            "--data",
            data_dir,
            "panel",
            "add",
            "--name",
            name,
            "--manufacturer",
            manufacturer,
            "--model",
            "X-500",
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
            "--price",
            "1000",
        ])
        .output()
        .expect("run panel add");
    assert!(output.status.success(), "panel add failed: {:?}", output);
    extract_id(&String::from_utf8_lossy(&output.stdout))
}

/// Add a cabinet via the CLI and return its short id.
pub fn add_cabinet(data_dir: &str, name: &str, kind: &str) -> String {
    let output = ledcat()
        .args([
            "--data",
            data_dir,
            "cabinet",
            "add",
            "--name",
            name,
            "--kind",
            kind,
            "--width",
            "320",
            "--height",
            "320",
            "--resolution",
            "32x32",
            "--power",
            "120",
            "--weight",
            "5.0",
            "--voltage",
            "220",
        ])
        .output()
        .expect("run cabinet add");
    assert!(output.status.success(), "cabinet add failed: {:?}", output);
    extract_id(&String::from_utf8_lossy(&output.stdout))
}

/// Add a project with a future delivery date and return its short id.
pub fn add_project(data_dir: &str, name: &str, client: &str) -> String {
    let output = ledcat()
        .args([
            "--data",
            data_dir,
            "project",
            "add",
            "--name",
            name,
            "--client",
            client,
            "--delivery",
            &future_date(),
        ])
        .output()
        .expect("run project add");
    assert!(output.status.success(), "project add failed: {:?}", output);
    extract_id(&String::from_utf8_lossy(&output.stdout))
}
