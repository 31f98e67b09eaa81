//! Catalog export in CSV, JSON and XLSX.

pub mod csv;
pub mod fs_utils;
pub mod json;
pub mod model;
pub mod xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportEntity {
    Panel,
    Cabinet,
    Project,
}

pub fn notify_export_success(kind: &str, path: &Path) {
    success(format!("{} export written to {}", kind, path.display()));
}
