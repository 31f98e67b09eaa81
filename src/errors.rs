//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validate::FieldErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Schema migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid cabinet kind: {0}")]
    InvalidKind(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Invalid resolution (expected WIDTHxHEIGHT): {0}")]
    InvalidResolution(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    // ---------------------------
    // Catalog errors
    // ---------------------------
    #[error("No {entity} found with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Ambiguous id prefix '{0}' (matches more than one entry)")]
    AmbiguousId(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
