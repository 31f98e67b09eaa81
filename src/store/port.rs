//! Storage port: the seam between the catalog stores and whatever holds the
//! persisted documents. One whole JSON document per entity type, addressed
//! by a fixed key. Backends are injected at construction time so the same
//! store logic can target a plain file tree or an embedded database.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{FileStorage, SqliteStorage};
use crate::utils::path::expand_tilde;

pub trait StoragePort {
    /// Read the document stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document stored under `key`.
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Drop the document stored under `key` (no-op if absent).
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Human-readable backend description for `store --info`.
    fn describe(&self) -> String;
}

/// Open the storage backend selected by the configuration.
pub fn open_port(cfg: &Config) -> AppResult<Box<dyn StoragePort>> {
    let dir = expand_tilde(&cfg.data_dir);
    match cfg.storage.as_str() {
        "json" => Ok(Box::new(FileStorage::open(&dir)?)),
        "sqlite" => Ok(Box::new(SqliteStorage::open(&dir.join("ledcat.sqlite"))?)),
        other => Err(AppError::Config(format!(
            "Unknown storage backend '{}' (expected 'json' or 'sqlite')",
            other
        ))),
    }
}
