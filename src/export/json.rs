use crate::errors::AppResult;
use serde::Serialize;
use std::path::Path;

/// Write a collection as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}
