//! Persisted document envelope. Every stored collection carries an explicit
//! schema version so old data can be migrated on load instead of silently
//! deserializing into garbage.

use crate::errors::{AppError, AppResult};
use crate::store::migrate;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct DocumentRef<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(serde::Deserialize)]
struct Document<T> {
    #[allow(dead_code)]
    version: u32,
    items: Vec<T>,
}

/// Serialize a collection into a versioned document.
pub fn encode<T: Serialize>(items: &[T]) -> AppResult<String> {
    let doc = DocumentRef {
        version: SCHEMA_VERSION,
        items,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a raw document, applying pending schema migrations first.
pub fn decode<T: DeserializeOwned>(raw: &str) -> AppResult<Vec<T>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AppError::Storage(format!("malformed document: {}", e)))?;

    let value = migrate::run_pending(value)?;

    let doc: Document<T> = serde_json::from_value(value)
        .map_err(|e| AppError::Storage(format!("unexpected document shape: {}", e)))?;
    Ok(doc.items)
}
