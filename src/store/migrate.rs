//! Schema migrations for persisted documents, keyed by version and applied
//! on load. Version 0 is the legacy format: a bare JSON array without the
//! versioned envelope.

use crate::errors::{AppError, AppResult};
use crate::store::document::SCHEMA_VERSION;
use serde_json::{Value, json};

/// Upgrade a raw document value to the current schema version.
pub fn run_pending(mut value: Value) -> AppResult<Value> {
    loop {
        let version = detect_version(&value)?;
        if version == SCHEMA_VERSION {
            return Ok(value);
        }
        if version > SCHEMA_VERSION {
            return Err(AppError::Migration(format!(
                "document schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            )));
        }
        value = match version {
            0 => migrate_v0_to_v1(value),
            v => {
                return Err(AppError::Migration(format!(
                    "no migration registered for schema version {}",
                    v
                )));
            }
        };
    }
}

/// Schema version of a raw document value.
pub fn detect_version(value: &Value) -> AppResult<u32> {
    match value {
        // Legacy: collections were persisted as a bare array.
        Value::Array(_) => Ok(0),
        Value::Object(map) => match map.get("version").and_then(Value::as_u64) {
            Some(v) => Ok(v as u32),
            None => Err(AppError::Migration(
                "document has no version field".to_string(),
            )),
        },
        _ => Err(AppError::Migration(
            "document is neither an array nor an object".to_string(),
        )),
    }
}

fn migrate_v0_to_v1(value: Value) -> Value {
    json!({ "version": 1, "items": value })
}
