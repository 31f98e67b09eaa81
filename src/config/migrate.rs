//! Configuration file migrations. Each migration inserts a missing field
//! with its default value; re-running is a no-op, so no applied-version
//! ledger is needed.

use crate::config::{Config, default_currency, default_date_format};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;

/// Run all pending config migrations. Returns the list of actions actually
/// performed (empty when the file is already up to date or absent).
pub fn run_config_migrations() -> AppResult<Vec<String>> {
    let conf_file = Config::config_file();
    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&conf_file)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse {:?}: {}", conf_file, e)))?;

    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config(format!("{:?} is not a YAML mapping", conf_file)))?;

    let mut actions = Vec::new();

    if migrate_add_currency(map) {
        actions.push("added 'currency' parameter".to_string());
    }
    if migrate_add_date_format(map) {
        actions.push("added 'date_format' parameter".to_string());
    }

    if !actions.is_empty() {
        let serialized = serde_yaml::to_string(&yaml)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&conf_file, serialized)?;
    }

    Ok(actions)
}

/// Migration 20260210_0001: add the `currency` parameter (default "BRL").
fn migrate_add_currency(map: &mut Mapping) -> bool {
    insert_if_missing(map, "currency", Value::String(default_currency()))
}

/// Migration 20260210_0002: add the `date_format` parameter.
fn migrate_add_date_format(map: &mut Mapping) -> bool {
    insert_if_missing(map, "date_format", Value::String(default_date_format()))
}

fn insert_if_missing(map: &mut Mapping, key: &str, value: Value) -> bool {
    let key = Value::String(key.to_string());
    if map.contains_key(&key) {
        return false;
    }
    map.insert(key, value);
    true
}

/// Report which expected fields are missing from the config file (used by
/// `config --check`).
pub fn missing_fields() -> AppResult<Vec<&'static str>> {
    let conf_file = Config::config_file();
    if !conf_file.exists() {
        return Err(AppError::Config(format!(
            "Config file not found: {}",
            conf_file.display()
        )));
    }

    let content = fs::read_to_string(&conf_file)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Failed to parse {:?}: {}", conf_file, e)))?;

    let map = match yaml.as_mapping() {
        Some(m) => m,
        None => {
            return Err(AppError::Config(format!(
                "{:?} is not a YAML mapping",
                conf_file
            )));
        }
    };

    let expected = ["storage", "data_dir", "currency", "date_format"];
    Ok(expected
        .into_iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}
