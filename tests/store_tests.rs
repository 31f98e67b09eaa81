//! Store-level tests: CRUD semantics, commit-then-apply, schema migration
//! and the non-blocking load-error banner state.

mod common;
use common::setup_data_dir;

use ledcat::errors::AppError;
use ledcat::models::Panel;
use ledcat::models::panel::PanelPayload;
use ledcat::store::{
    CatalogEntity, CatalogStore, FileStorage, SqliteStorage, StoragePort, document,
};
use std::fs;
use std::path::Path;
use uuid::Uuid;

fn sample_payload(name: &str) -> PanelPayload {
    PanelPayload {
        name: name.to_string(),
        manufacturer: "Lumen".to_string(),
        model: "LX-1".to_string(),
        width: 500.0,
        height: 500.0,
        pixel_pitch: 2.5,
        power_consumption: 150.0,
        input_voltage: 220.0,
        brightness: 1200,
        refresh_rate: 3840,
        temp_min: -20,
        temp_max: 60,
        ip_rating: "IP65".to_string(),
        weight: 7.5,
        price: Some(1000.0),
        description: None,
    }
}

fn open_file_store(dir: &str) -> CatalogStore<Panel> {
    let port = FileStorage::open(Path::new(dir)).expect("open file storage");
    CatalogStore::open(Box::new(port))
}

#[test]
fn test_create_assigns_identity_and_persists() {
    let dir = setup_data_dir("store_create");
    let mut store = open_file_store(&dir);

    let created = store
        .create(Panel::from_payload(sample_payload("Alpha")))
        .expect("create");

    assert_ne!(created.id, Uuid::nil());
    assert_eq!(created.created_at, created.updated_at);

    // A fresh store reads the same entity back.
    let reopened = open_file_store(&dir);
    assert!(reopened.last_error().is_none());
    let found = reopened.get(created.id).expect("panel persisted");
    assert_eq!(found.name, "Alpha");
}

#[test]
fn test_update_missing_id_is_not_found() {
    let dir = setup_data_dir("store_update_missing");
    let mut store = open_file_store(&dir);
    store
        .create(Panel::from_payload(sample_payload("Alpha")))
        .expect("create");

    let before = store.items().to_vec();
    let result = store.update(Uuid::new_v4(), |p| p.name = "Ghost".to_string());

    assert!(matches!(result, Err(AppError::NotFound { .. })));
    // The collection is untouched by the failed update.
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_delete_missing_id_is_not_found() {
    let dir = setup_data_dir("store_delete_missing");
    let mut store = open_file_store(&dir);

    let result = store.delete(Uuid::new_v4());
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[test]
fn test_delete_then_get_returns_none() {
    let dir = setup_data_dir("store_delete_get");
    let mut store = open_file_store(&dir);
    let created = store
        .create(Panel::from_payload(sample_payload("Alpha")))
        .expect("create");

    store.delete(created.id).expect("delete");
    assert!(store.get(created.id).is_none());
    assert!(store.items().is_empty());
}

#[test]
fn test_update_recomputes_timestamps() {
    let dir = setup_data_dir("store_update_touch");
    let mut store = open_file_store(&dir);
    let created = store
        .create(Panel::from_payload(sample_payload("Alpha")))
        .expect("create");

    let updated = store
        .update(created.id, |p| p.name = "Beta".to_string())
        .expect("update");

    assert_eq!(updated.name, "Beta");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_corrupt_document_yields_empty_store_with_error() {
    let dir = setup_data_dir("store_corrupt");
    fs::write(format!("{}/panels.json", dir), "{not json at all").expect("write corrupt doc");

    let mut store = open_file_store(&dir);

    assert!(store.items().is_empty());
    let err = store.last_error().expect("load error recorded").to_string();
    assert!(err.contains("Failed to load panel data"));

    store.clear_error();
    assert!(store.last_error().is_none());
}

#[test]
fn test_successful_write_clears_error() {
    let dir = setup_data_dir("store_error_clear");
    fs::write(format!("{}/panels.json", dir), "[[[").expect("write corrupt doc");

    let mut store = open_file_store(&dir);
    assert!(store.last_error().is_some());

    store
        .create(Panel::from_payload(sample_payload("Alpha")))
        .expect("create");
    assert!(store.last_error().is_none());
}

#[test]
fn test_legacy_bare_array_document_is_migrated_on_load() {
    let dir = setup_data_dir("store_v0_migration");

    // Write a v1 document, then strip it down to the legacy bare array.
    let mut seed = open_file_store(&dir);
    let created = seed
        .create(Panel::from_payload(sample_payload("Legacy")))
        .expect("create");

    let path = format!("{}/panels.json", dir);
    let raw = fs::read_to_string(&path).expect("read document");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse document");
    let items = value.get("items").expect("items").clone();
    fs::write(&path, serde_json::to_string(&items).expect("serialize")).expect("write legacy doc");

    let store = open_file_store(&dir);
    assert!(store.last_error().is_none());
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.get(created.id).expect("migrated").name, "Legacy");
}

#[test]
fn test_newer_schema_version_is_rejected() {
    let raw = r#"{ "version": 99, "items": [] }"#;
    let result = document::decode::<Panel>(raw);
    assert!(matches!(result, Err(AppError::Migration(_))));
}

#[test]
fn test_encode_carries_schema_version() {
    let raw = document::encode::<Panel>(&[]).expect("encode");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse");
    assert_eq!(value["version"], document::SCHEMA_VERSION);
    assert!(value["items"].is_array());
}

#[test]
fn test_file_port_roundtrip() {
    let dir = setup_data_dir("port_file");
    let mut port = FileStorage::open(Path::new(&dir)).expect("open");

    assert!(port.get("panels").expect("get").is_none());
    port.put("panels", "{\"version\":1,\"items\":[]}").expect("put");
    assert!(port.get("panels").expect("get").is_some());
    port.remove("panels").expect("remove");
    assert!(port.get("panels").expect("get").is_none());
    // Removing an absent key is a no-op.
    port.remove("panels").expect("remove absent");
}

#[test]
fn test_sqlite_port_roundtrip() {
    let dir = setup_data_dir("port_sqlite");
    let db = format!("{}/catalog.sqlite", dir);
    let mut port = SqliteStorage::open(Path::new(&db)).expect("open");

    assert!(port.get(Panel::DOC_KEY).expect("get").is_none());
    port.put(Panel::DOC_KEY, "first").expect("put");
    port.put(Panel::DOC_KEY, "second").expect("overwrite");
    assert_eq!(port.get(Panel::DOC_KEY).expect("get").as_deref(), Some("second"));
    port.remove(Panel::DOC_KEY).expect("remove");
    assert!(port.get(Panel::DOC_KEY).expect("get").is_none());
}

#[test]
fn test_resolve_id_full_prefix_and_missing() {
    let dir = setup_data_dir("store_resolve");
    let mut store = open_file_store(&dir);
    let created = store
        .create(Panel::from_payload(sample_payload("Alpha")))
        .expect("create");

    let full = created.id.to_string();
    assert_eq!(store.resolve_id(&full).expect("full id"), created.id);
    assert_eq!(store.resolve_id(&full[..8]).expect("prefix"), created.id);

    assert!(matches!(
        store.resolve_id("zzzzzzzz"),
        Err(AppError::NotFound { .. })
    ));
}
