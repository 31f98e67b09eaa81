//! Generic catalog store: sole owner of one entity collection and its
//! persisted mirror. Panels, cabinets and projects all run through this one
//! implementation; only the entity type and its derived-field hook vary.

use crate::errors::{AppError, AppResult};
use crate::store::document;
use crate::store::port::StoragePort;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Contract every stored entity fulfils: a stable identity, creation/update
/// timestamps, and an optional derived-field recomputation hook.
pub trait CatalogEntity: Clone + Serialize + DeserializeOwned {
    /// Storage key of the whole-collection document.
    const DOC_KEY: &'static str;
    /// Singular label used in messages ("panel", "cabinet", "project").
    const LABEL: &'static str;

    fn id(&self) -> Uuid;

    /// Assign identity and both timestamps at creation.
    fn stamp(&mut self, id: Uuid, now: DateTime<Local>);

    /// Advance `updated_at` on mutation; `created_at` stays untouched.
    fn touch(&mut self, now: DateTime<Local>);

    /// Recompute derived fields from their inputs (e.g. cabinet pixel
    /// pitch). Default: nothing derived.
    fn recompute(&mut self) {}
}

pub struct CatalogStore<T: CatalogEntity> {
    port: Box<dyn StoragePort>,
    items: Vec<T>,
    last_error: Option<String>,
}

impl<T: CatalogEntity> CatalogStore<T> {
    /// Open the store and load the persisted collection. A missing document
    /// yields an empty collection; an unreadable or malformed one yields an
    /// empty collection plus a store-level error message. Never fails.
    pub fn open(port: Box<dyn StoragePort>) -> Self {
        let mut store = Self {
            port,
            items: Vec::new(),
            last_error: None,
        };
        match store.load() {
            Ok(items) => store.items = items,
            Err(e) => {
                store.last_error = Some(format!(
                    "Failed to load {} data from storage: {}",
                    T::LABEL,
                    e
                ));
            }
        }
        store
    }

    fn load(&self) -> AppResult<Vec<T>> {
        match self.port.get(T::DOC_KEY)? {
            Some(raw) => document::decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Commit-then-apply: the candidate collection is persisted first and
    /// only swapped into memory once the write succeeded, so memory and
    /// storage cannot drift apart on a failed write.
    fn persist(&mut self, candidate: Vec<T>) -> AppResult<()> {
        let raw = document::encode(&candidate)?;
        if let Err(e) = self.port.put(T::DOC_KEY, &raw) {
            self.last_error = Some(format!("Failed to save {} data: {}", T::LABEL, e));
            return Err(e);
        }
        self.items = candidate;
        self.last_error = None;
        Ok(())
    }

    /// Insert a new entity: assigns a fresh identity and timestamps, runs
    /// the derived-field hook, appends and persists. Returns the stored
    /// entity.
    pub fn create(&mut self, mut item: T) -> AppResult<T> {
        item.stamp(Uuid::new_v4(), Local::now());
        item.recompute();

        let mut candidate = self.items.clone();
        candidate.push(item.clone());
        self.persist(candidate)?;
        Ok(item)
    }

    /// Apply a patch to the entity with the given id. Missing ids are an
    /// explicit `NotFound` error, never a silent no-op.
    pub fn update<F>(&mut self, id: Uuid, patch: F) -> AppResult<T>
    where
        F: FnOnce(&mut T),
    {
        let pos = self
            .items
            .iter()
            .position(|it| it.id() == id)
            .ok_or_else(|| AppError::NotFound {
                entity: T::LABEL,
                id: id.to_string(),
            })?;

        let mut candidate = self.items.clone();
        {
            let item = &mut candidate[pos];
            patch(item);
            item.recompute();
            item.touch(Local::now());
        }
        let updated = candidate[pos].clone();
        self.persist(candidate)?;
        Ok(updated)
    }

    /// Remove the entity with the given id and return it. Missing ids are
    /// an explicit `NotFound` error.
    pub fn delete(&mut self, id: Uuid) -> AppResult<T> {
        let pos = self
            .items
            .iter()
            .position(|it| it.id() == id)
            .ok_or_else(|| AppError::NotFound {
                entity: T::LABEL,
                id: id.to_string(),
            })?;

        let mut candidate = self.items.clone();
        let removed = candidate.remove(pos);
        self.persist(candidate)?;
        Ok(removed)
    }

    /// Pure read, no side effects.
    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|it| it.id() == id)
    }

    /// The collection in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Resolve a full id or a unique id prefix to the entity's identity.
    pub fn resolve_id(&self, reference: &str) -> AppResult<Uuid> {
        if let Ok(id) = reference.parse::<Uuid>() {
            return Ok(id);
        }

        let needle = reference.to_lowercase();
        let matches: Vec<Uuid> = self
            .items
            .iter()
            .map(|it| it.id())
            .filter(|id| id.to_string().starts_with(&needle))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(AppError::NotFound {
                entity: T::LABEL,
                id: reference.to_string(),
            }),
            _ => Err(AppError::AmbiguousId(reference.to_string())),
        }
    }
}
