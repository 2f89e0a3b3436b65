//! Generic collection store, one instance per entity kind.
//!
//! # Responsibility
//! - Provide `list/add/update/delete/get` over one persisted sequence.
//! - Own identity and timestamp assignment on insert.
//!
//! # Invariants
//! - `id` values are unique within a collection and never reused.
//! - Insertion order is preserved; mutations leave unrelated records
//!   byte-identical.
//! - `update` refreshes `updatedAt` (where carried) even when the caller
//!   mutates nothing else.
//! - `update`/`delete` against a missing id are silent no-ops; UI
//!   callbacks may race a deletion.

use std::rc::Rc;

use log::{debug, info};
use uuid::Uuid;

use crate::model::{now_iso, Record, RecordId};
use crate::store::{BackingStore, PersistedCell};

/// Persisted ordered collection of one record kind.
pub struct CollectionStore<R: Record> {
    cell: PersistedCell<Vec<R>>,
}

impl<R: Record> CollectionStore<R> {
    /// Creates an unhydrated store bound to one backing key.
    pub fn new(backing: Rc<dyn BackingStore>, key: &'static str) -> Self {
        Self {
            cell: PersistedCell::new(backing, key),
        }
    }

    /// Performs the one-time backing read. Idempotent.
    pub fn hydrate(&self) {
        self.cell.hydrate();
    }

    /// Whether the one-time backing read has completed.
    ///
    /// Mutation UI must gate on this; writing before hydration would
    /// overwrite not-yet-loaded data with defaults.
    pub fn is_hydrated(&self) -> bool {
        self.cell.is_hydrated()
    }

    /// Current snapshot in insertion order.
    pub fn list(&self) -> Vec<R> {
        self.cell.snapshot()
    }

    /// Point lookup by stable id.
    pub fn get(&self, id: RecordId) -> Option<R> {
        self.cell.snapshot().into_iter().find(|r| r.id() == id)
    }

    /// Stamps identity and creation time on `draft`, appends it, and
    /// persists the full sequence. Returns the stored record.
    pub fn add(&self, mut draft: R) -> R {
        let now = now_iso();
        draft.assign_identity(Uuid::new_v4(), &now);
        let stored = draft.clone();

        self.cell.write(|mut records| {
            records.push(draft);
            records
        });

        info!(
            "event=record_add module=repo status=ok key={} id={}",
            self.cell.key(),
            stored.id()
        );
        stored
    }

    /// Applies `mutate` to the matching record and refreshes its update
    /// stamp where the kind carries one. No-op when `id` is absent.
    pub fn update(&self, id: RecordId, mutate: impl FnOnce(&mut R)) {
        if !self.contains(id) {
            debug!(
                "event=record_update module=repo status=miss key={} id={}",
                self.cell.key(),
                id
            );
            return;
        }

        let now = now_iso();
        self.cell.write(|mut records| {
            if let Some(record) = records.iter_mut().find(|r| r.id() == id) {
                mutate(record);
                record.touch(&now);
            }
            records
        });
    }

    /// Removes the matching record. No-op when `id` is absent; repeated
    /// deletion is idempotent.
    pub fn delete(&self, id: RecordId) {
        if !self.contains(id) {
            debug!(
                "event=record_delete module=repo status=miss key={} id={}",
                self.cell.key(),
                id
            );
            return;
        }

        self.cell.write(|mut records| {
            records.retain(|r| r.id() != id);
            records
        });
        info!(
            "event=record_delete module=repo status=ok key={} id={}",
            self.cell.key(),
            id
        );
    }

    fn contains(&self, id: RecordId) -> bool {
        self.cell.snapshot().iter().any(|r| r.id() == id)
    }
}
