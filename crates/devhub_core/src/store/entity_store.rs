//! Ordered, id-addressed collection for one entity kind.
//!
//! # Responsibility
//! - Provide the only mutation paths for a module's records.
//! - Keep observers consistent: every operation is all-or-nothing.
//!
//! # Invariants
//! - Ids are unique within the collection when callers use fresh ids.
//! - `update` never moves a record; `create` always lands at index 0.
//! - A missing id leaves the collection untouched and yields
//!   `MutationOutcome::NotFound`.
//! - An update never changes a record's id.

use log::{debug, warn};

use crate::model::{Entity, EntityId};

/// Result of an id-addressed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MutationOutcome {
    /// The record was found and the mutation happened.
    Applied,
    /// No record carried the id; nothing changed.
    NotFound,
    /// The replacement carries a different id; nothing changed.
    IdMismatch,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Newest-first collection of records of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store holding `records` in the given order.
    pub fn seeded(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Prepends `record` and returns the stored value.
    pub fn create(&mut self, record: T) -> &T {
        debug!(
            "event=entity_create module=store status=ok kind={} id={} len_before={}",
            T::KIND,
            record.id(),
            self.records.len()
        );
        self.records.insert(0, record);
        &self.records[0]
    }

    /// Replaces the whole record whose id equals `id`, keeping its position.
    ///
    /// `record` must carry `id`; anything else is rejected with
    /// `MutationOutcome::IdMismatch` so ids stay unique.
    pub fn update(&mut self, id: &EntityId, record: T) -> MutationOutcome {
        if record.id() != id {
            warn!(
                "event=entity_update module=store status=id_mismatch kind={} id={} record_id={}",
                T::KIND,
                id,
                record.id()
            );
            return MutationOutcome::IdMismatch;
        }
        match self.position(id) {
            Some(index) => {
                self.records[index] = record;
                debug!(
                    "event=entity_update module=store status=ok kind={} id={} index={}",
                    T::KIND,
                    id,
                    index
                );
                MutationOutcome::Applied
            }
            None => {
                warn!(
                    "event=entity_update module=store status=not_found kind={} id={}",
                    T::KIND,
                    id
                );
                MutationOutcome::NotFound
            }
        }
    }

    /// Removes the record whose id equals `id`.
    pub fn delete(&mut self, id: &EntityId) -> MutationOutcome {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                debug!(
                    "event=entity_delete module=store status=ok kind={} id={} index={}",
                    T::KIND,
                    id,
                    index
                );
                MutationOutcome::Applied
            }
            None => {
                warn!(
                    "event=entity_delete module=store status=not_found kind={} id={}",
                    T::KIND,
                    id
                );
                MutationOutcome::NotFound
            }
        }
    }

    /// Applies `change` to the record with `id` in place.
    ///
    /// Used by derived-state transitions (Kanban status moves) that must not
    /// reorder the collection.
    pub(crate) fn modify(&mut self, id: &EntityId, change: impl FnOnce(&mut T)) -> MutationOutcome {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                change(record);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: &EntityId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
