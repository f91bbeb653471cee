//! Entity identity and id generation.
//!
//! # Invariants
//! - Ids produced by one generator never repeat within a process.
//! - Fixture ids (`snippet-1`) and generated ids share one string form.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EntityKind;

/// Stable identifier of one dashboard record.
///
/// Kept as an opaque string so seeded ids (`project-3`) and generated ids
/// (`project-<uuid>`) live in the same collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Source of fresh ids for newly created records.
pub trait IdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId;
}

/// Default generator: `<prefix>-<uuid v4>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId {
        EntityId(format!("{}-{}", kind.id_prefix(), Uuid::new_v4()))
    }
}

/// Deterministic generator: `<prefix>-new-<n>`.
///
/// One counter is shared by every kind, so no two generated ids carry the
/// same number.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        EntityId(format!("{}-new-{value}", kind.id_prefix()))
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityId, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
    use crate::model::EntityKind;
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_uses_kind_prefix_and_never_repeats() {
        let mut ids = UuidIdGenerator;
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let id = ids.next_id(EntityKind::JournalEntry);
            assert!(id.as_str().starts_with("journal-"));
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn sequential_generator_counts_across_kinds() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(EntityKind::Snippet), "snippet-new-1");
        assert_eq!(ids.next_id(EntityKind::Project), "project-new-2");
        assert_eq!(ids.next_id(EntityKind::LearningTopic), "learn-new-3");
    }

    #[test]
    fn entity_id_serializes_as_plain_string() {
        let id = EntityId::new("snippet-1");
        let json = serde_json::to_value(&id).expect("id should serialize");
        assert_eq!(json, "snippet-1");
    }
}
