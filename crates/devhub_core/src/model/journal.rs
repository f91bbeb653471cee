//! Developer journal entry.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntityId,
    pub title: String,
    /// Markdown source.
    pub content: String,
    /// Unix epoch milliseconds. Changes only through an explicit date edit.
    pub date: i64,
    pub tags: Vec<String>,
}

impl Entity for JournalEntry {
    const KIND: EntityKind = EntityKind::JournalEntry;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}
