//! Code snippet record.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

/// One saved code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Arbitrary source text; never interpreted by core.
    pub code: String,
    /// Free-form language tag used only for highlighting.
    pub language: String,
    pub tags: Vec<String>,
    /// Unix epoch milliseconds. Set once at creation.
    pub created_at: i64,
}

impl Entity for Snippet {
    const KIND: EntityKind = EntityKind::Snippet;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}
