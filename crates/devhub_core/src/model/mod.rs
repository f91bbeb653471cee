//! Dashboard domain model.
//!
//! # Responsibility
//! - Define the four content records tracked by the dashboard.
//! - Provide the shared identity, clock and entity-kind contracts.
//!
//! # Invariants
//! - Every record is identified by a stable `EntityId` that is unique within
//!   its collection.
//! - Records never reference each other; cross-module views only aggregate.

pub mod clock;
pub mod id;
pub mod journal;
pub mod learning;
pub mod project;
pub mod snippet;

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

pub use id::EntityId;

/// Content module an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Snippet,
    Project,
    LearningTopic,
    JournalEntry,
}

impl EntityKind {
    /// Every kind, in sidebar order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Snippet,
        EntityKind::Project,
        EntityKind::LearningTopic,
        EntityKind::JournalEntry,
    ];

    /// Stable machine name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snippet => "snippet",
            Self::Project => "project",
            Self::LearningTopic => "learning_topic",
            Self::JournalEntry => "journal_entry",
        }
    }

    /// Prefix of generated ids, e.g. `snippet-…`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Snippet => "snippet",
            Self::Project => "project",
            Self::LearningTopic => "learn",
            Self::JournalEntry => "journal",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract shared by every record held in an entity store.
pub trait Entity: Clone + Debug {
    /// Module this record type belongs to.
    const KIND: EntityKind;

    /// Stable identifier.
    fn id(&self) -> &EntityId;

    /// Title-class field used for search and list rendering.
    fn title(&self) -> &str;
}
