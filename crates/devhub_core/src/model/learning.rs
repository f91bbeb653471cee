//! Learning topic record.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

/// One topic on the learning tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTopic {
    pub id: EntityId,
    pub topic_name: String,
    pub category: String,
    /// Percentage in `0..=100`.
    pub progress: u8,
    /// Markdown source.
    pub notes: String,
}

impl Entity for LearningTopic {
    const KIND: EntityKind = EntityKind::LearningTopic;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.topic_name
    }
}
