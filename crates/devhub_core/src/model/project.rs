//! Side-project record and its Kanban status.
//!
//! # Invariants
//! - `status` and `progress` are independent: `Completed` does not imply
//!   `progress == 100` and nothing in core couples them.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

/// Project lifecycle state. Doubles as the Kanban lane identity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ProjectStatus {
    #[default]
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Canonical lane order; independent of collection order.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    /// User-facing label, also the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parses a label as shown in the status picker.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "Planning" => Some(Self::Planning),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked side project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    /// Not validated.
    pub repo_link: Option<String>,
    /// Not validated.
    pub live_link: Option<String>,
    pub status: ProjectStatus,
    /// Percentage in `0..=100`.
    pub progress: u8,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}
