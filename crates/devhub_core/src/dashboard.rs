//! Cross-module dashboard projection.
//!
//! # Invariants
//! - Built from the live stores on every call; nothing is cached.
//! - Read-only: building a summary never mutates a module.

use serde::Serialize;

use crate::markdown::plain_preview;
use crate::model::project::{Project, ProjectStatus};
use crate::model::EntityId;
use crate::session::User;
use crate::workspace::Workspace;

const RECENT_PROJECT_LIMIT: usize = 3;
const JOURNAL_PREVIEW_CHARS: usize = 160;

/// Record counts per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleCounts {
    pub snippets: usize,
    pub projects: usize,
    pub learning_topics: usize,
    pub journal_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPreview {
    pub id: EntityId,
    pub title: String,
    pub status: ProjectStatus,
    pub progress: u8,
}

impl From<&Project> for ProjectPreview {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            status: project.status,
            progress: project.progress,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalPreview {
    pub id: EntityId,
    pub title: String,
    pub preview: Option<String>,
    pub date: i64,
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Empty when nobody is signed in.
    pub greeting_name: String,
    pub counts: ModuleCounts,
    pub recent_projects: Vec<ProjectPreview>,
    pub latest_journal: Option<JournalPreview>,
}

/// Builds the dashboard from the current workspace state.
pub fn summarize(workspace: &Workspace, user: Option<&User>) -> DashboardSummary {
    let counts = ModuleCounts {
        snippets: workspace.snippets().store().len(),
        projects: workspace.projects().records().len(),
        learning_topics: workspace.learning().records().len(),
        journal_entries: workspace.journal().records().len(),
    };

    let recent_projects = workspace
        .projects()
        .records()
        .iter()
        .take(RECENT_PROJECT_LIMIT)
        .map(ProjectPreview::from)
        .collect();

    let latest_journal = workspace
        .journal()
        .records()
        .first()
        .map(|entry| JournalPreview {
            id: entry.id.clone(),
            title: entry.title.clone(),
            preview: plain_preview(&entry.content, JOURNAL_PREVIEW_CHARS),
            date: entry.date,
        });

    DashboardSummary {
        greeting_name: user.map(|user| user.first_name().to_string()).unwrap_or_default(),
        counts,
        recent_projects,
        latest_journal,
    }
}
