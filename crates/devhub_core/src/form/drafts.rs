//! Per-module drafts.
//!
//! Each draft mirrors the inputs of its form: list fields stay as raw
//! comma-separated text and numeric fields as raw integers until submit.

use serde::{Deserialize, Serialize};

use crate::model::journal::JournalEntry;
use crate::model::learning::LearningTopic;
use crate::model::project::{Project, ProjectStatus};
use crate::model::snippet::Snippet;

use super::reconciler::{Draft, Stamp};
use super::{checked_progress, join_list, optional_text, parse_list, require, ValidationError};

pub const DEFAULT_SNIPPET_LANGUAGE: &str = "typescript";

/// Seed values for create-mode drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub snippet_language: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            snippet_language: DEFAULT_SNIPPET_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnippetDraft {
    pub title: String,
    pub description: String,
    pub language: String,
    pub tags: String,
    pub code: String,
}

impl Draft for SnippetDraft {
    type Entity = Snippet;

    fn blank(defaults: &FormDefaults) -> Self {
        Self {
            language: defaults.snippet_language.clone(),
            ..Self::default()
        }
    }

    fn from_entity(entity: &Snippet) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            language: entity.language.clone(),
            tags: join_list(&entity.tags),
            code: entity.code.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("language", &self.language)
    }

    fn build(&self, stamp: Stamp<'_, Snippet>) -> Result<Snippet, ValidationError> {
        self.validate()?;
        Ok(Snippet {
            id: stamp.id,
            title: self.title.clone(),
            description: self.description.clone(),
            code: self.code.clone(),
            language: self.language.clone(),
            tags: parse_list(&self.tags),
            created_at: stamp
                .original
                .map_or(stamp.now_epoch_ms, |original| original.created_at),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub repo_link: String,
    pub live_link: String,
    pub status: ProjectStatus,
    pub progress: i64,
}

impl Draft for ProjectDraft {
    type Entity = Project;

    fn blank(_defaults: &FormDefaults) -> Self {
        Self::default()
    }

    fn from_entity(entity: &Project) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            tech_stack: join_list(&entity.tech_stack),
            repo_link: entity.repo_link.clone().unwrap_or_default(),
            live_link: entity.live_link.clone().unwrap_or_default(),
            status: entity.status,
            progress: i64::from(entity.progress),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        checked_progress(self.progress).map(|_| ())
    }

    fn build(&self, stamp: Stamp<'_, Project>) -> Result<Project, ValidationError> {
        self.validate()?;
        Ok(Project {
            id: stamp.id,
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack: parse_list(&self.tech_stack),
            repo_link: optional_text(&self.repo_link),
            live_link: optional_text(&self.live_link),
            status: self.status,
            progress: checked_progress(self.progress)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LearningDraft {
    pub topic_name: String,
    pub category: String,
    pub progress: i64,
    pub notes: String,
}

impl Draft for LearningDraft {
    type Entity = LearningTopic;

    fn blank(_defaults: &FormDefaults) -> Self {
        Self::default()
    }

    fn from_entity(entity: &LearningTopic) -> Self {
        Self {
            topic_name: entity.topic_name.clone(),
            category: entity.category.clone(),
            progress: i64::from(entity.progress),
            notes: entity.notes.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("topic_name", &self.topic_name)?;
        checked_progress(self.progress).map(|_| ())
    }

    fn build(&self, stamp: Stamp<'_, LearningTopic>) -> Result<LearningTopic, ValidationError> {
        self.validate()?;
        Ok(LearningTopic {
            id: stamp.id,
            topic_name: self.topic_name.clone(),
            category: self.category.clone(),
            progress: checked_progress(self.progress)?,
            notes: self.notes.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JournalDraft {
    pub title: String,
    pub tags: String,
    pub content: String,
    /// Explicit date edit. When `None` the entry keeps its original date
    /// (edit mode) or takes the submit time (create mode).
    pub date_override: Option<i64>,
}

impl Draft for JournalDraft {
    type Entity = JournalEntry;

    fn blank(_defaults: &FormDefaults) -> Self {
        Self::default()
    }

    fn from_entity(entity: &JournalEntry) -> Self {
        Self {
            title: entity.title.clone(),
            tags: join_list(&entity.tags),
            content: entity.content.clone(),
            date_override: None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("content", &self.content)
    }

    fn build(&self, stamp: Stamp<'_, JournalEntry>) -> Result<JournalEntry, ValidationError> {
        self.validate()?;
        let date = match (self.date_override, stamp.original) {
            (Some(date), _) => date,
            (None, Some(original)) => original.date,
            (None, None) => stamp.now_epoch_ms,
        };
        Ok(JournalEntry {
            id: stamp.id,
            title: self.title.clone(),
            content: self.content.clone(),
            date,
            tags: parse_list(&self.tags),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Draft, FormDefaults, JournalDraft, ProjectDraft, SnippetDraft};
    use crate::form::reconciler::Stamp;
    use crate::form::ValidationError;
    use crate::model::journal::JournalEntry;
    use crate::model::project::ProjectStatus;
    use crate::model::EntityId;

    #[test]
    fn blank_drafts_use_form_defaults() {
        let snippet = SnippetDraft::blank(&FormDefaults::default());
        assert_eq!(snippet.language, "typescript");

        let project = ProjectDraft::blank(&FormDefaults::default());
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.progress, 0);
    }

    #[test]
    fn snippet_requires_language() {
        let draft = SnippetDraft {
            title: "t".to_string(),
            language: " ".to_string(),
            ..SnippetDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("language"))
        );
    }

    #[test]
    fn journal_date_override_wins_over_original() {
        let original = JournalEntry {
            id: EntityId::new("journal-1"),
            title: "t".to_string(),
            content: "c".to_string(),
            date: 10,
            tags: Vec::new(),
        };
        let mut draft = JournalDraft::from_entity(&original);

        let kept = draft
            .build(Stamp {
                id: original.id.clone(),
                now_epoch_ms: 99,
                original: Some(&original),
            })
            .expect("valid draft");
        assert_eq!(kept.date, 10);

        draft.date_override = Some(42);
        let moved = draft
            .build(Stamp {
                id: original.id.clone(),
                now_epoch_ms: 99,
                original: Some(&original),
            })
            .expect("valid draft");
        assert_eq!(moved.date, 42);
    }
}
