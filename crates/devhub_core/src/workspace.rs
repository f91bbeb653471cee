//! All four content modules plus the id and clock sources they share.
//!
//! # Responsibility
//! - Build the modules from config (fixtures or empty).
//! - Expose the kind-dispatched store API used by the presentation layer.
//! - Feed ids and timestamps into form submits.
//!
//! # Invariants
//! - Each module's store is written only through its controller.
//! - Every delete passes a confirmation gate.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::WorkspaceConfig;
use crate::confirm::{ConfirmationGate, DeleteResolution};
use crate::controller::{
    JournalController, LearningController, ProjectsController, SnippetsController, SubmitError,
};
use crate::dashboard::{self, DashboardSummary};
use crate::fixtures;
use crate::form::Submitted;
use crate::model::clock::{Clock, SystemClock};
use crate::model::id::IdGenerator;
use crate::model::journal::JournalEntry;
use crate::model::learning::LearningTopic;
use crate::model::project::Project;
use crate::model::snippet::Snippet;
use crate::model::{Entity, EntityId, EntityKind};
use crate::session::User;
use crate::store::MutationOutcome;

/// A record of any kind, for the kind-dispatched API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum EntityRecord {
    Snippet(Snippet),
    Project(Project),
    LearningTopic(LearningTopic),
    JournalEntry(JournalEntry),
}

impl EntityRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Snippet(_) => EntityKind::Snippet,
            Self::Project(_) => EntityKind::Project,
            Self::LearningTopic(_) => EntityKind::LearningTopic,
            Self::JournalEntry(_) => EntityKind::JournalEntry,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            Self::Snippet(record) => record.id(),
            Self::Project(record) => record.id(),
            Self::LearningTopic(record) => record.id(),
            Self::JournalEntry(record) => record.id(),
        }
    }

    fn id_mut(&mut self) -> &mut EntityId {
        match self {
            Self::Snippet(record) => &mut record.id,
            Self::Project(record) => &mut record.id,
            Self::LearningTopic(record) => &mut record.id,
            Self::JournalEntry(record) => &mut record.id,
        }
    }
}

fn seed<T>(seeded: bool, records: fn() -> Vec<T>) -> Vec<T> {
    if seeded {
        records()
    } else {
        Vec::new()
    }
}

pub struct Workspace {
    snippets: SnippetsController,
    projects: ProjectsController,
    learning: LearningController,
    journal: JournalController,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl Workspace {
    /// Builds a workspace with the system clock and the configured ids.
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self::with_sources(config, config.id_strategy.generator(), Box::new(SystemClock))
    }

    pub fn with_sources(
        config: &WorkspaceConfig,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let defaults = config.form_defaults.clone();
        let seeded = config.seed_fixtures;

        let workspace = Self {
            snippets: SnippetsController::new(seed(seeded, fixtures::snippets), defaults.clone()),
            projects: ProjectsController::new(seed(seeded, fixtures::projects), defaults.clone()),
            learning: LearningController::new(
                seed(seeded, fixtures::learning_topics),
                defaults.clone(),
            ),
            journal: JournalController::new(seed(seeded, fixtures::journal_entries), defaults),
            ids,
            clock,
        };
        info!(
            "event=workspace_init module=workspace status=ok seeded={} id_strategy={:?}",
            seeded, config.id_strategy
        );
        workspace
    }

    pub fn snippets(&self) -> &SnippetsController {
        &self.snippets
    }

    pub fn snippets_mut(&mut self) -> &mut SnippetsController {
        &mut self.snippets
    }

    pub fn projects(&self) -> &ProjectsController {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectsController {
        &mut self.projects
    }

    pub fn learning(&self) -> &LearningController {
        &self.learning
    }

    pub fn learning_mut(&mut self) -> &mut LearningController {
        &mut self.learning
    }

    pub fn journal(&self) -> &JournalController {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut JournalController {
        &mut self.journal
    }

    pub fn submit_snippet_form(&mut self) -> Result<Submitted<Snippet>, SubmitError> {
        self.snippets.submit_form(self.ids.as_mut(), self.clock.as_ref())
    }

    pub fn submit_project_form(&mut self) -> Result<Submitted<Project>, SubmitError> {
        self.projects
            .module_mut()
            .submit_form(self.ids.as_mut(), self.clock.as_ref())
    }

    pub fn submit_learning_form(&mut self) -> Result<Submitted<LearningTopic>, SubmitError> {
        self.learning.submit_form(self.ids.as_mut(), self.clock.as_ref())
    }

    pub fn submit_journal_form(&mut self) -> Result<Submitted<JournalEntry>, SubmitError> {
        self.journal.submit_form(self.ids.as_mut(), self.clock.as_ref())
    }

    /// Prepends `record` to its module. An empty id is replaced by a fresh
    /// one; the stored record is returned.
    pub fn create(&mut self, mut record: EntityRecord) -> EntityRecord {
        if record.id().as_str().is_empty() {
            *record.id_mut() = self.ids.next_id(record.kind());
        }
        match &record {
            EntityRecord::Snippet(value) => {
                self.snippets.store_mut().create(value.clone());
            }
            EntityRecord::Project(value) => {
                self.projects.module_mut().store_mut().create(value.clone());
            }
            EntityRecord::LearningTopic(value) => {
                self.learning.store_mut().create(value.clone());
            }
            EntityRecord::JournalEntry(value) => {
                self.journal.store_mut().create(value.clone());
            }
        }
        record
    }

    /// Replaces the record with `id` in its module, in place.
    pub fn update(&mut self, id: &EntityId, record: EntityRecord) -> MutationOutcome {
        match record {
            EntityRecord::Snippet(value) => self.snippets.store_mut().update(id, value),
            EntityRecord::Project(value) => {
                self.projects.module_mut().store_mut().update(id, value)
            }
            EntityRecord::LearningTopic(value) => self.learning.store_mut().update(id, value),
            EntityRecord::JournalEntry(value) => self.journal.store_mut().update(id, value),
        }
    }

    /// Deletes `id` from the `kind` module once `gate` confirms.
    pub fn delete(
        &mut self,
        kind: EntityKind,
        id: EntityId,
        gate: &mut dyn ConfirmationGate,
    ) -> DeleteResolution {
        match kind {
            EntityKind::Snippet => self.snippets.delete_with(id, gate),
            EntityKind::Project => self.projects.module_mut().delete_with(id, gate),
            EntityKind::LearningTopic => self.learning.delete_with(id, gate),
            EntityKind::JournalEntry => self.journal.delete_with(id, gate),
        }
    }

    /// Fresh dashboard projection.
    pub fn dashboard(&self, user: Option<&User>) -> DashboardSummary {
        dashboard::summarize(self, user)
    }
}
