//! Core logic for the personal developer hub.
//!
//! Four content modules (snippets, projects, learning topics, journal
//! entries) share one in-memory store shape, one form reconciler and one
//! delete confirmation flow. Nothing here touches the network or disk
//! except the optional theme preference file and the log directory.

pub mod config;
pub mod confirm;
pub mod controller;
pub mod dashboard;
pub mod fixtures;
pub mod form;
pub mod kanban;
pub mod logging;
pub mod markdown;
pub mod model;
pub mod navigation;
pub mod session;
pub mod store;
pub mod workspace;

pub use config::{IdStrategy, WorkspaceConfig};
pub use confirm::{ConfirmationGate, Decision, DeletePrompt, DeleteResolution};
pub use controller::{
    CrudModule, JournalController, LearningController, ProjectsController, SnippetView,
    SnippetsController, SubmitError, ViewMode,
};
pub use dashboard::DashboardSummary;
pub use form::{FormMode, FormReconciler, Submitted, ValidationError};
pub use kanban::{DragEndEvent, DragLocation, DragOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::journal::JournalEntry;
pub use model::learning::LearningTopic;
pub use model::project::{Project, ProjectStatus};
pub use model::snippet::Snippet;
pub use model::{Entity, EntityId, EntityKind};
pub use session::{AppSession, Page, Theme, User};
pub use store::{EntityStore, MutationOutcome};
pub use workspace::{EntityRecord, Workspace};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
