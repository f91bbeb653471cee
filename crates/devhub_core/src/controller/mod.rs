//! Per-module view-model controllers.
//!
//! # Responsibility
//! - Own one module's store, its open form and its pending delete.
//! - Route every mutation through the form reconciler or the
//!   confirmation gate.
//!
//! # Invariants
//! - At most one form and one pending delete are open per module.
//! - A controller is the only writer of its store.

pub mod projects;
pub mod snippets;

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::confirm::{self, ConfirmationGate, DeletePrompt, DeleteResolution, PendingDelete};
use crate::form::{Draft, FormDefaults, FormMode, FormReconciler, Submitted, ValidationError};
use crate::form::{JournalDraft, LearningDraft};
use crate::model::clock::Clock;
use crate::model::id::IdGenerator;
use crate::model::{Entity, EntityId};
use crate::store::EntityStore;

pub use projects::{ProjectsController, ViewMode};
pub use snippets::{SnippetView, SnippetsController};

/// Learning tracker: plain list with create/edit/delete.
pub type LearningController = CrudModule<LearningDraft>;

/// Developer journal: plain list with create/edit/delete.
pub type JournalController = CrudModule<JournalDraft>;

/// Failure of a controller-level form submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No form is open.
    NoOpenForm,
    /// Draft rejected; the form stays open.
    Validation(ValidationError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOpenForm => write!(f, "no form is open"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoOpenForm => None,
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store + open form + pending delete for one content module.
#[derive(Debug)]
pub struct CrudModule<D: Draft> {
    store: EntityStore<D::Entity>,
    defaults: FormDefaults,
    form: Option<FormReconciler<D>>,
    pending_delete: Option<PendingDelete>,
}

impl<D: Draft> CrudModule<D> {
    pub fn new(records: Vec<D::Entity>, defaults: FormDefaults) -> Self {
        Self {
            store: EntityStore::seeded(records),
            defaults,
            form: None,
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &EntityStore<D::Entity> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut EntityStore<D::Entity> {
        &mut self.store
    }

    pub fn records(&self) -> &[D::Entity] {
        self.store.as_slice()
    }

    /// Opens an empty create form, replacing any open form.
    pub fn open_create(&mut self) -> &mut FormReconciler<D> {
        self.form.insert(FormReconciler::open(None, &self.defaults))
    }

    /// Opens an edit form for `id`. Returns `None` when `id` is unknown.
    pub fn open_edit(&mut self, id: &EntityId) -> Option<&mut FormReconciler<D>> {
        let entity = self.store.get(id)?;
        let form = FormReconciler::open(Some(entity), &self.defaults);
        Some(self.form.insert(form))
    }

    pub fn form(&self) -> Option<&FormReconciler<D>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormReconciler<D>> {
        self.form.as_mut()
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        self.form.as_ref().map(FormReconciler::mode)
    }

    /// Closes the open form without saving.
    pub fn cancel_form(&mut self) {
        if let Some(form) = self.form.take() {
            form.cancel();
        }
    }

    /// Submits the open form; closes it on success, keeps it on error.
    pub fn submit_form(
        &mut self,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Submitted<D::Entity>, SubmitError> {
        let form = self.form.as_ref().ok_or(SubmitError::NoOpenForm)?;
        let submitted = form.submit(&mut self.store, ids, clock)?;
        self.form = None;
        Ok(submitted)
    }

    /// Starts a delete of `id` and returns the prompt to show.
    ///
    /// A previous unanswered request is dropped (treated as declined).
    pub fn request_delete(&mut self, id: EntityId) -> &DeletePrompt {
        if let Some(previous) = self.pending_delete.take() {
            debug!(
                "event=delete_superseded module=controller status=ok kind={} id={}",
                <D::Entity as Entity>::KIND,
                previous.id()
            );
        }
        let pending = PendingDelete::new(<D::Entity as Entity>::KIND, id);
        self.pending_delete.insert(pending).prompt()
    }

    pub fn pending_delete(&self) -> Option<&DeletePrompt> {
        self.pending_delete.as_ref().map(PendingDelete::prompt)
    }

    /// Answers the pending delete. `None` when nothing was pending.
    pub fn resolve_delete(
        &mut self,
        decision: confirm::Decision,
    ) -> Option<(EntityId, DeleteResolution)> {
        let pending = self.pending_delete.take()?;
        let id = pending.id().clone();
        let resolution = confirm::resolve(&mut self.store, pending, decision);
        Some((id, resolution))
    }

    /// Blocking delete: asks `gate` and applies the answer.
    pub fn delete_with(
        &mut self,
        id: EntityId,
        gate: &mut dyn ConfirmationGate,
    ) -> DeleteResolution {
        let decision = gate.confirm(self.request_delete(id));
        self.resolve_delete(decision)
            .map_or(DeleteResolution::Declined, |(_, resolution)| resolution)
    }
}
