//! Snippet vault: list/detail navigation over the snippet store.
//!
//! # Invariants
//! - The detail view always shows the live record for the selected id; if
//!   that id disappears the list is shown.
//! - Selecting an id that is not in the store leaves the view state alone.
//! - Search only affects the list view and never touches the selection.

use log::debug;

use crate::confirm::{ConfirmationGate, Decision, DeletePrompt, DeleteResolution};
use crate::form::{FormDefaults, FormMode, FormReconciler, SnippetDraft, Submitted};
use crate::model::clock::Clock;
use crate::model::id::IdGenerator;
use crate::model::snippet::Snippet;
use crate::model::EntityId;
use crate::navigation::{SearchFilter, SelectionController, ViewState};
use crate::store::EntityStore;

use super::{CrudModule, SubmitError};

/// What the snippet page renders right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetView<'a> {
    /// Filtered list, collection order.
    List(Vec<&'a Snippet>),
    Detail(&'a Snippet),
}

#[derive(Debug)]
pub struct SnippetsController {
    module: CrudModule<SnippetDraft>,
    selection: SelectionController,
    search: SearchFilter,
}

impl SnippetsController {
    pub fn new(records: Vec<Snippet>, defaults: FormDefaults) -> Self {
        Self {
            module: CrudModule::new(records, defaults),
            selection: SelectionController::new(),
            search: SearchFilter::default(),
        }
    }

    pub fn store(&self) -> &EntityStore<Snippet> {
        self.module.store()
    }

    pub(crate) fn store_mut(&mut self) -> &mut EntityStore<Snippet> {
        self.module.store_mut()
    }

    pub fn state(&self) -> &ViewState {
        self.selection.state()
    }

    /// Opens the detail view for `id`. Returns `false` and keeps the
    /// current state when no such snippet exists.
    pub fn select(&mut self, id: EntityId) -> bool {
        if !self.module.store().contains(&id) {
            debug!(
                "event=snippet_select module=controller status=unknown_id id={}",
                id
            );
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn back(&mut self) {
        self.selection.back();
    }

    /// Live record for the selected id.
    pub fn selected(&self) -> Option<&Snippet> {
        self.selection
            .selected_id()
            .and_then(|id| self.module.store().get(id))
    }

    pub fn view(&self) -> SnippetView<'_> {
        match self.selected() {
            Some(snippet) => SnippetView::Detail(snippet),
            None => SnippetView::List(self.filtered()),
        }
    }

    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    /// Replaces the search term and returns the recomputed list.
    pub fn set_filter(&mut self, term: impl Into<String>) -> Vec<&Snippet> {
        self.search.set_term(term);
        self.filtered()
    }

    /// Snippets whose title matches the current term.
    pub fn filtered(&self) -> Vec<&Snippet> {
        self.search.apply(self.module.store())
    }

    pub fn open_create(&mut self) -> &mut FormReconciler<SnippetDraft> {
        self.module.open_create()
    }

    pub fn open_edit(&mut self, id: &EntityId) -> Option<&mut FormReconciler<SnippetDraft>> {
        self.module.open_edit(id)
    }

    pub fn form(&self) -> Option<&FormReconciler<SnippetDraft>> {
        self.module.form()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormReconciler<SnippetDraft>> {
        self.module.form_mut()
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        self.module.form_mode()
    }

    pub fn cancel_form(&mut self) {
        self.module.cancel_form();
    }

    pub fn submit_form(
        &mut self,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Submitted<Snippet>, SubmitError> {
        let submitted = self.module.submit_form(ids, clock)?;
        self.selection.on_saved(&submitted.record().id);
        Ok(submitted)
    }

    pub fn request_delete(&mut self, id: EntityId) -> &DeletePrompt {
        self.module.request_delete(id)
    }

    pub fn pending_delete(&self) -> Option<&DeletePrompt> {
        self.module.pending_delete()
    }

    pub fn resolve_delete(&mut self, decision: Decision) -> Option<DeleteResolution> {
        let (id, resolution) = self.module.resolve_delete(decision)?;
        if resolution.is_deleted() {
            self.selection.on_deleted(&id);
        }
        Some(resolution)
    }

    pub fn delete_with(
        &mut self,
        id: EntityId,
        gate: &mut dyn ConfirmationGate,
    ) -> DeleteResolution {
        let decision = gate.confirm(self.request_delete(id));
        self.resolve_delete(decision)
            .unwrap_or(DeleteResolution::Declined)
    }
}
