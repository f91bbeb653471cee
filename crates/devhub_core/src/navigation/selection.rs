//! List ↔ detail state machine.

use log::debug;

use crate::model::EntityId;

/// Which surface a list/detail module shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    List,
    Detail(EntityId),
}

/// Tracks the selected record of a list/detail module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: ViewState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<&EntityId> {
        match &self.state {
            ViewState::Detail(id) => Some(id),
            ViewState::List => None,
        }
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Opens the detail view of `id`.
    pub fn select(&mut self, id: EntityId) {
        debug!("event=select module=navigation status=ok id={id}");
        self.state = ViewState::Detail(id);
    }

    /// Returns to the list.
    pub fn back(&mut self) {
        self.state = ViewState::List;
    }

    /// Reacts to a completed delete of `id`.
    pub fn on_deleted(&mut self, id: &EntityId) {
        if self.is_selected(id) {
            debug!("event=selection_cleared module=navigation status=ok id={id}");
            self.state = ViewState::List;
        }
    }

    /// Reacts to a saved edit of `id`.
    ///
    /// The detail view resolves its record from the live store, so an edit
    /// of the selected id is already visible and no transition happens.
    pub fn on_saved(&mut self, _id: &EntityId) {}
}
