//! Project tracker: card grid and Kanban board over one store.

use log::debug;

use crate::form::{FormDefaults, ProjectDraft};
use crate::kanban::{self, BoardView, DragEndEvent, DragOutcome};
use crate::model::project::Project;

use super::CrudModule;

/// Presentation of the project collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Card,
    Kanban,
}

#[derive(Debug)]
pub struct ProjectsController {
    module: CrudModule<ProjectDraft>,
    view_mode: ViewMode,
}

impl ProjectsController {
    pub fn new(records: Vec<Project>, defaults: FormDefaults) -> Self {
        Self {
            module: CrudModule::new(records, defaults),
            view_mode: ViewMode::default(),
        }
    }

    /// Create/edit/delete entry points.
    pub fn module(&self) -> &CrudModule<ProjectDraft> {
        &self.module
    }

    pub fn module_mut(&mut self) -> &mut CrudModule<ProjectDraft> {
        &mut self.module
    }

    pub fn records(&self) -> &[Project] {
        self.module.records()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches presentation only; collection and open form are kept.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!("event=view_mode module=projects status=ok mode={mode:?}");
        self.view_mode = mode;
    }

    /// Lanes derived from the live statuses.
    pub fn board(&self) -> BoardView<'_> {
        kanban::partition(self.module.store())
    }

    pub fn on_drag_end(&mut self, event: &DragEndEvent) -> DragOutcome {
        kanban::apply_drag_end(self.module.store_mut(), event)
    }
}
