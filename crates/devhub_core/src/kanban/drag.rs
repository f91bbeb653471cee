//! Drag-end handling.

use log::{debug, info};

use crate::model::project::{Project, ProjectStatus};
use crate::model::EntityId;
use crate::store::{EntityStore, MutationOutcome};

/// A lane plus a card slot inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub lane: ProjectStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(lane: ProjectStatus, index: usize) -> Self {
        Self { lane, index }
    }
}

/// Finished drag as reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEndEvent {
    pub source: DragLocation,
    /// `None` when the card was dropped outside every lane.
    pub destination: Option<DragLocation>,
    pub dragged_id: EntityId,
}

/// What a drag end did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped outside any lane.
    NoDestination,
    /// Dropped into the lane the card already sits in. In-lane reordering
    /// is not kept, so the collection is untouched whatever the index.
    SameLane,
    /// The dragged id is not in the collection.
    UnknownProject,
    /// Status overwritten.
    Moved {
        from: ProjectStatus,
        to: ProjectStatus,
    },
}

impl DragOutcome {
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Applies a drag end to the project collection.
pub fn apply_drag_end(store: &mut EntityStore<Project>, event: &DragEndEvent) -> DragOutcome {
    let Some(destination) = event.destination else {
        debug!(
            "event=drag_end module=kanban status=no_destination id={}",
            event.dragged_id
        );
        return DragOutcome::NoDestination;
    };
    if destination.lane == event.source.lane {
        debug!(
            "event=drag_end module=kanban status=same_lane id={} from_index={} to_index={}",
            event.dragged_id, event.source.index, destination.index
        );
        return DragOutcome::SameLane;
    }

    let Some(from) = store.get(&event.dragged_id).map(|project| project.status) else {
        debug!(
            "event=drag_end module=kanban status=unknown_project id={}",
            event.dragged_id
        );
        return DragOutcome::UnknownProject;
    };
    // The source lane may be stale; the live status decides.
    if from == destination.lane {
        debug!(
            "event=drag_end module=kanban status=same_lane id={} stale_source={:?}",
            event.dragged_id, event.source.lane
        );
        return DragOutcome::SameLane;
    }

    match store.modify(&event.dragged_id, |project| project.status = destination.lane) {
        MutationOutcome::Applied => {
            info!(
                "event=drag_end module=kanban status=moved id={} from={:?} to={:?}",
                event.dragged_id, from, destination.lane
            );
            DragOutcome::Moved {
                from,
                to: destination.lane,
            }
        }
        MutationOutcome::NotFound | MutationOutcome::IdMismatch => DragOutcome::UnknownProject,
    }
}
