//! Status-partitioned board view.

use crate::model::project::{Project, ProjectStatus};

/// Projects in one lane, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneView<'a> {
    pub status: ProjectStatus,
    pub cards: Vec<&'a Project>,
}

impl LaneView<'_> {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card position of `id` inside this lane.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|project| project.id == id)
    }
}

/// All three lanes, canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub lanes: [LaneView<'a>; 3],
}

impl<'a> BoardView<'a> {
    pub fn lane(&self, status: ProjectStatus) -> &LaneView<'a> {
        // `partition` fills lanes in `ProjectStatus::ALL` order.
        let index = ProjectStatus::ALL
            .iter()
            .position(|candidate| *candidate == status)
            .unwrap_or_default();
        &self.lanes[index]
    }

    /// Lane that currently shows the project `id`.
    pub fn lane_of(&self, id: &str) -> Option<ProjectStatus> {
        self.lanes
            .iter()
            .find(|lane| lane.index_of(id).is_some())
            .map(|lane| lane.status)
    }
}

/// Builds the board from the live collection.
pub fn partition<'a, I>(projects: I) -> BoardView<'a>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut lanes = ProjectStatus::ALL.map(|status| LaneView {
        status,
        cards: Vec::new(),
    });
    for project in projects {
        for lane in lanes.iter_mut() {
            if lane.status == project.status {
                lane.cards.push(project);
            }
        }
    }
    BoardView { lanes }
}
