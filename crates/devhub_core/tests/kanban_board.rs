use devhub_core::fixtures;
use devhub_core::form::FormDefaults;
use devhub_core::model::clock::FixedClock;
use devhub_core::model::id::SequentialIdGenerator;
use devhub_core::{
    DragEndEvent, DragLocation, DragOutcome, EntityId, ProjectStatus, ProjectsController, ViewMode,
};

fn controller() -> ProjectsController {
    ProjectsController::new(fixtures::projects(), FormDefaults::default())
}

fn drag(id: &str, from: ProjectStatus, to: Option<(ProjectStatus, usize)>) -> DragEndEvent {
    DragEndEvent {
        source: DragLocation::new(from, 0),
        destination: to.map(|(lane, index)| DragLocation::new(lane, index)),
        dragged_id: EntityId::new(id),
    }
}

fn lane_ids(projects: &ProjectsController, status: ProjectStatus) -> Vec<String> {
    projects
        .board()
        .lane(status)
        .cards
        .iter()
        .map(|card| card.id.to_string())
        .collect()
}

#[test]
fn fixture_board_has_one_card_per_lane_in_canonical_order() {
    let projects = controller();
    let board = projects.board();
    let order: Vec<ProjectStatus> = board.lanes.iter().map(|lane| lane.status).collect();
    assert_eq!(
        order,
        vec![
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::Completed
        ]
    );
    assert_eq!(board.lane(ProjectStatus::Planning).len(), 1);
    assert_eq!(board.lane(ProjectStatus::InProgress).len(), 1);
    assert_eq!(board.lane(ProjectStatus::Completed).len(), 1);
    assert_eq!(board.lane_of("project-3"), Some(ProjectStatus::Planning));
}

#[test]
fn drag_across_lanes_changes_status_only() {
    let mut projects = controller();
    let before = projects.records()[2].clone();

    let outcome = projects.on_drag_end(&drag(
        "project-3",
        ProjectStatus::Planning,
        Some((ProjectStatus::Completed, 0)),
    ));

    assert_eq!(
        outcome,
        DragOutcome::Moved {
            from: ProjectStatus::Planning,
            to: ProjectStatus::Completed
        }
    );
    let after = &projects.records()[2];
    assert_eq!(after.status, ProjectStatus::Completed);
    assert_eq!(after.progress, 10);
    assert_eq!(after.title, before.title);
    assert_eq!(after.tech_stack, before.tech_stack);
    assert!(lane_ids(&projects, ProjectStatus::Planning).is_empty());
    assert_eq!(
        lane_ids(&projects, ProjectStatus::Completed),
        vec!["project-2", "project-3"]
    );
}

#[test]
fn drag_without_destination_is_a_noop() {
    let mut projects = controller();
    let before = projects.records().to_vec();

    let outcome = projects.on_drag_end(&drag("project-1", ProjectStatus::InProgress, None));

    assert_eq!(outcome, DragOutcome::NoDestination);
    assert_eq!(projects.records(), before.as_slice());
}

#[test]
fn drag_within_same_lane_is_a_noop_for_any_index() {
    let mut projects = controller();
    let before = projects.records().to_vec();

    for index in [0, 1, 5] {
        let outcome = projects.on_drag_end(&drag(
            "project-1",
            ProjectStatus::InProgress,
            Some((ProjectStatus::InProgress, index)),
        ));
        assert_eq!(outcome, DragOutcome::SameLane);
    }
    assert_eq!(projects.records(), before.as_slice());
}

#[test]
fn stale_source_lane_into_current_lane_is_a_noop() {
    let mut projects = controller();
    let before = projects.records().to_vec();

    // project-3 is already Planning; the event claims it came from Completed.
    let outcome = projects.on_drag_end(&drag(
        "project-3",
        ProjectStatus::Completed,
        Some((ProjectStatus::Planning, 0)),
    ));

    assert_eq!(outcome, DragOutcome::SameLane);
    assert!(!outcome.is_moved());
    assert_eq!(projects.records(), before.as_slice());
    assert_eq!(lane_ids(&projects, ProjectStatus::Planning), vec!["project-3"]);
}

#[test]
fn drag_of_unknown_project_is_reported() {
    let mut projects = controller();
    let outcome = projects.on_drag_end(&drag(
        "project-404",
        ProjectStatus::Planning,
        Some((ProjectStatus::Completed, 0)),
    ));
    assert_eq!(outcome, DragOutcome::UnknownProject);
    assert!(!outcome.is_moved());
}

#[test]
fn status_change_by_form_and_by_drag_land_in_same_lane() {
    let mut by_drag = controller();
    by_drag.on_drag_end(&drag(
        "project-1",
        ProjectStatus::InProgress,
        Some((ProjectStatus::Completed, 0)),
    ));

    let mut by_form = controller();
    let mut ids = SequentialIdGenerator::new();
    let form = by_form
        .module_mut()
        .open_edit(&EntityId::new("project-1"))
        .unwrap();
    form.draft_mut().status = ProjectStatus::Completed;
    by_form
        .module_mut()
        .submit_form(&mut ids, &FixedClock(0))
        .unwrap();

    assert_eq!(
        lane_ids(&by_drag, ProjectStatus::Completed),
        lane_ids(&by_form, ProjectStatus::Completed)
    );
    assert_eq!(by_drag.records(), by_form.records());
}

#[test]
fn view_toggle_keeps_collection_and_open_form() {
    let mut projects = controller();
    projects.module_mut().open_create().draft_mut().title = "Draft in progress".to_string();

    projects.set_view_mode(ViewMode::Kanban);
    assert_eq!(projects.view_mode(), ViewMode::Kanban);
    projects.set_view_mode(ViewMode::Card);

    assert_eq!(projects.records().len(), 3);
    let form = projects.module().form().unwrap();
    assert_eq!(form.draft().title, "Draft in progress");
}
