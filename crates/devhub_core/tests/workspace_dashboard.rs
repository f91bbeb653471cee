use devhub_core::confirm::{AlwaysConfirm, AlwaysDecline};
use devhub_core::fixtures;
use devhub_core::model::clock::FixedClock;
use devhub_core::model::id::SequentialIdGenerator;
use devhub_core::{
    Decision, DeletePrompt, DeleteResolution, EntityId, EntityKind, EntityRecord, IdStrategy,
    LearningTopic, MutationOutcome, ProjectStatus, Workspace, WorkspaceConfig,
};

const NOW: i64 = 1_700_000_000_000;

fn workspace() -> Workspace {
    Workspace::with_sources(
        &WorkspaceConfig::default(),
        Box::new(SequentialIdGenerator::new()),
        Box::new(FixedClock(NOW)),
    )
}

fn topic(id: &str) -> LearningTopic {
    LearningTopic {
        id: EntityId::new(id),
        topic_name: "Rust async".to_string(),
        category: "Backend".to_string(),
        progress: 5,
        notes: String::new(),
    }
}

#[test]
fn seeded_dashboard_matches_fixtures() {
    let workspace = workspace();
    let user = fixtures::user();
    let summary = workspace.dashboard(Some(&user));

    assert_eq!(summary.greeting_name, "Lito");
    assert_eq!(summary.counts.snippets, 2);
    assert_eq!(summary.counts.projects, 3);
    assert_eq!(summary.counts.learning_topics, 3);
    assert_eq!(summary.counts.journal_entries, 2);

    let recent: Vec<&str> = summary
        .recent_projects
        .iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(recent, vec!["project-1", "project-2", "project-3"]);
    assert_eq!(summary.recent_projects[0].status, ProjectStatus::InProgress);

    let journal = summary.latest_journal.expect("journal fixture present");
    assert_eq!(journal.id, "journal-1");
    assert!(journal
        .preview
        .as_deref()
        .unwrap_or("")
        .starts_with("Today I spent"));
}

#[test]
fn dashboard_counts_track_create_and_delete() {
    let mut workspace = workspace();

    let created = workspace.create(EntityRecord::LearningTopic(topic("")));
    assert_eq!(created.kind(), EntityKind::LearningTopic);
    assert_eq!(created.id(), &EntityId::new("learn-new-1"));
    assert_eq!(workspace.dashboard(None).counts.learning_topics, 4);
    assert_eq!(workspace.learning().records()[0].id, "learn-new-1");

    let resolution = workspace.delete(
        EntityKind::Project,
        EntityId::new("project-1"),
        &mut AlwaysConfirm,
    );
    assert_eq!(resolution, DeleteResolution::Deleted);
    let summary = workspace.dashboard(None);
    assert_eq!(summary.counts.projects, 2);
    assert_eq!(summary.recent_projects.len(), 2);
    assert_eq!(summary.greeting_name, "");
}

#[test]
fn create_keeps_caller_supplied_id() {
    let mut workspace = workspace();
    let created = workspace.create(EntityRecord::LearningTopic(topic("learn-rust")));
    assert_eq!(created.id(), &EntityId::new("learn-rust"));
}

#[test]
fn kind_dispatched_update_replaces_in_place() {
    let mut workspace = workspace();
    let mut changed = fixtures::learning_topics().remove(1);
    changed.progress = 100;

    let outcome = workspace.update(&EntityId::new("learn-2"), EntityRecord::LearningTopic(changed));
    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(workspace.learning().records()[1].progress, 100);

    let missing = workspace.update(
        &EntityId::new("learn-404"),
        EntityRecord::LearningTopic(topic("learn-404")),
    );
    assert_eq!(missing, MutationOutcome::NotFound);
    assert_eq!(workspace.learning().records().len(), 3);
}

#[test]
fn declined_delete_changes_nothing() {
    let mut workspace = workspace();
    let resolution = workspace.delete(
        EntityKind::JournalEntry,
        EntityId::new("journal-1"),
        &mut AlwaysDecline,
    );
    assert_eq!(resolution, DeleteResolution::Declined);
    assert_eq!(workspace.journal().records().len(), 2);
}

#[test]
fn delete_prompts_use_module_text() {
    let mut workspace = workspace();
    let mut seen = Vec::new();
    let mut gate = |prompt: &DeletePrompt| {
        seen.push((prompt.kind, prompt.message));
        Decision::Decline
    };
    workspace.delete(EntityKind::Snippet, EntityId::new("snippet-1"), &mut gate);
    workspace.delete(EntityKind::LearningTopic, EntityId::new("learn-1"), &mut gate);

    assert_eq!(
        seen,
        vec![
            (
                EntityKind::Snippet,
                "Are you sure you want to delete this snippet?"
            ),
            (EntityKind::LearningTopic, "Are you sure?"),
        ]
    );
}

#[test]
fn deleting_selected_snippet_through_workspace_clears_selection() {
    let mut workspace = workspace();
    workspace.snippets_mut().select(EntityId::new("snippet-2"));

    let resolution = workspace.delete(
        EntityKind::Snippet,
        EntityId::new("snippet-2"),
        &mut AlwaysConfirm,
    );

    assert!(resolution.is_deleted());
    assert!(workspace.snippets().selected().is_none());
}

#[test]
fn form_submits_use_workspace_id_and_clock() {
    let mut workspace = workspace();
    let draft = workspace.journal_mut().open_create().draft_mut();
    draft.title = "Shipped".to_string();
    draft.content = "Released **v1**.".to_string();

    let entry = workspace.submit_journal_form().unwrap().record().clone();

    assert_eq!(entry.id, "journal-new-1");
    assert_eq!(entry.date, NOW);
    let latest = workspace.dashboard(None).latest_journal.unwrap();
    assert_eq!(latest.id, "journal-new-1");
    assert_eq!(latest.preview.as_deref(), Some("Released v1."));
}

#[test]
fn unseeded_workspace_starts_empty() {
    let config = WorkspaceConfig {
        seed_fixtures: false,
        id_strategy: IdStrategy::Uuid,
        ..WorkspaceConfig::default()
    };
    let mut workspace = Workspace::new(&config);
    let summary = workspace.dashboard(None);
    assert_eq!(summary.counts.snippets, 0);
    assert!(summary.latest_journal.is_none());

    let first = workspace.create(EntityRecord::LearningTopic(topic("")));
    let second = workspace.create(EntityRecord::LearningTopic(topic("")));
    assert!(first.id().as_str().starts_with("learn-"));
    assert_ne!(first.id(), second.id());
}
