use devhub_core::confirm::{AlwaysConfirm, AlwaysDecline};
use devhub_core::fixtures;
use devhub_core::form::FormDefaults;
use devhub_core::model::clock::FixedClock;
use devhub_core::model::id::SequentialIdGenerator;
use devhub_core::navigation::ViewState;
use devhub_core::{
    Decision, DeleteResolution, EntityId, SnippetView, SnippetsController, SubmitError,
};

fn controller() -> SnippetsController {
    SnippetsController::new(fixtures::snippets(), FormDefaults::default())
}

fn titles(list: &[&devhub_core::Snippet]) -> Vec<String> {
    list.iter().map(|snippet| snippet.title.clone()).collect()
}

#[test]
fn select_and_back_switch_between_list_and_detail() {
    let mut snippets = controller();
    assert_eq!(snippets.state(), &ViewState::List);

    snippets.select(EntityId::new("snippet-2"));
    assert_eq!(snippets.state(), &ViewState::Detail(EntityId::new("snippet-2")));
    match snippets.view() {
        SnippetView::Detail(snippet) => assert_eq!(snippet.title, "Python Flask Minimal App"),
        SnippetView::List(_) => panic!("detail view expected"),
    }

    snippets.back();
    assert_eq!(snippets.state(), &ViewState::List);
    assert!(matches!(snippets.view(), SnippetView::List(list) if list.len() == 2));
}

#[test]
fn selecting_unknown_snippet_keeps_current_view() {
    let mut snippets = controller();
    assert!(!snippets.select(EntityId::new("snippet-404")));
    assert_eq!(snippets.state(), &ViewState::List);
    assert!(matches!(snippets.view(), SnippetView::List(_)));

    assert!(snippets.select(EntityId::new("snippet-1")));
    assert!(!snippets.select(EntityId::new("snippet-404")));
    assert_eq!(snippets.state(), &ViewState::Detail(EntityId::new("snippet-1")));
    assert!(matches!(snippets.view(), SnippetView::Detail(snippet) if snippet.id == "snippet-1"));
}

#[test]
fn deleting_selected_snippet_returns_to_list() {
    let mut snippets = controller();
    snippets.select(EntityId::new("snippet-1"));

    let resolution = snippets.delete_with(EntityId::new("snippet-1"), &mut AlwaysConfirm);

    assert_eq!(resolution, DeleteResolution::Deleted);
    assert_eq!(snippets.state(), &ViewState::List);
    assert_eq!(snippets.store().len(), 1);
}

#[test]
fn deleting_other_snippet_keeps_detail_view() {
    let mut snippets = controller();
    snippets.select(EntityId::new("snippet-1"));

    let resolution = snippets.delete_with(EntityId::new("snippet-2"), &mut AlwaysConfirm);

    assert!(resolution.is_deleted());
    assert_eq!(snippets.state(), &ViewState::Detail(EntityId::new("snippet-1")));
    assert_eq!(snippets.selected().unwrap().id, "snippet-1");
}

#[test]
fn declined_delete_keeps_collection_and_selection() {
    let mut snippets = controller();
    snippets.select(EntityId::new("snippet-1"));
    let before = snippets.store().clone();

    let resolution = snippets.delete_with(EntityId::new("snippet-1"), &mut AlwaysDecline);

    assert_eq!(resolution, DeleteResolution::Declined);
    assert_eq!(snippets.store(), &before);
    assert_eq!(snippets.state(), &ViewState::Detail(EntityId::new("snippet-1")));
}

#[test]
fn two_phase_delete_shows_snippet_prompt() {
    let mut snippets = controller();
    let prompt = snippets.request_delete(EntityId::new("snippet-2"));
    assert_eq!(prompt.message, "Are you sure you want to delete this snippet?");
    assert!(snippets.pending_delete().is_some());

    assert_eq!(
        snippets.resolve_delete(Decision::Confirm),
        Some(DeleteResolution::Deleted)
    );
    assert!(snippets.pending_delete().is_none());
    assert_eq!(snippets.resolve_delete(Decision::Confirm), None);
}

#[test]
fn saving_selected_snippet_shows_updated_record_in_detail() {
    let mut snippets = controller();
    let mut ids = SequentialIdGenerator::new();
    snippets.select(EntityId::new("snippet-1"));

    let form = snippets.open_edit(&EntityId::new("snippet-1")).unwrap();
    form.draft_mut().title = "useDebounce, revisited".to_string();
    snippets.submit_form(&mut ids, &FixedClock(0)).unwrap();

    assert_eq!(snippets.state(), &ViewState::Detail(EntityId::new("snippet-1")));
    assert_eq!(snippets.selected().unwrap().title, "useDebounce, revisited");
    assert!(snippets.form().is_none());
}

#[test]
fn saving_other_snippet_from_list_keeps_list() {
    let mut snippets = controller();
    let mut ids = SequentialIdGenerator::new();

    let form = snippets.open_edit(&EntityId::new("snippet-2")).unwrap();
    form.draft_mut().description = "Edited".to_string();
    snippets.submit_form(&mut ids, &FixedClock(0)).unwrap();

    assert_eq!(snippets.state(), &ViewState::List);
}

#[test]
fn submit_without_open_form_is_an_error() {
    let mut snippets = controller();
    let mut ids = SequentialIdGenerator::new();
    let error = snippets
        .submit_form(&mut ids, &FixedClock(0))
        .expect_err("nothing to submit");
    assert_eq!(error, SubmitError::NoOpenForm);
}

#[test]
fn invalid_submit_keeps_form_open() {
    let mut snippets = controller();
    let mut ids = SequentialIdGenerator::new();
    snippets.open_create();

    assert!(snippets.submit_form(&mut ids, &FixedClock(0)).is_err());
    assert!(snippets.form().is_some());

    snippets.cancel_form();
    assert!(snippets.form().is_none());
    assert_eq!(snippets.store().len(), 2);
}

#[test]
fn search_is_case_insensitive_and_never_mutates() {
    let mut snippets = controller();
    snippets.select(EntityId::new("snippet-2"));

    let matches = snippets.set_filter("REACT");
    assert_eq!(titles(&matches), vec!["React Custom Hook: useDebounce"]);

    let none = snippets.set_filter("graphql");
    assert!(none.is_empty());

    let all = snippets.set_filter("");
    assert_eq!(all.len(), 2);
    assert_eq!(snippets.store().len(), 2);
    assert_eq!(snippets.state(), &ViewState::Detail(EntityId::new("snippet-2")));
}

#[test]
fn search_sees_newly_created_snippets() {
    let mut snippets = controller();
    let mut ids = SequentialIdGenerator::new();
    snippets.set_filter("flask");

    let form = snippets.open_create();
    form.draft_mut().title = "Flask blueprints".to_string();
    snippets.submit_form(&mut ids, &FixedClock(0)).unwrap();

    assert_eq!(
        titles(&snippets.filtered()),
        vec!["Flask blueprints", "Python Flask Minimal App"]
    );
}
