//! Integration tests for undo/redo history
//!
//! Covers the history invariant across edits, undo/redo and transforms.

mod common;

use common::{assert_toast, send, test_model, type_text};
use textsmith::messages::{DocumentMsg, Msg};
use textsmith::model::{AppModel, TextChange, ToastKind, Workspace, WorkspaceError};
use textsmith::transform::TransformKind;
use textsmith::update::update;

fn assert_history_invariant(model: &AppModel) {
    let doc = model.document();
    assert!(doc.history_index() < doc.history_len());
    assert_eq!(doc.history()[doc.history_index()], *doc.text());
}

// ============================================================================
// Through update
// ============================================================================

#[test]
fn test_undo_redo_round_trip() {
    let mut model = test_model("");
    for text in ["a", "ab", "abc"] {
        type_text(&mut model, text);
        assert_history_invariant(&model);
    }

    for expected in ["ab", "a", ""] {
        update(&mut model, Msg::Document(DocumentMsg::Undo));
        assert_eq!(model.text(), expected);
        assert_history_invariant(&model);
    }
    assert_toast(&model, ToastKind::Success, "Undo successful!");

    for expected in ["a", "ab", "abc"] {
        update(&mut model, Msg::Document(DocumentMsg::Redo));
        assert_eq!(model.text(), expected);
        assert_history_invariant(&model);
    }
}

#[test]
fn test_undo_at_start_warns() {
    let mut model = test_model("");
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_toast(&model, ToastKind::Warning, "Nothing to undo.");
    assert_eq!(model.document().history_index(), 0);
}

#[test]
fn test_redo_at_end_warns() {
    let mut model = test_model("x");
    update(&mut model, Msg::Document(DocumentMsg::Redo));
    assert_toast(&model, ToastKind::Warning, "Nothing to redo.");
}

#[test]
fn test_edit_after_undo_truncates_redo_branch() {
    let mut model = test_model("");
    type_text(&mut model, "one");
    type_text(&mut model, "two");
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    type_text(&mut model, "three");

    let doc = model.document();
    let history: Vec<String> = doc.history().iter().map(|r| r.to_string()).collect();
    assert_eq!(history, vec!["", "one", "three"]);
    assert!(!doc.can_redo());
}

#[test]
fn test_undo_does_not_record_history() {
    let mut model = test_model("");
    type_text(&mut model, "a");
    type_text(&mut model, "b");
    send(
        &mut model,
        [
            Msg::Document(DocumentMsg::Undo),
            Msg::Document(DocumentMsg::Redo),
            Msg::Document(DocumentMsg::Undo),
        ],
    );
    assert_eq!(model.document().history_len(), 3);
}

#[test]
fn test_identical_edit_records_nothing() {
    let mut model = test_model("same");
    let before = model.document().history_len();
    type_text(&mut model, "same");
    assert_eq!(model.document().history_len(), before);
}

#[test]
fn test_transform_is_single_undo_step() {
    let mut model = test_model("hello world");
    update(&mut model, Msg::Transform(TransformKind::TitleCase));
    assert_eq!(model.text(), "Hello World");

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.text(), "hello world");
    assert_history_invariant(&model);
}

// ============================================================================
// Workspace API
// ============================================================================

#[test]
fn test_set_text_travel_validates_index() {
    let mut ws = Workspace::new();
    let id = ws.active_id();
    ws.set_text(id, TextChange::Edit("x".into())).unwrap();

    assert_eq!(
        ws.set_text(id, TextChange::Travel(5)),
        Err(WorkspaceError::HistoryIndex { index: 5, len: 2 })
    );
    assert_eq!(ws.set_text(id, TextChange::Travel(0)), Ok(true));
    assert_eq!(ws.text(id).unwrap().to_string(), "");
}

#[test]
fn test_history_limit_drops_oldest() {
    let mut ws = Workspace::with_history_limit(Some(3));
    let id = ws.active_id();
    for text in ["a", "b", "c", "d"] {
        ws.set_text(id, TextChange::Edit(text.into())).unwrap();
    }

    let doc = ws.document(id).unwrap();
    let history: Vec<String> = doc.history().iter().map(|r| r.to_string()).collect();
    assert_eq!(history, vec!["b", "c", "d"]);
    assert_eq!(doc.history_index(), 2);
}

#[test]
fn test_histories_are_per_document() {
    let mut ws = Workspace::new();
    let first = ws.active_id();
    ws.set_text(first, TextChange::Edit("first".into())).unwrap();
    let second = ws.create_document();
    ws.set_text(second, TextChange::Edit("second".into())).unwrap();

    ws.undo(first).unwrap();
    assert_eq!(ws.text(first).unwrap().to_string(), "");
    assert_eq!(ws.text(second).unwrap().to_string(), "second");
    assert_eq!(ws.undo(first), Err(WorkspaceError::NothingToUndo));
}
