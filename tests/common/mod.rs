//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use textsmith::config::EditorConfig;
use textsmith::messages::{DocumentMsg, FindMsg, Msg};
use textsmith::model::{AppModel, ToastKind};
use textsmith::update::update;
use textsmith::Cmd;

/// Config with a near-zero loading delay so tests never wait on timers
pub fn test_config() -> EditorConfig {
    EditorConfig {
        loading_min_ms: 1,
        ..EditorConfig::default()
    }
}

/// Create a test model whose only document holds `text`
pub fn test_model(text: &str) -> AppModel {
    AppModel::with_text(test_config(), text)
}

/// Run a sequence of messages, returning the last command
pub fn send(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}

/// Type `text` into the active document as a plain edit
pub fn type_text(model: &mut AppModel, text: &str) {
    update(model, Msg::Document(DocumentMsg::SetText(text.to_string())));
}

/// Open the find panel with `query`
pub fn search(model: &mut AppModel, query: &str) {
    send(
        model,
        [
            Msg::Find(FindMsg::Open),
            Msg::Find(FindMsg::SetQuery(query.to_string())),
        ],
    );
}

/// Kind and text of the most recent toast
pub fn last_toast(model: &AppModel) -> Option<(ToastKind, String)> {
    model
        .ui
        .last_toast()
        .map(|toast| (toast.kind, toast.text.clone()))
}

/// Assert the most recent toast
pub fn assert_toast(model: &AppModel, kind: ToastKind, text: &str) {
    assert_eq!(last_toast(model), Some((kind, text.to_string())));
}
