//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod export;
mod find;
mod transform;
mod ui;
mod workspace;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SearchSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use export::update_export;
pub use find::update_find;
pub use transform::update_transform;
pub use ui::update_ui;
pub use workspace::update_workspace;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Workspace(m) => workspace::update_workspace(model, m),
        Msg::Find(m) => find::update_find(model, m),
        Msg::Transform(kind) => transform::update_transform(model, kind),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::Export(format) => export::update_export(model, format),
    }
}

/// Tell the find session the active document's text may have changed.
///
/// Called after every successful mutation and tab switch so the overlay
/// tracks the live text.
pub(crate) fn sync_find(model: &mut AppModel) {
    let doc = model.workspace.active_document();
    if let Err(e) = model.find.text_changed(doc) {
        tracing::debug!("Rescan after text change failed: {}", e);
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after search state and logs diffs for debugging.
/// Filters out noisy messages like ExpireToasts from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::ExpireToasts));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SearchSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SearchSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "search", %diff, "state changed");
    }

    let doc = model.document();
    debug_assert!(
        doc.history_index() < doc.history_len(),
        "{}: history index {} out of bounds ({} entries)",
        msg_name,
        doc.history_index(),
        doc.history_len()
    );

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Document::Undo`
/// - `Find::SetQuery("cat")`
/// - `Transform::Uppercase`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Workspace(m) => format!("Workspace::{:?}", m),
        Msg::Find(m) => format!("Find::{:?}", m),
        Msg::Transform(kind) => format!("Transform::{:?}", kind),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Export(format) => format!("Export::{:?}", format),
    }
}
