//! Document message handlers (edits, undo/redo)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{AppModel, TextChange, ToastKind, WorkspaceError};

use super::sync_find;

/// Handle document messages on the active document
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let id = model.workspace.active_id();

    match msg {
        DocumentMsg::SetText(text) => match model.workspace.set_text(id, TextChange::Edit(text)) {
            Ok(true) => {
                sync_find(model);
                Some(Cmd::Redraw)
            }
            Ok(false) => None,
            Err(e) => {
                tracing::warn!("Edit rejected: {}", e);
                None
            }
        },

        DocumentMsg::Undo => match model.workspace.undo(id) {
            Ok(_) => {
                sync_find(model);
                model.ui.notify(ToastKind::Success, "Undo successful!");
                Some(Cmd::Redraw)
            }
            Err(WorkspaceError::NothingToUndo) => {
                model.ui.notify(ToastKind::Warning, "Nothing to undo.");
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!("Undo failed: {}", e);
                None
            }
        },

        DocumentMsg::Redo => match model.workspace.redo(id) {
            Ok(_) => {
                sync_find(model);
                model.ui.notify(ToastKind::Success, "Redo successful!");
                Some(Cmd::Redraw)
            }
            Err(WorkspaceError::NothingToRedo) => {
                model.ui.notify(ToastKind::Warning, "Nothing to redo.");
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!("Redo failed: {}", e);
                None
            }
        },
    }
}
