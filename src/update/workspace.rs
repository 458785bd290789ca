//! Workspace message handlers (tabs)

use crate::commands::Cmd;
use crate::messages::WorkspaceMsg;
use crate::model::{AppModel, CloseOutcome, ToastKind};

use super::sync_find;

/// Handle tab messages
pub fn update_workspace(model: &mut AppModel, msg: WorkspaceMsg) -> Option<Cmd> {
    match msg {
        WorkspaceMsg::NewTab => {
            let id = model.workspace.create_document();
            tracing::debug!(%id, count = model.workspace.document_count(), "new tab");
            sync_find(model);
            Some(Cmd::Redraw)
        }

        WorkspaceMsg::CloseTab(id) => match model.workspace.close_document(id) {
            Ok(CloseOutcome::Closed) => {
                tracing::debug!(%id, active = %model.workspace.active_id(), "closed tab");
                sync_find(model);
                Some(Cmd::Redraw)
            }
            Ok(CloseOutcome::LastDocument) => {
                model.ui.notify(ToastKind::Info, "Only one document is open.");
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!("Close tab failed: {}", e);
                None
            }
        },

        WorkspaceMsg::SwitchTab(id) => {
            if id == model.workspace.active_id() {
                return None;
            }
            match model.workspace.set_active_document(id) {
                Ok(()) => {
                    sync_find(model);
                    Some(Cmd::Redraw)
                }
                Err(e) => {
                    tracing::warn!("Switch tab failed: {}", e);
                    None
                }
            }
        }
    }
}
