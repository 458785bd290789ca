//! Transform handler - one-shot rewrites of the active document

use crate::commands::Cmd;
use crate::model::{AppModel, TextChange, ToastKind};
use crate::transform::{self, TransformError, TransformKind};

use super::sync_find;

/// Run `kind` over the active document and record the result as one edit.
///
/// Heavy transforms show the loading indicator; the work itself runs in this
/// update, so the history entry is captured before any later message.
pub fn update_transform(model: &mut AppModel, kind: TransformKind) -> Option<Cmd> {
    let text = model.text();

    let result = match transform::apply(kind, &text) {
        Ok(result) => result,
        Err(TransformError::EmptyText) => {
            model.ui.notify(ToastKind::Warning, kind.empty_message());
            return Some(Cmd::Redraw);
        }
        Err(e) => {
            tracing::debug!(?kind, %e, "transform failed");
            model.ui.notify(ToastKind::Error, kind.failure_message(&e));
            return Some(Cmd::Redraw);
        }
    };

    let min_duration = model.loading_min_duration();
    let loading = kind
        .loading_message()
        .map(|message| model.ui.begin_loading(message, min_duration));

    let id = model.workspace.active_id();
    match model.workspace.set_text(id, TextChange::Edit(result)) {
        Ok(changed) => {
            tracing::debug!(?kind, changed, "transform applied");
            sync_find(model);
        }
        Err(e) => {
            tracing::warn!("Failed to apply {:?}: {}", kind, e);
            model.ui.cancel_loading();
            return Some(Cmd::Redraw);
        }
    }

    let toast_kind = if kind == TransformKind::Clear {
        ToastKind::Info
    } else {
        ToastKind::Success
    };
    model.ui.notify(toast_kind, kind.success_message());

    match loading {
        Some(ticket) => Some(Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::HideLoadingAfter {
                ticket,
                delay_ms: model.config.loading_min_ms,
            },
        ])),
        None => Some(Cmd::Redraw),
    }
}
