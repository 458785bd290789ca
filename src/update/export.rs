//! Export handler

use crate::commands::Cmd;
use crate::export::{self, ExportError, ExportFormat};
use crate::model::{AppModel, ToastKind};

pub fn update_export(model: &mut AppModel, format: ExportFormat) -> Option<Cmd> {
    match export::export(&model.text(), format) {
        Ok(payload) => {
            model.ui.notify(
                ToastKind::Success,
                format!("Text saved as {}!", payload.file_name),
            );
            Some(Cmd::batch(vec![Cmd::WriteExport(payload), Cmd::Redraw]))
        }
        Err(ExportError::EmptyText) => {
            model.ui.notify(ToastKind::Warning, "No text to save.");
            Some(Cmd::Redraw)
        }
        Err(e) => {
            tracing::warn!("Export failed: {}", e);
            model.ui.notify(ToastKind::Error, format!("Export failed: {}", e));
            Some(Cmd::Redraw)
        }
    }
}
