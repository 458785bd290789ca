//! UI message handlers (theme, toasts, loading indicator, analysis panel)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleTheme => {
            model.ui.dark_mode = !model.ui.dark_mode;
            model.config.dark_mode = model.ui.dark_mode;
            tracing::debug!(dark_mode = model.ui.dark_mode, "theme toggled");
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
        }

        UiMsg::ExpireToasts => {
            if model.ui.expire_toasts() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::LoadingElapsed(ticket) => {
            if model.ui.finish_loading(ticket) {
                Some(Cmd::Redraw)
            } else {
                tracing::trace!(?ticket, "stale loading timer ignored");
                None
            }
        }

        UiMsg::SetWordQuery(word) => {
            model.ui.word_query = word;
            Some(Cmd::Redraw)
        }
    }
}
