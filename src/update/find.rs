//! Find/replace message handlers

use crate::commands::Cmd;
use crate::messages::FindMsg;
use crate::model::{AppModel, TextChange, ToastKind};
use crate::search::{SearchError, SearchOptions};

use super::sync_find;

const EMPTY_FIELDS: &str = "Text area or \"Find\" field cannot be empty.";
const EMPTY_FIELDS_REPLACE: &str =
    "Text area or \"Find\" field cannot be empty for find and replace.";
const NO_CURRENT_MATCH: &str = "No current match selected. Use \"Find Next\" first.";

/// Handle find/replace panel messages
pub fn update_find(model: &mut AppModel, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::Open => {
            let result = model.find.open(model.workspace.active_document());
            report_scan(model, result);
            Some(Cmd::Redraw)
        }

        FindMsg::Close => {
            model.find.close();
            Some(Cmd::Redraw)
        }

        FindMsg::SetQuery(query) => {
            let result = model
                .find
                .set_query(query, model.workspace.active_document());
            report_scan(model, result);
            Some(Cmd::Redraw)
        }

        FindMsg::SetReplacement(replacement) => {
            model.find.set_replacement(replacement);
            Some(Cmd::Redraw)
        }

        FindMsg::ToggleRegex => toggle_option(model, |o| o.use_regex = !o.use_regex),
        FindMsg::ToggleCaseSensitive => {
            toggle_option(model, |o| o.case_sensitive = !o.case_sensitive)
        }
        FindMsg::ToggleWholeWord => toggle_option(model, |o| o.whole_word = !o.whole_word),

        FindMsg::FindNext => {
            if !has_search_input(model) {
                model.ui.notify(ToastKind::Warning, EMPTY_FIELDS);
                return Some(Cmd::Redraw);
            }
            match model.find.find_next(model.workspace.active_document()) {
                Ok(index) => {
                    let total = model.find.match_count();
                    model
                        .ui
                        .notify(ToastKind::Info, format!("Match {} of {}", index + 1, total));
                }
                Err(SearchError::NoMatch) => {
                    model.ui.notify(ToastKind::Info, "No matches found.");
                }
                Err(e) => search_error(model, "Search error", &e),
            }
            Some(Cmd::Redraw)
        }

        FindMsg::ReplaceCurrent => {
            if !has_search_input(model) {
                model.ui.notify(ToastKind::Warning, EMPTY_FIELDS);
                return Some(Cmd::Redraw);
            }
            match model.find.replace_current(model.workspace.active_document()) {
                Ok(text) => {
                    apply_text(model, text);
                    model.ui.notify(ToastKind::Success, "Current match replaced!");
                }
                Err(SearchError::Cursor { .. }) => {
                    model.ui.notify(ToastKind::Warning, NO_CURRENT_MATCH);
                }
                Err(e) => search_error(model, "Replace error", &e),
            }
            Some(Cmd::Redraw)
        }

        FindMsg::ReplaceAll => {
            if !has_search_input(model) {
                model.ui.notify(ToastKind::Warning, EMPTY_FIELDS_REPLACE);
                return Some(Cmd::Redraw);
            }
            match model.find.replace_all(model.workspace.active_document()) {
                Ok((text, count)) => {
                    apply_text(model, text);
                    // Replace-all finishes the find session
                    model.find.close();
                    let message = format!(
                        "{} occurrence(s) of \"{}\" replaced with \"{}\"!",
                        count, model.find.query, model.find.replacement
                    );
                    model.ui.notify(ToastKind::Success, message);
                }
                Err(e) => search_error(model, "Replace error", &e),
            }
            Some(Cmd::Redraw)
        }
    }
}

fn toggle_option(model: &mut AppModel, toggle: impl FnOnce(&mut SearchOptions)) -> Option<Cmd> {
    let mut options = model.find.options;
    toggle(&mut options);
    let result = model
        .find
        .set_options(options, model.workspace.active_document());
    report_scan(model, result);
    Some(Cmd::Redraw)
}

fn has_search_input(model: &AppModel) -> bool {
    !model.find.query.trim().is_empty() && !model.text().trim().is_empty()
}

/// Apply proposed text to the active document as a plain edit
fn apply_text(model: &mut AppModel, text: String) {
    let id = model.workspace.active_id();
    match model.workspace.set_text(id, TextChange::Edit(text)) {
        Ok(_) => sync_find(model),
        Err(e) => tracing::warn!("Failed to apply replacement: {}", e),
    }
}

/// Surface compile errors from a display rescan
fn report_scan(model: &mut AppModel, result: Result<usize, SearchError>) {
    match result {
        Ok(count) => tracing::trace!(count, "display scan"),
        Err(e) => search_error(model, "Search error", &e),
    }
}

fn search_error(model: &mut AppModel, prefix: &str, err: &SearchError) {
    let detail = match err {
        SearchError::Pattern(inner) => inner.to_string(),
        other => other.to_string(),
    };
    tracing::debug!(%err, "search failed");
    model
        .ui
        .notify(ToastKind::Error, format!("{}: {}", prefix, detail));
}
