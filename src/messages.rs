//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::export::ExportFormat;
use crate::model::{DocumentId, LoadingTicket};
use crate::transform::TransformKind;

/// Document messages (edits and history travel on the active document)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Replace the text with what the user typed (a plain edit)
    SetText(String),
    /// Step back one history entry
    Undo,
    /// Step forward one history entry
    Redo,
}

/// Tab management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceMsg {
    /// Open an empty document and switch to it
    NewTab,
    /// Close a document (ignored when it is the only one)
    CloseTab(DocumentId),
    /// Make a document active
    SwitchTab(DocumentId),
}

/// Find/replace panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindMsg {
    Open,
    Close,
    SetQuery(String),
    SetReplacement(String),
    ToggleRegex,
    ToggleCaseSensitive,
    ToggleWholeWord,
    /// Select the next match, wrapping around
    FindNext,
    /// Replace the current match only
    ReplaceCurrent,
    /// Replace every match
    ReplaceAll,
}

/// UI messages (theme, toasts, loading indicator, analysis panel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    ToggleTheme,
    /// Periodic tick that drops expired toasts
    ExpireToasts,
    /// A loading indicator's minimum display time has passed
    LoadingElapsed(LoadingTicket),
    /// Word counted by the analysis panel
    SetWordQuery(String),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
    Workspace(WorkspaceMsg),
    Find(FindMsg),
    /// Run a one-shot transform over the active document
    Transform(TransformKind),
    Ui(UiMsg),
    /// Prepare a download of the active document
    Export(ExportFormat),
}
