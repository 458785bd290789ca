//! Application model - the complete state of the workspace
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod find;
pub mod ui;
pub mod workspace;

pub use document::{Document, DocumentId};
pub use find::{FindReplaceState, ScanTarget, SearchPhase};
pub use ui::{LoadingIndicator, LoadingTicket, Toast, ToastKind, UiState};
pub use workspace::{CloseOutcome, TextChange, Workspace, WorkspaceError};

use std::time::Duration;

use crate::config::EditorConfig;
use crate::stats::{self, TextStats};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Open documents and their histories
    pub workspace: Workspace,
    /// Find/replace panel session for the active document
    pub find: FindReplaceState,
    /// UI state (toasts, loading indicator, theme)
    pub ui: UiState,
    /// Persisted configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with a single empty document
    pub fn new(config: EditorConfig) -> Self {
        let mut ui = UiState::new();
        ui.dark_mode = config.dark_mode;
        ui.toast_duration = Duration::from_millis(config.toast_duration_ms);

        Self {
            workspace: Workspace::with_history_limit(config.history_limit),
            find: FindReplaceState::new(),
            ui,
            config,
        }
    }

    /// Create a model whose first document holds `text`
    pub fn with_text(config: EditorConfig, text: &str) -> Self {
        let mut model = Self::new(config);
        let id = model.workspace.active_id();
        if let Err(e) = model
            .workspace
            .set_text(id, TextChange::Edit(text.to_string()))
        {
            tracing::warn!("Failed to seed document {}: {}", id, e);
        }
        model
    }

    /// The active document (read-only)
    #[inline]
    pub fn document(&self) -> &Document {
        self.workspace.active_document()
    }

    /// Current text of the active document
    pub fn text(&self) -> String {
        self.document().text_string()
    }

    /// Minimum time the loading indicator stays visible
    pub fn loading_min_duration(&self) -> Duration {
        Duration::from_millis(self.config.loading_min_ms)
    }

    /// Highlight overlay for the active document (None when panel is closed)
    pub fn highlight(&self) -> Option<String> {
        self.find.highlight(self.document())
    }

    /// Analysis panel counts for the active document
    pub fn stats(&self) -> TextStats {
        TextStats::compute(&self.text())
    }

    /// Occurrences of the analysis panel's word in the active document
    pub fn word_occurrences(&self) -> usize {
        stats::word_occurrences(&self.text(), &self.ui.word_query)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
