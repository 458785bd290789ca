//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! find/replace sessions and history state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=textsmith::search=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/textsmith/logs/textsmith.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, SearchPhase};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr (stdout carries command output) and
/// respects RUST_LOG. File logging is always at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "textsmith.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of search/history state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub document: u64,
    pub history_index: usize,
    pub history_len: usize,
    pub phase: SearchPhase,
    pub match_count: usize,
}

impl SearchSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let doc = model.document();
        Self {
            document: doc.id.0,
            history_index: doc.history_index(),
            history_len: doc.history_len(),
            phase: model.find.phase(),
            match_count: model.find.match_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SearchSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.document != other.document {
            changes.push(format!("doc: {} → {}", self.document, other.document));
        }
        if self.history_index != other.history_index || self.history_len != other.history_len {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.history_index, self.history_len, other.history_index, other.history_len
            ));
        }
        if self.phase != other.phase {
            changes.push(format!("phase: {:?} → {:?}", self.phase, other.phase));
        }
        if self.match_count != other.match_count {
            changes.push(format!(
                "matches: {} → {}",
                self.match_count, other.match_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextChange;

    #[test]
    fn test_diff_reports_history_move() {
        let mut model = AppModel::default();
        let before = SearchSnapshot::from_model(&model);
        let id = model.workspace.active_id();
        model
            .workspace
            .set_text(id, TextChange::Edit("x".to_string()))
            .unwrap();
        let after = SearchSnapshot::from_model(&model);
        assert_eq!(before.diff(&after).as_deref(), Some("history: 0/1 → 1/2"));
        assert_eq!(after.diff(&after), None);
    }
}
