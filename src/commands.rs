//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::export::ExportPayload;
use crate::model::LoadingTicket;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the workspace
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Start a timer for the loading indicator.
    /// After delay_ms, sends Msg::Ui(LoadingElapsed(ticket))
    HideLoadingAfter { ticket: LoadingTicket, delay_ms: u64 },
    /// Write an export payload to disk
    WriteExport(ExportPayload),
    /// Persist the current configuration
    SaveConfig,
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // The timer sends LoadingElapsed, which redraws when it lands
            Cmd::HideLoadingAfter { .. } => false,
            Cmd::WriteExport(_) => false,
            Cmd::SaveConfig => false,
            Cmd::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::SaveConfig, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::SaveConfig, Cmd::Quit]).needs_redraw());
        assert!(!Cmd::HideLoadingAfter {
            ticket: LoadingTicket(1),
            delay_ms: 100
        }
        .needs_redraw());
    }
}
