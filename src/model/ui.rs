//! UI state - toast notifications, the loading indicator, theme flag

use std::time::{Duration, Instant};

/// Default lifetime of a toast
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

/// A transient, non-blocking notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    /// The message text
    pub text: String,
    /// When this toast expires
    pub expires_at: Instant,
}

impl Toast {
    /// Create a new toast with the given lifetime
    pub fn new(kind: ToastKind, text: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this toast has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Identifies one showing of the loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTicket(pub u64);

/// A loading indicator that stays up for at least `min_duration`
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    pub ticket: LoadingTicket,
    pub message: String,
    pub shown_at: Instant,
    pub min_duration: Duration,
}

impl LoadingIndicator {
    /// Time left before the indicator may be hidden
    pub fn remaining(&self) -> Duration {
        self.min_duration.saturating_sub(self.shown_at.elapsed())
    }
}

/// UI state - notifications and the loading indicator
#[derive(Debug, Clone)]
pub struct UiState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Lifetime given to new toasts
    pub toast_duration: Duration,
    /// Currently shown loading indicator (if any)
    pub loading: Option<LoadingIndicator>,
    /// Dark theme enabled (the persisted preference)
    pub dark_mode: bool,
    /// Word whose occurrences the analysis panel counts
    pub word_query: String,
    next_ticket: u64,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            toast_duration: TOAST_DURATION,
            loading: None,
            dark_mode: false,
            word_query: String::new(),
            next_ticket: 1,
        }
    }

    /// Queue a toast
    pub fn notify(&mut self, kind: ToastKind, text: impl Into<String>) {
        let toast = Toast::new(kind, text, self.toast_duration);
        tracing::debug!(kind = kind.label(), text = %toast.text, "toast");
        self.toasts.push(toast);
    }

    /// Drop expired toasts. Returns true if any were removed (needs redraw)
    pub fn expire_toasts(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    /// The most recent toast
    pub fn last_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Show the loading indicator, replacing (and so cancelling) any older one
    pub fn begin_loading(&mut self, message: impl Into<String>, min_duration: Duration) -> LoadingTicket {
        let ticket = LoadingTicket(self.next_ticket);
        self.next_ticket += 1;
        self.loading = Some(LoadingIndicator {
            ticket,
            message: message.into(),
            shown_at: Instant::now(),
            min_duration,
        });
        ticket
    }

    /// A minimum-display timer fired. Hides the indicator only if the timer
    /// belongs to the indicator still showing; returns whether it was hidden.
    pub fn finish_loading(&mut self, ticket: LoadingTicket) -> bool {
        match &self.loading {
            Some(indicator) if indicator.ticket == ticket => {
                self.loading = None;
                true
            }
            _ => false,
        }
    }

    /// Tear the indicator down; any pending timer for it becomes a no-op
    pub fn cancel_loading(&mut self) {
        self.loading = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
