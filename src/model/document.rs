//! Document model - a text buffer and its linear undo history
//!
//! The visible text is always `history[history_index]`, so the history and
//! the buffer can never disagree. Snapshots are `Rope`s: cloning one shares
//! its chunks, which keeps a long history cheap.

use ropey::Rope;

/// Unique identifier for a document, stable for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Document state - the snapshot history and tab metadata
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    /// Tab label, "Document N"
    pub display_name: String,
    /// Text snapshots; entry 0 is the empty document
    history: Vec<Rope>,
    history_index: usize,
    /// Incremented whenever the visible text changes (edit, undo or redo)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document with a single-entry history
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            display_name: format!("Document {}", id.0),
            history: vec![Rope::new()],
            history_index: 0,
            revision: 0,
        }
    }

    /// The current text
    #[inline]
    pub fn text(&self) -> &Rope {
        &self.history[self.history_index]
    }

    /// The current text as an owned string (for scanning and transforms)
    pub fn text_string(&self) -> String {
        self.text().to_string()
    }

    #[inline]
    pub fn history_index(&self) -> usize {
        self.history_index
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// All snapshots, oldest first
    pub fn history(&self) -> &[Rope] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    /// Record a plain edit: drop everything after the current entry, then
    /// append `text` as the newest snapshot.
    ///
    /// Returns false (and records nothing) when `text` equals the current text.
    pub(crate) fn push_snapshot(&mut self, text: Rope, limit: Option<usize>) -> bool {
        if *self.text() == text {
            return false;
        }

        self.history.truncate(self.history_index + 1);
        self.history.push(text);

        if let Some(limit) = limit.filter(|&limit| limit > 0) {
            let excess = self.history.len().saturating_sub(limit);
            if excess > 0 {
                self.history.drain(..excess);
            }
        }

        self.history_index = self.history.len() - 1;
        self.revision += 1;
        true
    }

    /// Move the history pointer without touching the snapshot list.
    ///
    /// The caller has checked that `index` is in range.
    pub(crate) fn travel_to(&mut self, index: usize) -> bool {
        debug_assert!(index < self.history.len());
        if index == self.history_index {
            return false;
        }
        let changed = self.history[index] != self.history[self.history_index];
        self.history_index = index;
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Number of lines in the current text
    pub fn line_count(&self) -> usize {
        self.text().len_lines()
    }
}
