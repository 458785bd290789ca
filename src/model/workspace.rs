//! Workspace - the set of open documents (tabs) and the active one
//!
//! This is the only place document text changes. Every mutation goes through
//! [`Workspace::set_text`], which is also where history snapshots are taken.

use ropey::Rope;
use thiserror::Error;

use super::document::{Document, DocumentId};

/// Errors from workspace operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error("no document with id {0}")]
    UnknownDocument(DocumentId),
    #[error("history index {index} is out of bounds (len {len})")]
    HistoryIndex { index: usize, len: usize },
}

/// A change requested through [`Workspace::set_text`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextChange {
    /// A plain edit: recorded as a new history entry
    Edit(String),
    /// An undo/redo step: moves the history pointer to the given entry
    Travel(usize),
}

/// Result of [`Workspace::close_document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// The document was the only one open and was kept
    LastDocument,
}

/// The open documents in tab order
#[derive(Debug, Clone)]
pub struct Workspace {
    documents: Vec<Document>,
    active: DocumentId,
    /// Optional cap on snapshots per document (None = unbounded)
    history_limit: Option<usize>,
}

impl Workspace {
    /// Create a workspace with a single empty document
    pub fn new() -> Self {
        let first = Document::new(DocumentId(1));
        Self {
            active: first.id,
            documents: vec![first],
            history_limit: None,
        }
    }

    /// Create a workspace whose documents keep at most `limit` snapshots
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            history_limit: limit,
            ..Self::new()
        }
    }

    fn next_document_id(&self) -> DocumentId {
        let max = self.documents.iter().map(|d| d.id.0).max().unwrap_or(0);
        DocumentId(max + 1)
    }

    /// Open a new empty document and make it active
    pub fn create_document(&mut self) -> DocumentId {
        let id = self.next_document_id();
        self.documents.push(Document::new(id));
        self.active = id;
        tracing::debug!(%id, "created document");
        id
    }

    /// Close a document. The last remaining document is never closed.
    ///
    /// Closing the active document activates the first remaining one.
    pub fn close_document(&mut self, id: DocumentId) -> Result<CloseOutcome, WorkspaceError> {
        let position = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(WorkspaceError::UnknownDocument(id))?;

        if self.documents.len() == 1 {
            tracing::debug!(%id, "refusing to close the last document");
            return Ok(CloseOutcome::LastDocument);
        }

        self.documents.remove(position);
        if self.active == id {
            self.active = self.documents[0].id;
        }
        tracing::debug!(%id, active = %self.active, "closed document");
        Ok(CloseOutcome::Closed)
    }

    pub fn set_active_document(&mut self, id: DocumentId) -> Result<(), WorkspaceError> {
        self.document(id)?;
        self.active = id;
        Ok(())
    }

    #[inline]
    pub fn active_id(&self) -> DocumentId {
        self.active
    }

    pub fn active_document(&self) -> &Document {
        // `active` always names a live document: it is only ever set to an
        // id that was just checked or created, and closing re-targets it.
        self.documents
            .iter()
            .find(|d| d.id == self.active)
            .unwrap_or(&self.documents[0])
    }

    pub fn document(&self, id: DocumentId) -> Result<&Document, WorkspaceError> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or(WorkspaceError::UnknownDocument(id))
    }

    fn document_mut(&mut self, id: DocumentId) -> Result<&mut Document, WorkspaceError> {
        self.documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(WorkspaceError::UnknownDocument(id))
    }

    /// Documents in tab order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Tab position of a document
    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }

    pub fn text(&self, id: DocumentId) -> Result<&Rope, WorkspaceError> {
        Ok(self.document(id)?.text())
    }

    /// Apply a change to a document's text.
    ///
    /// Returns whether the visible text changed. Errors leave the document
    /// untouched.
    pub fn set_text(&mut self, id: DocumentId, change: TextChange) -> Result<bool, WorkspaceError> {
        let limit = self.history_limit;
        let doc = self.document_mut(id)?;
        let changed = match change {
            TextChange::Edit(text) => doc.push_snapshot(Rope::from(text), limit),
            TextChange::Travel(index) => {
                let len = doc.history_len();
                if index >= len {
                    return Err(WorkspaceError::HistoryIndex { index, len });
                }
                doc.travel_to(index)
            }
        };
        tracing::debug!(
            %id,
            changed,
            index = doc.history_index(),
            len = doc.history_len(),
            "set text"
        );
        Ok(changed)
    }

    pub fn undo(&mut self, id: DocumentId) -> Result<bool, WorkspaceError> {
        let doc = self.document(id)?;
        if !doc.can_undo() {
            return Err(WorkspaceError::NothingToUndo);
        }
        let target = doc.history_index() - 1;
        self.set_text(id, TextChange::Travel(target))
    }

    pub fn redo(&mut self, id: DocumentId) -> Result<bool, WorkspaceError> {
        let doc = self.document(id)?;
        if !doc.can_redo() {
            return Err(WorkspaceError::NothingToRedo);
        }
        let target = doc.history_index() + 1;
        self.set_text(id, TextChange::Travel(target))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(ws: &mut Workspace, text: &str) {
        let id = ws.active_id();
        ws.set_text(id, TextChange::Edit(text.to_string())).unwrap();
    }

    fn active_text(ws: &Workspace) -> String {
        ws.active_document().text().to_string()
    }

    #[test]
    fn test_new_workspace_has_one_active_document() {
        let ws = Workspace::new();
        assert_eq!(ws.document_count(), 1);
        assert_eq!(ws.active_id(), DocumentId(1));
        assert_eq!(active_text(&ws), "");
    }

    #[test]
    fn test_create_document_activates_it() {
        let mut ws = Workspace::new();
        let id = ws.create_document();
        assert_eq!(id, DocumentId(2));
        assert_eq!(ws.active_id(), id);
        assert_eq!(ws.document(id).unwrap().display_name, "Document 2");
    }

    #[test]
    fn test_ids_follow_highest_open_id() {
        let mut ws = Workspace::new();
        let second = ws.create_document();
        let third = ws.create_document();
        ws.close_document(second).unwrap();
        assert_eq!(ws.create_document(), DocumentId(third.0 + 1));
    }

    #[test]
    fn test_close_last_document_is_noop() {
        let mut ws = Workspace::new();
        let id = ws.active_id();
        assert_eq!(ws.close_document(id), Ok(CloseOutcome::LastDocument));
        assert_eq!(ws.document_count(), 1);
    }

    #[test]
    fn test_close_active_falls_back_to_first() {
        let mut ws = Workspace::new();
        ws.create_document();
        let third = ws.create_document();
        assert_eq!(ws.close_document(third), Ok(CloseOutcome::Closed));
        assert_eq!(ws.active_id(), DocumentId(1));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut ws = Workspace::new();
        let second = ws.create_document();
        ws.close_document(DocumentId(1)).unwrap();
        assert_eq!(ws.active_id(), second);
    }

    #[test]
    fn test_unknown_document() {
        let mut ws = Workspace::new();
        let missing = DocumentId(42);
        assert_eq!(
            ws.close_document(missing),
            Err(WorkspaceError::UnknownDocument(missing))
        );
        assert!(ws.set_active_document(missing).is_err());
        assert!(ws.text(missing).is_err());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut ws = Workspace::new();
        edit(&mut ws, "first");
        edit(&mut ws, "second");
        let id = ws.active_id();

        ws.undo(id).unwrap();
        assert_eq!(active_text(&ws), "first");
        ws.redo(id).unwrap();
        assert_eq!(active_text(&ws), "second");
    }

    #[test]
    fn test_undo_at_start_fails() {
        let mut ws = Workspace::new();
        let id = ws.active_id();
        assert_eq!(ws.undo(id), Err(WorkspaceError::NothingToUndo));
        assert_eq!(ws.redo(id), Err(WorkspaceError::NothingToRedo));
    }

    #[test]
    fn test_edit_after_undo_truncates() {
        let mut ws = Workspace::new();
        let id = ws.active_id();
        edit(&mut ws, "a");
        edit(&mut ws, "b");
        edit(&mut ws, "c");
        ws.undo(id).unwrap();
        edit(&mut ws, "x");

        let doc = ws.document(id).unwrap();
        let history: Vec<String> = doc.history().iter().map(|r| r.to_string()).collect();
        assert_eq!(history, vec!["", "a", "b", "x"]);
        assert_eq!(doc.history_index(), 3);
    }

    #[test]
    fn test_travel_out_of_range_leaves_document_untouched() {
        let mut ws = Workspace::new();
        edit(&mut ws, "a");
        let id = ws.active_id();
        assert_eq!(
            ws.set_text(id, TextChange::Travel(5)),
            Err(WorkspaceError::HistoryIndex { index: 5, len: 2 })
        );
        assert_eq!(active_text(&ws), "a");
        assert_eq!(ws.document(id).unwrap().history_index(), 1);
    }

    #[test]
    fn test_documents_have_independent_histories() {
        let mut ws = Workspace::new();
        edit(&mut ws, "one");
        let second = ws.create_document();
        edit(&mut ws, "two");

        assert_eq!(ws.text(DocumentId(1)).unwrap().to_string(), "one");
        assert_eq!(ws.text(second).unwrap().to_string(), "two");
        ws.undo(second).unwrap();
        assert_eq!(ws.text(DocumentId(1)).unwrap().to_string(), "one");
    }

    #[test]
    fn test_history_limit_applies() {
        let mut ws = Workspace::with_history_limit(Some(2));
        edit(&mut ws, "a");
        edit(&mut ws, "b");
        assert_eq!(ws.active_document().history_len(), 2);
    }
}
