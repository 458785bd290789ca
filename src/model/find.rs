//! Find/replace session - the match cursor state machine
//!
//! ```text
//! NoSearch --open--> Idle --find_next--> Positioned(i)
//!                     ^                      |
//!                     +-- spec/text change --+
//!                     +-- replace_current ---+
//! any --close--> NoSearch
//! ```
//!
//! The session never edits documents. Replace operations return the proposed
//! text; the update layer applies it through the workspace and then reports
//! the new text back via [`FindReplaceState::text_changed`].

use crate::model::document::{Document, DocumentId};
use crate::search::{self, Match, MatchSpec, SearchError, SearchOptions};

/// Where the session is in the find-next / replace-one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// The panel is closed
    #[default]
    NoSearch,
    /// A spec is entered but no match is selected
    Idle,
    /// `matches[index]` is the current match
    Positioned(usize),
}

/// Snapshot of the document the match list was computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTarget {
    pub document: DocumentId,
    pub revision: u64,
}

impl ScanTarget {
    pub fn of(doc: &Document) -> Self {
        Self {
            document: doc.id,
            revision: doc.revision,
        }
    }
}

/// State for the find/replace panel
#[derive(Debug, Clone, Default)]
pub struct FindReplaceState {
    /// Search query
    pub query: String,
    /// Replacement text
    pub replacement: String,
    /// Regex / case / whole-word toggles
    pub options: SearchOptions,
    phase: SearchPhase,
    matches: Vec<Match>,
    target: Option<ScanTarget>,
}

impl FindReplaceState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.phase != SearchPhase::NoSearch
    }

    /// The match list from the last scan
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Index of the current match, if one is selected
    pub fn current(&self) -> Option<usize> {
        match self.phase {
            SearchPhase::Positioned(index) => Some(index),
            _ => None,
        }
    }

    /// The document snapshot the match list belongs to
    pub fn target(&self) -> Option<ScanTarget> {
        self.target
    }

    /// The spec the panel currently describes
    pub fn spec(&self) -> MatchSpec {
        MatchSpec::new(self.query.clone(), self.options)
    }

    /// Open the panel and compute matches for display
    pub fn open(&mut self, doc: &Document) -> Result<usize, SearchError> {
        self.phase = SearchPhase::Idle;
        self.recompute(doc)
    }

    /// Close the panel, dropping matches and cursor
    pub fn close(&mut self) {
        self.phase = SearchPhase::NoSearch;
        self.matches.clear();
        self.target = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>, doc: &Document) -> Result<usize, SearchError> {
        self.query = query.into();
        self.spec_changed(doc)
    }

    pub fn set_options(&mut self, options: SearchOptions, doc: &Document) -> Result<usize, SearchError> {
        self.options = options;
        self.spec_changed(doc)
    }

    /// The replacement does not affect matching, so the cursor survives
    pub fn set_replacement(&mut self, replacement: impl Into<String>) {
        self.replacement = replacement.into();
    }

    fn spec_changed(&mut self, doc: &Document) -> Result<usize, SearchError> {
        if self.is_open() {
            self.phase = SearchPhase::Idle;
        }
        self.recompute(doc)
    }

    /// The document's text changed outside the search flow (direct edit,
    /// undo/redo, tab switch, or a replace we proposed being applied).
    pub fn text_changed(&mut self, doc: &Document) -> Result<usize, SearchError> {
        if self.target == Some(ScanTarget::of(doc)) {
            return Ok(self.matches.len());
        }
        if self.is_open() {
            self.phase = SearchPhase::Idle;
        }
        self.recompute(doc)
    }

    /// Rescan for display. With the panel closed or an empty query the list
    /// is simply cleared; compile errors clear it and are returned.
    fn recompute(&mut self, doc: &Document) -> Result<usize, SearchError> {
        self.matches.clear();
        self.target = None;
        if !self.is_open() || self.query.is_empty() {
            return Ok(0);
        }

        let matcher = search::compile(&self.spec())?;
        self.matches = search::find_all(&matcher, &doc.text_string());
        self.target = Some(ScanTarget::of(doc));
        tracing::debug!(count = self.matches.len(), doc = %doc.id, "recomputed matches");
        Ok(self.matches.len())
    }

    fn rescan(&mut self, doc: &Document) -> Result<(), SearchError> {
        let matcher = search::compile(&self.spec())?;
        self.matches = search::find_all(&matcher, &doc.text_string());
        self.target = Some(ScanTarget::of(doc));
        Ok(())
    }

    /// Select the next match, wrapping around. Opens the panel if needed.
    ///
    /// With no matches the session stays (or becomes) `Idle` and
    /// [`SearchError::NoMatch`] is returned.
    pub fn find_next(&mut self, doc: &Document) -> Result<usize, SearchError> {
        if !self.is_open() {
            self.phase = SearchPhase::Idle;
        }
        if self.target != Some(ScanTarget::of(doc)) {
            // The list is stale, so the old index means nothing
            self.phase = SearchPhase::Idle;
        }

        if let Err(err) = self.rescan(doc) {
            self.matches.clear();
            self.target = None;
            self.phase = SearchPhase::Idle;
            return Err(err);
        }

        match search::advance_cursor(self.current(), self.matches.len()) {
            Ok(index) => {
                self.phase = SearchPhase::Positioned(index);
                tracing::debug!(index, count = self.matches.len(), "find next");
                Ok(index)
            }
            Err(err) => {
                self.phase = SearchPhase::Idle;
                Err(err)
            }
        }
    }

    /// Propose the document text with the current match replaced.
    ///
    /// On success the cursor is consumed and the session returns to `Idle`;
    /// on failure nothing changes.
    pub fn replace_current(&mut self, doc: &Document) -> Result<String, SearchError> {
        let matcher = search::compile(&self.spec())?;
        let text = doc.text_string();

        let cursor = if self.target == Some(ScanTarget::of(doc)) {
            self.current()
        } else {
            None
        };
        let replaced =
            search::replace_at_cursor(&text, &self.matches, cursor, &self.replacement)?;

        self.phase = SearchPhase::Idle;
        self.matches = search::find_all(&matcher, &text);
        self.target = Some(ScanTarget::of(doc));
        Ok(replaced)
    }

    /// Propose the document text with every match replaced, plus the count
    pub fn replace_all(&mut self, doc: &Document) -> Result<(String, usize), SearchError> {
        let matcher = search::compile(&self.spec())?;
        let result = search::replace_all(&doc.text_string(), &matcher, &self.replacement);
        if self.is_open() {
            self.phase = SearchPhase::Idle;
        }
        Ok(result)
    }

    /// Highlight overlay for `doc`, or None when there is nothing to show
    pub fn highlight(&self, doc: &Document) -> Option<String> {
        if !self.is_open() || self.matches.is_empty() || self.target != Some(ScanTarget::of(doc)) {
            return None;
        }
        Some(search::render_highlight(
            &doc.text_string(),
            &self.matches,
            self.current(),
        ))
    }

    /// Match counter for the panel ("2 of 5", "5 matches", "No matches")
    pub fn status_label(&self) -> String {
        match (self.current(), self.matches.len()) {
            (_, 0) => "No matches".to_string(),
            (Some(index), total) => format!("{} of {}", index + 1, total),
            (None, 1) => "1 match".to_string(),
            (None, total) => format!("{} matches", total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    fn doc_with(text: &str) -> Document {
        let mut doc = Document::new(DocumentId(1));
        doc.push_snapshot(Rope::from(text), None);
        doc
    }

    fn open_with(query: &str, doc: &Document) -> FindReplaceState {
        let mut state = FindReplaceState::new();
        state.query = query.to_string();
        state.open(doc).unwrap();
        state
    }

    #[test]
    fn test_starts_closed() {
        let state = FindReplaceState::new();
        assert_eq!(state.phase(), SearchPhase::NoSearch);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_open_computes_matches_and_is_idle() {
        let doc = doc_with("The cat sat on the mat.");
        let state = open_with("at", &doc);
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert_eq!(state.match_count(), 3);
        assert_eq!(state.status_label(), "3 matches");
    }

    #[test]
    fn test_closed_panel_does_not_scan() {
        let doc = doc_with("at at");
        let mut state = FindReplaceState::new();
        assert_eq!(state.set_query("at", &doc), Ok(0));
        assert_eq!(state.phase(), SearchPhase::NoSearch);
    }

    #[test]
    fn test_find_next_cycles() {
        let doc = doc_with("a a a");
        let mut state = open_with("a", &doc);
        let visited: Vec<usize> = (0..4).map(|_| state.find_next(&doc).unwrap()).collect();
        assert_eq!(visited, vec![0, 1, 2, 0]);
        assert_eq!(state.phase(), SearchPhase::Positioned(0));
        assert_eq!(state.status_label(), "1 of 3");
    }

    #[test]
    fn test_find_next_without_matches_stays_idle() {
        let doc = doc_with("abc");
        let mut state = open_with("zzz", &doc);
        assert_eq!(state.find_next(&doc), Err(SearchError::NoMatch));
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_find_next_opens_closed_session() {
        let doc = doc_with("abc");
        let mut state = FindReplaceState::new();
        state.query = "b".to_string();
        assert_eq!(state.find_next(&doc), Ok(0));
        assert!(state.is_open());
    }

    #[test]
    fn test_spec_change_resets_cursor() {
        let doc = doc_with("Cat cat");
        let mut state = open_with("cat", &doc);
        state.find_next(&doc).unwrap();
        let options = SearchOptions {
            case_sensitive: true,
            ..state.options
        };
        assert_eq!(state.set_options(options, &doc), Ok(1));
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_invalid_pattern_clears_matches_and_propagates() {
        let doc = doc_with("abc");
        let mut state = open_with("b", &doc);
        state.options.use_regex = true;
        let result = state.set_query("(", &doc);
        assert!(matches!(result, Err(SearchError::Pattern(_))));
        assert_eq!(state.match_count(), 0);
        assert!(state.is_open());
    }

    #[test]
    fn test_replace_current_returns_to_idle() {
        let doc = doc_with("one two one");
        let mut state = open_with("one", &doc);
        state.set_replacement("1");
        state.find_next(&doc).unwrap();
        state.find_next(&doc).unwrap();

        let proposed = state.replace_current(&doc).unwrap();
        assert_eq!(proposed, "one two 1");
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_replace_current_without_selection_fails() {
        let doc = doc_with("one");
        let mut state = open_with("one", &doc);
        assert!(matches!(
            state.replace_current(&doc),
            Err(SearchError::Cursor { index: None, .. })
        ));
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_stale_cursor_after_edit_is_rejected() {
        let mut doc = doc_with("x x x");
        let mut state = open_with("x", &doc);
        state.find_next(&doc).unwrap();
        state.find_next(&doc).unwrap();
        state.find_next(&doc).unwrap();
        assert_eq!(state.current(), Some(2));

        // Edit behind the session's back; the list is for an older revision
        doc.push_snapshot(Rope::from("x"), None);
        assert!(matches!(
            state.replace_current(&doc),
            Err(SearchError::Cursor { .. })
        ));
        assert_eq!(doc.text().to_string(), "x");
    }

    #[test]
    fn test_text_changed_resets_and_recomputes() {
        let mut doc = doc_with("a b");
        let mut state = open_with("a", &doc);
        state.find_next(&doc).unwrap();

        doc.push_snapshot(Rope::from("a b a"), None);
        assert_eq!(state.text_changed(&doc), Ok(2));
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_text_changed_same_revision_keeps_cursor() {
        let doc = doc_with("a a");
        let mut state = open_with("a", &doc);
        state.find_next(&doc).unwrap();
        state.text_changed(&doc).unwrap();
        assert_eq!(state.current(), Some(0));
    }

    #[test]
    fn test_highlight_tracks_current() {
        let doc = doc_with("a <a>");
        let mut state = open_with("a", &doc);
        state.find_next(&doc).unwrap();
        assert_eq!(
            state.highlight(&doc).unwrap(),
            "<mark class=\"current-match\">a</mark> &lt;<mark>a</mark>&gt;"
        );
    }

    #[test]
    fn test_close_clears_everything() {
        let doc = doc_with("a");
        let mut state = open_with("a", &doc);
        state.find_next(&doc).unwrap();
        state.close();
        assert_eq!(state.phase(), SearchPhase::NoSearch);
        assert_eq!(state.match_count(), 0);
        assert!(state.highlight(&doc).is_none());
    }

    #[test]
    fn test_replace_all_proposes_text() {
        let doc = doc_with("The cat sat on the mat.");
        let mut state = open_with("at", &doc);
        state.set_replacement("og");
        let (text, count) = state.replace_all(&doc).unwrap();
        assert_eq!(text, "The cog sog on the mog.");
        assert_eq!(count, 3);
    }
}
