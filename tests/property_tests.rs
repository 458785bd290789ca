//! Property tests for the match engine and history
//!
//! Random texts and terms check the scan and replace invariants that example
//! tests can only spot-check.

use proptest::prelude::*;
use textsmith::model::{TextChange, Workspace};
use textsmith::search::{
    advance_cursor, compile, find_all, replace_all, MatchSpec, SearchOptions,
};

fn small_text() -> impl Strategy<Value = String> {
    "[a-cé .\n]{0,40}"
}

proptest! {
    #[test]
    fn literal_matches_hold_the_term(text in small_text(), term in "[a-c]{1,3}") {
        let matcher = compile(&MatchSpec::new(
            term.clone(),
            SearchOptions { case_sensitive: true, ..SearchOptions::default() },
        )).unwrap();
        let matches = find_all(&matcher, &text);

        prop_assert_eq!(matches.len(), text.matches(term.as_str()).count());
        let mut last_end = 0;
        for m in &matches {
            prop_assert_eq!(&m.text, &term);
            prop_assert_eq!(&text[m.bytes.clone()], term.as_str());
            prop_assert!(m.start >= last_end, "matches overlap");
            last_end = m.end();
        }
    }

    #[test]
    fn char_offsets_agree_with_byte_spans(text in small_text(), term in "[a-cé]{1,2}") {
        let matcher = compile(&MatchSpec::literal(term)).unwrap();
        for m in find_all(&matcher, &text) {
            prop_assert_eq!(m.start, text[..m.bytes.start].chars().count());
            prop_assert_eq!(m.len, m.text.chars().count());
        }
    }

    #[test]
    fn zero_length_scan_is_bounded(text in small_text()) {
        let matcher = compile(&MatchSpec::regex("x*")).unwrap();
        let matches = find_all(&matcher, &text);
        prop_assert_eq!(matches.len(), text.chars().count() + 1);
    }

    #[test]
    fn replace_all_does_not_reintroduce(text in small_text(), term in "[a-c]{1,2}") {
        let spec = MatchSpec::literal(term);
        let matcher = compile(&spec).unwrap();
        let expected = find_all(&matcher, &text).len();

        let (replaced, count) = replace_all(&text, &matcher, "#");
        prop_assert_eq!(count, expected);
        prop_assert!(find_all(&matcher, &replaced).is_empty());
    }

    #[test]
    fn cursor_wraps_through_every_match(count in 1usize..20, steps in 1usize..60) {
        let mut cursor = None;
        for step in 0..steps {
            let next = advance_cursor(cursor, count).unwrap();
            prop_assert_eq!(next, step % count);
            cursor = Some(next);
        }
    }

    #[test]
    fn history_invariant_survives_any_sequence(ops in prop::collection::vec(0u8..3, 0..40)) {
        let mut ws = Workspace::new();
        let id = ws.active_id();
        for (i, op) in ops.into_iter().enumerate() {
            match op {
                0 => { ws.set_text(id, TextChange::Edit(format!("v{}", i))).unwrap(); }
                1 => { let _ = ws.undo(id); }
                _ => { let _ = ws.redo(id); }
            }
            let doc = ws.document(id).unwrap();
            prop_assert!(doc.history_index() < doc.history_len());
            prop_assert_eq!(&doc.history()[doc.history_index()], doc.text());
        }
    }
}
