//! Match engine - compiles search specs and scans text for matches
//!
//! Everything in this module is pure: functions take the text they scan and
//! hand back new values. Documents only change when the caller applies the
//! proposed text through [`crate::model::Workspace::set_text`].

mod highlight;

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use highlight::{escape_html, render_highlight, CURRENT_MATCH_CLASS};

/// Options toggled in the find/replace panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Interpret the term as a regular expression instead of literal text
    pub use_regex: bool,
    /// Match letter case exactly
    pub case_sensitive: bool,
    /// Only match at word boundaries
    pub whole_word: bool,
}

/// A search request, rebuilt from the panel state for every search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSpec {
    pub term: String,
    pub options: SearchOptions,
}

impl MatchSpec {
    pub fn new(term: impl Into<String>, options: SearchOptions) -> Self {
        Self {
            term: term.into(),
            options,
        }
    }

    /// Case-insensitive literal search, the panel defaults
    pub fn literal(term: impl Into<String>) -> Self {
        Self::new(term, SearchOptions::default())
    }

    /// Case-insensitive regular expression search
    pub fn regex(term: impl Into<String>) -> Self {
        Self::new(
            term,
            SearchOptions {
                use_regex: true,
                ..SearchOptions::default()
            },
        )
    }
}

/// Errors surfaced by the match engine
///
/// Every variant is recoverable: the engine holds no state, so a failed call
/// leaves nothing to clean up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("search term is empty")]
    EmptyQuery,
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("no matches found")]
    NoMatch,
    #[error("no current match selected (cursor {index:?}, {count} matches)")]
    Cursor { index: Option<usize>, count: usize },
}

/// A single match in a scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Char offset of the first matched char
    pub start: usize,
    /// Length in chars (zero for empty matches)
    pub len: usize,
    /// The matched text
    pub text: String,
    /// Byte span in the scanned text, used for splicing
    pub bytes: Range<usize>,
}

impl Match {
    /// Char offset one past the last matched char
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A compiled [`MatchSpec`], reusable across scans
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    /// Expand `$1` style group references in replacements (regex mode only)
    expand_replacement: bool,
}

impl Matcher {
    /// The final pattern handed to the regex engine
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of matches in `text`, using the same scan rule as [`find_all`]
    pub fn count(&self, text: &str) -> usize {
        self.scan(text).count()
    }

    fn scan<'m, 't>(&'m self, text: &'t str) -> Scan<'m, 't> {
        Scan {
            regex: &self.regex,
            text,
            pos: 0,
        }
    }
}

/// Left-to-right scan yielding non-overlapping matches.
///
/// An empty match at byte `k` resumes the search one char after `k`, so the
/// scan always moves forward and yields at most `chars + 1` matches.
struct Scan<'m, 't> {
    regex: &'m Regex,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Scan<'_, 't> {
    type Item = regex::Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.text.len() {
            return None;
        }
        let Some(found) = self.regex.find_at(self.text, self.pos) else {
            self.pos = self.text.len() + 1;
            return None;
        };
        self.pos = if found.is_empty() {
            next_char_boundary(self.text, found.start())
        } else {
            found.end()
        };
        Some(found)
    }
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(at + 1, |ch| at + ch.len_utf8())
}

/// Compile a search spec into a [`Matcher`]
pub fn compile(spec: &MatchSpec) -> Result<Matcher, SearchError> {
    if spec.term.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let options = spec.options;
    let mut pattern = if options.use_regex {
        // Validate the user's pattern on its own: wrapping it in a group for
        // whole-word matching can turn an unbalanced pattern into a valid one.
        if options.whole_word {
            Regex::new(&spec.term)?;
        }
        spec.term.clone()
    } else {
        regex::escape(&spec.term)
    };

    if options.whole_word {
        pattern = format!(r"\b(?:{})\b", pattern);
    }

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()?;

    tracing::debug!(pattern = regex.as_str(), ?options, "compiled matcher");

    Ok(Matcher {
        regex,
        expand_replacement: options.use_regex,
    })
}

/// Find all non-overlapping matches in `text`, in ascending order
pub fn find_all(matcher: &Matcher, text: &str) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut char_pos = 0;
    let mut byte_pos = 0;

    for found in matcher.scan(text) {
        char_pos += text[byte_pos..found.start()].chars().count();
        byte_pos = found.start();

        matches.push(Match {
            start: char_pos,
            len: found.as_str().chars().count(),
            text: found.as_str().to_string(),
            bytes: found.range(),
        });
    }

    matches
}

/// Move the cursor to the next match, wrapping after the last one.
///
/// `None` means no match is selected yet, so the first call lands on 0.
pub fn advance_cursor(cursor: Option<usize>, match_count: usize) -> Result<usize, SearchError> {
    if match_count == 0 {
        return Err(SearchError::NoMatch);
    }
    Ok(match cursor {
        Some(index) => (index + 1) % match_count,
        None => 0,
    })
}

/// Replace every match in one pass, returning the new text and the count.
///
/// In regex mode `$1`, `${name}` and `$$` in the replacement are expanded
/// from the match's capture groups; literal searches insert it verbatim.
pub fn replace_all(text: &str, matcher: &Matcher, replacement: &str) -> (String, usize) {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;

    for found in matcher.scan(text) {
        result.push_str(&text[last..found.start()]);
        if matcher.expand_replacement {
            // A search starting at the match's own offset finds that same match
            if let Some(caps) = matcher.regex.captures_at(text, found.start()) {
                caps.expand(replacement, &mut result);
            }
        } else {
            result.push_str(replacement);
        }
        last = found.end();
        count += 1;
    }
    result.push_str(&text[last..]);

    tracing::debug!(count, "replaced all matches");
    (result, count)
}

/// Splice `replacement` over the match selected by `cursor`.
///
/// Fails when no match is selected, when the cursor is past the end of the
/// list, or when the list no longer describes `text` (the selected span does
/// not hold the recorded match text). Offsets of later matches are not
/// adjusted; callers rescan after applying the result.
pub fn replace_at_cursor(
    text: &str,
    matches: &[Match],
    cursor: Option<usize>,
    replacement: &str,
) -> Result<String, SearchError> {
    let cursor_error = || SearchError::Cursor {
        index: cursor,
        count: matches.len(),
    };

    let target = cursor
        .and_then(|index| matches.get(index))
        .ok_or_else(cursor_error)?;

    if text.get(target.bytes.clone()) != Some(target.text.as_str()) {
        return Err(cursor_error());
    }

    let mut result =
        String::with_capacity(text.len() - target.bytes.len() + replacement.len());
    result.push_str(&text[..target.bytes.start]);
    result.push_str(replacement);
    result.push_str(&text[target.bytes.end..]);
    Ok(result)
}
