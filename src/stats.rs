//! Text analysis - counts shown in the analysis panel

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::search::{self, MatchSpec};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Character, word, line and paragraph counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
    pub paragraphs: usize,
}

impl TextStats {
    pub fn compute(text: &str) -> Self {
        let paragraphs = PARAGRAPH_BREAK
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count();

        Self {
            characters: text.chars().count(),
            words: WORD.find_iter(text).count(),
            lines: text.split('\n').count(),
            // A non-blank text is always at least one paragraph
            paragraphs: if paragraphs == 0 && !text.trim().is_empty() {
                1
            } else {
                paragraphs
            },
        }
    }
}

/// Case-insensitive count of `word` in `text`, as literal text.
///
/// Either side being blank counts as zero.
pub fn word_occurrences(text: &str, word: &str) -> usize {
    if text.trim().is_empty() || word.trim().is_empty() {
        return 0;
    }
    match search::compile(&MatchSpec::literal(word)) {
        Ok(matcher) => matcher.count(text),
        Err(e) => {
            tracing::warn!("Failed to build word matcher: {}", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::compute("");
        assert_eq!(
            stats,
            TextStats {
                characters: 0,
                words: 0,
                lines: 1,
                paragraphs: 0
            }
        );
    }

    #[test]
    fn test_counts() {
        let stats = TextStats::compute("Hello world.\nSecond line\n\n  \nNew para, here");
        assert_eq!(stats.words, 7);
        assert_eq!(stats.lines, 5);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.characters, 43);
    }

    #[test]
    fn test_characters_count_chars_not_bytes() {
        assert_eq!(TextStats::compute("héllo").characters, 5);
    }

    #[test]
    fn test_word_occurrences() {
        assert_eq!(word_occurrences("The the THE then", "the"), 4);
        assert_eq!(word_occurrences("a.b axb", "a.b"), 1);
        assert_eq!(word_occurrences("text", "  "), 0);
        assert_eq!(word_occurrences("   ", "x"), 0);
    }
}
