//! Line-oriented transforms

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Keep the first occurrence of each line, comparing trimmed content
pub fn remove_duplicates(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split('\n')
        .filter(|line| seen.insert(line.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn remove_empty(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix lines with `1. `, `2. `, ...
pub fn add_numbers(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Alphabetical, case-insensitive, ties broken by the raw line
pub fn sort(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.sort_by_cached_key(|line| (line.to_lowercase(), line.to_string()));
    lines.join("\n")
}

/// Split into sentences: on newlines, and after `.`, `!` or `?` followed by
/// whitespace. Blank pieces are dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let mut last = 0;
        for found in SENTENCE_BREAK.find_iter(line) {
            // The punctuation is one byte and stays with its sentence
            out.push(&line[last..found.start() + 1]);
            last = found.end();
        }
        out.push(&line[last..]);
    }
    out.into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn bullet_list(text: &str) -> String {
    sentences(text)
        .into_iter()
        .map(|s| format!("• {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn numbered_list(text: &str) -> String {
    sentences(text)
        .into_iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicates_compares_trimmed() {
        assert_eq!(remove_duplicates("a\n b \nb\na\nc"), "a\n b \nc");
    }

    #[test]
    fn test_remove_empty() {
        assert_eq!(remove_empty("a\n\n  \nb\n"), "a\nb");
    }

    #[test]
    fn test_add_numbers() {
        assert_eq!(add_numbers("x\ny"), "1. x\n2. y");
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        assert_eq!(sort("banana\nApple\ncherry\napple"), "Apple\napple\nbanana\ncherry");
    }

    #[test]
    fn test_sentences() {
        assert_eq!(
            sentences("One. Two!  Three?\nFour\n\nv1.2 stays"),
            vec!["One.", "Two!", "Three?", "Four", "v1.2 stays"]
        );
    }

    #[test]
    fn test_bullet_and_numbered_lists() {
        assert_eq!(bullet_list("Hi. Bye."), "• Hi.\n• Bye.");
        assert_eq!(numbered_list("Hi. Bye."), "1. Hi.\n2. Bye.");
    }
}
