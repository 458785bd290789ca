//! One-shot text transforms
//!
//! Each transform is a pure function from the document text to new text.
//! The update layer applies the result as a plain edit, so every transform
//! is a single undo step.

pub mod case;
pub mod encoding;
pub mod lines;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from transforms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("no text to transform")]
    EmptyText,
    #[error("invalid Base64 string: {0}")]
    InvalidBase64(String),
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid URL encoded string")]
    InvalidUrlEncoding,
    #[error("invalid binary chunk: {0}")]
    InvalidBinary(String),
    #[error("no binary numbers found")]
    EmptyBinary,
}

/// Groups transforms the way the side panel does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformCategory {
    Formatting,
    Lines,
    Encoding,
    Utilities,
}

/// Every available transform
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    // Formatting
    Uppercase,
    Lowercase,
    TitleCase,
    SwapCase,
    CapitalizeSentences,
    TrimWhitespace,
    RemoveExtraSpaces,
    Reverse,
    // Lines
    RemoveDuplicateLines,
    RemoveEmptyLines,
    AddLineNumbers,
    SortLines,
    BulletList,
    NumberedList,
    // Encoding
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,
    ToBinary,
    FromBinary,
    // Utilities
    Clear,
    StripHtmlTags,
}

impl TransformKind {
    pub const ALL: &'static [TransformKind] = &[
        TransformKind::Uppercase,
        TransformKind::Lowercase,
        TransformKind::TitleCase,
        TransformKind::SwapCase,
        TransformKind::CapitalizeSentences,
        TransformKind::TrimWhitespace,
        TransformKind::RemoveExtraSpaces,
        TransformKind::Reverse,
        TransformKind::RemoveDuplicateLines,
        TransformKind::RemoveEmptyLines,
        TransformKind::AddLineNumbers,
        TransformKind::SortLines,
        TransformKind::BulletList,
        TransformKind::NumberedList,
        TransformKind::Base64Encode,
        TransformKind::Base64Decode,
        TransformKind::UrlEncode,
        TransformKind::UrlDecode,
        TransformKind::ToBinary,
        TransformKind::FromBinary,
        TransformKind::Clear,
        TransformKind::StripHtmlTags,
    ];

    pub fn category(self) -> TransformCategory {
        use TransformKind::*;
        match self {
            Uppercase | Lowercase | TitleCase | SwapCase | CapitalizeSentences
            | TrimWhitespace | RemoveExtraSpaces | Reverse => TransformCategory::Formatting,
            RemoveDuplicateLines | RemoveEmptyLines | AddLineNumbers | SortLines | BulletList
            | NumberedList => TransformCategory::Lines,
            Base64Encode | Base64Decode | UrlEncode | UrlDecode | ToBinary | FromBinary => {
                TransformCategory::Encoding
            }
            Clear | StripHtmlTags => TransformCategory::Utilities,
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        use TransformKind::*;
        match self {
            Uppercase => "Uppercase",
            Lowercase => "Lowercase",
            TitleCase => "Title Case",
            SwapCase => "Swap Case",
            CapitalizeSentences => "Capitalize Sentences",
            TrimWhitespace => "Trim Whitespace",
            RemoveExtraSpaces => "Remove Extra Spaces",
            Reverse => "Reverse Text",
            RemoveDuplicateLines => "Remove Duplicate Lines",
            RemoveEmptyLines => "Remove Empty Lines",
            AddLineNumbers => "Add Line Numbers",
            SortLines => "Sort Lines",
            BulletList => "Bullet List",
            NumberedList => "Numbered List",
            Base64Encode => "Base64 Encode",
            Base64Decode => "Base64 Decode",
            UrlEncode => "URL Encode",
            UrlDecode => "URL Decode",
            ToBinary => "Text to Binary",
            FromBinary => "Binary to Text",
            Clear => "Clear Text",
            StripHtmlTags => "Remove HTML Tags",
        }
    }

    /// Toast shown after the transform succeeds
    pub fn success_message(self) -> &'static str {
        use TransformKind::*;
        match self {
            Uppercase => "Text converted to uppercase!",
            Lowercase => "Text converted to lowercase!",
            TitleCase => "Text converted to Title Case!",
            SwapCase => "Case swapped!",
            CapitalizeSentences => "First letter of each sentence capitalized!",
            TrimWhitespace => "Whitespace trimmed!",
            RemoveExtraSpaces => "Extra spaces removed!",
            Reverse => "Text reversed!",
            RemoveDuplicateLines => "Duplicate lines removed!",
            RemoveEmptyLines => "Empty lines removed!",
            AddLineNumbers => "Line numbers added!",
            SortLines => "Lines sorted alphabetically!",
            BulletList => "Text converted to bullet list!",
            NumberedList => "Text converted to numbered list!",
            Base64Encode => "Text encoded to Base64!",
            Base64Decode => "Text decoded from Base64!",
            UrlEncode => "Text URL encoded!",
            UrlDecode => "Text URL decoded!",
            ToBinary => "Text converted to binary!",
            FromBinary => "Binary converted to text!",
            Clear => "Text cleared!",
            StripHtmlTags => "HTML tags removed!",
        }
    }

    /// Indicator message for the heavier transforms; None runs without one
    pub fn loading_message(self) -> Option<&'static str> {
        use TransformKind::*;
        match self {
            Uppercase => Some("Converting to uppercase..."),
            Lowercase => Some("Converting to lowercase..."),
            TitleCase => Some("Converting to title case..."),
            SwapCase => Some("Swapping case..."),
            CapitalizeSentences => Some("Capitalizing sentences..."),
            Reverse => Some("Reversing text..."),
            RemoveDuplicateLines => Some("Removing duplicate lines..."),
            SortLines => Some("Sorting lines..."),
            ToBinary => Some("Converting to binary..."),
            _ => None,
        }
    }

    /// Warning shown when the document is blank
    pub fn empty_message(self) -> &'static str {
        use TransformKind::*;
        match self {
            Uppercase => "No text to convert to uppercase.",
            Lowercase => "No text to convert to lowercase.",
            TitleCase => "No text to convert to Title Case.",
            SwapCase => "No text to swap case.",
            CapitalizeSentences => "No text to capitalize sentences.",
            TrimWhitespace => "No text to trim.",
            RemoveExtraSpaces => "No text to process for extra spaces.",
            Reverse => "No text to reverse.",
            RemoveDuplicateLines => "No text to remove duplicate lines from.",
            RemoveEmptyLines => "No text to remove empty lines from.",
            AddLineNumbers => "No text to add line numbers to.",
            SortLines => "No text to sort.",
            BulletList | NumberedList => "No text to convert to list.",
            Base64Encode => "No text to encode.",
            Base64Decode => "No text to decode.",
            UrlEncode => "No text to URL encode.",
            UrlDecode => "No text to URL decode.",
            ToBinary => "No text to convert to binary.",
            FromBinary => "No binary to convert to text.",
            Clear => "Nothing to clear.",
            StripHtmlTags => "No text to remove HTML tags from.",
        }
    }

    /// Error toast text when the transform fails on non-blank text
    pub fn failure_message(self, err: &TransformError) -> String {
        match (self, err) {
            (_, TransformError::EmptyText) => self.empty_message().to_string(),
            (TransformKind::Base64Decode, _) => {
                "Failed to decode Base64. Invalid Base64 string.".to_string()
            }
            (TransformKind::UrlDecode, _) => {
                "Failed to URL decode. Invalid URL encoded string.".to_string()
            }
            (_, TransformError::EmptyBinary) => {
                "Invalid binary input. Please enter space-separated binary numbers.".to_string()
            }
            (_, err) => format!("{} failed: {}", self.label(), err),
        }
    }
}

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Remove anything that looks like an HTML tag
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Run a transform over `text`.
///
/// Blank input is rejected for everything except [`TransformKind::Clear`].
pub fn apply(kind: TransformKind, text: &str) -> Result<String, TransformError> {
    if kind != TransformKind::Clear && text.trim().is_empty() {
        return Err(TransformError::EmptyText);
    }

    use TransformKind::*;
    let result = match kind {
        Uppercase => text.to_uppercase(),
        Lowercase => text.to_lowercase(),
        TitleCase => case::title_case(text),
        SwapCase => case::swap_case(text),
        CapitalizeSentences => case::capitalize_sentences(text),
        TrimWhitespace => text.trim().to_string(),
        RemoveExtraSpaces => case::collapse_whitespace(text),
        Reverse => text.chars().rev().collect(),
        RemoveDuplicateLines => lines::remove_duplicates(text),
        RemoveEmptyLines => lines::remove_empty(text),
        AddLineNumbers => lines::add_numbers(text),
        SortLines => lines::sort(text),
        BulletList => lines::bullet_list(text),
        NumberedList => lines::numbered_list(text),
        Base64Encode => encoding::base64_encode(text),
        Base64Decode => encoding::base64_decode(text)?,
        UrlEncode => encoding::url_encode(text),
        UrlDecode => encoding::url_decode(text)?,
        ToBinary => encoding::to_binary(text),
        FromBinary => encoding::from_binary(text)?,
        Clear => String::new(),
        StripHtmlTags => strip_html_tags(text),
    };
    Ok(result)
}
