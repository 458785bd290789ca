//! Highlight overlay markup for the find panel

use super::Match;

/// Class given to the `<mark>` around the current match
pub const CURRENT_MATCH_CLASS: &str = "current-match";

/// Render `text` as HTML with every match wrapped in `<mark>`.
///
/// The match at `current` gets the [`CURRENT_MATCH_CLASS`] class. Text outside
/// and inside the marks is escaped, so markup typed by the user shows up
/// literally. Matches that do not line up with `text` are skipped.
pub fn render_highlight(text: &str, matches: &[Match], current: Option<usize>) -> String {
    let mut out = String::with_capacity(text.len() + matches.len() * 16);
    let mut last = 0;

    for (index, m) in matches.iter().enumerate() {
        let (Some(before), Some(body)) = (text.get(last..m.bytes.start), text.get(m.bytes.clone()))
        else {
            continue;
        };

        escape_into(&mut out, before);
        if current == Some(index) {
            out.push_str("<mark class=\"");
            out.push_str(CURRENT_MATCH_CLASS);
            out.push_str("\">");
        } else {
            out.push_str("<mark>");
        }
        escape_into(&mut out, body);
        out.push_str("</mark>");
        last = m.bytes.end;
    }

    escape_into(&mut out, &text[last..]);
    out
}

/// Escape the characters HTML treats as markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
