//! Case and whitespace transforms

/// Uppercase the first char of each space-separated word, lowercase the rest
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Flip the case of every cased char
pub fn swap_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Uppercase the first non-whitespace char of the text and of every
/// sentence following `.`, `!` or `?`
pub fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_sentence_start = true;
    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            out.push(ch);
            at_sentence_start = true;
        } else if ch.is_whitespace() {
            out.push(ch);
        } else if at_sentence_start {
            out.extend(ch.to_uppercase());
            at_sentence_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Collapse every whitespace run (including newlines) to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
