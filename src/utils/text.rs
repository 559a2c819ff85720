//! Text normalization helpers.

/// Title-case a string: the first letter of each whitespace-separated word
/// is uppercased, the rest lowercased. Interior whitespace runs collapse to
/// a single space and surrounding whitespace is trimmed.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}
