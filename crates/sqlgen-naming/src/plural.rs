//! Minimal English pluralization heuristics.
//!
//! Intentionally naive: one trailing `s`, no irregular-plural table.
//! `"dogs"` singularizes to `"dog"`, `"bass"` pluralizes to itself. The
//! override table exists precisely to patch the words these rules get wrong.

/// Strip one trailing `s`, if present. Words shorter than two characters
/// are returned unchanged.
pub fn singularize(word: &str) -> String {
    if word.chars().take(2).count() < 2 {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Append an `s` unless the word already ends in one. Words shorter than
/// two characters are returned unchanged.
pub fn pluralize(word: &str) -> String {
    if word.chars().take(2).count() < 2 || word.ends_with('s') {
        return word.to_string();
    }
    format!("{word}s")
}
