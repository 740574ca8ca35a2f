//! Case classification and word-boundary capitalization.

/// True iff `s` contains at least one uppercase and one lowercase letter.
///
/// Mixed case is the signal that the vendor already delivered the casing the
/// user wants, so the capitalization heuristics should keep their hands off.
/// Scans left to right and short-circuits once both cases are seen; the
/// empty string is not mixed case.
pub fn is_mixed_case(s: &str) -> bool {
    let mut found_lower = false;
    let mut found_upper = false;
    for ch in s.chars() {
        if ch.is_uppercase() {
            found_upper = true;
        }
        if ch.is_lowercase() {
            found_lower = true;
        }
        if found_lower && found_upper {
            return true;
        }
    }
    false
}

/// Capitalize the first letter of each whitespace/underscore-delimited
/// segment and lowercase interior capitals.
///
/// `"PRODUCT"` becomes `"Product"`, `"order details"` becomes
/// `"Order Details"`. Strings shorter than two characters are returned
/// unchanged.
pub fn capitalize(word: &str) -> String {
    if word.chars().take(2).count() < 2 {
        return word.to_string();
    }

    let mut out = String::with_capacity(word.len());
    // Seed with a space so the first character starts a segment.
    let mut prev = ' ';
    for ch in word.chars() {
        let segment_start = prev.is_whitespace() || prev == '_';
        if segment_start {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev = ch;
    }
    out
}

/// Rewrite a trailing `id` (any casing) to `ID`.
///
/// Opt-in exception to the lowercasing rule in [`capitalize`]: schemas
/// conventionally treat `ID` as an acronym suffix, so `"Productid"` should
/// become `"ProductID"`.
pub fn uppercase_id_suffix(word: &str) -> String {
    let len = word.len();
    if len >= 2 && word.is_char_boundary(len - 2) && word[len - 2..].eq_ignore_ascii_case("id") {
        format!("{}ID", &word[..len - 2])
    } else {
        word.to_string()
    }
}
