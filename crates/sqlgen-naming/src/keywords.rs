//! Reserved-word detection for the code-generation target language.

use sqlgen_model::TargetLanguage;

/// Rust strict and reserved keywords (sorted for binary search).
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// C# keywords (sorted for binary search).
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// True iff `name` is a reserved word of the target language.
pub fn is_keyword(name: &str, target: TargetLanguage) -> bool {
    let table = match target {
        TargetLanguage::Rust => RUST_KEYWORDS,
        TargetLanguage::CSharp => CSHARP_KEYWORDS,
    };
    table.binary_search(&name).is_ok()
}

/// Disambiguate a candidate identifier that collides with a reserved word
/// by appending a single underscore.
///
/// Must run on the final candidate: earlier stages can themselves produce a
/// collision (a lowercase column named `type` passes through untouched when
/// `force_uppercase_table_name` is off).
pub fn ensure_not_keyword(name: String, target: TargetLanguage) -> String {
    if is_keyword(&name, target) {
        format!("{name}_")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_tables_are_sorted() {
        assert!(RUST_KEYWORDS.windows(2).all(|w| w[0] < w[1]));
        assert!(CSHARP_KEYWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn detects_target_specific_keywords() {
        assert!(is_keyword("type", TargetLanguage::Rust));
        assert!(!is_keyword("class", TargetLanguage::Rust));
        assert!(is_keyword("class", TargetLanguage::CSharp));
        assert!(!is_keyword("fn", TargetLanguage::CSharp));
    }

    #[test]
    fn appends_single_underscore_on_collision() {
        assert_eq!(
            ensure_not_keyword("match".to_string(), TargetLanguage::Rust),
            "match_"
        );
        assert_eq!(
            ensure_not_keyword("quantity".to_string(), TargetLanguage::Rust),
            "quantity"
        );
    }
}
