//! The naming engine: override lookup orchestrating the casing heuristics.

use sqlgen_model::{NamingOptions, OverrideTable, TargetLanguage};

use crate::case::{capitalize, is_mixed_case, uppercase_id_suffix};
use crate::keywords::ensure_not_keyword;
use crate::plural::{pluralize, singularize};

/// Translates raw schema names into identifiers for generated code.
///
/// Every public operation follows the same precedence rule: an entry in the
/// override table wins outright and its value is returned verbatim, so users
/// can always force an exact name no matter what the heuristics would do.
///
/// The engine holds its inputs immutably and keeps no other state; it is
/// safe to share across threads once constructed.
#[derive(Debug, Clone)]
pub struct NamingEngine {
    overrides: OverrideTable,
    options: NamingOptions,
    target: TargetLanguage,
}

impl NamingEngine {
    pub fn new(overrides: OverrideTable, options: NamingOptions, target: TargetLanguage) -> Self {
        Self {
            overrides,
            options,
            target,
        }
    }

    /// Engine with no overrides, default options, Rust keywords.
    pub fn with_defaults() -> Self {
        Self::new(
            OverrideTable::empty(),
            NamingOptions::default(),
            TargetLanguage::default(),
        )
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn options(&self) -> NamingOptions {
        self.options
    }

    pub fn target(&self) -> TargetLanguage {
        self.target
    }

    /// Collection-style name for a table: `"EMPLOYEE"` -> `"Employees"`.
    ///
    /// Mixed-case input keeps its casing and is only pluralized; the vendor
    /// already produced the desired shape.
    pub fn table_name_plural(&self, raw: &str) -> String {
        if let Some(renamed) = self.overrides.lookup(raw) {
            return renamed.to_string();
        }
        if is_mixed_case(raw) {
            return pluralize(raw);
        }
        pluralize(&self.capitalize_word(raw))
    }

    /// Entity-type name for a table: `"EMPLOYEE"` -> `"Employee"`.
    ///
    /// Deliberately does not take the mixed-case shortcut that
    /// [`table_name_plural`](Self::table_name_plural) takes; generated
    /// output has depended on that asymmetry since the original tool.
    pub fn table_name_singular(&self, raw: &str) -> String {
        if let Some(renamed) = self.overrides.lookup(raw) {
            return renamed.to_string();
        }
        singularize(&self.capitalize_word(raw))
    }

    /// Generic rename hook for names with no dedicated heuristic, such as
    /// stored procedures: the override value or the input unchanged.
    pub fn rename(&self, raw: &str) -> String {
        if let Some(renamed) = self.overrides.lookup(raw) {
            return renamed.to_string();
        }
        raw.to_string()
    }

    /// Field name for a column: `"productid"` -> `"ProductID"` (with the
    /// suffix option on).
    ///
    /// Mixed-case input is left as-is; single-case input is capitalized only
    /// when `force_uppercase_table_name` is set. The keyword guard always
    /// runs last, on the final candidate.
    pub fn field_name(&self, raw: &str) -> String {
        if let Some(renamed) = self.overrides.lookup(raw) {
            return renamed.to_string();
        }
        let candidate = if is_mixed_case(raw) {
            raw.to_string()
        } else if self.options.force_uppercase_table_name {
            self.capitalize_word(raw)
        } else {
            raw.to_string()
        };
        ensure_not_keyword(candidate, self.target)
    }

    fn capitalize_word(&self, raw: &str) -> String {
        let capitalized = capitalize(raw);
        if self.options.force_uppercase_id_suffix {
            uppercase_id_suffix(&capitalized)
        } else {
            capitalized
        }
    }
}
