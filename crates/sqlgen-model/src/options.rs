//! Configuration options for identifier generation.

use serde::{Deserialize, Serialize};

/// Language whose reserved words the keyword guard must avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Generated code is Rust (default).
    #[default]
    Rust,
    /// Generated code is C#, the target of the original SqlMetal-style tools.
    CSharp,
}

/// Options controlling the naming heuristics.
///
/// These are read once at startup and held immutably by the naming engine
/// for the lifetime of a generation run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NamingOptions {
    /// Rewrite a trailing `id` (any casing) to `ID` after capitalization.
    ///
    /// Many schemas use `ID` as a conventional acronym suffix
    /// (`PRODUCTID` should become `ProductID`, not `Productid`).
    pub force_uppercase_id_suffix: bool,

    /// Capitalize single-case column names when deriving field names.
    pub force_uppercase_table_name: bool,
}

impl NamingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uppercase_id_suffix(mut self, enable: bool) -> Self {
        self.force_uppercase_id_suffix = enable;
        self
    }

    pub fn with_uppercase_table_name(mut self, enable: bool) -> Self {
        self.force_uppercase_table_name = enable;
        self
    }
}
