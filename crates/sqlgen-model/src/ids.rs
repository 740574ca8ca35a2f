use std::fmt;

use crate::ModelError;

/// A raw table name as it appears in the source schema.
///
/// The wrapped string is kept verbatim (normalization happens downstream in
/// the naming engine); only empty or whitespace-only names are rejected.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::InvalidTableName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TableName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableName> for String {
    fn from(value: TableName) -> Self {
        value.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_names() {
        assert!(TableName::new("").is_err());
        assert!(TableName::new("   ").is_err());
    }

    #[test]
    fn keeps_raw_casing_verbatim() {
        let name = TableName::new("ORDER_DETAILS").unwrap();
        assert_eq!(name.as_str(), "ORDER_DETAILS");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let name: TableName = serde_json::from_str("\"Customer\"").unwrap();
        assert_eq!(name.as_str(), "Customer");
        assert!(serde_json::from_str::<TableName>("\"  \"").is_err());
    }
}
