//! Schema description consumed by the naming engine and the session.
//!
//! This is the already-introspected shape of a database: the core never
//! talks to a vendor driver, it receives this description from a
//! collaborator (in practice the CLI, which deserializes it from JSON).

use serde::{Deserialize, Serialize};

use crate::{ModelError, TableName};

/// A foreign-key reference from one column to a parent table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Referencing column in the child table.
    pub column: String,
    /// Referenced (parent) table.
    pub parent: TableName,
}

/// One column of a table, as introspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescription {
    /// Raw column name from the schema.
    pub name: String,
    /// Vendor type text, carried through for code emission.
    #[serde(default)]
    pub sql_type: Option<String>,
    /// Whether the column is nullable.
    #[serde(default)]
    pub nullable: bool,
}

/// One table of the source schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescription {
    pub name: TableName,
    #[serde(default)]
    pub columns: Vec<ColumnDescription>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

/// The full introspected schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDescription {
    pub tables: Vec<TableDescription>,
}

impl SchemaDescription {
    /// Direct foreign-key parents of `table`, in declaration order,
    /// without duplicates. Unknown tables have no parents.
    pub fn parent_tables(&self, table: &TableName) -> Vec<TableName> {
        let Some(desc) = self.tables.iter().find(|t| &t.name == table) else {
            return Vec::new();
        };
        let mut parents: Vec<TableName> = Vec::new();
        for fk in &desc.foreign_keys {
            if !parents.contains(&fk.parent) {
                parents.push(fk.parent.clone());
            }
        }
        parents
    }

    /// Check that every foreign key points at a table present in the schema.
    pub fn validate(&self) -> Result<(), ModelError> {
        for table in &self.tables {
            for fk in &table.foreign_keys {
                if !self.tables.iter().any(|t| t.name == fk.parent) {
                    return Err(ModelError::UnknownParentTable {
                        child: table.name.to_string(),
                        parent: fk.parent.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
