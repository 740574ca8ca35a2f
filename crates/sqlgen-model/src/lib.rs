//! Shared data model for the sqlgen code generator.
//!
//! This crate holds the types exchanged between the naming pipeline, the
//! commit session, and the CLI: validated schema names, the override table,
//! naming options, and the schema description read from disk.

#![deny(unsafe_code)]

mod error;
mod ids;
mod options;
mod overrides;
mod schema;

pub use error::ModelError;
pub use ids::TableName;
pub use options::{NamingOptions, TargetLanguage};
pub use overrides::OverrideTable;
pub use schema::{ColumnDescription, ForeignKey, SchemaDescription, TableDescription};
