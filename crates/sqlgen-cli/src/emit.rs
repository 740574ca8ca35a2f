//! Rust struct emission for an introspected schema.
//!
//! Deliberately small: one struct per table, field names straight from the
//! naming engine. Anything fancier (relations, query builders) belongs to
//! downstream tooling.

use std::fmt::Write as _;

use sqlgen_model::{ColumnDescription, SchemaDescription};
use sqlgen_naming::NamingEngine;

/// Render the whole schema as a Rust module.
pub fn rust_module(schema: &SchemaDescription, engine: &NamingEngine) -> String {
    let mut out = String::from("//! Generated by sqlgen. Do not edit.\n");
    for table in &schema.tables {
        let type_name = engine.table_name_singular(table.name.as_str());
        let collection = engine.table_name_plural(table.name.as_str());
        let _ = write!(
            out,
            "\n/// Row of `{raw}` (collection `{collection}`).\n\
             #[derive(Debug, Clone)]\n\
             #[allow(non_snake_case)]\n\
             pub struct {type_name} {{\n",
            raw = table.name,
        );
        for column in &table.columns {
            let field = engine.field_name(&column.name);
            let _ = writeln!(out, "    pub {field}: {},", rust_type(column));
        }
        out.push_str("}\n");
    }
    out
}

/// Map a vendor column type to a Rust field type. Unknown types fall back
/// to `String`, which is always representable.
fn rust_type(column: &ColumnDescription) -> String {
    let base = match column.sql_type.as_deref() {
        Some(sql) => {
            let sql = sql.to_lowercase();
            let head = sql.split(['(', ' ']).next().unwrap_or("").to_string();
            match head.as_str() {
                "int" | "integer" | "smallint" | "tinyint" | "mediumint" => "i32",
                "bigint" => "i64",
                "bit" | "bool" | "boolean" => "bool",
                "float" | "double" | "real" | "decimal" | "numeric" | "money" => "f64",
                _ => "String",
            }
        }
        None => "String",
    };
    if column.nullable {
        format!("Option<{base}>")
    } else {
        base.to_string()
    }
}
