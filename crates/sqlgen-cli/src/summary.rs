//! Terminal summary of the raw-to-generated name mapping.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use sqlgen_model::SchemaDescription;
use sqlgen_naming::NamingEngine;

pub fn print_names(schema: &SchemaDescription, engine: &NamingEngine) {
    let mut tables = new_table(vec!["Table", "Type", "Collection"]);
    for table in &schema.tables {
        let raw = table.name.as_str();
        tables.add_row(vec![
            Cell::new(raw),
            Cell::new(engine.table_name_singular(raw)),
            Cell::new(engine.table_name_plural(raw)),
        ]);
    }
    println!("{tables}");

    let mut columns = new_table(vec!["Table", "Column", "Field"]);
    for table in &schema.tables {
        for column in &table.columns {
            columns.add_row(vec![
                Cell::new(table.name.as_str()),
                Cell::new(&column.name),
                Cell::new(engine.field_name(&column.name)),
            ]);
        }
    }
    if !schema.tables.iter().all(|t| t.columns.is_empty()) {
        println!("{columns}");
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
