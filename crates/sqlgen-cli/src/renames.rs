//! Loader for the renames XML file.
//!
//! The file is the user's escape hatch for every naming heuristic:
//!
//! ```xml
//! <Renamings>
//!   <Renaming old="PERSON" new="People" />
//!   <Renaming old="tbl_cust" new="Customer" />
//! </Renamings>
//! ```
//!
//! No file configured means overrides are simply disabled. A configured but
//! missing file is a fatal configuration error, raised before any
//! normalization happens.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::info;

use sqlgen_model::OverrideTable;

/// Load the override table from an optional renames file path.
pub fn load_override_table(path: Option<&Path>) -> Result<OverrideTable> {
    let Some(path) = path else {
        return Ok(OverrideTable::empty());
    };
    if !path.exists() {
        bail!("renames file missing: {}", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read renames file {}", path.display()))?;
    let table = parse_renames(&content)
        .with_context(|| format!("parse renames file {}", path.display()))?;
    info!(
        path = %path.display(),
        entries = table.len(),
        "loaded renames file"
    );
    Ok(table)
}

/// Parse renames XML into an override table, first duplicate key winning.
pub fn parse_renames(xml: &str) -> Result<OverrideTable> {
    let mut reader = Reader::from_str(xml);
    let mut pairs: Vec<(String, String)> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element)
                if element.local_name().as_ref() == b"Renaming" =>
            {
                let mut old = None;
                let mut new = None;
                for attribute in element.attributes() {
                    let attribute = attribute?;
                    match attribute.key.as_ref() {
                        b"old" => old = Some(attribute.unescape_value()?.into_owned()),
                        b"new" => new = Some(attribute.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                let old = old.context("Renaming element is missing the `old` attribute")?;
                let new = new.context("Renaming element is missing the `new` attribute")?;
                pairs.push((old, new));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(OverrideTable::from_pairs(pairs))
}
