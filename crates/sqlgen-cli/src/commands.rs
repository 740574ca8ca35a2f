//! Subcommand implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use sqlgen_cli::emit;
use sqlgen_cli::renames::load_override_table;
use sqlgen_cli::summary;
use sqlgen_model::{NamingOptions, SchemaDescription};
use sqlgen_naming::NamingEngine;

use crate::cli::{GenerateArgs, NamesArgs, NamingFlags};

pub fn run_names(args: &NamesArgs) -> Result<()> {
    let engine = build_engine(&args.naming)?;
    let schema = load_schema(&args.schema)?;
    summary::print_names(&schema, &engine);
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let engine = build_engine(&args.naming)?;
    let schema = load_schema(&args.schema)?;
    let code = emit::rust_module(&schema, &engine);
    match &args.output {
        Some(path) => {
            std::fs::write(path, code)
                .with_context(|| format!("write generated code to {}", path.display()))?;
            info!(path = %path.display(), tables = schema.tables.len(), "generated code written");
        }
        None => print!("{code}"),
    }
    Ok(())
}

/// Build the naming engine from CLI flags; loading the renames file happens
/// here, before any name is normalized, so a bad configuration fails fast.
fn build_engine(flags: &NamingFlags) -> Result<NamingEngine> {
    let overrides = load_override_table(flags.renames.as_deref())?;
    let options = NamingOptions::new()
        .with_uppercase_id_suffix(flags.force_ucase_id)
        .with_uppercase_table_name(flags.force_ucase_table_name);
    debug!(
        overrides = overrides.len(),
        ?options,
        "naming engine configured"
    );
    Ok(NamingEngine::new(overrides, options, flags.target.into()))
}

fn load_schema(path: &Path) -> Result<SchemaDescription> {
    let file =
        File::open(path).with_context(|| format!("open schema file {}", path.display()))?;
    let schema: SchemaDescription = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse schema file {}", path.display()))?;
    schema
        .validate()
        .with_context(|| format!("invalid schema in {}", path.display()))?;
    info!(tables = schema.tables.len(), "schema loaded");
    Ok(schema)
}
