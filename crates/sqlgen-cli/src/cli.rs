//! CLI argument definitions for sqlgen.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sqlgen_model::TargetLanguage;

#[derive(Parser)]
#[command(
    name = "sqlgen",
    version,
    about = "Generate stable source-code identifiers from a database schema",
    long_about = "Translate raw, vendor-specific schema names into stable,\n\
                  idiomatic identifiers for generated code.\n\n\
                  A renames XML file can override any name; heuristics handle\n\
                  the rest (capitalization, pluralization, keyword collisions)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the raw-to-generated identifier mapping for a schema.
    Names(NamesArgs),

    /// Emit Rust struct skeletons for every table in a schema.
    Generate(GenerateArgs),
}

/// Flags shared by every naming-engine invocation.
#[derive(Args)]
pub struct NamingFlags {
    /// Renames XML file with explicit name overrides.
    #[arg(long = "renames", value_name = "PATH")]
    pub renames: Option<PathBuf>,

    /// Rewrite a trailing `id` to `ID` after capitalization.
    #[arg(long = "force-ucase-id")]
    pub force_ucase_id: bool,

    /// Capitalize single-case column names.
    #[arg(long = "force-ucase-table-name")]
    pub force_ucase_table_name: bool,

    /// Language whose reserved words generated identifiers must avoid.
    #[arg(long = "target", value_enum, default_value = "rust")]
    pub target: TargetArg,
}

#[derive(Args)]
pub struct NamesArgs {
    /// Path to the introspected schema description (JSON).
    #[arg(value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub naming: NamingFlags,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the introspected schema description (JSON).
    #[arg(value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub naming: NamingFlags,

    /// Write generated code to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TargetArg {
    Rust,
    Csharp,
}

impl From<TargetArg> for TargetLanguage {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::Rust => Self::Rust,
            TargetArg::Csharp => Self::CSharp,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
