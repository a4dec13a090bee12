//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Validate record identifiers and detect likely duplicate records",
    long_about = "Validate 10-digit organizational identifiers and diagnosis codes, \
                  and screen a candidate record against an existing record set \
                  for exact duplicates, similar records, and identifier conflicts."
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

    /// Include record names and identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate 10-digit organizational identifiers.
    Identifier(ValuesArgs),

    /// Validate diagnosis codes.
    Code(ValuesArgs),

    /// Check a candidate record against an existing record set.
    Detect(DetectArgs),
}

#[derive(Args)]
pub struct ValuesArgs {
    /// Values to validate.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct DetectArgs {
    /// CSV file of existing records.
    #[arg(long = "store", value_name = "CSV")]
    pub store: PathBuf,

    #[arg(long = "first-name")]
    pub first_name: String,

    #[arg(long = "last-name")]
    pub last_name: String,

    /// External identifier of the candidate (e.g. an MRN).
    #[arg(long = "external-id")]
    pub external_id: String,

    /// 10-digit organizational identifier of the candidate.
    #[arg(long = "organization-id")]
    pub organization_id: Option<String>,

    /// Free-text subject detail carried with the candidate.
    #[arg(long = "detail")]
    pub detail: Option<String>,

    /// Detection settings file (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Similarity threshold in [0, 1] (overrides the config file).
    #[arg(long = "threshold")]
    pub threshold: Option<f64>,

    /// Maximum number of existing records to compare (overrides the config file).
    #[arg(long = "max-candidates")]
    pub max_candidates: Option<usize>,

    /// Print warnings as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
