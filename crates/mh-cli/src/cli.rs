//! CLI argument definitions for the register extractor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mh_cli::config::{DEFAULT_INPUT_CSV, DEFAULT_OUTPUT_JSON, RunConfig};

#[derive(Parser)]
#[command(
    name = "mh-chateaux",
    version,
    about = "Extract castles, forts and abbeys from the monuments register",
    long_about = "Read the semicolon-separated monuments register export, keep castles,\n\
                  manors, forts, abbeys, priories and charterhouses, normalize their\n\
                  construction centuries and write them as a JSON array."
)]
pub struct Cli {
    /// Defaults to `convert` with the default paths.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Convert the register export to the JSON document.
    Convert(ConvertArgs),

    /// List the inclusion and exclusion keywords.
    Keywords,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Register export (semicolon-separated, UTF-8).
    #[arg(long = "input", value_name = "CSV", default_value = DEFAULT_INPUT_CSV)]
    pub input: PathBuf,

    /// JSON document to write.
    #[arg(long = "output", value_name = "JSON", default_value = DEFAULT_OUTPUT_JSON)]
    pub output: PathBuf,

    /// Classify and report without writing the output document.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        let config = RunConfig::default();
        Self {
            input: config.input,
            output: config.output,
            dry_run: config.dry_run,
        }
    }
}

impl From<&ConvertArgs> for RunConfig {
    fn from(args: &ConvertArgs) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            dry_run: args.dry_run,
        }
    }
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
