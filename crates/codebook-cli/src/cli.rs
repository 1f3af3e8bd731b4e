use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use codebook_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "codebook",
    version,
    about = "Generate a descriptive codebook for a tabular dataset",
    long_about = "Reads a CSV dataset and a schema describing its variables, \
                  computes per-variable summaries and category frequencies, and \
                  writes a paginated codebook document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    /// Set log level explicitly (overrides -v/-q).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the full codebook document.
    Generate(GenerateArgs),

    /// Print summary and frequency tables of selected variables.
    Describe(DescribeArgs),

    /// Print the data dictionary.
    Dictionary(InputArgs),
}

/// Dataset and schema inputs shared by every command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// CSV dataset.
    #[arg(long = "data", value_name = "CSV")]
    pub data: PathBuf,

    /// Variable schema (JSON or TOML).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: PathBuf,

    /// Codebook configuration (TOML or JSON).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for example sampling (overrides the config file).
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output document path.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Document title.
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Text file with the project overview.
    #[arg(long = "overview", value_name = "FILE")]
    pub overview: Option<PathBuf>,

    /// Text file with key terms.
    #[arg(long = "keyterms", value_name = "FILE")]
    pub keyterms: Option<PathBuf>,

    /// Characters per line.
    #[arg(long = "page-width")]
    pub page_width: Option<usize>,

    /// Content lines per page.
    #[arg(long = "page-length")]
    pub page_length: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Variables to describe, in output order.
    #[arg(value_name = "VARIABLE", required = true)]
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
