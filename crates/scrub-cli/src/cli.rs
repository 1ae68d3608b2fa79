//! CLI argument definitions for `scrub`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use scrub_model::SplitType;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Detect and fix data-quality issues in tabular data",
    long_about = "Detect and fix data-quality issues in CSV files.\n\n\
                  Finds missing values, format problems, invalid codes and duplicate rows,\n\
                  normalizes dates, phones, currency and text, and splits address or name columns."
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

    /// Include cell values in trace logs. Values are redacted otherwise.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect issues and print a summary.
    Check(CheckArgs),

    /// Normalize cells and write the cleaned table.
    Fix(FixArgs),

    /// Show duplicate groups and drop exact duplicate rows.
    Dedupe(OutputArgs),

    /// Split an address or full-name column into component columns.
    Split(SplitArgs),

    /// Order rows by a column, or restore the original order.
    Sort(SortArgs),

    /// Show the inferred context and split type of every column.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV file to inspect.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Maximum number of issues listed.
    #[arg(long = "limit", value_name = "N", default_value_t = 50)]
    pub limit: usize,

    /// Exit with status 1 when any issue is found.
    #[arg(long = "fail-on-issues")]
    pub fail_on_issues: bool,

    /// Print the issue list as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct OutputArgs {
    /// CSV file to read.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FixArgs {
    #[command(flatten)]
    pub io: OutputArgs,

    /// Normalize every fixable cell, not only cells with a detected issue.
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    #[command(flatten)]
    pub io: OutputArgs,

    /// Column to split.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Parser to use; `auto` infers it from the column values.
    #[arg(long = "kind", value_enum, default_value = "auto")]
    pub kind: SplitKindArg,
}

#[derive(Parser)]
pub struct SortArgs {
    #[command(flatten)]
    pub io: OutputArgs,

    /// Column to sort by. Without it rows return to their original order.
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,

    /// Sort descending.
    #[arg(long = "desc", requires = "column")]
    pub desc: bool,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// CSV file to profile.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Print the profile as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SplitKindArg {
    Auto,
    Address,
    Name,
}

impl SplitKindArg {
    /// The forced split type, or `None` when it should be inferred.
    pub fn forced(self) -> Option<SplitType> {
        match self {
            Self::Auto => None,
            Self::Address => Some(SplitType::Address),
            Self::Name => Some(SplitType::Name),
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
