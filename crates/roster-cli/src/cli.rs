//! CLI argument definitions for the roster report tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_report::ExportFormat;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster reports - browse and export workforce listings",
    long_about = "Browse attendance, leave, salary, location, and employee listings.\n\n\
                  Search, sort, and page through a report in the terminal, or export\n\
                  the filtered result as CSV or a printable document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Allow employee-level values (names, queries, rows) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in reports.
    Reports,

    /// Show one page of a report.
    View(ViewArgs),

    /// Export the filtered and sorted report (all pages).
    Export(ExportArgs),
}

/// Which records to show and how to order them.
#[derive(Args)]
pub struct SelectionArgs {
    /// Report key (see `roster reports`).
    #[arg(value_name = "REPORT")]
    pub report: String,

    /// Data directory with `<REPORT>.json` / `<REPORT>.csv`, or a single
    /// records file.
    #[arg(long = "data", value_name = "DIR|FILE")]
    pub data: PathBuf,

    /// Case-insensitive search across the report's searchable fields.
    #[arg(long = "query", short = 'q', value_name = "TEXT")]
    pub query: Option<String>,

    /// Sort by column (field path or column header).
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,

    /// First day of the date range (inclusive, YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE", requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of the date range (inclusive, YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE", requires = "from")]
    pub to: Option<NaiveDate>,

    /// Whole calendar month (YYYY-MM); shorthand for --from/--to.
    #[arg(
        long = "month",
        value_name = "YYYY-MM",
        value_parser = parse_month,
        conflicts_with_all = ["from", "to"]
    )]
    pub month: Option<NaiveDate>,

    /// Only records at this location.
    #[arg(long = "location", value_name = "NAME")]
    pub location: Option<String>,
}

/// First day of a `YYYY-MM` month.
fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM, got '{value}'"))
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Page number (1-based).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (default: from settings).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Export format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Output file (default: `<REPORT>.<ext>` in the configured output
    /// directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Document,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Document => ExportFormat::Document,
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
