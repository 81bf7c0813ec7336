//! CLI argument definitions for the inventory cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "netinv",
    version,
    about = "Network inventory cleaner - normalize host records and flag anomalies",
    long_about = "Clean a raw network-inventory export.\n\n\
                  Normalizes IP, MAC, hostname/FQDN, owner, device-type and site fields,\n\
                  then writes a cleaned CSV and a structured anomaly report."
)]
pub struct Cli {
    /// Input inventory CSV.
    #[arg(value_name = "INPUT", default_value = "inventory_raw.csv")]
    pub input: PathBuf,

    /// Directory for generated outputs (created if absent).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "deliverables")]
    pub output_dir: PathBuf,

    /// Validate and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
