//! Command-line arguments for the report CLI.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use report_common::assembler::DEFAULT_WORKERS;
use strum::Display;

/// Where quotes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// Market-data REST API (needs an API key).
    Http,
    /// JSON snapshot file given with `--snapshot`.
    File,
    /// Seeded random-walk quotes.
    Simulated,
}

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text table.
    Text,
    /// Standalone HTML document.
    Html,
    /// JSON array of rows.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Category to report on (or `all`). Prompted for when omitted.
    #[clap(long)]
    pub category: Option<String>,

    /// JSON file mapping category names to symbol lists. Built-in table when omitted.
    #[clap(long)]
    pub categories: Option<PathBuf>,

    /// Quote source.
    #[clap(long, value_enum, default_value_t = SourceKind::Http)]
    pub source: SourceKind,

    /// Snapshot file for `--source file`.
    #[clap(long, required_if_eq("source", "file"))]
    pub snapshot: Option<PathBuf>,

    /// Seed for `--source simulated`.
    #[clap(long, default_value_t = 0)]
    pub seed: u64,

    /// API configuration file for `--source http`.
    #[clap(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Number of concurrent quote fetches.
    #[clap(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-request timeout in seconds, overrides the configuration file.
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}
