//! Report CLI - builds a ranked drawdown report for a category of stocks.
//!
//! It resolves the category (asking for one on stdin when `--category` is not given),
//! fetches a quote for every symbol, computes each symbol's distance from its 52-week
//! high, ranks the rows and renders them as a text table, HTML, or JSON.
//!
//! Usage example (CLI):
//! ```bash
//! report_cli --category tech --source simulated --seed 7 --format html --output tech.html
//! ```
//!
//! An unknown category is reported on stderr and the process exits with an error before
//! any quote is fetched. The category prompt and logs go to stderr, so stdout carries
//! only the report; `RUST_LOG=debug` shows every fetch.
#![warn(missing_docs)]
mod args;
mod prompt;
mod render;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Local;
use clap::Parser;
use log::info;
use report_common::category::CategoryResolver;
use report_common::pipeline::ReportPipeline;
use report_common::{QuoteSource, ReportError, Result};
use report_feed::{FeedConfig, HttpQuoteSource, SimulatedQuoteSource, SnapshotQuoteSource};

use crate::args::{Args, SourceKind};
use crate::prompt::prompt_category;
use crate::render::render;

fn main() {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(&args, io::stdin().lock(), io::stderr(), io::stdout()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Build and emit the report. `input` answers the category prompt written to `prompt`;
/// the report goes to `out` unless `--output` names a file.
fn run<R: BufRead, P: Write, O: Write>(args: &Args, input: R, prompt: P, out: O) -> Result<()> {
    let resolver = match &args.categories {
        Some(path) => CategoryResolver::from_path(path)?,
        None => CategoryResolver::builtin(),
    };

    let category = match &args.category {
        Some(category) => category.clone(),
        None => {
            let names: Vec<&str> = resolver.names().collect();
            prompt_category(&names, input, prompt)?
        }
    };

    // Validate the category before touching the network or reading any configuration.
    resolver.resolve(&category)?;

    let source = build_source(args)?;
    info!("Using '{}' quote source", source.name());

    let report = ReportPipeline::new(&resolver, source.as_ref())
        .with_workers(args.workers)
        .run(&category, Local::now().date_naive())?;
    info!("Report built with {} rows", report.len());

    let rendered = render(&report, args.format)?;
    write_report(&rendered, args.output.as_deref(), out)
}

fn write_report<O: Write>(rendered: &str, output: Option<&Path>, mut out: O) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Report written to {}", path.display());
        }
        None => {
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

fn build_source(args: &Args) -> Result<Box<dyn QuoteSource>> {
    match args.source {
        SourceKind::Http => {
            let mut config = FeedConfig::load(&args.config)?;
            if let Some(timeout) = args.timeout_secs {
                config.timeout_secs = timeout;
            }
            Ok(Box::new(HttpQuoteSource::from_config(&config)?))
        }
        SourceKind::File => {
            let path = args.snapshot.as_deref().ok_or_else(|| {
                ReportError::Config("--snapshot is required for the file source".to_string())
            })?;
            Ok(Box::new(SnapshotQuoteSource::from_path(path)?))
        }
        SourceKind::Simulated => Ok(Box::new(SimulatedQuoteSource::new(args.seed))),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["report_cli", "--source", "simulated", "--seed", "3"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn prompt_and_report_use_separate_streams() {
        let mut prompt = Vec::new();
        let mut out = Vec::new();
        run(&args(&[]), "oil\n".as_bytes(), &mut prompt, &mut out).unwrap();

        let prompt = String::from_utf8(prompt).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(prompt.starts_with("Select category [all, oil, "));
        assert!(out.starts_with("Stock report: oil ("), "{out}");
        assert!(!out.contains("Select category"));
    }

    #[test]
    fn unknown_category_fails_without_output() {
        let mut out = Vec::new();
        let res = run(&args(&["--category", "bogus"]), io::empty(), io::sink(), &mut out);

        assert!(matches!(res, Err(ReportError::UnknownCategory(ref c)) if c == "bogus"));
        assert!(out.is_empty());
    }

    #[test]
    fn output_flag_writes_file_instead_of_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tech.json");
        let path_arg = path.to_str().unwrap();

        let mut out = Vec::new();
        run(
            &args(&["--category", "tech", "--format", "json", "--output", path_arg]),
            io::empty(),
            io::sink(),
            &mut out,
        )
        .unwrap();

        assert!(out.is_empty());
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(!written.as_array().unwrap().is_empty());
        assert!(written[0]["formatted"]["dayChangePercent"].is_string());
    }
}
