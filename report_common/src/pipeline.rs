//! End-to-end report construction.
//!
//! `ReportPipeline` wires the pieces together in the order the data flows:
//! category resolution, quote assembly, ranking. Formatting and tier classification
//! happen later, per row, through [`PresentedRow`], so rendering never feeds back into
//! the numbers the ranking used.

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::assembler::{DEFAULT_WORKERS, ReportAssembler};
use crate::category::CategoryResolver;
use crate::format::{FormattedRow, Formatter};
use crate::quote::QuoteSource;
use crate::rank::Ranker;
use crate::result::Result;
use crate::row::{Report, ReportRow};
use crate::tier::{Tier, TierClassifier};

/// Builds a ranked `Report` for a category.
pub struct ReportPipeline<'a> {
    resolver: &'a CategoryResolver,
    source: &'a dyn QuoteSource,
    workers: usize,
}

impl<'a> ReportPipeline<'a> {
    /// Create a pipeline over a resolver and a quote source.
    pub fn new(resolver: &'a CategoryResolver, source: &'a dyn QuoteSource) -> Self {
        Self {
            resolver,
            source,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Number of concurrent fetches, see [`ReportAssembler::with_workers`].
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Resolve `category`, fetch every symbol, and rank the rows.
    ///
    /// An unknown category fails before any quote is requested.
    pub fn run(&self, category: &str, as_of_date: NaiveDate) -> Result<Report> {
        let symbols = self.resolver.resolve(category)?;
        info!("Category '{}' resolved to {} symbols", category, symbols.len());
        Ok(self.run_symbols(category, &symbols, as_of_date))
    }

    /// Build a report for an explicit symbol list.
    pub fn run_symbols(&self, label: &str, symbols: &[String], as_of_date: NaiveDate) -> Report {
        let rows = ReportAssembler::new(self.source, as_of_date)
            .with_workers(self.workers)
            .assemble(symbols);
        Report::new(label, as_of_date, Ranker::rank(rows))
    }
}

/// A row together with its display strings and tier, ready for a renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedRow<'a> {
    /// Raw values.
    #[serde(flatten)]
    pub row: &'a ReportRow,
    /// Display strings for the numeric fields.
    pub formatted: FormattedRow,
    /// Severity tier of `change_percent`.
    pub tier: Tier,
}

impl<'a> PresentedRow<'a> {
    /// Format and classify `row`.
    pub fn new(row: &'a ReportRow) -> Self {
        Self {
            row,
            formatted: Formatter::format_row(row),
            tier: TierClassifier::classify(row.change_percent()),
        }
    }
}

impl Report {
    /// Rows in ranked order with formatting and tier applied.
    pub fn presented(&self) -> impl Iterator<Item = PresentedRow<'_>> {
        self.rows().iter().map(PresentedRow::new)
    }
}
