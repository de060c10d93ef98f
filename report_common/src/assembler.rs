//! Turning a list of symbols into report rows.
//!
//! `ReportAssembler` asks a `QuoteSource` for every requested symbol and builds one
//! `ReportRow` per request. A failing or empty lookup never aborts the batch: the row is
//! still produced, with every quote-derived field absent.
//!
//! Execution model:
//! - With one worker the symbols are fetched sequentially on the calling thread.
//! - With more workers, scoped threads pull `(index, symbol)` jobs from a
//!   `crossbeam_channel` and push `(index, quote)` results back. Results are written into
//!   per-index slots, so the output follows input order no matter which fetch finishes
//!   first. That order is the tie-break the ranker relies on.

use std::thread;

use chrono::NaiveDate;
use crossbeam_channel::unbounded;
use log::{debug, info, warn};

use crate::quote::{Quote, QuoteSource};
use crate::row::ReportRow;

/// Default number of concurrent fetch workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Builds report rows from a quote source.
pub struct ReportAssembler<'a> {
    source: &'a dyn QuoteSource,
    workers: usize,
    as_of_date: NaiveDate,
}

impl<'a> ReportAssembler<'a> {
    /// Create an assembler that stamps every row with `as_of_date`.
    pub fn new(source: &'a dyn QuoteSource, as_of_date: NaiveDate) -> Self {
        Self {
            source,
            workers: DEFAULT_WORKERS,
            as_of_date,
        }
    }

    /// Set the number of concurrent fetches. Values below one are treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Fetch and assemble one row per symbol, in input order.
    ///
    /// Duplicate symbols are fetched and reported independently.
    pub fn assemble(&self, symbols: &[String]) -> Vec<ReportRow> {
        info!(
            "Assembling {} symbols from '{}' with {} worker(s)",
            symbols.len(),
            self.source.name(),
            self.workers
        );

        let quotes = if self.workers == 1 || symbols.len() <= 1 {
            symbols.iter().map(|s| self.fetch_one(s)).collect()
        } else {
            self.fetch_concurrent(symbols)
        };

        symbols
            .iter()
            .zip(quotes)
            .map(|(symbol, quote)| ReportRow::new(symbol, quote, self.as_of_date))
            .collect()
    }

    /// Fetch a single quote, folding every failure into `None`.
    fn fetch_one(&self, symbol: &str) -> Option<Quote> {
        match self.source.fetch(symbol) {
            Ok(Some(quote)) => {
                debug!("Fetched quote for {}", symbol);
                Some(quote)
            }
            Ok(None) => {
                warn!("No quote returned for {}", symbol);
                None
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    fn fetch_concurrent(&self, symbols: &[String]) -> Vec<Option<Quote>> {
        let (job_tx, job_rx) = unbounded::<(usize, &str)>();
        let (result_tx, result_rx) = unbounded::<(usize, Option<Quote>)>();

        for (index, symbol) in symbols.iter().enumerate() {
            // Receiver is alive until the scope below ends.
            let _ = job_tx.send((index, symbol.as_str()));
        }
        drop(job_tx);

        let workers = self.workers.min(symbols.len());
        thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for (index, symbol) in job_rx.iter() {
                        let quote = self.fetch_one(symbol);
                        if result_tx.send((index, quote)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(result_tx);

        let mut slots: Vec<Option<Quote>> = vec![None; symbols.len()];
        for (index, quote) in result_rx.iter() {
            slots[index] = quote;
        }
        slots
    }
}
