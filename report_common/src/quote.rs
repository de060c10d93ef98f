//! Quote data model and the `QuoteSource` seam.
//!
//! A `Quote` is the snapshot a market-data source returns for one symbol. Every
//! attribute is independently optional: feeds routinely omit a market cap or a sector
//! for ETFs and funds, and the report must still render the rest of the row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::result::Result;

/// Market snapshot for a single ticker symbol.
///
/// Field names serialize in camelCase to match the market-data wire names, so JSON
/// snapshot files can be written by hand or captured from a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Symbol identifier (e.g., `AAPL`).
    pub symbol: String,
    /// Last traded price.
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Highest price over the trailing 52 weeks.
    #[serde(default)]
    pub fifty_two_week_high: Option<f64>,
    /// Lowest price over the trailing 52 weeks.
    #[serde(default)]
    pub fifty_two_week_low: Option<f64>,
    /// Market capitalisation in the quote currency.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Industry classification.
    #[serde(default)]
    pub industry: Option<String>,
    /// Sector classification.
    #[serde(default)]
    pub sector: Option<String>,
    /// Company display name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Price change over the last session, in percent.
    #[serde(default)]
    pub day_change_percent: Option<f64>,
    /// Upcoming earnings announcement dates, soonest first.
    #[serde(default)]
    pub earnings_dates: Vec<NaiveDate>,
}

impl Quote {
    /// Create a quote for `symbol` with every attribute absent.
    pub fn empty(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }
}

/// A provider of quotes, one symbol at a time.
///
/// Implementations return `Ok(None)` when the provider has no record for the symbol and
/// `Err(ReportError::FetchFailure { .. })` when the lookup itself failed. Callers treat
/// both the same way at the row level; the distinction only matters for logging.
///
/// Sources are shared between fetch workers, hence the `Send + Sync` bound.
pub trait QuoteSource: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Fetch the current quote for `symbol`.
    fn fetch(&self, symbol: &str) -> Result<Option<Quote>>;
}
