//! Report rows and the ranked report.
//!
//! A `ReportRow` is built once per requested symbol and never changes afterwards. Its
//! fields are private so the `change_percent` invariant (present exactly when both the
//! price and a non-zero 52-week high are present) cannot be broken by a caller.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::error::ReportError;
use crate::metric::MetricDeriver;
use crate::quote::Quote;

/// One line of the report: raw quote attributes plus the derived change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    symbol: String,
    company_name: Option<String>,
    current_price: Option<f64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
    market_cap: Option<f64>,
    industry: Option<String>,
    sector: Option<String>,
    change_percent: Option<f64>,
    day_change_percent: Option<f64>,
    earnings_dates: Vec<NaiveDate>,
    as_of_date: NaiveDate,
}

impl ReportRow {
    /// Build a row for `symbol` from an optional quote.
    ///
    /// `None` produces a row where every quote-derived field is absent. The symbol always
    /// comes from the request, not from the quote, so a feed echoing a different casing
    /// does not change what the user asked for.
    pub fn new(symbol: &str, quote: Option<Quote>, as_of_date: NaiveDate) -> Self {
        let quote = quote.unwrap_or_else(|| Quote::empty(symbol));
        let change_percent =
            match MetricDeriver::derive_checked(quote.current_price, quote.fifty_two_week_high) {
                Ok(change) => Some(change),
                Err(e) => {
                    debug!("{}: no change percent, {}", symbol, ReportError::from(e));
                    None
                }
            };

        Self {
            symbol: symbol.to_string(),
            company_name: quote.company_name,
            current_price: quote.current_price,
            fifty_two_week_high: quote.fifty_two_week_high,
            fifty_two_week_low: quote.fifty_two_week_low,
            market_cap: quote.market_cap,
            industry: quote.industry,
            sector: quote.sector,
            change_percent,
            day_change_percent: quote.day_change_percent,
            earnings_dates: quote.earnings_dates,
            as_of_date,
        }
    }

    /// Ticker symbol as requested.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Company display name.
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Last traded price.
    pub fn current_price(&self) -> Option<f64> {
        self.current_price
    }

    /// 52-week high.
    pub fn fifty_two_week_high(&self) -> Option<f64> {
        self.fifty_two_week_high
    }

    /// 52-week low.
    pub fn fifty_two_week_low(&self) -> Option<f64> {
        self.fifty_two_week_low
    }

    /// Market capitalisation.
    pub fn market_cap(&self) -> Option<f64> {
        self.market_cap
    }

    /// Industry classification.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Sector classification.
    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    /// Percentage distance of the current price from the 52-week high.
    pub fn change_percent(&self) -> Option<f64> {
        self.change_percent
    }

    /// Change over the last session, as reported by the feed.
    pub fn day_change_percent(&self) -> Option<f64> {
        self.day_change_percent
    }

    /// Upcoming earnings dates. Empty when the feed had none.
    pub fn earnings_dates(&self) -> &[NaiveDate] {
        &self.earnings_dates
    }

    /// Date the quotes were collected.
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of_date
    }
}

/// A ranked, immutable report built for one run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    label: String,
    as_of_date: NaiveDate,
    rows: Vec<ReportRow>,
}

impl Report {
    /// Wrap already ranked rows. See [`crate::rank::Ranker`].
    pub fn new(label: &str, as_of_date: NaiveDate, rows: Vec<ReportRow>) -> Self {
        Self {
            label: label.to_string(),
            as_of_date,
            rows,
        }
    }

    /// What the report was requested for, usually a category name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Date the quotes were collected.
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of_date
    }

    /// Rows in ranked order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
