//! Quote sources for the stock drawdown report.
//!
//! Every source implements `report_common::QuoteSource`:
//! - `http`: blocking REST client for a market-data API (needs an API key).
//! - `snapshot`: quotes read from a JSON file.
//! - `simulated`: seeded random-walk quotes.
//!
//! `config` holds the API settings read once at startup.
#![warn(missing_docs)]
pub mod config;
pub mod http;
pub mod simulated;
pub mod snapshot;

pub use config::FeedConfig;
pub use http::HttpQuoteSource;
pub use simulated::SimulatedQuoteSource;
pub use snapshot::SnapshotQuoteSource;
