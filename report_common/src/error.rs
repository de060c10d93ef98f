//! Error types shared by the report pipeline, the quote feeds and the CLI.
//!
//! The `ReportError` enum unifies the failure cases of the whole workspace. Only a few
//! of them are fatal for a run: per-symbol problems (`MissingField`, `FetchFailure`,
//! `DivisionGuard`) are recovered where they happen and end up as absent values in the
//! affected row.
use std::io;

use thiserror::Error;

use crate::metric::MetricError;

/// Unified error type shared by every crate of the workspace.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A quote lacks an attribute the caller asked for.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The quote source could not produce a quote for a symbol.
    #[error("Failed to fetch quote for {symbol}: {reason}")]
    FetchFailure {
        /// Symbol whose fetch failed.
        symbol: String,
        /// Human-readable cause reported by the source.
        reason: String,
    },

    /// The requested category is not known to the resolver.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The 52-week high used as the reference price is zero.
    #[error("Reference high is zero, change percent is undefined")]
    DivisionGuard,

    /// I/O error originating from the standard library (files, stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The categories file is well-formed JSON but holds invalid entries.
    #[error("Parse categories file error: {0}")]
    ParseCategories(String),

    /// Process configuration is missing or invalid (e.g. no API key).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport level failure talking to the market-data API.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<MetricError> for ReportError {
    fn from(err: MetricError) -> Self {
        match err {
            MetricError::MissingInput(field) => ReportError::MissingField(field),
            MetricError::DivisionGuard => ReportError::DivisionGuard,
            MetricError::NonFinite => ReportError::MissingField("changePercent"),
        }
    }
}
