//!
//! Core of the stock drawdown report, shared by the quote feeds and the CLI.
//!
//! This crate aggregates:
//! - `error`: unified error type `ReportError` used across the workspace.
//! - `result`: handy `Result<T, ReportError>` alias.
//! - `quote`: the `Quote` snapshot and the `QuoteSource` trait feeds implement.
//! - `metric`: change from the 52-week high.
//! - `row`: `ReportRow` and the ranked `Report`.
//! - `assembler`: fetching quotes for a symbol list, sequentially or on a worker pool.
//! - `rank`: ordering rows by change.
//! - `format`: display strings for prices, market caps and percentages.
//! - `tier`: severity tiers and their presentation hints.
//! - `category`: named symbol lists.
//! - `pipeline`: the whole flow from a category name to a ranked report.
#![warn(missing_docs)]
pub mod assembler;
pub mod category;
pub mod error;
pub mod format;
pub mod metric;
pub mod pipeline;
pub mod quote;
pub mod rank;
pub mod result;
pub mod row;
pub mod tier;

pub use error::ReportError;
pub use result::Result;
pub use quote::{Quote, QuoteSource};
pub use row::{Report, ReportRow};
