//! Quotes from a JSON snapshot file.
//!
//! The file holds an array of `Quote` objects in the market-data wire naming:
//!
//! ```json
//! [{ "symbol": "AAPL", "currentPrice": 180.0, "fiftyTwoWeekHigh": 200.0 }]
//! ```
//!
//! Useful offline and for reproducible reports. Symbols are matched case-insensitively;
//! a symbol missing from the file is reported as absent.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use report_common::{Quote, QuoteSource, Result};

/// In-memory quote table loaded once.
#[derive(Debug, Clone, Default)]
pub struct SnapshotQuoteSource {
    quotes: HashMap<String, Quote>,
}

impl SnapshotQuoteSource {
    /// Build from quotes already in memory. Later entries win on duplicate symbols.
    pub fn new(quotes: Vec<Quote>) -> Self {
        let quotes = quotes
            .into_iter()
            .map(|q| (q.symbol.trim().to_uppercase(), q))
            .collect();
        Self { quotes }
    }

    /// Parse a JSON array of quotes from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let quotes: Vec<Quote> = serde_json::from_reader(reader)?;
        Ok(Self::new(quotes))
    }

    /// Load a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let source = Self::from_reader(BufReader::new(file))?;
        debug!("Loaded {} quotes from {}", source.quotes.len(), path.display());
        Ok(source)
    }
}

impl QuoteSource for SnapshotQuoteSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn fetch(&self, symbol: &str) -> Result<Option<Quote>> {
        Ok(self.quotes.get(&symbol.trim().to_uppercase()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_common::ReportError;
    use std::io::Write;

    #[test]
    fn looks_up_case_insensitively() {
        let json = r#"[
            {"symbol": "aapl", "currentPrice": 180.0, "fiftyTwoWeekHigh": 200.0},
            {"symbol": "XOM", "marketCap": 450000000000}
        ]"#;
        let source = SnapshotQuoteSource::from_reader(json.as_bytes()).unwrap();

        let apple = source.fetch("AAPL").unwrap().unwrap();
        assert_eq!(apple.current_price, Some(180.0));
        let exxon = source.fetch("xom").unwrap().unwrap();
        assert_eq!(exxon.market_cap, Some(4.5e11));
        assert_eq!(exxon.current_price, None);
    }

    #[test]
    fn unknown_symbol_is_absent() {
        let source = SnapshotQuoteSource::new(vec![Quote::empty("AAPL")]);
        assert_eq!(source.fetch("GOOGL").unwrap(), None);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"symbol": "MSFT", "currentPrice": 400.5}}]"#).unwrap();

        let source = SnapshotQuoteSource::from_path(file.path()).unwrap();
        assert_eq!(source.fetch("MSFT").unwrap().unwrap().current_price, Some(400.5));
    }

    #[test]
    fn rejects_non_array() {
        let res = SnapshotQuoteSource::from_reader(r#"{"symbol": "AAPL"}"#.as_bytes());
        assert!(matches!(res, Err(ReportError::SerdeJson(_))));
    }
}
