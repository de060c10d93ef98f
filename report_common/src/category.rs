//! Named categories of ticker symbols.
//!
//! Categories are stored as an ordered map from a lower-case name to a symbol list. The
//! order matters: resolving [`ALL_CATEGORIES`] concatenates every list in stored order,
//! duplicates included.
//!
//! Categories can be loaded from a JSON object such as
//! `{"tech": ["AAPL", "MSFT"], "oil": ["XOM"]}` or taken from [`CategoryResolver::builtin`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::error::ReportError;
use crate::result::Result;

/// Pseudo-category that selects every symbol of every category.
pub const ALL_CATEGORIES: &str = "all";

/// Default table shipped with the binary.
const BUILTIN: &[(&str, &[&str])] = &[
    ("oil", &["XOM", "CVX", "COP", "OXY", "SLB"]),
    ("tech", &["AAPL", "MSFT", "GOOGL", "AMZN", "META"]),
    ("finance", &["JPM", "BAC", "GS", "MS", "C"]),
    ("chips", &["NVDA", "AMD", "INTC", "AVGO", "QCOM", "TSM"]),
    ("bitcoin", &["MSTR", "COIN", "MARA", "RIOT"]),
    ("ai", &["NVDA", "MSFT", "GOOGL", "PLTR", "AI"]),
    ("energy", &["NEE", "DUK", "SO", "ENPH", "FSLR"]),
    ("airlines", &["DAL", "UAL", "AAL", "LUV"]),
    ("travel", &["BKNG", "EXPE", "ABNB", "TRIP"]),
    ("hotels", &["MAR", "HLT", "H", "IHG"]),
    ("shipping", &["ZIM", "MATX", "DAC", "GSL"]),
];

/// Resolves category names to symbol lists.
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    categories: IndexMap<String, Vec<String>>,
}

impl CategoryResolver {
    /// Build a resolver from `(name, symbols)` pairs, keeping their order.
    ///
    /// Names are lower-cased and symbols trimmed and upper-cased. A blank name or symbol
    /// is rejected.
    pub fn new<N, S, I>(categories: I) -> Result<Self>
    where
        N: AsRef<str>,
        S: AsRef<str>,
        I: IntoIterator<Item = (N, Vec<S>)>,
    {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();

        for (name, symbols) in categories {
            let name = name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(ReportError::ParseCategories(
                    "category name must be non-empty".to_string(),
                ));
            }
            if name == ALL_CATEGORIES {
                return Err(ReportError::ParseCategories(format!(
                    "'{}' is reserved",
                    ALL_CATEGORIES
                )));
            }

            let mut list = Vec::with_capacity(symbols.len());
            for symbol in symbols {
                let symbol = symbol.as_ref().trim();
                if symbol.is_empty() {
                    return Err(ReportError::ParseCategories(format!(
                        "empty symbol in category '{}'",
                        name
                    )));
                }
                list.push(symbol.to_uppercase());
            }
            map.entry(name).or_default().extend(list);
        }

        Ok(Self { categories: map })
    }

    /// The default category table.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, symbols)| {
                (
                    name.to_string(),
                    symbols.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { categories }
    }

    /// Parse a JSON object of `name -> [symbol, ...]` from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: IndexMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::new(raw)
    }

    /// Load categories from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let resolver = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} categories from {}",
            resolver.categories.len(),
            path.display()
        );
        Ok(resolver)
    }

    /// Category names in stored order, without [`ALL_CATEGORIES`].
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Symbols for `name`, or every symbol for [`ALL_CATEGORIES`].
    ///
    /// Matching is case-insensitive. Unknown names fail with
    /// [`ReportError::UnknownCategory`] carrying the name as given.
    pub fn resolve(&self, name: &str) -> Result<Vec<String>> {
        let key = name.trim().to_lowercase();

        if key == ALL_CATEGORIES {
            return Ok(self.categories.values().flatten().cloned().collect());
        }

        self.categories
            .get(&key)
            .cloned()
            .ok_or_else(|| ReportError::UnknownCategory(name.to_string()))
    }
}
