//! Quotes from a REST market-data API.
//!
//! Three endpoints are queried per symbol:
//! - `GET {base_url}/quote/{symbol}`: price, 52-week range, market cap, name, session
//!   change.
//! - `GET {base_url}/profile/{symbol}`: company name, industry, sector.
//! - `GET {base_url}/historical/earning_calendar/{symbol}`: past and scheduled earnings
//!   announcements.
//!
//! All return a JSON array. An empty array from the quote endpoint means the symbol is
//! unknown. The profile and the earnings calendar are optional: if either fails, the row
//! is still built from the quote and only their fields are absent.
use std::time::Duration;

use chrono::{Local, NaiveDate};
use log::debug;
use report_common::{Quote, QuoteSource, ReportError, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::FeedConfig;

/// Payload of the quote endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuotePayload {
    symbol: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    year_high: Option<f64>,
    year_low: Option<f64>,
    market_cap: Option<f64>,
    changes_percentage: Option<f64>,
}

/// Payload of the profile endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload {
    company_name: Option<String>,
    industry: Option<String>,
    sector: Option<String>,
}

/// One entry of the earnings calendar.
#[derive(Debug, Clone, Default, Deserialize)]
struct EarningPayload {
    date: Option<NaiveDate>,
}

const QUOTE_ENDPOINT: &str = "quote";
const PROFILE_ENDPOINT: &str = "profile";
const EARNINGS_ENDPOINT: &str = "historical/earning_calendar";

/// Most upcoming earnings dates kept per symbol.
const MAX_EARNINGS_DATES: usize = 2;

/// Blocking HTTP quote source with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpQuoteSource {
    /// Build a source from configuration. Fails if no API key is configured or the
    /// timeout is zero.
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        if config.timeout_secs == 0 {
            return Err(ReportError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReportError::Http(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, endpoint: &str, symbol: &str) -> String {
        format!("{}/{}/{}", self.base_url, endpoint, symbol)
    }

    /// GET `endpoint` for `symbol` and decode the first element of the returned array.
    fn get_first<T>(&self, endpoint: &str, symbol: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        Ok(self.get_list(endpoint, symbol)?.into_iter().next())
    }

    /// GET `endpoint` for `symbol` and decode the returned array.
    fn get_list<T>(&self, endpoint: &str, symbol: &str) -> Result<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let failure = |reason: String| ReportError::FetchFailure {
            symbol: symbol.to_string(),
            reason,
        };

        let res = self
            .http
            .get(self.url(endpoint, symbol))
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .map_err(|e| failure(format!("{} request failed: {}", endpoint, e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(failure(format!("{} returned HTTP {}", endpoint, status)));
        }

        let text = res
            .text()
            .map_err(|e| failure(format!("failed to read {} response: {}", endpoint, e)))?;
        parse_list(&text).map_err(|e| failure(format!("invalid {} payload: {}", endpoint, e)))
    }
}

impl QuoteSource for HttpQuoteSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self, symbol: &str) -> Result<Option<Quote>> {
        let Some(quote) = self.get_first::<QuotePayload>(QUOTE_ENDPOINT, symbol)? else {
            return Ok(None);
        };

        let profile = match self.get_first::<ProfilePayload>(PROFILE_ENDPOINT, symbol) {
            Ok(profile) => profile,
            Err(e) => {
                debug!("Profile unavailable, industry/sector left empty: {}", e);
                None
            }
        };

        let earnings = match self.get_list::<EarningPayload>(EARNINGS_ENDPOINT, symbol) {
            Ok(calendar) => upcoming_earnings(&calendar, Local::now().date_naive()),
            Err(e) => {
                debug!("Earnings calendar unavailable, dates left empty: {}", e);
                Vec::new()
            }
        };

        Ok(Some(merge(symbol, quote, profile, earnings)))
    }
}

fn parse_list<T>(text: &str) -> std::result::Result<Vec<T>, serde_json::Error>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(text)
}

/// Calendar dates on or after `today`, soonest first.
fn upcoming_earnings(calendar: &[EarningPayload], today: NaiveDate) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = calendar
        .iter()
        .filter_map(|e| e.date)
        .filter(|d| *d >= today)
        .collect();
    dates.sort();
    dates.dedup();
    dates.truncate(MAX_EARNINGS_DATES);
    dates
}

fn merge(
    symbol: &str,
    quote: QuotePayload,
    profile: Option<ProfilePayload>,
    earnings_dates: Vec<NaiveDate>,
) -> Quote {
    let profile = profile.unwrap_or_default();
    Quote {
        symbol: quote.symbol.unwrap_or_else(|| symbol.to_string()),
        current_price: quote.price,
        fifty_two_week_high: quote.year_high,
        fifty_two_week_low: quote.year_low,
        market_cap: quote.market_cap,
        industry: profile.industry.filter(|s| !s.is_empty()),
        sector: profile.sector.filter(|s| !s.is_empty()),
        company_name: profile.company_name.or(quote.name),
        day_change_percent: quote.changes_percentage,
        earnings_dates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOTE_BODY: &str = r#"[{
        "symbol": "AAPL",
        "name": "Apple Inc.",
        "price": 180.0,
        "yearHigh": 200.0,
        "yearLow": 150.0,
        "marketCap": 2800000000000,
        "changesPercentage": -1.3,
        "volume": 51234567
    }]"#;

    const PROFILE_BODY: &str = r#"[{
        "companyName": "Apple Inc.",
        "industry": "Consumer Electronics",
        "sector": "Technology",
        "mktCap": 2800000000000
    }]"#;

    const EARNINGS_BODY: &str = r#"[
        {"date": "2026-10-30", "symbol": "AAPL", "eps": null},
        {"date": "2026-07-31", "symbol": "AAPL", "eps": 1.57},
        {"date": "2027-01-28", "symbol": "AAPL", "eps": null},
        {"date": "2027-04-30", "symbol": "AAPL", "eps": null}
    ]"#;

    fn parse_first<T>(text: &str) -> std::result::Result<Option<T>, serde_json::Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        Ok(parse_list::<T>(text)?.into_iter().next())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_first_element() {
        let quote: QuotePayload = parse_first(QUOTE_BODY).unwrap().unwrap();
        assert_eq!(quote.price, Some(180.0));
        assert_eq!(quote.year_high, Some(200.0));
        assert_eq!(quote.market_cap, Some(2.8e12));
        assert_eq!(quote.changes_percentage, Some(-1.3));
    }

    #[test]
    fn empty_array_is_absent() {
        let quote: Option<QuotePayload> = parse_first("[]").unwrap();
        assert!(quote.is_none());
    }

    #[test]
    fn error_object_is_rejected() {
        let res = parse_first::<QuotePayload>(r#"{"Error Message": "Invalid API KEY."}"#);
        assert!(res.is_err());
    }

    #[test]
    fn merges_quote_and_profile() {
        let quote: QuotePayload = parse_first(QUOTE_BODY).unwrap().unwrap();
        let profile: Option<ProfilePayload> = parse_first(PROFILE_BODY).unwrap();

        let merged = merge("AAPL", quote, profile, vec![date(2026, 10, 30)]);
        assert_eq!(merged.symbol, "AAPL");
        assert_eq!(merged.day_change_percent, Some(-1.3));
        assert_eq!(merged.earnings_dates, vec![date(2026, 10, 30)]);
        assert_eq!(merged.current_price, Some(180.0));
        assert_eq!(merged.fifty_two_week_low, Some(150.0));
        assert_eq!(merged.industry.as_deref(), Some("Consumer Electronics"));
        assert_eq!(merged.sector.as_deref(), Some("Technology"));
        assert_eq!(merged.company_name.as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn missing_profile_leaves_classification_absent() {
        let quote = QuotePayload {
            name: Some("Tesla, Inc.".to_string()),
            price: Some(250.0),
            ..Default::default()
        };

        let merged = merge("TSLA", quote, None, Vec::new());
        assert_eq!(merged.symbol, "TSLA");
        assert_eq!(merged.company_name.as_deref(), Some("Tesla, Inc."));
        assert_eq!(merged.industry, None);
        assert_eq!(merged.fifty_two_week_high, None);
        assert!(merged.earnings_dates.is_empty());
    }

    #[test]
    fn keeps_the_next_earnings_dates() {
        let calendar: Vec<EarningPayload> = parse_list(EARNINGS_BODY).unwrap();
        assert_eq!(
            upcoming_earnings(&calendar, date(2026, 10, 19)),
            vec![date(2026, 10, 30), date(2027, 1, 28)]
        );
        assert!(upcoming_earnings(&calendar, date(2027, 5, 1)).is_empty());
    }

    #[test]
    fn malformed_calendar_is_rejected() {
        assert!(parse_list::<EarningPayload>(r#"[{"date": "soon"}]"#).is_err());
    }

    #[test]
    fn requires_api_key() {
        let res = HttpQuoteSource::from_config(&FeedConfig::default());
        assert!(matches!(res, Err(ReportError::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = FeedConfig {
            api_key: Some("k".to_string()),
            timeout_secs: 0,
            ..FeedConfig::default()
        };
        let res = HttpQuoteSource::from_config(&config);
        assert!(matches!(res, Err(ReportError::Config(_))));
    }

    #[test]
    fn builds_urls_without_double_slash() {
        let config = FeedConfig {
            api_key: Some("k".to_string()),
            base_url: "http://localhost:9/api/v3/".to_string(),
            ..FeedConfig::default()
        };
        let source = HttpQuoteSource::from_config(&config).unwrap();
        assert_eq!(source.url("quote", "MSFT"), "http://localhost:9/api/v3/quote/MSFT");
    }
}
