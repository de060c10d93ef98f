//! Display formatting for report values.
//!
//! Every formatter is a pure function of one optional number. Absent or non-finite
//! values render as [`NOT_AVAILABLE`].
//!
//! Rounding uses Rust's `{:.2}` formatting: the exact binary value of the `f64` is
//! rounded to the nearest two-decimal string, and exact binary ties go to the even
//! digit. `12.345` is stored slightly above the decimal literal and prints `12.35`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::row::ReportRow;

/// Placeholder for values a quote did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Currency prefix used for every money value.
pub const CURRENCY_PREFIX: &str = "$";

/// Calendar date layout, e.g. `1/30/2026`.
pub const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Display strings for the numeric fields of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRow {
    /// Formatted last price, e.g. `$171.50`.
    pub current_price: String,
    /// Formatted 52-week high.
    pub fifty_two_week_high: String,
    /// Formatted 52-week low.
    pub fifty_two_week_low: String,
    /// Formatted market capitalisation, e.g. `$2,500,000,000`.
    pub market_cap: String,
    /// Formatted change from the 52-week high, e.g. `-10.00%`.
    pub change_percent: String,
    /// Formatted change over the last session.
    pub day_change_percent: String,
    /// Earnings dates joined with `, `.
    pub earnings_dates: String,
}

/// Stateless value formatter.
pub struct Formatter;

impl Formatter {
    /// Two-decimal money value with a currency prefix: `171.5` -> `$171.50`.
    pub fn currency(value: Option<f64>) -> String {
        match finite(value) {
            Some(x) if x < 0.0 => format!("-{}{:.2}", CURRENCY_PREFIX, -x),
            Some(x) => format!("{}{:.2}", CURRENCY_PREFIX, x),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Whole money amount with thousands separators: `2500000000` -> `$2,500,000,000`.
    pub fn magnitude(value: Option<f64>) -> String {
        match finite(value) {
            Some(x) => {
                let rounded = x.round();
                let sign = if rounded < 0.0 { "-" } else { "" };
                let digits = format!("{:.0}", rounded.abs());
                format!("{}{}{}", sign, CURRENCY_PREFIX, group_thousands(&digits))
            }
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Two-decimal percentage: `12.345` -> `12.35%`.
    pub fn percent(value: Option<f64>) -> String {
        match finite(value) {
            Some(x) => format!("{:.2}%", x),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Format every numeric field of `row`. The row itself is left untouched.
    pub fn format_row(row: &ReportRow) -> FormattedRow {
        FormattedRow {
            current_price: Self::currency(row.current_price()),
            fifty_two_week_high: Self::currency(row.fifty_two_week_high()),
            fifty_two_week_low: Self::currency(row.fifty_two_week_low()),
            market_cap: Self::magnitude(row.market_cap()),
            change_percent: Self::percent(row.change_percent()),
            day_change_percent: Self::percent(row.day_change_percent()),
            earnings_dates: Self::dates(row.earnings_dates()),
        }
    }

    /// Dates in [`DATE_FORMAT`], comma separated.
    pub fn dates(dates: &[NaiveDate]) -> String {
        if dates.is_empty() {
            return NOT_AVAILABLE.to_string();
        }
        dates
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Text value or the placeholder.
    pub fn text(value: Option<&str>) -> &str {
        match value {
            Some(s) if !s.trim().is_empty() => s,
            _ => NOT_AVAILABLE,
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|x| x.is_finite())
}

/// Insert a comma every three digits from the right of an ASCII digit string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
