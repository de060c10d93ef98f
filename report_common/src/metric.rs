//! Derived metrics computed from a single quote.
//!
//! The only metric the report needs is the signed distance of the current price from
//! the 52-week high, in percent. The value is kept unrounded: rounding happens in
//! `format`, so ranking always works on full precision.

use thiserror::Error;

/// Reason a metric could not be derived.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// One of the inputs is absent.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// The reference value is zero.
    #[error("reference value is zero")]
    DivisionGuard,
    /// An input or the result is NaN or infinite.
    #[error("non-finite value")]
    NonFinite,
}

/// Computes percentage changes between a price and a reference level.
pub struct MetricDeriver;

impl MetricDeriver {
    /// Percentage change of `current_price` relative to `reference_high`.
    ///
    /// Returns `None` when either input is absent, the reference is zero, or the
    /// arithmetic does not produce a finite number.
    pub fn derive(current_price: Option<f64>, reference_high: Option<f64>) -> Option<f64> {
        Self::derive_checked(current_price, reference_high).ok()
    }

    /// Same as [`Self::derive`] but reports why the metric is absent.
    pub fn derive_checked(
        current_price: Option<f64>,
        reference_high: Option<f64>,
    ) -> Result<f64, MetricError> {
        let current = current_price.ok_or(MetricError::MissingInput("currentPrice"))?;
        let high = reference_high.ok_or(MetricError::MissingInput("fiftyTwoWeekHigh"))?;

        if !current.is_finite() || !high.is_finite() {
            return Err(MetricError::NonFinite);
        }
        if high == 0.0 {
            return Err(MetricError::DivisionGuard);
        }

        // `+ 0.0` turns -0.0 into 0.0.
        let change = (current - high) / high * 100.0 + 0.0;
        if change.is_finite() {
            Ok(change)
        } else {
            Err(MetricError::NonFinite)
        }
    }
}
