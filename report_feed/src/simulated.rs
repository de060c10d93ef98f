//! Synthetic quotes for demos and offline runs.
//!
//! Each symbol gets a year of daily prices from a small random walk: every step moves
//! the price uniformly within `[-2%, +2%]` and clamps it to a positive minimum. The
//! 52-week high and low are taken from the walk, the last step is the current price and
//! the move into it is the session change. Simulated quotes carry no earnings dates.
//!
//! The generator is seeded per symbol from the source seed, so the same seed always
//! produces the same report regardless of fetch order or worker count.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use report_common::{Quote, QuoteSource, Result};

/// Trading days in a 52-week window.
const TRADING_DAYS: usize = 252;
/// Lowest price the walk can reach.
const MIN_PRICE: f64 = 0.01;

/// Random-walk quote generator.
#[derive(Debug, Clone)]
pub struct SimulatedQuoteSource {
    seed: u64,
}

impl SimulatedQuoteSource {
    /// Create a generator; equal seeds give equal quotes.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Calculate the next price from a uniform step in `[-2%, +2%]`.
    fn next_price(rng: &mut StdRng, current_price: f64) -> f64 {
        let change: f64 = rng.random_range(-0.02..0.02);
        (current_price * (1.0 + change)).max(MIN_PRICE)
    }

    fn rng_for(&self, symbol: &str) -> StdRng {
        // FNV-1a over the symbol, mixed with the seed.
        let hash = symbol
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
                (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
            });
        StdRng::seed_from_u64(self.seed ^ hash)
    }

    /// Build the synthetic quote for `symbol`.
    pub fn generate(&self, symbol: &str) -> Quote {
        let mut rng = self.rng_for(symbol);
        let mut price: f64 = rng.random_range(10.0..500.0);
        let mut high = price;
        let mut low = price;
        let mut previous = price;

        for _ in 0..TRADING_DAYS {
            previous = price;
            price = Self::next_price(&mut rng, price);
            high = high.max(price);
            low = low.min(price);
        }

        let shares: f64 = rng.random_range(50_000_000.0..5_000_000_000.0);

        Quote {
            symbol: symbol.to_string(),
            current_price: Some(price),
            fifty_two_week_high: Some(high),
            fifty_two_week_low: Some(low),
            market_cap: Some((price * shares).round()),
            industry: Some("Simulated".to_string()),
            sector: Some("Simulated".to_string()),
            company_name: Some(format!("{} Corp.", symbol)),
            day_change_percent: Some((price - previous) / previous * 100.0),
            earnings_dates: Vec::new(),
        }
    }
}

impl QuoteSource for SimulatedQuoteSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn fetch(&self, symbol: &str) -> Result<Option<Quote>> {
        Ok(Some(self.generate(symbol)))
    }
}
