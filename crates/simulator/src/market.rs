use crate::correlation::generate_correlation_report;
use crate::prices::generate_price_series;
use crate::source::{Clock, RandomSource, SeededRandom, SystemClock, ThreadRandom};
use core_types::{CorrelationReport, LookbackWindow, PriceSeries, Symbol};
use std::sync::Arc;

/// A cheaply clonable handle over the random source and clock used for every request.
#[derive(Clone)]
pub struct MockMarket {
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl MockMarket {
    pub fn new(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self { random, clock }
    }

    /// Entropy-seeded randomness and the system clock.
    pub fn live() -> Self {
        Self::new(Arc::new(ThreadRandom), Arc::new(SystemClock))
    }

    /// A reproducible stream of random values, read against the system clock.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(SeededRandom::new(seed)), Arc::new(SystemClock))
    }

    pub fn price_series(&self, symbol: Symbol, window: LookbackWindow) -> PriceSeries {
        tracing::debug!(%symbol, minutes = window.minutes(), "Generating price series.");
        generate_price_series(symbol, window, self.random.as_ref(), self.clock.as_ref())
    }

    pub fn correlation_report(&self, window: LookbackWindow) -> CorrelationReport {
        tracing::debug!(minutes = window.minutes(), "Generating correlation report.");
        generate_correlation_report(window, self.random.as_ref())
    }
}

impl Default for MockMarket {
    fn default() -> Self {
        Self::live()
    }
}
