use crate::source::{Clock, RandomSource};
use core_types::{LookbackWindow, PricePoint, PriceSeries, Symbol};

/// Gap between consecutive points of a series.
pub const POINT_SPACING_MS: i64 = 60_000;

/// Maximum distance of any generated price from the symbol's base price.
pub const PRICE_NOISE: f64 = 5.0;

/// Generates `window + 1` points ending at the clock's current time.
///
/// The first point lies `window` minutes in the past and each price is the symbol's base
/// price plus uniform noise in `[-PRICE_NOISE, PRICE_NOISE)`.
pub fn generate_price_series(
    symbol: Symbol,
    window: LookbackWindow,
    random: &dyn RandomSource,
    clock: &dyn Clock,
) -> PriceSeries {
    let now = clock.now_millis();
    let base_price = symbol.base_price();
    let minutes = i64::from(window.minutes());

    let prices = (0..=minutes)
        .rev()
        .map(|minutes_ago| PricePoint {
            timestamp: now - minutes_ago * POINT_SPACING_MS,
            price: base_price + random.uniform(-PRICE_NOISE, PRICE_NOISE),
        })
        .collect();

    PriceSeries::from_points(prices)
}
