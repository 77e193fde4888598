//! # Mockquote Simulator
//!
//! Synthesises the data served by the mock API. Both generators are stateless functions:
//! every call draws fresh values from a [`RandomSource`] and reads the time from a
//! [`Clock`], so nothing carries over between requests.
//!
//! ## Public API
//!
//! - `generate_price_series`: a noisy minute-by-minute history for one symbol.
//! - `generate_correlation_report`: mock per-symbol stats plus the fixed correlation matrix.
//! - `MockMarket`: bundles a random source and a clock so callers can hold one handle.
//! - `RandomSource` / `Clock`: injection seams, with production and fixed implementations.

pub mod correlation;
pub mod market;
pub mod prices;
pub mod source;

pub use correlation::{CORRELATION_MATRIX, generate_correlation_report};
pub use market::MockMarket;
pub use prices::{POINT_SPACING_MS, PRICE_NOISE, generate_price_series};
pub use source::{
    Clock, FixedClock, RandomSource, SeededRandom, SequenceRandom, SystemClock, ThreadRandom,
};
