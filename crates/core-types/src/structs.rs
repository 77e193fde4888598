use crate::enums::Symbol;
use serde::{Deserialize, Serialize};

/// A single synthetic price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub price: f64,
}

/// A chronological price history (oldest first) and its mean price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub prices: Vec<PricePoint>,
    pub average: f64,
}

impl PriceSeries {
    /// Builds a series, computing `average` once over every point.
    pub fn from_points(prices: Vec<PricePoint>) -> Self {
        let average = if prices.is_empty() {
            0.0
        } else {
            prices.iter().map(|p| p.price).sum::<f64>() / prices.len() as f64
        };
        Self { prices, average }
    }
}

/// Mock summary statistics for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolStats {
    pub symbol: Symbol,
    pub avg_price: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// One entry per symbol, in `Symbol::ALL` order.
    pub stocks: Vec<SymbolStats>,
    /// Pairwise correlation coefficients, indexed like `stocks`.
    pub correlations: [[f64; 3]; 3],
}
