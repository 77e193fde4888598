use crate::source::RandomSource;
use core_types::{CorrelationReport, LookbackWindow, Symbol, SymbolStats};

/// Pairwise correlations between AAPL, GOOGL and MSFT, in that order.
pub const CORRELATION_MATRIX: [[f64; 3]; 3] = [
    [1.0, 0.8, 0.3],
    [0.8, 1.0, -0.2],
    [0.3, -0.2, 1.0],
];

/// Upper bounds of the random average-price offset and standard deviation for a symbol.
fn stats_spread(symbol: Symbol) -> (f64, f64) {
    match symbol {
        Symbol::Aapl => (5.0, 2.0),
        Symbol::Googl => (50.0, 10.0),
        Symbol::Msft => (10.0, 5.0),
    }
}

/// Builds mock statistics for every symbol alongside the fixed correlation matrix.
///
/// The window is accepted so the route can validate it, but it does not change the output.
pub fn generate_correlation_report(
    _window: LookbackWindow,
    random: &dyn RandomSource,
) -> CorrelationReport {
    let stocks = Symbol::ALL
        .into_iter()
        .map(|symbol| {
            let (offset_spread, std_dev_spread) = stats_spread(symbol);
            let avg_price = symbol.base_price() + random.uniform(0.0, offset_spread);
            let std_dev = random.uniform(0.0, std_dev_spread);
            SymbolStats { symbol, avg_price, std_dev }
        })
        .collect();

    CorrelationReport {
        stocks,
        correlations: CORRELATION_MATRIX,
    }
}
