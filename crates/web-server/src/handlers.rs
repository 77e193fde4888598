use crate::{error::AppError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::routing::TypedPath;
use core_types::{CorrelationReport, LookbackWindow, PriceSeries, Symbol};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, TypedPath, Deserialize)]
#[typed_path("/api/stocks/:symbol/prices", rejection(AppError))]
pub struct StockPricesPath {
    pub symbol: String,
}

#[derive(Debug, TypedPath, Deserialize)]
#[typed_path("/api/stocks/:symbol/prices/", rejection(AppError))]
pub struct StockPricesSlashPath {
    pub symbol: String,
}

/// Raw query pairs, in request order. Kept untyped so a repeated or non-numeric `m` never
/// trips the extractor.
type QueryPairs = Vec<(String, String)>;

/// The window named by the first `m` pair, if any.
fn window_from(pairs: &[(String, String)]) -> Result<LookbackWindow, AppError> {
    let raw = pairs
        .iter()
        .find(|(key, _)| key == "m")
        .map(|(_, value)| value.as_str());
    Ok(LookbackWindow::from_query(raw)?)
}

fn price_series(
    state: &AppState,
    symbol: &str,
    pairs: &[(String, String)],
) -> Result<Json<PriceSeries>, AppError> {
    // The symbol is checked first: `/api/stocks/TSLA/prices?m=0` reports the symbol.
    let symbol: Symbol = symbol.parse()?;
    let window = window_from(pairs)?;
    Ok(Json(state.market.price_series(symbol, window)))
}

/// # GET /api/stocks/:symbol/prices
/// A synthetic minute-by-minute price history ending now.
pub async fn get_stock_prices(
    StockPricesPath { symbol }: StockPricesPath,
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<PriceSeries>, AppError> {
    price_series(&state, &symbol, &pairs)
}

/// # GET /api/stocks/:symbol/prices/
pub async fn get_stock_prices_with_slash(
    StockPricesSlashPath { symbol }: StockPricesSlashPath,
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<PriceSeries>, AppError> {
    price_series(&state, &symbol, &pairs)
}

/// # GET /api/correlation
pub async fn get_correlation(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<CorrelationReport>, AppError> {
    let window = window_from(&pairs)?;
    Ok(Json(state.market.correlation_report(window)))
}
