use thiserror::Error;

/// Client input errors. The `Display` output is returned verbatim to HTTP callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid stock symbol. Use AAPL, GOOGL, or MSFT.")]
    InvalidSymbol(String),

    #[error("Minutes must be between 1 and 60.")]
    InvalidRange(i64),
}
