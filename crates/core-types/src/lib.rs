//! # Mockquote Core Types
//!
//! The shared vocabulary of the workspace: the fixed symbol universe, the lookback window
//! accepted by every endpoint, and the JSON shapes returned to the frontend.
//!
//! This crate has no knowledge of HTTP, clocks or randomness. The `simulator` crate fills
//! these structures, the `web-server` crate serializes them.

pub mod enums;
pub mod error;
pub mod structs;
pub mod window;

// Re-export the core types to provide a clean public API.
pub use enums::Symbol;
pub use error::CoreError;
pub use structs::{CorrelationReport, PricePoint, PriceSeries, SymbolStats};
pub use window::LookbackWindow;
