use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The symbols the mock market knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Aapl,
    Googl,
    Msft,
}

impl Symbol {
    /// Every known symbol, in the order reports list them.
    pub const ALL: [Symbol; 3] = [Symbol::Aapl, Symbol::Googl, Symbol::Msft];

    /// The ticker as it appears in URLs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Aapl => "AAPL",
            Symbol::Googl => "GOOGL",
            Symbol::Msft => "MSFT",
        }
    }

    /// The price synthetic data is centred on.
    pub fn base_price(&self) -> f64 {
        match self {
            Symbol::Aapl => 150.0,
            Symbol::Googl => 2700.0,
            Symbol::Msft => 300.0,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is case-sensitive: `aapl` is rejected.
impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSymbol(s.to_string()))
    }
}
