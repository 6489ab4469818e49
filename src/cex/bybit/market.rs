use crate::common::MarketScannerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bybit v5 product category. Selects which symbol universe `market/tickers` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    #[default]
    Spot,
    Linear,
    Option,
    Inverse,
}

impl Market {
    pub const ALL: [Market; 4] = [Market::Spot, Market::Linear, Market::Option, Market::Inverse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Spot => "spot",
            Market::Linear => "linear",
            Market::Option => "option",
            Market::Inverse => "inverse",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = MarketScannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Market::ALL
            .into_iter()
            .find(|market| market.as_str() == s)
            .ok_or_else(|| MarketScannerError::InvalidMarket(s.to_string()))
    }
}
