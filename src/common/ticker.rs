//! Exchange-agnostic 24h ticker record.
//!
//! Every exchange adapter translates its wire record into a [`TickerRecord`];
//! the gainer pipeline only ever sees this shape.

use crate::cex::binance::types::Binance24hrTicker;
use crate::cex::bybit::types::BybitTicker;
use crate::common::exchange::CexExchange;
use crate::common::{MarketScannerError, get_timestamp_millis};
use crate::gainers::{PercentEncoding, normalize_change_percent};
use serde::Serialize;

/// Exchange-specific fields carried alongside the normalized ones.
/// Not read by the pipeline; kept so callers get the full upstream record back.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TickerDetails {
    Binance(Binance24hrTicker),
    Bybit(BybitTicker),
}

#[derive(Debug, Clone, Serialize)]
pub struct TickerRecord {
    symbol: String,
    change_percent_raw: String,
    change_percent: f64,
    exchange: CexExchange,
    fetched_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<TickerDetails>,
}

impl TickerRecord {
    /// Builds a record, deriving `change_percent` from `change_percent_raw`.
    ///
    /// Fails with [`MarketScannerError::InvalidPercent`] when the raw value is
    /// empty or not a finite number.
    pub fn new(
        symbol: impl Into<String>,
        change_percent_raw: impl Into<String>,
        encoding: PercentEncoding,
        exchange: CexExchange,
    ) -> Result<Self, MarketScannerError> {
        let symbol = symbol.into();
        let change_percent_raw = change_percent_raw.into();
        let change_percent = normalize_change_percent(&change_percent_raw, encoding)
            .ok_or_else(|| MarketScannerError::InvalidPercent {
                symbol: symbol.clone(),
                raw: change_percent_raw.clone(),
            })?;

        Ok(Self {
            symbol,
            change_percent_raw,
            change_percent,
            exchange,
            fetched_at: get_timestamp_millis(),
            details: None,
        })
    }

    pub fn with_details(mut self, details: TickerDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn change_percent_raw(&self) -> &str {
        &self.change_percent_raw
    }

    pub fn change_percent(&self) -> f64 {
        self.change_percent
    }

    pub fn exchange(&self) -> &CexExchange {
        &self.exchange
    }

    pub fn fetched_at(&self) -> u64 {
        self.fetched_at
    }

    pub fn details(&self) -> Option<&TickerDetails> {
        self.details.as_ref()
    }
}
