pub mod types;

use crate::common::config::BINANCE_API_BASE;
use crate::common::{
    CEXTrait, CexExchange, ExchangeTrait, MarketScannerError, ScannerConfig, TickerDetails,
    TickerRecord, normalize_symbol,
};
use crate::create_exchange;
use crate::gainers::{PercentEncoding, collect_records};
use async_trait::async_trait;
use types::{Binance24hrTicker, BinanceErrorResponse};

/// Binance error code for an unknown trading pair.
const INVALID_SYMBOL_CODE: i64 = -1121;

create_exchange!(Binance, BINANCE_API_BASE, api_key: Option<String> = None);

impl Binance {
    pub fn from_config(config: &ScannerConfig) -> Self {
        let binance = Self::new()
            .with_api_base(&config.binance_api_base)
            .with_timeout(config.http_timeout);

        match &config.binance_api_key {
            Some(key) => binance.with_api_key(key.clone()),
            None => binance,
        }
    }

    /// Sent as `X-MBX-APIKEY`. Public ticker endpoints work without it.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Binance writes the percent as a bare signed number.
pub fn to_ticker_record(ticker: Binance24hrTicker) -> Result<TickerRecord, MarketScannerError> {
    let record = TickerRecord::new(
        ticker.symbol.clone(),
        ticker.price_change_percent.clone(),
        PercentEncoding::Plain,
        CexExchange::Binance,
    )?;
    Ok(record.with_details(TickerDetails::Binance(ticker)))
}

#[async_trait]
impl ExchangeTrait for Binance {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Binance"
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("X-MBX-APIKEY", key),
            None => request,
        }
    }

    async fn health_check(&self) -> Result<(), MarketScannerError> {
        // Binance ping endpoint - test connectivity to the REST API
        let endpoint = "ping";
        self.get::<serde_json::Value>(endpoint)
            .await
            .map_err(|_| MarketScannerError::HealthCheckFailed)?;

        Ok(())
    }
}

#[async_trait]
impl CEXTrait for Binance {
    fn cex(&self) -> CexExchange {
        CexExchange::Binance
    }

    async fn get_all_tickers(&self) -> Result<Vec<TickerRecord>, MarketScannerError> {
        let tickers: Vec<Binance24hrTicker> = self.get("ticker/24hr").await?;
        collect_records(tickers, to_ticker_record)
    }

    async fn get_ticker_for_symbol(
        &self,
        symbol: &str,
    ) -> Result<TickerRecord, MarketScannerError> {
        let symbol = normalize_symbol(symbol)?;
        let endpoint = format!("ticker/24hr?symbol={}", symbol);

        let ticker: Binance24hrTicker = self.get(&endpoint).await.map_err(|e| match e {
            MarketScannerError::UpstreamStatus { status: 400, ref body, .. }
                if is_invalid_symbol(body) =>
            {
                MarketScannerError::SymbolNotFound(symbol.clone())
            }
            other => other,
        })?;

        to_ticker_record(ticker)
    }
}

fn is_invalid_symbol(body: &str) -> bool {
    serde_json::from_str::<BinanceErrorResponse>(body)
        .map(|error| error.code == INVALID_SYMBOL_CODE)
        .unwrap_or(false)
}
