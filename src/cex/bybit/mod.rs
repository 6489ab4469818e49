mod market;
pub mod types;

pub use market::Market;

use crate::common::config::BYBIT_API_BASE;
use crate::common::{
    CEXTrait, CexExchange, ExchangeTrait, MarketScannerError, ScannerConfig, TickerDetails,
    TickerRecord, normalize_symbol,
};
use crate::create_exchange;
use crate::gainers::{PercentEncoding, collect_records};
use async_trait::async_trait;
use types::{BybitResponse, BybitTicker, BybitTickerList};

/// Returned for unsupported symbols (and other bad parameters).
const PARAMS_ERROR_CODE: i64 = 10001;

create_exchange!(Bybit, BYBIT_API_BASE, market: Market = Market::Spot);

impl Bybit {
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new()
            .with_api_base(&config.bybit_api_base)
            .with_timeout(config.http_timeout)
    }

    pub fn with_market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    /// Like [`Bybit::with_market`] but from a caller-supplied string.
    /// Unknown categories are rejected here, before any request is made.
    pub fn for_market(self, market: &str) -> Result<Self, MarketScannerError> {
        Ok(self.with_market(market.parse()?))
    }

    pub fn market(&self) -> Market {
        self.market
    }

    /// `lookup` is the symbol asked for, if any; Bybit reports unknown symbols
    /// as a parameter error rather than an empty list.
    async fn fetch_tickers(
        &self,
        endpoint: &str,
        lookup: Option<&str>,
    ) -> Result<Vec<BybitTicker>, MarketScannerError> {
        let response: BybitResponse<BybitTickerList> = self.get(endpoint).await?;

        if let (PARAMS_ERROR_CODE, Some(symbol)) = (response.ret_code, lookup) {
            return Err(MarketScannerError::SymbolNotFound(symbol.to_string()));
        }

        if response.ret_code != 0 {
            return Err(MarketScannerError::ApiError(format!(
                "Bybit API error: {} - {}",
                response.ret_code, response.ret_msg
            )));
        }

        let result = response.result.ok_or_else(|| {
            MarketScannerError::ApiError("Bybit API response missing result".to_string())
        })?;

        Ok(result.list)
    }
}

/// Bybit writes the percent with an optional sign and an optional trailing `%`.
pub fn to_ticker_record(ticker: BybitTicker) -> Result<TickerRecord, MarketScannerError> {
    let record = TickerRecord::new(
        ticker.symbol.clone(),
        ticker.price24h_pcnt.clone(),
        PercentEncoding::PercentSuffixed,
        CexExchange::Bybit,
    )?;
    Ok(record.with_details(TickerDetails::Bybit(ticker)))
}

#[async_trait]
impl ExchangeTrait for Bybit {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Bybit"
    }

    async fn health_check(&self) -> Result<(), MarketScannerError> {
        // Bybit market/time endpoint - test connectivity to the REST API
        let endpoint = "market/time";
        self.get::<serde_json::Value>(endpoint)
            .await
            .map_err(|_| MarketScannerError::HealthCheckFailed)?;

        Ok(())
    }
}

#[async_trait]
impl CEXTrait for Bybit {
    fn cex(&self) -> CexExchange {
        CexExchange::Bybit
    }

    async fn get_all_tickers(&self) -> Result<Vec<TickerRecord>, MarketScannerError> {
        let endpoint = format!("market/tickers?category={}", self.market);
        let tickers = self.fetch_tickers(&endpoint, None).await?;
        collect_records(tickers, to_ticker_record)
    }

    async fn get_ticker_for_symbol(
        &self,
        symbol: &str,
    ) -> Result<TickerRecord, MarketScannerError> {
        let symbol = normalize_symbol(symbol)?;
        let endpoint = format!("market/tickers?category={}&symbol={}", self.market, symbol);

        let ticker = self
            .fetch_tickers(&endpoint, Some(&symbol))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| MarketScannerError::SymbolNotFound(symbol.clone()))?;

        to_ticker_record(ticker)
    }
}
