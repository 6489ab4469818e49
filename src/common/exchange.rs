use crate::common::config::refresh_period;
use crate::common::{MarketScannerError, TickerRecord};
use crate::gainers::{self, GainerQuery, PairListResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

// Common exchange enum definition

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CexExchange {
    Binance,
    Bybit,
}

impl std::fmt::Display for CexExchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CexExchange::Binance => write!(f, "Binance"),
            CexExchange::Bybit => write!(f, "Bybit"),
        }
    }
}

// Common exchange trait definition
#[async_trait]
pub trait ExchangeTrait: Send + Sync {
    // Exchange specific methods
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;
    fn exchange_name(&self) -> &str;

    /// Hook for exchanges that attach credentials or extra headers to every request.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
    }

    // Default implementations
    async fn get<T: for<'de> serde::Deserialize<'de>>(
        &self,
        endpoint: &str,
    ) -> Result<T, MarketScannerError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        let response = self.authorize(self.client().get(&url)).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketScannerError::UpstreamStatus {
                exchange: self.exchange_name().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        // Decode from text so a malformed payload is reported as such, not as a transport error.
        let body = response.text().await?;
        debug!(exchange = self.exchange_name(), %url, bytes = body.len(), "fetched");

        Ok(serde_json::from_str(&body)?)
    }

    // Trait methods
    async fn health_check(&self) -> Result<(), MarketScannerError>;
}

/// 24h ticker queries shared by every CEX.
///
/// Implementors only fetch and translate; filtering, ranking and formatting
/// live in [`crate::gainers`] and are the same for every exchange.
#[async_trait]
pub trait CEXTrait: ExchangeTrait {
    fn cex(&self) -> CexExchange;

    /// Full snapshot. Records whose change percent cannot be parsed are dropped.
    async fn get_all_tickers(&self) -> Result<Vec<TickerRecord>, MarketScannerError>;

    async fn get_ticker_for_symbol(
        &self,
        symbol: &str,
    ) -> Result<TickerRecord, MarketScannerError>;

    /// Looks up several symbols concurrently. The first failure fails the whole call.
    async fn get_tickers_for_symbols(
        &self,
        symbols: &[&str],
    ) -> Result<Vec<TickerRecord>, MarketScannerError> {
        let lookups = symbols
            .iter()
            .map(|symbol| self.get_ticker_for_symbol(symbol));
        futures::future::try_join_all(lookups).await
    }

    async fn symbols_ending_with(&self, ending: &str) -> Result<Vec<String>, MarketScannerError> {
        let tickers = self.get_all_tickers().await?;
        Ok(gainers::filter_by_ending(tickers, ending)
            .into_iter()
            .map(|ticker| ticker.symbol().to_string())
            .collect())
    }

    /// Gainers quoted in `ending_filter`, best first, at most `limit` (`<= 0` = all).
    async fn get_gainers(
        &self,
        limit: i64,
        ending_filter: &str,
    ) -> Result<Vec<TickerRecord>, MarketScannerError> {
        let tickers = self.get_all_tickers().await?;
        Ok(gainers::rank_gainers(tickers, limit, ending_filter))
    }

    async fn get_gainer_pairs(
        &self,
        query: &GainerQuery,
    ) -> Result<PairListResponse, MarketScannerError> {
        let tickers = self.get_all_tickers().await?;
        gainers::gainer_pairs(tickers, query, refresh_period(self.cex()))
    }
}

// CEX MACRO EXPORTS
#[macro_export]
macro_rules! create_exchange {
    (
        $struct_name:ident, $default_base:expr $(, $field:ident : $ty:ty = $init:expr)*
    ) => {
        #[derive(Debug, Clone)]
        pub struct $struct_name {
            client: reqwest::Client,
            api_base: String,
            $($field: $ty,)*
        }

        impl $struct_name {
            pub fn new() -> Self {
                Self {
                    client: $crate::common::create_http_client(),
                    api_base: $default_base.to_string(),
                    $($field: $init,)*
                }
            }

            /// Points the client at another REST base, e.g. a proxy or a local test server.
            pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
                self.api_base = api_base.into().trim_end_matches('/').to_string();
                self
            }

            pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
                self.client = $crate::common::create_http_client_with_timeout(timeout);
                self
            }
        }

        impl Default for $struct_name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
