//! Query defaults, refresh periods and environment configuration.
//!
//! Defaults are policy constants keyed by exchange and query kind; nothing
//! here is derived from market data.
//!
//! Environment variables read by [`ScannerConfig::from_env`]:
//! - `BINANCE_API_BASE`: Binance REST base (default `https://api.binance.com/api/v3`)
//! - `BINANCE_API_KEY`: optional, sent as `X-MBX-APIKEY`
//! - `BYBIT_API_BASE`: Bybit REST base (default `https://api.bybit.com/v5`)
//! - `SCANNER_HTTP_TIMEOUT_SECS`: per-request timeout in seconds (default 5)

use crate::common::MarketScannerError;
use crate::common::client::DEFAULT_TIMEOUT;
use crate::common::exchange::CexExchange;
use std::time::Duration;

pub const BINANCE_API_BASE: &str = "https://api.binance.com/api/v3";
pub const BYBIT_API_BASE: &str = "https://api.bybit.com/v5";

/// Which query a set of defaults applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Ranked ticker records, no exclusion.
    Gainers,
    /// Ranked, excluded and formatted base/quote pairs.
    GainerPairs,
}

/// Parameters used when the caller omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDefaults {
    pub limit: i64,
    pub ending_filter: &'static str,
    pub exclude_filter: &'static str,
}

/// Both exchanges currently share the same defaults; the table is keyed by
/// exchange so one can diverge without touching call sites.
pub fn query_defaults(cex: CexExchange, kind: QueryKind) -> QueryDefaults {
    match (cex, kind) {
        (CexExchange::Binance | CexExchange::Bybit, QueryKind::Gainers) => QueryDefaults {
            limit: 500,
            ending_filter: "",
            exclude_filter: "",
        },
        (CexExchange::Binance | CexExchange::Bybit, QueryKind::GainerPairs) => QueryDefaults {
            limit: 100,
            ending_filter: "USDT",
            exclude_filter: "BNB",
        },
    }
}

/// Seconds a formatted pair list stays valid before the caller should re-query.
pub fn refresh_period(cex: CexExchange) -> u64 {
    match cex {
        CexExchange::Binance => 10_800, // 3h
        CexExchange::Bybit => 43_200,   // 12h
    }
}

/// Connection settings for the exchange clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    pub binance_api_base: String,
    pub binance_api_key: Option<String>,
    pub bybit_api_base: String,
    pub http_timeout: Duration,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            binance_api_base: BINANCE_API_BASE.to_string(),
            binance_api_key: None,
            bybit_api_base: BYBIT_API_BASE.to_string(),
            http_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ScannerConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, MarketScannerError> {
        load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MarketScannerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let http_timeout = match var("SCANNER_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    MarketScannerError::Config(format!(
                        "SCANNER_HTTP_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                if secs == 0 {
                    return Err(MarketScannerError::Config(
                        "SCANNER_HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.http_timeout,
        };

        Ok(Self {
            binance_api_base: var("BINANCE_API_BASE").unwrap_or(defaults.binance_api_base),
            binance_api_key: var("BINANCE_API_KEY"),
            bybit_api_base: var("BYBIT_API_BASE").unwrap_or(defaults.bybit_api_base),
            http_timeout,
        })
    }
}

/// Loads variables from a `.env` file in the working directory, if there is one.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
