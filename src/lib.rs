//! `crypto-gainer-scanner-rs`
//!
//! Fetch 24h ticker snapshots from Binance and Bybit, keep the pairs that
//! gained, rank them and format them as `BASE/QUOTE` pairs.
//!
//! ## Quickstart
//!
//! ```no_run
//! use crypto_gainer_scanner_rs::{Binance, CEXTrait, GainerQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), crypto_gainer_scanner_rs::MarketScannerError> {
//! let binance = Binance::new();
//!
//! let top = binance.get_gainers(10, "USDT").await?;
//! for ticker in &top {
//!     println!("{} {:+.2}%", ticker.symbol(), ticker.change_percent());
//! }
//!
//! let pairs = binance
//!     .get_gainer_pairs(&GainerQuery::new(20, "USDT", "BNB"))
//!     .await?;
//! println!("{:?} (refresh every {}s)", pairs.pairs, pairs.refresh_period);
//! # Ok(())
//! # }
//! ```
//!
//! ## Bybit market categories
//!
//! ```no_run
//! use crypto_gainer_scanner_rs::{Bybit, CEXTrait};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), crypto_gainer_scanner_rs::MarketScannerError> {
//! let linear = Bybit::new().for_market("linear")?;
//! let tickers = linear.get_all_tickers().await?;
//! println!("{} linear tickers", tickers.len());
//! # Ok(())
//! # }
//! ```

pub mod cex;
pub mod common;
pub mod gainers;

// Re-export common types
pub use cex::{Binance, Bybit, Market};

pub use common::{
    CEXTrait, CexExchange, ExchangeTrait, MarketScannerError, QueryDefaults, QueryKind,
    ScannerConfig, TickerDetails, TickerRecord, load_dotenv, query_defaults, refresh_period,
};
pub use gainers::{GainerQuery, PairListResponse, PercentEncoding};
