pub mod client;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod ticker;
pub mod utils;

// Re-export
pub use client::{create_http_client, create_http_client_with_timeout};
pub use config::{
    QueryDefaults, QueryKind, ScannerConfig, load_dotenv, query_defaults, refresh_period,
};
pub use errors::MarketScannerError;
pub use exchange::{CEXTrait, CexExchange, ExchangeTrait};
pub use ticker::{TickerDetails, TickerRecord};
pub use utils::{get_timestamp_millis, normalize_symbol};
