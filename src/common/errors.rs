#[derive(thiserror::Error, Debug)]
pub enum MarketScannerError {
    #[error("Health check failed")]
    HealthCheckFailed,

    /// Transport failure: connect, timeout, TLS, body read.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from the exchange. Body is kept verbatim.
    #[error("{exchange} API error: {status} - {body}")]
    UpstreamStatus {
        exchange: String,
        status: u16,
        body: String,
    },

    /// Exchange answered 2xx but reported a failure inside its envelope.
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid market: {0} (expected one of spot, linear, option, inverse)")]
    InvalidMarket(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A single record's change percent could not be parsed.
    #[error("Invalid change percent {raw:?} for {symbol}")]
    InvalidPercent { symbol: String, raw: String },

    #[error("Cannot format {symbol} as a pair quoted in {quote:?}")]
    PairFormat { symbol: String, quote: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
