use serde::{Deserialize, Serialize};

/// One entry of `GET /api/v3/ticker/24hr`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binance24hrTicker {
    pub symbol: String,
    pub price_change: String,
    /// Signed, no `%` suffix, e.g. `"-1.250"`.
    pub price_change_percent: String,
    pub weighted_avg_price: String,
    pub prev_close_price: String,
    pub last_price: String,
    pub last_qty: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub quote_volume: String,
    pub open_time: u64,
    pub close_time: u64,
    /// `-1` when there were no trades in the window.
    pub first_id: i64,
    pub last_id: i64,
    #[serde(rename = "count")]
    pub trade_count: u64,
}

/// Error body Binance returns alongside 4xx statuses.
#[derive(Debug, Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}
