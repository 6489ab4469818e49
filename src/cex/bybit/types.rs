use serde::{Deserialize, Serialize};

/// v5 response envelope. `result` is `{}` when `ret_code != 0`.
#[derive(Debug, Deserialize)]
pub struct BybitResponse<T> {
    #[serde(rename = "retCode")]
    pub ret_code: i64,
    #[serde(rename = "retMsg")]
    pub ret_msg: String,
    pub result: Option<T>,
    #[serde(default)]
    pub time: u64,
}

#[derive(Debug, Deserialize)]
pub struct BybitTickerList {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub list: Vec<BybitTicker>,
}

/// One entry of `GET /v5/market/tickers`.
///
/// Field sets differ per category (spot has `usdIndexPrice`, derivatives have
/// mark/index prices and funding), so everything except the symbol is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitTicker {
    pub symbol: String,
    #[serde(default)]
    pub bid1_price: String,
    #[serde(default)]
    pub bid1_size: String,
    #[serde(default)]
    pub ask1_price: String,
    #[serde(default)]
    pub ask1_size: String,
    #[serde(default)]
    pub last_price: String,
    #[serde(default)]
    pub prev_price24h: String,
    /// Optional sign, optional trailing `%`.
    #[serde(default)]
    pub price24h_pcnt: String,
    #[serde(default)]
    pub high_price24h: String,
    #[serde(default)]
    pub low_price24h: String,
    #[serde(default)]
    pub turnover24h: String,
    #[serde(default)]
    pub volume24h: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_index_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_interest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_rate: Option<String>,
}
