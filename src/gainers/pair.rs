use crate::common::MarketScannerError;
use serde::{Deserialize, Serialize};

/// Formatted gainer pairs plus how long the caller may treat them as fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairListResponse {
    pub pairs: Vec<String>,
    /// Seconds.
    pub refresh_period: u64,
}

/// `"BTCUSDT"`, `"USDT"` -> `"BTC/USDT"`.
///
/// An empty `quote` gives the symbol back untouched. A symbol that does not
/// end with `quote`, or is nothing but `quote`, is an error rather than a
/// mis-sliced pair.
pub fn format_pair(symbol: &str, quote: &str) -> Result<String, MarketScannerError> {
    if quote.is_empty() {
        return Ok(symbol.to_string());
    }

    match symbol.strip_suffix(quote) {
        Some(base) if !base.is_empty() => Ok(format!("{base}/{quote}")),
        _ => Err(MarketScannerError::PairFormat {
            symbol: symbol.to_string(),
            quote: quote.to_string(),
        }),
    }
}

pub fn format_pairs<'a, I>(symbols: I, quote: &str) -> Result<Vec<String>, MarketScannerError>
where
    I: IntoIterator<Item = &'a str>,
{
    symbols
        .into_iter()
        .map(|symbol| format_pair(symbol, quote))
        .collect()
}
