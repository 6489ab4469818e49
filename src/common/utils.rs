// src/common/utils.rs
use crate::common::MarketScannerError;

// Validate a lookup symbol and bring it to the exchange's uppercase form
pub fn normalize_symbol(symbol: &str) -> Result<String, MarketScannerError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(MarketScannerError::InvalidSymbol(
            "Symbol cannot be empty".to_string(),
        ));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(MarketScannerError::InvalidSymbol(symbol.to_string()));
    }
    Ok(symbol.to_ascii_uppercase())
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
