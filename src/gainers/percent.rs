/// How an exchange writes its 24h change percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentEncoding {
    /// Bare signed number, e.g. `"-1.25"` (Binance `priceChangePercent`).
    Plain,
    /// Number with an optional trailing `%`, e.g. `"2.5%"` or `"-0.0113"` (Bybit `price24hPcnt`).
    PercentSuffixed,
}

/// Signed change percent, or `None` when the raw value is empty, not a
/// number, or not finite. An empty string is never read as zero.
pub fn normalize_change_percent(raw: &str, encoding: PercentEncoding) -> Option<f64> {
    let trimmed = raw.trim();
    let number = match encoding {
        PercentEncoding::Plain => trimmed,
        PercentEncoding::PercentSuffixed => trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end(),
    };

    if number.is_empty() {
        return None;
    }

    // `+ 0.0` folds -0.0 into 0.0 so the two rank as equal.
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value + 0.0)
}
