//! Exchange-agnostic gainer pipeline.
//!
//! raw records -> [`collect_records`] (percent normalization, bad records dropped)
//! -> [`filter_gainers`] -> [`filter_by_ending`] -> [`filter_excluding`]
//! -> [`rank_by_performance`] -> [`apply_limit`] -> [`format_pairs`].

mod filters;
mod pair;
mod percent;
mod query;

pub use filters::{
    GAINER_THRESHOLD, apply_limit, compare_performance, filter_by_ending, filter_excluding,
    filter_gainers, is_gainer, rank_by_performance,
};
pub use pair::{PairListResponse, format_pair, format_pairs};
pub use percent::{PercentEncoding, normalize_change_percent};
pub use query::GainerQuery;

use crate::common::{MarketScannerError, TickerRecord};
use tracing::{debug, warn};

/// Translates a fetched batch into [`TickerRecord`]s.
///
/// A record whose change percent does not parse is logged and dropped; the
/// rest of the batch goes through. Any other translation error fails the batch.
pub fn collect_records<R, F>(
    raws: Vec<R>,
    translate: F,
) -> Result<Vec<TickerRecord>, MarketScannerError>
where
    F: Fn(R) -> Result<TickerRecord, MarketScannerError>,
{
    let total = raws.len();
    let mut records = Vec::with_capacity(total);

    for raw in raws {
        match translate(raw) {
            Ok(record) => records.push(record),
            Err(MarketScannerError::InvalidPercent { symbol, raw }) => {
                warn!(%symbol, raw = %raw, "dropping ticker with unparsable change percent");
            }
            Err(e) => return Err(e),
        }
    }

    debug!(total, kept = records.len(), "translated ticker batch");
    Ok(records)
}

/// Gainers ending with `ending_filter`, ranked, limited. No exclusion step.
pub fn rank_gainers(
    records: Vec<TickerRecord>,
    limit: i64,
    ending_filter: &str,
) -> Vec<TickerRecord> {
    let gainers = filter_gainers(records);
    let quoted = filter_by_ending(gainers, ending_filter);
    let ranked = rank_by_performance(quoted);
    debug!(matching = ranked.len(), limit, ending_filter, "ranked gainers");
    apply_limit(ranked, limit)
}

/// Full pair pipeline: gainers, suffix, exclusion, rank, limit, format.
pub fn gainer_pairs(
    records: Vec<TickerRecord>,
    query: &GainerQuery,
    refresh_period: u64,
) -> Result<PairListResponse, MarketScannerError> {
    let gainers = filter_gainers(records);
    let quoted = filter_by_ending(gainers, &query.ending_filter);
    let kept = filter_excluding(quoted, &query.exclude_filter);
    let ranked = rank_by_performance(kept);
    let top = apply_limit(ranked, query.limit);

    let pairs = format_pairs(top.iter().map(TickerRecord::symbol), &query.ending_filter)?;
    debug!(pairs = pairs.len(), ?query, "formatted gainer pairs");

    Ok(PairListResponse {
        pairs,
        refresh_period,
    })
}
