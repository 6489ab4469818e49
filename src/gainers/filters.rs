//! Classification, filtering, ranking and limiting over [`TickerRecord`]s.
//!
//! Each step takes ownership of the sequence and returns a new one, so a
//! request's pipeline never shares state with another.

use crate::common::TickerRecord;
use std::cmp::Ordering;

/// Minimum change percent, exclusive, for a pair to count as a gainer.
pub const GAINER_THRESHOLD: f64 = 0.0;

pub fn is_gainer(record: &TickerRecord) -> bool {
    record.change_percent() > GAINER_THRESHOLD
}

pub fn filter_gainers(records: Vec<TickerRecord>) -> Vec<TickerRecord> {
    records.into_iter().filter(is_gainer).collect()
}

/// Keeps symbols ending with `ending`. Case-sensitive; an empty `ending` keeps all.
pub fn filter_by_ending(records: Vec<TickerRecord>, ending: &str) -> Vec<TickerRecord> {
    records
        .into_iter()
        .filter(|record| record.symbol().ends_with(ending))
        .collect()
}

/// Drops symbols containing `exclude` anywhere. An empty `exclude` drops nothing.
pub fn filter_excluding(records: Vec<TickerRecord>, exclude: &str) -> Vec<TickerRecord> {
    if exclude.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| !record.symbol().contains(exclude))
        .collect()
}

/// Best performer first; equal percentages fall back to symbol ascending.
pub fn compare_performance(a: &TickerRecord, b: &TickerRecord) -> Ordering {
    b.change_percent()
        .total_cmp(&a.change_percent())
        .then_with(|| a.symbol().cmp(b.symbol()))
}

pub fn rank_by_performance(mut records: Vec<TickerRecord>) -> Vec<TickerRecord> {
    records.sort_by(compare_performance);
    records
}

/// First `limit` entries when `limit > 0`, otherwise the sequence unchanged.
pub fn apply_limit<T>(mut items: Vec<T>, limit: i64) -> Vec<T> {
    if let Ok(limit) = usize::try_from(limit) {
        if limit > 0 {
            items.truncate(limit);
        }
    }
    items
}
