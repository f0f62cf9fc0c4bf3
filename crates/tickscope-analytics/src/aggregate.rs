//! Calendar-bucket aggregation of daily bars.
//!
//! One record per distinct (year, month) or year present in the input,
//! ascending by time key. Bars inside a bucket are sorted by day before
//! reducing, since the caller's grouping is not guaranteed locally ordered.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tickscope_core::DailyBar;

use crate::round2;

/// One calendar month's performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub year: i32,
    pub month: u8,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub return_percent: f64,
}

/// One calendar year's performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyPerformance {
    pub year: i32,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    pub return_percent: f64,
}

/// Group bars by (year, month) and reduce each bucket. Empty input yields an
/// empty vector, never an error.
pub fn monthly_performance(bars: &[DailyBar]) -> Vec<MonthlyPerformance> {
    bucketize(bars, |bar| (bar.day.year(), bar.day.month()))
        .into_iter()
        .map(|((year, month), bucket)| {
            let reduced = reduce_bucket(bucket);
            MonthlyPerformance {
                year,
                month,
                open: reduced.open,
                close: reduced.close,
                high: reduced.high,
                low: reduced.low,
                volume: reduced.volume,
                return_percent: reduced.return_percent,
            }
        })
        .collect()
}

/// Group bars by year and reduce each bucket.
pub fn yearly_performance(bars: &[DailyBar]) -> Vec<YearlyPerformance> {
    bucketize(bars, |bar| bar.day.year())
        .into_iter()
        .map(|(year, bucket)| {
            let reduced = reduce_bucket(bucket);
            YearlyPerformance {
                year,
                open: reduced.open,
                close: reduced.close,
                high: reduced.high,
                low: reduced.low,
                volume: reduced.volume,
                return_percent: reduced.return_percent,
            }
        })
        .collect()
}

struct BucketReduction {
    open: f64,
    close: f64,
    high: f64,
    low: f64,
    volume: u64,
    return_percent: f64,
}

fn bucketize<K: Ord>(bars: &[DailyBar], key: impl Fn(&DailyBar) -> K) -> BTreeMap<K, Vec<DailyBar>> {
    let mut buckets: BTreeMap<K, Vec<DailyBar>> = BTreeMap::new();
    for bar in bars {
        buckets.entry(key(bar)).or_default().push(*bar);
    }
    buckets
}

fn reduce_bucket(mut bucket: Vec<DailyBar>) -> BucketReduction {
    bucket.sort_by_key(|bar| bar.day);

    // Buckets are never empty: bucketize only creates a key when a bar exists.
    let open = bucket[0].open;
    let close = bucket[bucket.len() - 1].close;
    let high = bucket.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let low = bucket.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    let volume = bucket.iter().map(|b| b.volume).sum();

    // Zero open guards the division; the bucket reports a flat return
    // instead of propagating infinity into rounded output.
    let return_percent = if open > 0.0 {
        round2((close - open) / open * 100.0)
    } else {
        0.0
    };

    BucketReduction {
        open,
        close,
        high,
        low,
        volume,
        return_percent,
    }
}
