// Test library for cross-crate behavior tests
pub use tickscope_analytics::{
    analyze, classify_trend, evaluation_lines, monthly_performance, project_range,
    yearly_performance, Confidence, TrendDirection, QUARTER_TRADING_DAYS, YEAR_TRADING_DAYS,
};
pub use tickscope_core::{
    AlphaVantageFeed, DailyBar, FeedErrorKind, PriceFeed, SeriesCache, StaticHttpClient, StockFeed,
    Symbol, SyntheticFeed, TradingDay,
};
pub use std::sync::Arc;

/// Build a bar with a plausible range around open/close.
pub fn bar(day: &str, open: f64, high: f64, low: f64, close: f64, volume: u64) -> DailyBar {
    DailyBar::new(TradingDay::parse(day).expect("date"), open, high, low, close, volume)
        .expect("bar")
}
