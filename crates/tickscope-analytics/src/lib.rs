//! # Tickscope Analytics
//!
//! Pure analytics over daily OHLCV series: calendar aggregation, trend
//! classification, indicator placeholders, a random-walk price forecast, and
//! the narrative lines the dashboard renders.
//!
//! Every function here is a synchronous, side-effect-free transform from
//! input bars to a plain value record. Nothing is cached across calls and
//! nothing is mutated after construction, so concurrent use is trivially
//! safe. The only non-determinism lives in [`estimate_indicators`], which
//! takes its random source as an argument.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Monthly/yearly performance buckets |
//! | [`trend`] | Direction, strength, volatility, momentum, support/resistance |
//! | [`indicators`] | Illustrative valuation ratio placeholders |
//! | [`forecast`] | Drift + square-root-of-time price band projection |
//! | [`narrative`] | Human-readable evaluation lines |
//! | [`analysis`] | The [`StockAnalysis`] aggregate root |

pub mod aggregate;
pub mod analysis;
pub mod forecast;
pub mod indicators;
pub mod narrative;
pub mod trend;

mod stats;

pub use aggregate::{monthly_performance, yearly_performance, MonthlyPerformance, YearlyPerformance};
pub use analysis::{analyze, StockAnalysis};
pub use forecast::{
    project_range, Confidence, ForecastResult, QUARTER_TRADING_DAYS, YEAR_TRADING_DAYS,
};
pub use indicators::{estimate_indicators, KeyIndicators};
pub use narrative::evaluation_lines;
pub use trend::{classify_trend, Momentum, TrendDirection, TrendSummary};

/// Round to two decimal places, the precision every published figure uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
