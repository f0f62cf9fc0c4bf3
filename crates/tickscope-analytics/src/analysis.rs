//! Aggregate analysis root tying the individual computations together.

use serde::{Deserialize, Serialize};
use tickscope_core::{sort_bars_by_day, DailyBar, StockSummary, Symbol};

use crate::aggregate::{monthly_performance, yearly_performance, MonthlyPerformance, YearlyPerformance};
use crate::forecast::{project_range, ForecastResult, QUARTER_TRADING_DAYS, YEAR_TRADING_DAYS};
use crate::indicators::{estimate_indicators, KeyIndicators};
use crate::narrative::evaluation_lines;
use crate::trend::{classify_trend, TrendSummary};

/// Everything computed for one ticker in a single pass. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAnalysis {
    pub symbol: Symbol,
    pub name: String,
    pub summary: StockSummary,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub yearly_performance: Vec<YearlyPerformance>,
    pub trend: TrendSummary,
    pub indicators: KeyIndicators,
    pub evaluation_summary: Vec<String>,
    pub forecast_quarter: ForecastResult,
    pub forecast_year: ForecastResult,
}

/// Run the full analysis pipeline over a bar series.
///
/// Bars are sorted ascending by day up front so every downstream computation
/// can rely on the ordering. When no summary is supplied one is derived from
/// the series tail; an empty series with no summary degrades to a zeroed
/// analysis with low-confidence forecasts rather than an error.
///
/// The rng only feeds the placeholder indicator estimator. Seed it for
/// reproducible output; everything else is deterministic in the input.
pub fn analyze(
    symbol: Symbol,
    summary: Option<StockSummary>,
    mut bars: Vec<DailyBar>,
    rng: &mut fastrand::Rng,
) -> StockAnalysis {
    sort_bars_by_day(&mut bars);

    let summary = summary
        .or_else(|| StockSummary::from_bars(symbol.clone(), &bars))
        .unwrap_or_else(|| zeroed_summary(symbol.clone()));

    let monthly = monthly_performance(&bars);
    let yearly = yearly_performance(&bars);
    let trend = classify_trend(&bars);

    let last_close = bars.last().map_or(summary.last_price, |bar| bar.close);
    let indicators = estimate_indicators(last_close, rng);

    let evaluation_summary = evaluation_lines(&summary, &trend, &monthly, &yearly);
    let forecast_quarter = project_range(&bars, &trend, QUARTER_TRADING_DAYS);
    let forecast_year = project_range(&bars, &trend, YEAR_TRADING_DAYS);

    StockAnalysis {
        symbol,
        name: summary.name.clone(),
        summary,
        monthly_performance: monthly,
        yearly_performance: yearly,
        trend,
        indicators,
        evaluation_summary,
        forecast_quarter,
        forecast_year,
    }
}

fn zeroed_summary(symbol: Symbol) -> StockSummary {
    StockSummary {
        name: symbol.as_str().to_owned(),
        symbol,
        exchange: String::from("US"),
        sector: None,
        last_price: 0.0,
        change: 0.0,
        change_percent: 0.0,
        volume: 0,
        high_52w: 0.0,
        low_52w: 0.0,
    }
}
