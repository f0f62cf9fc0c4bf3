//! Random-walk price band projection.
//!
//! Drift is the mean per-step simple return scaled by the horizon;
//! uncertainty is the population stddev of returns scaled by the square root
//! of the horizon (independence assumption). The band is centered on the
//! drifted last close, plus/minus 1.5 uncertainties.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tickscope_core::DailyBar;

use crate::round2;
use crate::stats::{mean, population_stddev, simple_returns};
use crate::trend::TrendSummary;

/// Trading days in a quarter horizon.
pub const QUARTER_TRADING_DAYS: u32 = 63;
/// Trading days in a one-year horizon.
pub const YEAR_TRADING_DAYS: u32 = 252;

/// Forecast confidence level.
///
/// Under the current thresholds only `Low` and `Medium` are ever produced:
/// `Medium` needs a quarter-or-shorter horizon and trend strength above 50,
/// everything else is `Low`. `High` stays in the type as observed behavior
/// of the source model, not as a reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Display for Confidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

/// Projected price band for one horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub price_low: f64,
    pub price_mid: f64,
    pub price_high: f64,
    pub confidence: Confidence,
    pub assumptions: Vec<String>,
    pub risks: Vec<String>,
    pub summary: String,
}

impl ForecastResult {
    /// Zero-valued fallback when no history exists. Never an error: the
    /// caller gets a renderable record with an explanatory summary.
    pub fn insufficient_data() -> Self {
        Self {
            price_low: 0.0,
            price_mid: 0.0,
            price_high: 0.0,
            confidence: Confidence::Low,
            assumptions: vec![String::from("No historical data.")],
            risks: vec![String::from("High uncertainty.")],
            summary: String::from("Insufficient data for forecast."),
        }
    }
}

/// Project a price band `days_ahead` trading days out.
///
/// A single-bar series has no return steps; drift and uncertainty are then
/// zero and the band collapses onto the last close rather than going NaN.
pub fn project_range(bars: &[DailyBar], trend: &TrendSummary, days_ahead: u32) -> ForecastResult {
    if bars.is_empty() {
        return ForecastResult::insufficient_data();
    }

    let last_close = bars[bars.len() - 1].close;
    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
    let returns = simple_returns(&closes);

    let avg_return = mean(&returns);
    let std = population_stddev(&returns);

    let days = f64::from(days_ahead);
    let drift = avg_return * days;
    let uncertainty = std * days.sqrt();

    let mid = last_close * (1.0 + drift);
    let high = last_close * (1.0 + drift + 1.5 * uncertainty);
    let low = last_close * (1.0 + drift - 1.5 * uncertainty);

    let confidence = if days_ahead <= QUARTER_TRADING_DAYS && trend.strength > 50 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let assumptions = vec![
        String::from("Forecast assumes recent trend and volatility persist."),
        String::from("No major market or company-specific events are factored in."),
        String::from("Based on historical price movement only; not fundamental valuation."),
    ];
    let risks = vec![
        String::from("Market sentiment and macro conditions can change quickly."),
        String::from("Past performance does not guarantee future results."),
        String::from("Consider consulting a financial advisor for investment decisions."),
    ];

    let period = if days_ahead <= QUARTER_TRADING_DAYS {
        "next quarter"
    } else {
        "next year"
    };
    let summary = format!(
        "Estimated range for {period}: {:.2} \u{2013} {:.2} (mid: {:.2}). Confidence: {confidence}.",
        round2(low),
        round2(high),
        round2(mid)
    );

    ForecastResult {
        price_low: round2(low),
        price_mid: round2(mid),
        price_high: round2(high),
        confidence,
        assumptions,
        risks,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::classify_trend;
    use tickscope_core::TradingDay;

    fn closes_to_bars(closes: &[f64]) -> Vec<DailyBar> {
        let mut day = TradingDay::parse("2024-01-01").expect("date");
        closes
            .iter()
            .map(|&close| {
                let bar = DailyBar::new(day, close, close + 1.0, (close - 1.0).max(0.0), close, 100)
                    .expect("bar");
                day = day.next_day();
                bar
            })
            .collect()
    }

    #[test]
    fn empty_series_degrades_to_the_zero_band() {
        let forecast = project_range(&[], &TrendSummary::flat(), QUARTER_TRADING_DAYS);
        assert_eq!(forecast.price_low, 0.0);
        assert_eq!(forecast.price_mid, 0.0);
        assert_eq!(forecast.price_high, 0.0);
        assert_eq!(forecast.confidence, Confidence::Low);
        assert_eq!(forecast.summary, "Insufficient data for forecast.");
    }

    #[test]
    fn single_bar_collapses_the_band_onto_last_close() {
        let bars = closes_to_bars(&[42.0]);
        let forecast = project_range(&bars, &TrendSummary::flat(), YEAR_TRADING_DAYS);
        assert_eq!(forecast.price_low, 42.0);
        assert_eq!(forecast.price_mid, 42.0);
        assert_eq!(forecast.price_high, 42.0);
        assert!(forecast.price_mid.is_finite());
    }

    #[test]
    fn band_width_grows_with_the_horizon() {
        let closes: Vec<f64> = (0..80)
            .map(|i| 100.0 + 5.0 * f64::from(i % 7) - 2.0 * f64::from(i % 3))
            .collect();
        let bars = closes_to_bars(&closes);
        let trend = classify_trend(&bars);

        let mut previous_width = 0.0;
        for days in [5, 21, 63, 126, 252] {
            let forecast = project_range(&bars, &trend, days);
            let width = forecast.price_high - forecast.price_low;
            assert!(
                width >= previous_width,
                "width must be non-decreasing in horizon: {width} < {previous_width}"
            );
            previous_width = width;
        }
    }

    #[test]
    fn strong_short_trend_earns_medium_confidence() {
        // +20% over the window -> strength 100 (> 50).
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + 0.5 * f64::from(i)).collect();
        let bars = closes_to_bars(&closes);
        let trend = classify_trend(&bars);
        assert!(trend.strength > 50);

        let quarter = project_range(&bars, &trend, QUARTER_TRADING_DAYS);
        assert_eq!(quarter.confidence, Confidence::Medium);

        // The same series over a year horizon stays low confidence.
        let year = project_range(&bars, &trend, YEAR_TRADING_DAYS);
        assert_eq!(year.confidence, Confidence::Low);
    }

    #[test]
    fn weak_trend_stays_low_confidence() {
        let bars = closes_to_bars(&[100.0, 100.5, 101.0, 100.8]);
        let trend = classify_trend(&bars);
        assert!(trend.strength <= 50);

        let forecast = project_range(&bars, &trend, QUARTER_TRADING_DAYS);
        assert_eq!(forecast.confidence, Confidence::Low);
    }

    #[test]
    fn summary_interpolates_band_and_confidence() {
        let bars = closes_to_bars(&[100.0, 101.0, 102.0]);
        let trend = classify_trend(&bars);
        let forecast = project_range(&bars, &trend, QUARTER_TRADING_DAYS);

        assert!(forecast.summary.contains("next quarter"));
        assert!(forecast.summary.contains("Confidence: low"));
        assert!(forecast.summary.contains(&format!("{:.2}", forecast.price_mid)));
    }

    #[test]
    fn identical_input_yields_identical_forecast() {
        let bars = closes_to_bars(&[100.0, 103.0, 99.0, 104.0, 101.0]);
        let trend = classify_trend(&bars);
        let first = project_range(&bars, &trend, QUARTER_TRADING_DAYS);
        let second = project_range(&bars, &trend, QUARTER_TRADING_DAYS);
        assert_eq!(first, second);
    }
}
