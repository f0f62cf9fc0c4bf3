//! Behavior-driven tests for the analytics pipeline
//!
//! These tests verify the externally observable contracts: aggregation
//! bucketing, trend boundaries, forecast degradation, and rounding stability.

use std::collections::BTreeSet;

use tickscope_tests::{
    analyze, bar, classify_trend, monthly_performance, project_range, yearly_performance,
    Confidence, DailyBar, Symbol, TradingDay, TrendDirection, QUARTER_TRADING_DAYS,
    YEAR_TRADING_DAYS,
};

fn series(closes: &[f64]) -> Vec<DailyBar> {
    let mut day = TradingDay::parse("2024-01-01").expect("date");
    closes
        .iter()
        .map(|&close| {
            let built =
                DailyBar::new(day, close, close + 1.0, (close - 1.0).max(0.0), close, 1_000)
                    .expect("bar");
            day = day.next_day();
            built
        })
        .collect()
}

// =============================================================================
// Aggregation: partitioning and the documented literal case
// =============================================================================

#[test]
fn monthly_buckets_partition_the_input_days_without_overlap_or_gap() {
    // Given: bars spanning three months with interleaved ordering
    let bars = vec![
        bar("2024-02-05", 11.0, 12.0, 10.0, 11.5, 50),
        bar("2023-12-29", 9.0, 10.0, 8.5, 9.5, 40),
        bar("2024-01-02", 10.0, 13.0, 9.0, 12.0, 100),
        bar("2024-01-31", 12.0, 14.0, 10.0, 11.0, 200),
        bar("2024-02-06", 11.5, 12.5, 11.0, 12.0, 60),
    ];

    // When: monthly buckets are computed
    let monthly = monthly_performance(&bars);

    // Then: every input day falls in exactly one bucket and no bucket is empty
    let input_keys: BTreeSet<(i32, u8)> =
        bars.iter().map(|b| (b.day.year(), b.day.month())).collect();
    let bucket_keys: BTreeSet<(i32, u8)> = monthly.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(input_keys, bucket_keys, "buckets must cover exactly the input months");

    let bar_count: usize = input_keys
        .iter()
        .map(|key| bars.iter().filter(|b| (b.day.year(), b.day.month()) == *key).count())
        .sum();
    assert_eq!(bar_count, bars.len(), "every bar belongs to exactly one bucket");
}

#[test]
fn two_bar_january_reduces_to_the_documented_figures() {
    // Given: the canonical two-bar January 2024 series
    let bars = vec![
        bar("2024-01-02", 10.0, 13.0, 9.0, 12.0, 100),
        bar("2024-01-31", 12.0, 14.0, 10.0, 11.0, 200),
    ];

    // When: monthly and yearly buckets are computed
    let monthly = monthly_performance(&bars);
    let yearly = yearly_performance(&bars);

    // Then: the single bucket carries the documented figures
    assert_eq!(monthly.len(), 1);
    let january = &monthly[0];
    assert_eq!((january.year, january.month), (2024, 1));
    assert_eq!(january.open, 10.0);
    assert_eq!(january.close, 11.0);
    assert_eq!(january.high, 14.0);
    assert_eq!(january.low, 9.0);
    assert_eq!(january.volume, 300);
    assert_eq!(january.return_percent, 10.0);

    assert_eq!(yearly.len(), 1);
    assert_eq!(yearly[0].return_percent, 10.0);
}

// =============================================================================
// Trend: direction boundary and insufficiency
// =============================================================================

#[test]
fn exactly_three_percent_change_is_sideways_but_a_hair_more_is_up() {
    // Given: two series straddling the 3% threshold
    let at_threshold = series(&[100.0, 103.0]);
    let above_threshold = series(&[100.0, 103.01]);

    // When: both are classified
    let sideways = classify_trend(&at_threshold);
    let up = classify_trend(&above_threshold);

    // Then: the threshold is strict
    assert_eq!(sideways.direction, TrendDirection::Sideways);
    assert_eq!(up.direction, TrendDirection::Up);
}

#[test]
fn a_single_bar_classifies_to_the_neutral_default_without_panicking() {
    // Given: a one-bar series
    let bars = series(&[100.0]);

    // When: classified
    let trend = classify_trend(&bars);

    // Then: the flat default comes back
    assert_eq!(trend.direction, TrendDirection::Sideways);
    assert_eq!(trend.strength, 0);
    assert_eq!(trend.volatility, 0.0);
    assert_eq!(trend.support_level, None);
    assert_eq!(trend.resistance_level, None);
}

// =============================================================================
// Forecast: horizon scaling and degradation
// =============================================================================

#[test]
fn forecast_band_width_never_shrinks_as_the_horizon_grows() {
    // Given: a noisy but positive series
    let closes: Vec<f64> = (0..120)
        .map(|i| 50.0 + 3.0 * f64::from(i % 5) - 1.5 * f64::from(i % 4))
        .collect();
    let bars = series(&closes);
    let trend = classify_trend(&bars);

    // When: forecasting at increasing horizons
    let mut previous_width = 0.0;
    for days in [1, 5, 21, QUARTER_TRADING_DAYS, 126, YEAR_TRADING_DAYS] {
        let forecast = project_range(&bars, &trend, days);

        // Then: band width is non-decreasing, square-root-of-time scaling
        let width = forecast.price_high - forecast.price_low;
        assert!(width >= previous_width, "band narrowed at horizon {days}");
        assert!(forecast.price_low.is_finite() && forecast.price_high.is_finite());
        previous_width = width;
    }
}

#[test]
fn forecasting_an_empty_series_degrades_instead_of_failing() {
    // Given: no history at all
    let bars: Vec<DailyBar> = Vec::new();
    let trend = classify_trend(&bars);

    // When: a forecast is requested anyway
    let forecast = project_range(&bars, &trend, QUARTER_TRADING_DAYS);

    // Then: zero band, low confidence, readable explanation, no NaN
    assert_eq!(forecast.price_low, 0.0);
    assert_eq!(forecast.price_mid, 0.0);
    assert_eq!(forecast.price_high, 0.0);
    assert_eq!(forecast.confidence, Confidence::Low);
    assert_eq!(forecast.summary, "Insufficient data for forecast.");
}

// =============================================================================
// Whole-pipeline: rounding and reproducibility
// =============================================================================

#[test]
fn published_figures_round_to_two_decimals() {
    // Given: a series whose raw statistics carry long fractions
    let closes: Vec<f64> = (1..=90).map(|i| 33.337 + f64::from(i) * 0.719).collect();
    let bars = series(&closes);

    // When: the pipeline runs
    let trend = classify_trend(&bars);
    let monthly = monthly_performance(&bars);
    let forecast = project_range(&bars, &trend, YEAR_TRADING_DAYS);

    // Then: every published percentage and price is 2dp-stable
    let two_dp = |v: f64| (v * 100.0).round() / 100.0;
    assert_eq!(trend.volatility, two_dp(trend.volatility));
    for m in &monthly {
        assert_eq!(m.return_percent, two_dp(m.return_percent));
    }
    for price in [forecast.price_low, forecast.price_mid, forecast.price_high] {
        assert_eq!(price, two_dp(price));
    }
    if let (Some(support), Some(resistance)) = (trend.support_level, trend.resistance_level) {
        assert_eq!(support, two_dp(support));
        assert_eq!(resistance, two_dp(resistance));
    }
}

#[test]
fn identical_input_and_seed_reproduce_the_entire_analysis() {
    // Given: the same bars and the same rng seed twice
    let bars = series(&[100.0, 103.0, 99.0, 104.0, 108.0, 102.0]);
    let symbol = Symbol::parse("FPT").expect("symbol");

    // When: analyzed twice
    let mut first_rng = fastrand::Rng::with_seed(11);
    let mut second_rng = fastrand::Rng::with_seed(11);
    let first = analyze(symbol.clone(), None, bars.clone(), &mut first_rng);
    let second = analyze(symbol, None, bars, &mut second_rng);

    // Then: the full analysis, randomized indicators included, is identical
    assert_eq!(first, second);
}

#[test]
fn deterministic_sections_ignore_the_rng_seed_entirely() {
    // Given: the same bars under two different seeds
    let bars = series(&[100.0, 103.0, 99.0, 104.0, 108.0, 102.0]);
    let symbol = Symbol::parse("FPT").expect("symbol");

    // When: analyzed with differing seeds
    let mut first_rng = fastrand::Rng::with_seed(1);
    let mut second_rng = fastrand::Rng::with_seed(2);
    let first = analyze(symbol.clone(), None, bars.clone(), &mut first_rng);
    let second = analyze(symbol, None, bars, &mut second_rng);

    // Then: only the indicator placeholders may differ
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.monthly_performance, second.monthly_performance);
    assert_eq!(first.yearly_performance, second.yearly_performance);
    assert_eq!(first.trend, second.trend);
    assert_eq!(first.evaluation_summary, second.evaluation_summary);
    assert_eq!(first.forecast_quarter, second.forecast_quarter);
    assert_eq!(first.forecast_year, second.forecast_year);
    assert_ne!(first.indicators, second.indicators);
}
