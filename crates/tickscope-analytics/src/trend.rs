//! Trend classification from a daily bar window.

use serde::{Deserialize, Serialize};
use tickscope_core::DailyBar;

use crate::round2;
use crate::stats::{mean, population_stddev, simple_returns};

/// Net direction over the window. Up/Down require more than a 3% move in
/// either direction; everything inside that band is sideways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Sideways => "sideways",
        };
        f.write_str(label)
    }
}

/// Short-term momentum from the mean of the last 20 per-step returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Momentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Trend summary derived entirely from the input bar window.
///
/// `volatility` is the population standard deviation of per-step simple
/// returns times 100. The dashboard labels it "annualized" but no
/// trading-day scaling factor is applied; the literal formula is kept and
/// the label discrepancy is documented here rather than silently fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    /// 0-100, five points per percent of net change.
    pub strength: u8,
    pub volatility: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance_level: Option<f64>,
    pub momentum: Momentum,
}

impl TrendSummary {
    /// Neutral default used when fewer than two bars are available.
    pub fn flat() -> Self {
        Self {
            direction: TrendDirection::Sideways,
            strength: 0,
            volatility: 0.0,
            support_level: None,
            resistance_level: None,
            momentum: Momentum::Neutral,
        }
    }
}

const MOMENTUM_WINDOW: usize = 20;
const SUPPORT_RESISTANCE_WINDOW: usize = 60;

/// Classify the trend over an ascending bar window.
///
/// Fewer than two bars cannot define a trend, so the flat default comes back
/// instead of an error.
pub fn classify_trend(bars: &[DailyBar]) -> TrendSummary {
    if bars.len() < 2 {
        return TrendSummary::flat();
    }

    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
    let returns = simple_returns(&closes);
    let volatility = population_stddev(&returns) * 100.0;

    let first = closes[0];
    let last = closes[closes.len() - 1];
    let change_pct = if first > 0.0 {
        (last - first) / first * 100.0
    } else {
        0.0
    };

    let direction = if change_pct > 3.0 {
        TrendDirection::Up
    } else if change_pct < -3.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Sideways
    };

    let strength = (change_pct.abs() * 5.0).min(100.0).round() as u8;

    let recent = &returns[returns.len().saturating_sub(MOMENTUM_WINDOW)..];
    let recent_avg = mean(recent);
    let momentum = if recent_avg > 0.001 {
        Momentum::Bullish
    } else if recent_avg < -0.001 {
        Momentum::Bearish
    } else {
        Momentum::Neutral
    };

    let window = &bars[bars.len().saturating_sub(SUPPORT_RESISTANCE_WINDOW)..];
    let support = window.iter().map(|bar| bar.low).fold(f64::MAX, f64::min);
    let resistance = window.iter().map(|bar| bar.high).fold(f64::MIN, f64::max);

    TrendSummary {
        direction,
        strength,
        volatility: round2(volatility),
        support_level: Some(round2(support)),
        resistance_level: Some(round2(resistance)),
        momentum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn single_bar_returns_the_flat_default() {
        let bars = closes_to_bars(&[100.0]);
        let trend = classify_trend(&bars);
        assert_eq!(trend, TrendSummary::flat());
    }

    #[test]
    fn exactly_three_percent_is_still_sideways() {
        let trend = classify_trend(&closes_to_bars(&[100.0, 103.0]));
        assert_eq!(trend.direction, TrendDirection::Sideways);
    }

    #[test]
    fn above_three_percent_is_up() {
        let trend = classify_trend(&closes_to_bars(&[100.0, 103.01]));
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn below_minus_three_percent_is_down() {
        let trend = classify_trend(&closes_to_bars(&[100.0, 96.9]));
        assert_eq!(trend.direction, TrendDirection::Down);
    }

    #[test]
    fn strength_saturates_at_one_hundred() {
        // +50% net change -> 250 before the cap.
        let trend = classify_trend(&closes_to_bars(&[100.0, 150.0]));
        assert_eq!(trend.strength, 100);
    }

    #[test]
    fn sustained_gains_read_bullish() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
        let trend = classify_trend(&closes_to_bars(&closes));
        assert_eq!(trend.momentum, Momentum::Bullish);
    }

    #[test]
    fn sustained_losses_read_bearish() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 * 0.99_f64.powi(i)).collect();
        let trend = classify_trend(&closes_to_bars(&closes));
        assert_eq!(trend.momentum, Momentum::Bearish);
    }

    #[test]
    fn support_and_resistance_cover_the_last_sixty_bars() {
        // 100 flat bars, then a spike high and dip low inside the window.
        let mut closes = vec![50.0; 100];
        closes[70] = 80.0;
        closes[80] = 30.0;
        let trend = classify_trend(&closes_to_bars(&closes));

        assert_eq!(trend.resistance_level, Some(81.0)); // close + 1.0 bar high
        assert_eq!(trend.support_level, Some(29.0)); // close - 1.0 bar low
    }

    #[test]
    fn flat_series_has_zero_volatility() {
        let trend = classify_trend(&closes_to_bars(&[42.0, 42.0, 42.0]));
        assert_eq!(trend.volatility, 0.0);
        assert_eq!(trend.momentum, Momentum::Neutral);
    }

    #[test]
    fn volatility_is_not_annualized() {
        // Returns are roughly +/-10%: pop stddev is ~0.094, so the reported
        // figure is ~9.43, not scaled by sqrt(252).
        let trend = classify_trend(&closes_to_bars(&[100.0, 110.0, 99.0, 108.9]));
        assert!(trend.volatility > 9.0 && trend.volatility < 11.0);
    }
}
