//! Plain-text evaluation lines rendered from computed analytics.
//!
//! Presentation only; every number arrives already computed and rounded.

use tickscope_core::StockSummary;

use crate::aggregate::{MonthlyPerformance, YearlyPerformance};
use crate::trend::TrendSummary;

/// Assemble the evaluation summary in fixed order: price line, trend line,
/// then optional support, resistance, last-month and last-year lines.
pub fn evaluation_lines(
    summary: &StockSummary,
    trend: &TrendSummary,
    monthly: &[MonthlyPerformance],
    yearly: &[YearlyPerformance],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(6);

    let sign = if summary.change >= 0.0 { "+" } else { "" };
    lines.push(format!(
        "{} is trading at {:.2} ({sign}{:.2}% today).",
        summary.symbol, summary.last_price, summary.change_percent
    ));

    lines.push(format!(
        "Trend: {} with {} short-term momentum. Volatility (annualized): {}%.",
        trend.direction, trend.momentum, trend.volatility
    ));

    if let Some(support) = trend.support_level {
        lines.push(format!("Recent support level: {support:.2}."));
    }
    if let Some(resistance) = trend.resistance_level {
        lines.push(format!("Recent resistance level: {resistance:.2}."));
    }

    if let Some(last_month) = monthly.last() {
        let sign = if last_month.return_percent >= 0.0 { "+" } else { "" };
        lines.push(format!("Last month: {sign}{}% return.", last_month.return_percent));
    }
    if let Some(last_year) = yearly.last() {
        let sign = if last_year.return_percent >= 0.0 { "+" } else { "" };
        lines.push(format!("Last full year: {sign}{}% return.", last_year.return_percent));
    }

    lines
}
