use serde::{Deserialize, Serialize};

use crate::{DailyBar, Symbol};

/// Per-ticker snapshot shown in listings and fed into the narrative builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: Symbol,
    pub name: String,
    pub exchange: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub last_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub high_52w: f64,
    pub low_52w: f64,
}

impl StockSummary {
    /// Derive a summary from the tail of a bar series when no listing entry
    /// exists for the symbol. Change figures come from the last two closes;
    /// the 52-week band falls back to whole-series extrema.
    pub fn from_bars(symbol: Symbol, bars: &[DailyBar]) -> Option<Self> {
        let last = bars.last()?;
        let prev = bars.len().checked_sub(2).map(|i| &bars[i]);

        let change = prev.map_or(0.0, |p| last.close - p.close);
        let change_percent = match prev {
            Some(p) if p.close > 0.0 => change / p.close * 100.0,
            _ => 0.0,
        };

        let high_52w = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let low_52w = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);

        Some(Self {
            name: symbol.as_str().to_owned(),
            symbol,
            exchange: String::from("US"),
            sector: None,
            last_price: last.close,
            change,
            change_percent,
            volume: last.volume,
            high_52w,
            low_52w,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradingDay;

    fn bar(day: &str, open: f64, close: f64, volume: u64) -> DailyBar {
        DailyBar::new(
            TradingDay::parse(day).expect("date"),
            open,
            open.max(close) + 1.0,
            open.min(close) - 1.0,
            close,
            volume,
        )
        .expect("bar")
    }

    #[test]
    fn derives_change_from_last_two_closes() {
        let symbol = Symbol::parse("FPT").expect("symbol");
        let bars = vec![bar("2024-01-02", 10.0, 10.0, 100), bar("2024-01-03", 10.0, 11.0, 150)];

        let summary = StockSummary::from_bars(symbol, &bars).expect("summary");
        assert_eq!(summary.last_price, 11.0);
        assert_eq!(summary.change, 1.0);
        assert!((summary.change_percent - 10.0).abs() < 1e-9);
        assert_eq!(summary.volume, 150);
    }

    #[test]
    fn empty_series_yields_no_summary() {
        let symbol = Symbol::parse("FPT").expect("symbol");
        assert!(StockSummary::from_bars(symbol, &[]).is_none());
    }
}
