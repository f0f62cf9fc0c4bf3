use serde::{Deserialize, Serialize};

use crate::{TradingDay, ValidationError};

/// One trading day's OHLCV record.
///
/// Construction enforces the price-box invariants (`high >= low`, open and
/// close inside `[low, high]`, all prices finite and non-negative). Callers
/// hand series to the analytics layer in ascending day order; the analysis
/// entry point re-sorts defensively rather than trusting that silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub day: TradingDay,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyBar {
    pub fn new(
        day: TradingDay,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_price("open", open)?;
        validate_price("high", high)?;
        validate_price("low", low)?;
        validate_price("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }
        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            day,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Sort bars ascending by day. The bucket math downstream is wrong on
/// unsorted input, so feeds and the analysis entry point both call this.
pub fn sort_bars_by_day(bars: &mut [DailyBar]) {
    bars.sort_by_key(|bar| bar.day);
}

fn validate_price(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
