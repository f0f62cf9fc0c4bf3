//! Canonical domain types for tickscope market data.
//!
//! Everything here is a validated plain value: construction checks the
//! invariants, after which records are never mutated.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Normalized ticker symbol |
//! | [`TradingDay`] | Calendar day (`YYYY-MM-DD`) |
//! | [`DailyBar`] | One day's OHLCV record |
//! | [`StockSummary`] | Per-ticker listing snapshot |

mod bar;
mod day;
mod summary;
mod symbol;

pub use bar::{sort_bars_by_day, DailyBar};
pub use day::TradingDay;
pub use summary::StockSummary;
pub use symbol::Symbol;
