use std::future::Future;
use std::pin::Pin;

use time::{Duration, OffsetDateTime};

use crate::feed::{FeedError, PriceFeed, SeriesCache};
use crate::{DailyBar, StockSummary, Symbol, TradingDay};

/// Default base price for symbols outside the built-in listing.
const FALLBACK_BASE_PRICE: f64 = 50.0;

/// Calendar days of history generated per symbol (weekends are skipped).
const HISTORY_CALENDAR_DAYS: u32 = 365;

/// Volume drawn per bar: 100k plus up to 900k.
const VOLUME_FLOOR: u64 = 100_000;
const VOLUME_SPREAD: f64 = 900_000.0;

struct ListingEntry {
    symbol: &'static str,
    name: &'static str,
    exchange: &'static str,
    sector: &'static str,
    base_price: f64,
    high_52w: f64,
    low_52w: f64,
}

/// Built-in listing used when no provider key is configured (simulated HOSE
/// tickers, mirroring the dashboard's demo universe).
const LISTING: [ListingEntry; 6] = [
    ListingEntry {
        symbol: "FPT",
        name: "FPT Corporation",
        exchange: "HOSE",
        sector: "Technology",
        base_price: 82.5,
        high_52w: 98.5,
        low_52w: 62.2,
    },
    ListingEntry {
        symbol: "VNM",
        name: "Vietnam Dairy Products",
        exchange: "HOSE",
        sector: "Consumer",
        base_price: 78.0,
        high_52w: 92.0,
        low_52w: 68.5,
    },
    ListingEntry {
        symbol: "VHM",
        name: "Vinhomes",
        exchange: "HOSE",
        sector: "Real Estate",
        base_price: 42.0,
        high_52w: 52.0,
        low_52w: 32.1,
    },
    ListingEntry {
        symbol: "VIC",
        name: "Vingroup",
        exchange: "HOSE",
        sector: "Conglomerate",
        base_price: 38.0,
        high_52w: 48.8,
        low_52w: 28.5,
    },
    ListingEntry {
        symbol: "VND",
        name: "VNDIRECT Securities",
        exchange: "HOSE",
        sector: "Financials",
        base_price: 18.5,
        high_52w: 22.5,
        low_52w: 14.2,
    },
    ListingEntry {
        symbol: "HPG",
        name: "Hoa Phat Group",
        exchange: "HOSE",
        sector: "Materials",
        base_price: 23.0,
        high_52w: 28.0,
        low_52w: 18.5,
    },
];

/// Local bar generator used when no provider API key is configured.
///
/// Series are random walks seeded per symbol, so the same symbol always gets
/// the same history; the owned [`SeriesCache`] additionally guarantees one
/// series per symbol within a feed instance.
pub struct SyntheticFeed {
    cache: SeriesCache,
    start: TradingDay,
}

impl SyntheticFeed {
    pub fn new() -> Self {
        let today = OffsetDateTime::now_utc().date();
        let start = today - Duration::days(i64::from(HISTORY_CALENDAR_DAYS));
        Self {
            cache: SeriesCache::new(),
            start: TradingDay::from_date(start),
        }
    }

    /// Pin the generator to a fixed start day (reproducible test histories).
    pub fn starting_at(start: TradingDay) -> Self {
        Self {
            cache: SeriesCache::new(),
            start,
        }
    }

    /// Symbols of the built-in listing.
    pub fn listed_symbols() -> Vec<Symbol> {
        LISTING
            .iter()
            .map(|entry| Symbol::parse(entry.symbol).expect("listing symbols are valid"))
            .collect()
    }

    fn series_for(&self, symbol: &Symbol) -> std::sync::Arc<Vec<DailyBar>> {
        let base_price = LISTING
            .iter()
            .find(|entry| entry.symbol == symbol.as_str())
            .map_or(FALLBACK_BASE_PRICE, |entry| entry.base_price);
        let start = self.start;
        self.cache.get_or_compute(symbol, move || {
            generate_series(symbol, base_price, HISTORY_CALENDAR_DAYS, start)
        })
    }

    fn summary_for(&self, symbol: &Symbol) -> StockSummary {
        let bars = self.series_for(symbol);
        let entry = LISTING
            .iter()
            .find(|candidate| candidate.symbol == symbol.as_str());

        let mut summary = StockSummary::from_bars(symbol.clone(), &bars)
            .expect("generated series is never empty");

        // Listed tickers report the 20-day traded volume and the published
        // 52-week band instead of the bar-derived fallbacks.
        if let Some(entry) = entry {
            summary.name = entry.name.to_owned();
            summary.exchange = entry.exchange.to_owned();
            summary.sector = Some(entry.sector.to_owned());
            summary.high_52w = entry.high_52w;
            summary.low_52w = entry.low_52w;
            summary.volume = bars.iter().rev().take(20).map(|bar| bar.volume).sum();
        }

        summary
    }
}

impl Default for SyntheticFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceFeed for SyntheticFeed {
    fn summaries<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockSummary>, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            Ok(Self::listed_symbols()
                .iter()
                .map(|symbol| self.summary_for(symbol))
                .collect())
        })
    }

    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<StockSummary, FeedError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.summary_for(symbol)) })
    }

    fn daily_bars<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DailyBar>, FeedError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.series_for(symbol).as_ref().clone()) })
    }
}

/// Generate a weekday-only random-walk series for one symbol.
///
/// Each bar opens at the previous close; the step size is drawn from a
/// slightly upward-biased uniform around 1.5% of the base price. The rng is
/// seeded from the symbol so histories are stable across runs.
fn generate_series(
    symbol: &Symbol,
    base_price: f64,
    calendar_days: u32,
    start: TradingDay,
) -> Vec<DailyBar> {
    let mut rng = fastrand::Rng::with_seed(symbol_seed(symbol));
    let volatility = base_price * 0.015;

    let mut bars = Vec::new();
    let mut open = base_price;
    let mut day = start;

    for _ in 0..calendar_days {
        let current = day;
        day = day.next_day();
        if current.is_weekend() {
            continue;
        }

        let change = (rng.f64() - 0.48) * volatility;
        let high = open + change.abs() * (0.5 + rng.f64() * 0.5);
        let low = open - change.abs() * (0.5 + rng.f64() * 0.5);
        let close = (open + change).max(0.01);
        let volume = VOLUME_FLOOR + (rng.f64() * VOLUME_SPREAD) as u64;

        let bar = DailyBar::new(
            current,
            round2(open),
            round2(open.max(close).max(high)),
            round2(open.min(close).min(low).max(0.0)),
            round2(close),
            volume,
        )
        .expect("generated bar satisfies price-box invariants");
        bars.push(bar);

        open = close;
    }

    bars
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol
        .as_str()
        .bytes()
        .fold(5381_u64, |acc, byte| acc.wrapping_mul(33).wrapping_add(byte as u64))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
