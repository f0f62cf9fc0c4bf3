use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::feed::{FeedError, PriceFeed};
use crate::throttle::RateGate;
use crate::{sort_bars_by_day, DailyBar, HttpClient, StockSummary, Symbol, TradingDay};

/// Environment variable holding the caller-supplied Alpha Vantage API key.
pub const ALPHAVANTAGE_API_KEY_ENV: &str = "TICKSCOPE_ALPHAVANTAGE_API_KEY";

const ALPHAVANTAGE_BASE: &str = "https://www.alphavantage.co/query";
const REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Symbols listed by default on the free tier (US and global tickers).
const DEFAULT_API_SYMBOLS: [&str; 3] = ["IBM", "AAPL", "MSFT"];

/// Live price feed backed by the Alpha Vantage REST API.
pub struct AlphaVantageFeed {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    gate: RateGate,
}

impl AlphaVantageFeed {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            gate: RateGate::alphavantage_free_tier(),
        }
    }

    async fn fetch_body(&self, query: String) -> Result<String, FeedError> {
        if let Err(delay) = self.gate.acquire() {
            return Err(FeedError::rate_limited(format!(
                "alphavantage free-tier limit exceeded; retry in {:.2}s",
                delay.as_secs_f64()
            )));
        }

        let url = format!("{ALPHAVANTAGE_BASE}?{query}&apikey={}", self.api_key);
        let response = self
            .http_client
            .get(url, REQUEST_TIMEOUT_MS)
            .await
            .map_err(|e| {
                FeedError::unavailable(format!("alphavantage transport error: {}", e.message()))
            })?;

        if !response.is_success() {
            return Err(FeedError::unavailable(format!(
                "alphavantage returned status {}",
                response.status
            )));
        }

        Ok(response.body)
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> Result<StockSummary, FeedError> {
        let body = self
            .fetch_body(format!(
                "function=GLOBAL_QUOTE&symbol={}",
                urlencoding::encode(symbol.as_str())
            ))
            .await?;

        let parsed: GlobalQuoteResponse = serde_json::from_str(&body).map_err(|e| {
            FeedError::internal(format!("failed to parse alphavantage quote: {e}"))
        })?;

        let quote = parsed
            .quote
            .filter(|q| !q.price.is_empty())
            .ok_or_else(|| FeedError::unavailable("no quote data in alphavantage response"))?;

        let price = parse_number(&quote.price, "price")?;
        let change = quote.change.as_deref().map_or(0.0, parse_lenient);
        let change_percent = quote
            .change_percent
            .as_deref()
            .map(|raw| raw.trim_end_matches('%'))
            .map_or(0.0, parse_lenient);
        let volume = quote
            .volume
            .as_deref()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0);
        // The free quote endpoint has no 52-week band; the session extrema
        // stand in the way the dashboard's API layer handled it.
        let high = quote.high.as_deref().map_or(price, parse_lenient);
        let low = quote.low.as_deref().map_or(price, parse_lenient);

        let reported = quote
            .symbol
            .as_deref()
            .and_then(|raw| Symbol::parse(raw).ok())
            .unwrap_or_else(|| symbol.clone());

        Ok(StockSummary {
            name: reported.as_str().to_owned(),
            symbol: reported,
            exchange: String::from("US"),
            sector: None,
            last_price: price,
            change,
            change_percent,
            volume,
            high_52w: high,
            low_52w: low,
        })
    }
}

impl PriceFeed for AlphaVantageFeed {
    fn summaries<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockSummary>, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let mut summaries = Vec::with_capacity(DEFAULT_API_SYMBOLS.len());
            for raw in DEFAULT_API_SYMBOLS {
                let symbol = Symbol::parse(raw).expect("default symbols are valid");
                // A symbol the provider cannot serve is dropped from the
                // listing rather than failing the whole batch.
                if let Ok(summary) = self.fetch_quote(&symbol).await {
                    summaries.push(summary);
                }
            }
            Ok(summaries)
        })
    }

    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<StockSummary, FeedError>> + Send + 'a>> {
        Box::pin(async move { self.fetch_quote(symbol).await })
    }

    fn daily_bars<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DailyBar>, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let body = self
                .fetch_body(format!(
                    "function=TIME_SERIES_DAILY&symbol={}&outputsize=compact",
                    urlencoding::encode(symbol.as_str())
                ))
                .await?;

            let parsed: TimeSeriesDailyResponse = serde_json::from_str(&body).map_err(|e| {
                FeedError::internal(format!("failed to parse alphavantage bars: {e}"))
            })?;

            let Some(series) = parsed.series else {
                return Ok(Vec::new());
            };

            let mut bars = Vec::with_capacity(series.len());
            for (date, raw) in series {
                let Ok(day) = TradingDay::parse(&date) else {
                    continue;
                };
                let (Ok(open), Ok(high), Ok(low), Ok(close)) = (
                    raw.open.parse::<f64>(),
                    raw.high.parse::<f64>(),
                    raw.low.parse::<f64>(),
                    raw.close.parse::<f64>(),
                ) else {
                    continue;
                };
                let volume = raw
                    .volume
                    .as_deref()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);

                // Malformed rows are skipped, not fatal.
                if let Ok(bar) = DailyBar::new(day, open, high, low, close, volume) {
                    bars.push(bar);
                }
            }

            sort_bars_by_day(&mut bars);
            Ok(bars)
        })
    }
}

fn parse_number(raw: &str, field: &'static str) -> Result<f64, FeedError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FeedError::internal(format!("alphavantage field '{field}' is not numeric")))
}

fn parse_lenient(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

// Alpha Vantage wire shapes. Field names follow the provider's numbered
// JSON keys; all values arrive as strings.

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    quote: Option<GlobalQuoteData>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteData {
    #[serde(rename = "01. symbol", default)]
    symbol: Option<String>,
    #[serde(rename = "03. high", default)]
    high: Option<String>,
    #[serde(rename = "04. low", default)]
    low: Option<String>,
    #[serde(rename = "05. price", default)]
    price: String,
    #[serde(rename = "06. volume", default)]
    volume: Option<String>,
    #[serde(rename = "09. change", default)]
    change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    change_percent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesDailyResponse {
    #[serde(rename = "Time Series (Daily)", default)]
    series: Option<BTreeMap<String, TimeSeriesDailyBar>>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesDailyBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume", default)]
    volume: Option<String>,
}
