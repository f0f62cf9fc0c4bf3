//! Price feeds: where bar series and listing snapshots come from.
//!
//! Two implementations exist, matching the deployment switch of the
//! dashboard this library backs: [`AlphaVantageFeed`] when an API key is
//! configured, [`SyntheticFeed`] otherwise. [`StockFeed`] picks between them.

mod alphavantage;
mod cache;
mod synthetic;

pub use alphavantage::{AlphaVantageFeed, ALPHAVANTAGE_API_KEY_ENV};
pub use cache::SeriesCache;
pub use synthetic::SyntheticFeed;

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::{DailyBar, HttpClient, StockSummary, Symbol};

/// Feed-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    Unavailable,
    RateLimited,
    Internal,
}

/// Structured feed error carried back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    message: String,
    retryable: bool,
}

impl FeedError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FeedErrorKind::Unavailable => "feed.unavailable",
            FeedErrorKind::RateLimited => "feed.rate_limited",
            FeedErrorKind::Internal => "feed.internal",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FeedError {}

/// Price data provider contract.
///
/// Implementations must be `Send + Sync`; methods return boxed futures so the
/// trait stays object-safe for the dispatcher.
pub trait PriceFeed: Send + Sync {
    /// Listing snapshots for every symbol this feed serves.
    fn summaries<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockSummary>, FeedError>> + Send + 'a>>;

    /// Latest snapshot for one symbol.
    fn quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<StockSummary, FeedError>> + Send + 'a>>;

    /// Daily OHLCV series for one symbol, ascending by day.
    fn daily_bars<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DailyBar>, FeedError>> + Send + 'a>>;
}

/// Feed dispatcher: live provider when a key is configured, synthetic data
/// otherwise.
pub struct StockFeed {
    inner: Box<dyn PriceFeed>,
    live: bool,
}

impl StockFeed {
    /// Build from the environment: a non-empty `TICKSCOPE_ALPHAVANTAGE_API_KEY`
    /// selects the live Alpha Vantage feed.
    pub fn from_env(http_client: Arc<dyn HttpClient>) -> Self {
        match std::env::var(ALPHAVANTAGE_API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Self {
                inner: Box::new(AlphaVantageFeed::new(http_client, key)),
                live: true,
            },
            _ => Self::synthetic(),
        }
    }

    pub fn synthetic() -> Self {
        Self {
            inner: Box::new(SyntheticFeed::new()),
            live: false,
        }
    }

    pub const fn is_live(&self) -> bool {
        self.live
    }

    pub async fn summaries(&self) -> Result<Vec<StockSummary>, FeedError> {
        self.inner.summaries().await
    }

    pub async fn quote(&self, symbol: &Symbol) -> Result<StockSummary, FeedError> {
        self.inner.quote(symbol).await
    }

    pub async fn daily_bars(&self, symbol: &Symbol) -> Result<Vec<DailyBar>, FeedError> {
        self.inner.daily_bars(symbol).await
    }
}
