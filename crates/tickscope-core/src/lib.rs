//! # Tickscope Core
//!
//! Domain types and price feeds for the tickscope stock analysis toolkit.
//!
//! ## Overview
//!
//! This crate provides the foundations the analytics layer builds on:
//!
//! - **Validated domain models** for symbols, calendar days, daily bars, and
//!   listing snapshots
//! - **Price feed contract** ([`PriceFeed`]) with a live Alpha Vantage
//!   implementation and a deterministic synthetic generator
//! - **Feed dispatch** ([`StockFeed`]) switching on whether an API key is
//!   configured
//! - **Transport abstraction** so provider parsing is testable offline
//! - **Rate gating** for free-tier provider quotas
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (`Symbol`, `TradingDay`, `DailyBar`, `StockSummary`) |
//! | [`feed`] | Price feeds (Alpha Vantage, synthetic) and the dispatcher |
//! | [`http`] | HTTP transport trait and reqwest implementation |
//! | [`throttle`] | Rate gate for provider quotas |
//! | [`error`] | Core error types |
//!
//! ## Security
//!
//! The Alpha Vantage API key is read from `TICKSCOPE_ALPHAVANTAGE_API_KEY`
//! only and is never logged.

pub mod domain;
pub mod error;
pub mod feed;
pub mod http;
pub mod throttle;

pub use domain::{sort_bars_by_day, DailyBar, StockSummary, Symbol, TradingDay};
pub use error::ValidationError;
pub use feed::{
    AlphaVantageFeed, FeedError, FeedErrorKind, PriceFeed, SeriesCache, StockFeed, SyntheticFeed,
    ALPHAVANTAGE_API_KEY_ENV,
};
pub use http::{HttpClient, HttpError, HttpResponse, ReqwestHttpClient, StaticHttpClient};
pub use throttle::RateGate;
