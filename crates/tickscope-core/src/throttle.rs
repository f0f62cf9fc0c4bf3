use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// In-memory rate gate protecting free-tier provider quotas.
///
/// `acquire` either grants budget or answers with the delay after which the
/// caller should retry.
#[derive(Clone)]
pub struct RateGate {
    limiter: Arc<DirectRateLimiter>,
    retry_hint: Duration,
}

impl RateGate {
    pub fn new(quota_window: Duration, quota_limit: u32) -> Self {
        let safe_limit = quota_limit.max(1);
        let burst = NonZeroU32::new(safe_limit).expect("safe limit is non-zero");

        let seconds_per_cell = (quota_window.as_secs_f64() / f64::from(safe_limit)).max(0.001);
        let period = Duration::from_secs_f64(seconds_per_cell);
        let quota = Quota::with_period(period)
            .expect("period is always greater than zero")
            .allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
            retry_hint: period,
        }
    }

    /// Alpha Vantage free tier: 5 requests per rolling minute.
    pub fn alphavantage_free_tier() -> Self {
        Self::new(Duration::from_secs(60), 5)
    }

    pub fn acquire(&self) -> Result<(), Duration> {
        if self.limiter.check().is_ok() {
            Ok(())
        } else {
            Err(self.retry_hint)
        }
    }
}
