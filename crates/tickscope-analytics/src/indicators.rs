//! Illustrative valuation-ratio placeholders.
//!
//! These figures are NOT real fundamentals. The dashboard has no fundamental
//! data source, so it renders plausible-looking ratios perturbed around fixed
//! baseline ranges, anchored only to the last close price. Treat them as
//! display filler; nothing downstream may rely on their accuracy.
//!
//! This is the single place randomness enters the analytics crate. The rng
//! is injected so tests can seed it and get reproducible output.

use serde::{Deserialize, Serialize};

use crate::round2;

/// Placeholder valuation ratios for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyIndicators {
    pub pe: f64,
    pub pb: f64,
    pub eps: f64,
    pub roe: f64,
    pub dividend_yield: f64,
    pub market_cap: f64,
}

/// Draw placeholder indicators around fixed baseline ranges.
///
/// P/E lands in 12-20, P/B in 1.5-3.0, ROE in 10-20%, dividend yield in
/// 2-6%; EPS is back-solved from price and the drawn P/E, and market cap
/// scales the price by a 0.5-2.5 billion share-value factor.
pub fn estimate_indicators(last_close: f64, rng: &mut fastrand::Rng) -> KeyIndicators {
    let pe = 12.0 + rng.f64() * 8.0;
    let pb = 1.5 + rng.f64() * 1.5;
    let eps = last_close / pe;
    let roe = 15.0 + (rng.f64() - 0.5) * 10.0;
    let dividend_yield = 2.0 + rng.f64() * 4.0;
    let market_cap = last_close * (500_000_000.0 + rng.f64() * 2_000_000_000.0);

    KeyIndicators {
        pe: round2(pe),
        pb: round2(pb),
        eps: round2(eps),
        roe: round2(roe),
        dividend_yield: round2(dividend_yield),
        market_cap: market_cap.round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_baseline_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            let indicators = estimate_indicators(82.5, &mut rng);
            assert!(indicators.pe >= 12.0 && indicators.pe <= 20.0);
            assert!(indicators.pb >= 1.5 && indicators.pb <= 3.0);
            assert!(indicators.roe >= 10.0 && indicators.roe <= 20.0);
            assert!(indicators.dividend_yield >= 2.0 && indicators.dividend_yield <= 6.0);
            assert!(indicators.eps > 0.0);
            assert!(indicators.market_cap >= 82.5 * 500_000_000.0);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_draw() {
        let mut first = fastrand::Rng::with_seed(42);
        let mut second = fastrand::Rng::with_seed(42);
        assert_eq!(
            estimate_indicators(50.0, &mut first),
            estimate_indicators(50.0, &mut second)
        );
    }

    #[test]
    fn ratio_fields_carry_two_decimals() {
        let mut rng = fastrand::Rng::with_seed(1);
        let indicators = estimate_indicators(33.33, &mut rng);
        for value in [
            indicators.pe,
            indicators.pb,
            indicators.eps,
            indicators.roe,
            indicators.dividend_yield,
        ] {
            assert_eq!(value, (value * 100.0).round() / 100.0);
        }
        assert_eq!(indicators.market_cap, indicators.market_cap.round());
    }
}
