use std::sync::Arc;

use log::warn;

use super::er_api::RateSource;
use crate::constants::{DEFAULT_FALLBACK_RATE, GRAMS_PER_TROY_OUNCE};
use crate::models::{ExchangeRate, MassBasis, RawQuote};

/// Rescales USD quotes into the target currency and mass basis.
///
/// The rate lookup is best effort: any failure substitutes the configured
/// fallback rate and logs a warning.
pub struct CurrencyNormalizer {
    source: Arc<dyn RateSource>,
    fallback_rate: f64,
}

impl CurrencyNormalizer {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self::with_fallback(source, DEFAULT_FALLBACK_RATE)
    }

    pub fn with_fallback(source: Arc<dyn RateSource>, fallback_rate: f64) -> Self {
        Self {
            source,
            fallback_rate,
        }
    }

    pub fn fallback_rate(&self) -> f64 {
        self.fallback_rate
    }

    /// Current rate, or the fallback when the lookup fails. Never errors.
    pub async fn exchange_rate(&self) -> f64 {
        self.resolve_rate().await.value
    }

    /// Current rate along with whether the fallback was used.
    pub async fn resolve_rate(&self) -> ExchangeRate {
        match self.source.lookup_rate().await {
            Ok(rate) => ExchangeRate::live(rate),
            Err(e) => {
                warn!(
                    "Exchange rate unavailable ({}), using fallback {}",
                    e, self.fallback_rate
                );
                ExchangeRate::fallback(self.fallback_rate)
            }
        }
    }
}

/// Price of one `basis` unit of metal in the target currency.
///
/// Uses `price_gram_24k` when present; otherwise derives the per-gram price
/// from the per-ounce `price`. A quote with neither yields NaN.
pub fn normalize(quote: &RawQuote, rate: f64, basis: MassBasis) -> f64 {
    let per_gram_usd = match quote.price_gram_24k {
        Some(per_gram) => per_gram,
        None => quote.price.unwrap_or(f64::NAN) / GRAMS_PER_TROY_OUNCE,
    };
    per_gram_usd * rate * basis.grams()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MarketDataError;
    use async_trait::async_trait;

    struct FixedRate(Option<f64>);

    #[async_trait]
    impl RateSource for FixedRate {
        async fn lookup_rate(&self) -> Result<f64, MarketDataError> {
            self.0.ok_or(MarketDataError::Transport {
                provider: "TEST".to_string(),
                message: "down".to_string(),
            })
        }
    }

    #[test]
    fn test_normalize_per_gram_price() {
        let quote = RawQuote::per_gram(100.0);
        assert_eq!(normalize(&quote, 280.0, MassBasis::Gram), 28_000.0);
        assert_eq!(normalize(&quote, 280.0, MassBasis::Kilogram), 28_000_000.0);
    }

    #[test]
    fn test_normalize_per_ounce_fallback() {
        let quote = RawQuote::per_ounce(3100.0);
        let value = normalize(&quote, 280.0, MassBasis::Gram);
        assert!((value - (3100.0 / 31.1035) * 280.0).abs() < 1e-9);
        assert!((value - 27_906.82).abs() < 0.01);
    }

    #[test]
    fn test_normalize_prefers_per_gram_price() {
        let quote = RawQuote {
            price: Some(3100.0),
            price_gram_24k: Some(100.0),
            ..RawQuote::default()
        };
        assert_eq!(normalize(&quote, 2.0, MassBasis::Gram), 200.0);
    }

    #[test]
    fn test_normalize_without_price_is_nan() {
        assert!(normalize(&RawQuote::default(), 280.0, MassBasis::Gram).is_nan());
    }

    #[tokio::test]
    async fn test_live_rate() {
        let normalizer = CurrencyNormalizer::new(Arc::new(FixedRate(Some(279.5))));
        assert_eq!(normalizer.exchange_rate().await, 279.5);
        assert!(!normalizer.resolve_rate().await.is_fallback);
    }

    #[tokio::test]
    async fn test_fallback_rate() {
        let normalizer = CurrencyNormalizer::new(Arc::new(FixedRate(None)));
        assert_eq!(normalizer.exchange_rate().await, 282.81);
        assert!(normalizer.resolve_rate().await.is_fallback);
    }

    #[tokio::test]
    async fn test_configured_fallback_rate() {
        let normalizer = CurrencyNormalizer::with_fallback(Arc::new(FixedRate(None)), 300.0);
        assert_eq!(normalizer.exchange_rate().await, 300.0);
    }
}
