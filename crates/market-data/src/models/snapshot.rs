use serde::{Deserialize, Serialize};

use super::quote::RawQuote;
use super::types::Currency;

/// USD to target-currency rate used for one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Units of target currency per USD
    pub value: f64,
    /// Whether the configured fallback was used instead of a live rate
    pub is_fallback: bool,
}

impl ExchangeRate {
    pub fn live(value: f64) -> Self {
        Self {
            value,
            is_fallback: false,
        }
    }

    pub fn fallback(value: f64) -> Self {
        Self {
            value,
            is_fallback: true,
        }
    }
}

/// One consistent gold/silver reading, already in the target currency.
///
/// Both raw quotes come from the same credential. The snapshot is never
/// mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSnapshot {
    gold_per_gram: f64,
    silver_per_kg: f64,
    gold_raw: RawQuote,
    silver_raw: RawQuote,
    exchange_rate: ExchangeRate,
    currency: Currency,
    source: String,
}

impl PriceSnapshot {
    pub fn new(
        gold_per_gram: f64,
        silver_per_kg: f64,
        gold_raw: RawQuote,
        silver_raw: RawQuote,
        exchange_rate: ExchangeRate,
        currency: Currency,
        source: impl Into<String>,
    ) -> Self {
        Self {
            gold_per_gram,
            silver_per_kg,
            gold_raw,
            silver_raw,
            exchange_rate,
            currency,
            source: source.into(),
        }
    }

    /// Gold price per gram in the target currency.
    pub fn gold_per_gram(&self) -> f64 {
        self.gold_per_gram
    }

    /// Silver price per kilogram in the target currency.
    pub fn silver_per_kg(&self) -> f64 {
        self.silver_per_kg
    }

    pub fn gold_raw(&self) -> &RawQuote {
        &self.gold_raw
    }

    pub fn silver_raw(&self) -> &RawQuote {
        &self.silver_raw
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        self.exchange_rate
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Name tag of the price API the quotes came from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
