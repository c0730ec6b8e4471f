//! History domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tolawatch_market_data::{ConvertedPrices, PriceSnapshot};

/// One persisted price reading, keyed by its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub prices: ConvertedPrices,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<f64>,
    #[serde(default)]
    pub rate_is_fallback: bool,
    #[serde(default)]
    pub source: Option<String>,
}

impl HistoryEntry {
    /// Build an entry from a validated snapshot and its converted prices.
    pub fn from_snapshot(
        timestamp: DateTime<Utc>,
        snapshot: &PriceSnapshot,
        prices: ConvertedPrices,
    ) -> Self {
        let rate = snapshot.exchange_rate();
        Self {
            timestamp,
            prices,
            currency: Some(snapshot.currency().to_string()),
            exchange_rate: Some(rate.value),
            rate_is_fallback: rate.is_fallback,
            source: Some(snapshot.source().to_string()),
        }
    }
}
