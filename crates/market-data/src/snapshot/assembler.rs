use log::info;

use crate::errors::MarketDataError;
use crate::fx::{normalize, CurrencyNormalizer};
use crate::models::{Currency, MassBasis, PriceSnapshot};
use crate::registry::{FetchDiagnostics, KeyRotator};

/// Builds one [`PriceSnapshot`] per call from the key rotation and the
/// currency normalizer. Performs no retries of its own.
pub struct SnapshotAssembler {
    rotator: KeyRotator,
    normalizer: CurrencyNormalizer,
    currency: Currency,
}

impl SnapshotAssembler {
    pub fn new(rotator: KeyRotator, normalizer: CurrencyNormalizer, currency: Currency) -> Self {
        Self {
            rotator,
            normalizer,
            currency,
        }
    }

    pub fn rotator(&self) -> &KeyRotator {
        &self.rotator
    }

    /// Fetch, normalize and assemble one snapshot.
    ///
    /// Errors from the key rotation are returned unchanged.
    pub async fn build_snapshot(&self) -> Result<PriceSnapshot, MarketDataError> {
        self.build_with_diagnostics().await.0
    }

    /// Same as [`build_snapshot`](Self::build_snapshot) plus the per-key record.
    pub async fn build_with_diagnostics(
        &self,
    ) -> (Result<PriceSnapshot, MarketDataError>, FetchDiagnostics) {
        let (pair, diagnostics) = self.rotator.fetch_with_diagnostics().await;
        let pair = match pair {
            Ok(pair) => pair,
            Err(e) => return (Err(e), diagnostics),
        };

        let rate = self.normalizer.resolve_rate().await;
        let gold_per_gram = normalize(&pair.gold, rate.value, MassBasis::Gram);
        let silver_per_kg = normalize(&pair.silver, rate.value, MassBasis::Kilogram);

        info!(
            "Snapshot: gold {:.2} {}/g, silver {:.2} {}/kg at rate {:.4}{}",
            gold_per_gram,
            self.currency,
            silver_per_kg,
            self.currency,
            rate.value,
            if rate.is_fallback { " (fallback)" } else { "" }
        );

        let snapshot = PriceSnapshot::new(
            gold_per_gram,
            silver_per_kg,
            pair.gold,
            pair.silver,
            rate,
            self.currency.clone(),
            self.rotator.provider().source_tag(),
        );
        (Ok(snapshot), diagnostics)
    }
}
