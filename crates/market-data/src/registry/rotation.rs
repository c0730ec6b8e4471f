//! Quota-aware key rotation.
//!
//! Walks the credential pool in a fresh random order and tries each key once:
//! gold then silver with the same key, first fully clean pair wins.

use std::sync::Arc;

use log::{debug, info, warn};

use super::FetchDiagnostics;
use crate::constants::QUOTE_CURRENCY;
use crate::credentials::{Credential, CredentialPool};
use crate::errors::{MarketDataError, RetryClass};
use crate::models::{Metal, RawQuote};
use crate::provider::PriceProvider;

/// Gold and silver quotes obtained with one credential.
#[derive(Clone, Debug, PartialEq)]
pub struct QuotePair {
    pub gold: RawQuote,
    pub silver: RawQuote,
    /// The credential both quotes were fetched with
    pub credential: Credential,
}

/// Drives a [`PriceProvider`] over a [`CredentialPool`].
pub struct KeyRotator {
    provider: Arc<dyn PriceProvider>,
    pool: CredentialPool,
}

impl KeyRotator {
    pub fn new(provider: Arc<dyn PriceProvider>, pool: CredentialPool) -> Self {
        Self { provider, pool }
    }

    pub fn provider(&self) -> &Arc<dyn PriceProvider> {
        &self.provider
    }

    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }

    /// Fetch one gold/silver pair, rotating keys on failure.
    ///
    /// Fails with [`MarketDataError::NoCredentials`] before any request when the
    /// pool is empty, and with [`MarketDataError::AllCredentialsExhausted`] once
    /// every key has been tried once.
    pub async fn fetch_snapshot_raw(&self) -> Result<QuotePair, MarketDataError> {
        self.fetch_with_diagnostics().await.0
    }

    /// Same as [`fetch_snapshot_raw`](Self::fetch_snapshot_raw) plus the per-key record.
    pub async fn fetch_with_diagnostics(
        &self,
    ) -> (Result<QuotePair, MarketDataError>, FetchDiagnostics) {
        let order = self.pool.shuffled_order();
        self.fetch_in_order(&order).await
    }

    /// Try the given credentials in order, each at most once.
    pub async fn fetch_in_order(
        &self,
        order: &[Credential],
    ) -> (Result<QuotePair, MarketDataError>, FetchDiagnostics) {
        let mut diagnostics = FetchDiagnostics::new();

        if order.is_empty() {
            warn!("No API credentials configured for '{}'", self.provider.id());
            return (Err(MarketDataError::NoCredentials), diagnostics);
        }

        for (index, credential) in order.iter().enumerate() {
            debug!(
                "Trying key {} ({}/{}) against '{}'",
                credential,
                index + 1,
                order.len(),
                self.provider.id()
            );

            match self.try_credential(credential).await {
                Ok(pair) => {
                    diagnostics.record_success(credential.masked());
                    info!(
                        "Fetched gold and silver with key {}: {}",
                        credential,
                        diagnostics.summary()
                    );
                    return (Ok(pair), diagnostics);
                }
                Err(e) => {
                    diagnostics.record_error(credential.masked(), &e);

                    // The bundled provider only yields rotatable errors; other
                    // `PriceProvider` impls may report a terminal one.
                    if e.retry_class() == RetryClass::Never {
                        warn!("Key {} failed terminally: {}", credential, e);
                        return (Err(e), diagnostics);
                    }

                    if e.is_quota_error() {
                        warn!("Key {} quota exceeded, trying next key", credential);
                    } else {
                        warn!("Key {} failed: {}, trying next key", credential, e);
                    }
                }
            }
        }

        warn!(
            "All {} keys failed: {}",
            order.len(),
            diagnostics.summary()
        );
        (
            Err(MarketDataError::AllCredentialsExhausted {
                attempts: order.len(),
            }),
            diagnostics,
        )
    }

    /// One trial: gold then silver with the same key.
    ///
    /// Both requests are issued before either outcome is judged.
    async fn try_credential(&self, credential: &Credential) -> Result<QuotePair, MarketDataError> {
        let provider_id = self.provider.id();

        let gold = self
            .provider
            .fetch_quote(Metal::Gold, QUOTE_CURRENCY, credential)
            .await;
        let silver = self
            .provider
            .fetch_quote(Metal::Silver, QUOTE_CURRENCY, credential)
            .await;

        let gold = gold.and_then(|q| q.check(provider_id))?;
        let silver = silver.and_then(|q| q.check(provider_id))?;

        Ok(QuotePair {
            gold,
            silver,
            credential: credential.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted behavior of one key.
    #[derive(Clone)]
    enum KeyBehavior {
        Ok { gold: f64, silver: f64 },
        Quota,
        LogicalError,
        Transport,
        SilverOnlyFails,
        Terminal,
    }

    struct MockProvider {
        behaviors: HashMap<String, KeyBehavior>,
        calls: Mutex<Vec<(Metal, String)>>,
    }

    impl MockProvider {
        fn new(behaviors: Vec<(&str, KeyBehavior)>) -> Self {
            Self {
                behaviors: behaviors
                    .into_iter()
                    .map(|(k, b)| (k.to_string(), b))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(Metal, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PriceProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        fn source_tag(&self) -> &str {
            "mock"
        }

        async fn fetch_quote(
            &self,
            metal: Metal,
            currency: &str,
            credential: &Credential,
        ) -> Result<RawQuote, MarketDataError> {
            assert_eq!(currency, "USD");
            self.calls
                .lock()
                .unwrap()
                .push((metal, credential.expose().to_string()));

            match self.behaviors.get(credential.expose()).cloned() {
                Some(KeyBehavior::Ok { gold, silver }) => Ok(match metal {
                    Metal::Gold => RawQuote::per_gram(gold),
                    Metal::Silver => RawQuote::per_gram(silver),
                }),
                Some(KeyBehavior::Quota) => Ok(RawQuote::failed("Monthly quota exceeded")),
                Some(KeyBehavior::LogicalError) => Ok(RawQuote::failed("Invalid API Key")),
                Some(KeyBehavior::SilverOnlyFails) => match metal {
                    Metal::Gold => Ok(RawQuote::per_gram(90.0)),
                    Metal::Silver => Ok(RawQuote::failed("Monthly quota exceeded")),
                },
                Some(KeyBehavior::Terminal) => Err(MarketDataError::ValidationFailed {
                    message: "provider returned a negative price".to_string(),
                }),
                Some(KeyBehavior::Transport) | None => Err(MarketDataError::Transport {
                    provider: "MOCK".to_string(),
                    message: "connection reset".to_string(),
                }),
            }
        }
    }

    fn creds(values: &[&str]) -> Vec<Credential> {
        values.iter().map(|v| Credential::new(*v)).collect()
    }

    #[tokio::test]
    async fn test_two_failures_then_success_issues_six_calls_in_order() {
        let provider = Arc::new(MockProvider::new(vec![
            ("key-one-1111", KeyBehavior::LogicalError),
            ("key-two-2222", KeyBehavior::Quota),
            ("key-three-3333", KeyBehavior::Ok { gold: 95.0, silver: 1.1 }),
        ]));
        let pool = CredentialPool::new(["key-one-1111", "key-two-2222", "key-three-3333"]);
        let rotator = KeyRotator::new(provider.clone(), pool);

        let (result, diagnostics) = rotator
            .fetch_in_order(&creds(&["key-one-1111", "key-two-2222", "key-three-3333"]))
            .await;

        let pair = result.unwrap();
        assert_eq!(pair.credential.expose(), "key-three-3333");
        assert_eq!(pair.gold.price_gram_24k, Some(95.0));
        assert_eq!(pair.silver.price_gram_24k, Some(1.1));

        let calls = provider.calls();
        assert_eq!(
            calls,
            vec![
                (Metal::Gold, "key-one-1111".to_string()),
                (Metal::Silver, "key-one-1111".to_string()),
                (Metal::Gold, "key-two-2222".to_string()),
                (Metal::Silver, "key-two-2222".to_string()),
                (Metal::Gold, "key-three-3333".to_string()),
                (Metal::Silver, "key-three-3333".to_string()),
            ]
        );
        assert_eq!(diagnostics.attempts.len(), 3);
        assert_eq!(diagnostics.quota_failures(), 1);
        assert!(diagnostics.has_success());
    }

    #[tokio::test]
    async fn test_empty_pool_fails_without_calls() {
        let provider = Arc::new(MockProvider::new(vec![]));
        let rotator = KeyRotator::new(provider.clone(), CredentialPool::default());

        let result = rotator.fetch_snapshot_raw().await;

        assert!(matches!(result, Err(MarketDataError::NoCredentials)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_all_keys_failing_exhausts_pool() {
        let provider = Arc::new(MockProvider::new(vec![
            ("key-a-aaaa", KeyBehavior::Transport),
            ("key-b-bbbb", KeyBehavior::Quota),
        ]));
        let rotator = KeyRotator::new(
            provider.clone(),
            CredentialPool::new(["key-a-aaaa", "key-b-bbbb"]),
        );

        let (result, diagnostics) = rotator.fetch_with_diagnostics().await;

        assert!(matches!(
            result,
            Err(MarketDataError::AllCredentialsExhausted { attempts: 2 })
        ));
        assert_eq!(provider.calls().len(), 4);
        assert!(!diagnostics.has_success());
    }

    #[tokio::test]
    async fn test_same_key_used_for_both_metals() {
        let provider = Arc::new(MockProvider::new(vec![
            ("key-a-aaaa", KeyBehavior::SilverOnlyFails),
            ("key-b-bbbb", KeyBehavior::Ok { gold: 92.0, silver: 1.0 }),
        ]));
        let rotator = KeyRotator::new(
            provider.clone(),
            CredentialPool::new(["key-a-aaaa", "key-b-bbbb"]),
        );

        let (result, _) = rotator
            .fetch_in_order(&creds(&["key-a-aaaa", "key-b-bbbb"]))
            .await;

        // Gold from key A was fine but is discarded; both quotes come from B.
        let pair = result.unwrap();
        assert_eq!(pair.credential.expose(), "key-b-bbbb");
        assert_eq!(pair.gold.price_gram_24k, Some(92.0));
        assert_eq!(pair.silver.price_gram_24k, Some(1.0));
    }

    #[tokio::test]
    async fn test_transport_failure_still_issues_silver_call() {
        let provider = Arc::new(MockProvider::new(vec![(
            "key-a-aaaa",
            KeyBehavior::Transport,
        )]));
        let rotator = KeyRotator::new(provider.clone(), CredentialPool::new(["key-a-aaaa"]));

        let _ = rotator.fetch_snapshot_raw().await;

        assert_eq!(
            provider.calls(),
            vec![
                (Metal::Gold, "key-a-aaaa".to_string()),
                (Metal::Silver, "key-a-aaaa".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_shuffled_rotation_tries_each_key_once() {
        let provider = Arc::new(MockProvider::new(vec![
            ("key-a-aaaa", KeyBehavior::Quota),
            ("key-b-bbbb", KeyBehavior::Quota),
            ("key-c-cccc", KeyBehavior::Quota),
            ("key-d-dddd", KeyBehavior::Ok { gold: 90.0, silver: 1.0 }),
        ]));
        let rotator = KeyRotator::new(
            provider.clone(),
            CredentialPool::new(["key-a-aaaa", "key-b-bbbb", "key-c-cccc", "key-d-dddd"]),
        );

        let pair = rotator.fetch_snapshot_raw().await.unwrap();
        assert_eq!(pair.credential.expose(), "key-d-dddd");

        let calls = provider.calls();
        assert_eq!(calls.len() % 2, 0);
        assert_eq!(calls.last().unwrap().1, "key-d-dddd");
        let mut keys: Vec<_> = calls.chunks(2).map(|c| c[0].1.clone()).collect();
        for chunk in calls.chunks(2) {
            assert_eq!(chunk[0].0, Metal::Gold);
            assert_eq!(chunk[1].0, Metal::Silver);
            assert_eq!(chunk[0].1, chunk[1].1);
        }
        let tried = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), tried);
    }

    #[tokio::test]
    async fn test_terminal_error_stops_rotation() {
        let provider = Arc::new(MockProvider::new(vec![
            ("key-one-1111", KeyBehavior::Terminal),
            ("key-two-2222", KeyBehavior::Ok { gold: 90.0, silver: 1.0 }),
        ]));
        let rotator = KeyRotator::new(
            provider.clone(),
            CredentialPool::new(["key-one-1111", "key-two-2222"]),
        );

        let (result, diagnostics) = rotator
            .fetch_in_order(&creds(&["key-one-1111", "key-two-2222"]))
            .await;

        assert!(matches!(
            result,
            Err(MarketDataError::ValidationFailed { .. })
        ));
        assert_eq!(provider.calls().len(), 2);
        assert!(provider.calls().iter().all(|(_, k)| k == "key-one-1111"));
        assert!(!diagnostics.has_success());
    }
}
