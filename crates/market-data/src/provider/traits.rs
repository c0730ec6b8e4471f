//! Price provider trait definitions.
//!
//! This module defines the `PriceProvider` trait that the key rotation
//! drives with one credential at a time.

use async_trait::async_trait;

use crate::credentials::Credential;
use crate::errors::MarketDataError;
use crate::models::{Metal, RawQuote};

/// Trait for a quota-limited spot price API.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tolawatch_market_data::provider::PriceProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl PriceProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn source_tag(&self) -> &str {
///         "my-provider.example"
///     }
///
///     // ... implement fetch_quote
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "GOLD_API".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Name tag recorded as the source of a snapshot.
    fn source_tag(&self) -> &str;

    /// Fetch the spot price of one metal in one currency with one credential.
    ///
    /// # Returns
    ///
    /// - `Err` when no usable response was obtained (network, timeout,
    ///   unreadable body).
    /// - `Ok` with the parsed quote otherwise. The quote may still carry a
    ///   logical `error` (e.g. quota exhausted); callers must check it.
    async fn fetch_quote(
        &self,
        metal: Metal,
        currency: &str,
        credential: &Credential,
    ) -> Result<RawQuote, MarketDataError>;
}
