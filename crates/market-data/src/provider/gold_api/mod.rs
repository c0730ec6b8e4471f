//! goldapi.io provider for gold and silver spot prices.
//!
//! Endpoint: `GET {base}/{XAU|XAG}/{currency}` authenticated with the
//! `x-access-token` header. Responses carry `price` (per troy ounce) and,
//! on most plans, `price_gram_24k`. Quota exhaustion and bad keys are
//! reported as `{"error": "..."}` bodies, usually with a 4xx status.
//!
//! Every key has its own monthly request allotment, which is why the
//! registry rotates over a pool of them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::credentials::Credential;
use crate::errors::MarketDataError;
use crate::models::{Metal, RawQuote};
use crate::provider::PriceProvider;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.goldapi.io/api";

/// Provider ID constant
const PROVIDER_ID: &str = "GOLD_API";

/// Tag recorded as snapshot source
const SOURCE_TAG: &str = "goldapi.io";

/// Header carrying the API key
const TOKEN_HEADER: &str = "x-access-token";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest response excerpt kept in error messages
const BODY_EXCERPT_LEN: usize = 200;

/// goldapi.io price provider.
///
/// # Example
///
/// ```ignore
/// use tolawatch_market_data::provider::GoldApiProvider;
///
/// let provider = GoldApiProvider::new("https://www.goldapi.io/api");
/// ```
pub struct GoldApiProvider {
    client: Client,
    base_url: String,
}

impl GoldApiProvider {
    /// Create a provider against the given base URL with the default 10s timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a provider with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn quote_url(&self, metal: Metal, currency: &str) -> String {
        format!("{}/{}/{}", self.base_url, metal.symbol(), currency)
    }

    /// Interpret a response body.
    ///
    /// JSON bodies are returned as quotes even on error statuses so the
    /// logical error they carry reaches the caller. A non-success status
    /// without an `error` field is turned into one.
    fn parse_body(status: reqwest::StatusCode, body: &str) -> Result<RawQuote, MarketDataError> {
        match serde_json::from_str::<RawQuote>(body) {
            Ok(mut quote) => {
                if !status.is_success() && quote.error.is_none() {
                    quote.error = Some(format!("HTTP {}", status));
                }
                Ok(quote)
            }
            Err(e) => Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {} ({})", status, excerpt(body), e),
            }),
        }
    }
}

impl Default for GoldApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl PriceProvider for GoldApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn source_tag(&self) -> &str {
        SOURCE_TAG
    }

    async fn fetch_quote(
        &self,
        metal: Metal,
        currency: &str,
        credential: &Credential,
    ) -> Result<RawQuote, MarketDataError> {
        let url = self.quote_url(metal, currency);
        debug!("goldapi request: {} with key {}", url, credential);

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, credential.expose())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, &e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, &e))?;

        let quote = Self::parse_body(status, &body)?;
        if let Some(message) = &quote.error {
            warn!(
                "goldapi reported an error for {} with key {}: {}",
                metal, credential, message
            );
        }
        Ok(quote)
    }
}
