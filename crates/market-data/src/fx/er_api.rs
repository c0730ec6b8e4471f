//! open.er-api.com exchange-rate source.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::constants::DEFAULT_TARGET_CURRENCY;
use crate::errors::MarketDataError;

/// Default endpoint returning USD-based rates
pub const DEFAULT_RATE_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Provider ID constant
const PROVIDER_ID: &str = "ER_API";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of a live USD to target-currency rate.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current rate. Errors are handled by the caller.
    async fn lookup_rate(&self) -> Result<f64, MarketDataError>;
}

/// API response from open.er-api.com
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// "success" or "error"
    #[serde(default)]
    result: Option<String>,
    /// Error type when result is "error"
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
    /// Units of each currency per 1 USD
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// open.er-api.com rate source.
pub struct ErApiRateProvider {
    client: Client,
    url: String,
    target_currency: String,
}

impl ErApiRateProvider {
    /// Create a rate source for `target_currency` with the default 5s timeout.
    pub fn new(url: impl Into<String>, target_currency: impl Into<String>) -> Self {
        Self::with_timeout(url, target_currency, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        url: impl Into<String>,
        target_currency: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
            target_currency: target_currency.into(),
        }
    }

    /// Extract the target rate from a response body.
    fn parse_rate(&self, body: &str) -> Result<f64, MarketDataError> {
        let response: LatestRatesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse rates response: {}", e),
            })?;

        if response.result.as_deref() == Some("error") {
            return Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: response
                    .error_type
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        match response.rates.get(&self.target_currency) {
            Some(rate) if rate.is_finite() && *rate > 0.0 => Ok(*rate),
            Some(rate) => Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Invalid {} rate: {}", self.target_currency, rate),
            }),
            None => Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("No {} rate in response", self.target_currency),
            }),
        }
    }
}

impl Default for ErApiRateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_URL, DEFAULT_TARGET_CURRENCY)
    }
}

#[async_trait]
impl RateSource for ErApiRateProvider {
    async fn lookup_rate(&self) -> Result<f64, MarketDataError> {
        debug!("er-api request: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, &e))?;

        self.parse_rate(&body)
    }
}
