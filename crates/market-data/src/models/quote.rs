use serde::{Deserialize, Serialize};

use crate::errors::{ApiErrorKind, MarketDataError};

/// Price API response for one metal in one currency.
///
/// A response may carry `error` even though the HTTP exchange succeeded;
/// that is a logical failure of the credential, not of the transport.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    /// Price per troy ounce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Price per gram of 24k metal, preferred when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_gram_24k: Option<f64>,

    /// Logical API error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Unix timestamp of the quote, when the API reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl RawQuote {
    /// Quote carrying only a per-ounce price.
    pub fn per_ounce(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Quote carrying a per-gram 24k price.
    pub fn per_gram(price_gram_24k: f64) -> Self {
        Self {
            price_gram_24k: Some(price_gram_24k),
            ..Self::default()
        }
    }

    /// Quote carrying only a logical error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Classified logical error carried by this quote, if any.
    pub fn api_error(&self) -> Option<(ApiErrorKind, &str)> {
        self.error
            .as_deref()
            .map(|message| (ApiErrorKind::classify(message), message))
    }

    /// True iff the quote's error message reports quota exhaustion.
    pub fn is_quota_error(&self) -> bool {
        matches!(self.api_error(), Some((ApiErrorKind::QuotaExceeded, _)))
    }

    /// Turn a logical error into a [`MarketDataError::Api`].
    pub fn check(self, provider: &str) -> Result<Self, MarketDataError> {
        match self.api_error() {
            Some((kind, message)) => Err(MarketDataError::Api {
                provider: provider.to_string(),
                kind,
                message: message.to_string(),
            }),
            None => Ok(self),
        }
    }
}
