//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`ApiErrorKind`]: Structured classification of logical API errors
//! - [`RetryClass`]: Classification for determining rotation behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Kind of a logical error reported by the price API in a response body.
///
/// The API reports these with a successful transport, so they are classified
/// once when the response is read instead of being string-matched downstream.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApiErrorKind {
    /// The credential's request allotment for the billing period is used up.
    QuotaExceeded,
    /// The credential was rejected by the API.
    InvalidKey,
    /// Any other error message.
    Other,
}

impl ApiErrorKind {
    /// Classify an error message returned by the price API.
    pub fn classify(message: &str) -> Self {
        if message.contains("quota exceeded") {
            Self::QuotaExceeded
        } else if message.to_ascii_lowercase().contains("invalid api key") {
            Self::InvalidKey
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded => write!(f, "quota exceeded"),
            Self::InvalidKey => write!(f, "invalid key"),
            Self::Other => write!(f, "api error"),
        }
    }
}

/// Errors that can occur during market data operations.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method, which determines whether the key rotation moves on to the next credential.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A request could not be completed (connection refused, DNS, TLS...).
    /// Recovered by trying the next credential.
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider the request was sent to
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// The request exceeded its time budget.
    /// Recovered by trying the next credential.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The API answered but reported an error in the body (e.g. quota exhausted).
    /// Recovered by trying the next credential.
    #[error("API error ({kind}): {provider} - {message}")]
    Api {
        /// The provider that reported the error
        provider: String,
        /// Structured kind of the error
        kind: ApiErrorKind,
        /// The error message from the provider
        message: String,
    },

    /// The API answered with something that could not be interpreted.
    /// Recovered by trying the next credential.
    #[error("Invalid response: {provider} - {message}")]
    InvalidResponse {
        /// The provider that returned the response
        provider: String,
        /// Description of what was wrong
        message: String,
    },

    /// No usable credential is configured.
    /// Terminal - the cycle is aborted without issuing any request.
    #[error("No API credentials configured")]
    NoCredentials,

    /// Every credential was tried once and all of them failed.
    /// Terminal for this cycle.
    #[error("All {attempts} API credentials failed")]
    AllCredentialsExhausted {
        /// Number of credentials tried
        attempts: usize,
    },

    /// Data validation failed.
    /// The snapshot contains values that must not be persisted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::NextCredential`]: Move on to the next credential
    /// - [`RetryClass::Never`]: The cycle ends with this error
    ///
    /// # Examples
    ///
    /// ```
    /// use tolawatch_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::Timeout { provider: "GOLD_API".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::NextCredential);
    ///
    /// let error = MarketDataError::NoCredentials;
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Transport { .. }
            | Self::Timeout { .. }
            | Self::Api { .. }
            | Self::InvalidResponse { .. } => RetryClass::NextCredential,

            Self::NoCredentials
            | Self::AllCredentialsExhausted { .. }
            | Self::ValidationFailed { .. } => RetryClass::Never,
        }
    }

    /// Whether this is a logical quota-exhaustion error.
    pub fn is_quota_error(&self) -> bool {
        matches!(
            self,
            Self::Api {
                kind: ApiErrorKind::QuotaExceeded,
                ..
            }
        )
    }

    /// Whether this error happened before the API produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// Map a reqwest error into a transport-level error for the given provider.
    pub fn from_transport(provider: &str, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Transport {
                provider: provider.to_string(),
                message: error.to_string(),
            }
        }
    }
}
