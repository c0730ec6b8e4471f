//! Core error types for tolawatch.

use std::path::PathBuf;

use thiserror::Error;
use tolawatch_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for a price cycle.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("History store error: {0}")]
    History(#[from] HistoryError),
}

/// Errors raised by the history store.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("History file {path} is not a valid history array: {message}")]
    Corrupt { path: PathBuf, message: String },

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Whether the cycle failed because no usable credential exists or all
    /// of them failed.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            Error::MarketData(
                MarketDataError::NoCredentials | MarketDataError::AllCredentialsExhausted { .. }
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failure_detection() {
        assert!(Error::from(MarketDataError::NoCredentials).is_credential_failure());
        assert!(
            Error::from(MarketDataError::AllCredentialsExhausted { attempts: 2 })
                .is_credential_failure()
        );
        assert!(!Error::from(MarketDataError::ValidationFailed {
            message: "NaN".to_string()
        })
        .is_credential_failure());
    }

    #[test]
    fn test_error_display_wraps_market_data() {
        let err = Error::from(MarketDataError::NoCredentials);
        assert_eq!(
            err.to_string(),
            "Market data operation failed: No API credentials configured"
        );
    }
}
