//! Per-credential attempt tracking for rotation diagnostics.

use crate::errors::MarketDataError;

/// Why a credential trial failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// Network failure or timeout.
    Transport,
    /// The API reported the key's quota as exhausted.
    QuotaExceeded,
    /// The API reported another logical error.
    Api,
    /// The API answered with something unreadable.
    InvalidResponse,
}

impl From<&MarketDataError> for FailureKind {
    fn from(error: &MarketDataError) -> Self {
        match error {
            MarketDataError::Transport { .. } | MarketDataError::Timeout { .. } => Self::Transport,
            e if e.is_quota_error() => Self::QuotaExceeded,
            MarketDataError::Api { .. } => Self::Api,
            _ => Self::InvalidResponse,
        }
    }
}

/// Record of a single credential trial during a fetch cycle.
#[derive(Clone, Debug)]
pub struct KeyAttempt {
    /// Masked credential
    pub key: String,
    pub failure: Option<FailureKind>,
    pub error: Option<String>,
    pub success: bool,
}

/// Trial-by-trial record of one fetch cycle.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<KeyAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record_error(&mut self, key: String, error: &MarketDataError) {
        self.attempts.push(KeyAttempt {
            key,
            failure: Some(FailureKind::from(error)),
            error: Some(error.to_string()),
            success: false,
        });
    }

    pub fn record_success(&mut self, key: String) {
        self.attempts.push(KeyAttempt {
            key,
            failure: None,
            error: None,
            success: true,
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        if self.attempts.is_empty() {
            return "no credentials tried".to_string();
        }
        self.attempts
            .iter()
            .map(|a| {
                if a.success {
                    format!("{}: SUCCESS", a.key)
                } else if let Some(kind) = &a.failure {
                    format!("{}: FAILED ({:?})", a.key, kind)
                } else {
                    format!("{}: UNKNOWN", a.key)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Check if any credential succeeded.
    pub fn has_success(&self) -> bool {
        self.attempts.iter().any(|a| a.success)
    }

    /// Number of trials that ended in quota exhaustion.
    pub fn quota_failures(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.failure == Some(FailureKind::QuotaExceeded))
            .count()
    }

    /// Get all errors.
    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_ref().map(|e| (a.key.as_str(), e.as_str())))
            .collect()
    }
}
