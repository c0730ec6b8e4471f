//! Snapshot data validation.
//!
//! Validates a normalized snapshot before it reaches history or notification:
//! - Finite, non-negative prices and rate (hard)
//! - Derived tola prices and ratio well formed (hard)
//! - Sanity ceiling on prices, zero prices, fallback rate, ratio below one (soft)

use log::warn;

use crate::converter::convert;
use crate::errors::MarketDataError;
use crate::models::PriceSnapshot;

/// Validation severity levels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationSeverity {
    /// Hard failure - reject the snapshot.
    Hard,
    /// Soft warning - accept the snapshot but log a warning.
    Soft,
}

/// Validation result details.
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: ValidationSeverity,
    /// Description of the issue.
    pub message: String,
}

/// Snapshot validator configuration.
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    /// Prices above this value (in the target currency) produce a warning.
    pub max_price: Option<f64>,
    /// Whether to warn when the fallback exchange rate was used.
    pub warn_on_fallback_rate: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_price: Some(1.0e12),
            warn_on_fallback_rate: true,
        }
    }
}

/// Snapshot validator.
pub struct SnapshotValidator {
    config: ValidatorConfig,
}

impl SnapshotValidator {
    /// Create a new validator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
        }
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate a snapshot.
    ///
    /// Returns Ok(()) if the snapshot can be persisted, or Err with every hard
    /// issue joined. Soft issues are logged.
    pub fn validate(&self, snapshot: &PriceSnapshot) -> Result<(), MarketDataError> {
        let issues = self.issues(snapshot);

        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Hard)
            .map(|i| i.message.as_str())
            .collect();

        if !errors.is_empty() {
            return Err(MarketDataError::ValidationFailed {
                message: errors.join("; "),
            });
        }

        for issue in issues.iter().filter(|i| i.severity == ValidationSeverity::Soft) {
            warn!("Snapshot validation warning: {}", issue.message);
        }

        Ok(())
    }

    /// Collect every issue found in a snapshot.
    pub fn issues(&self, snapshot: &PriceSnapshot) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        self.validate_price("gold_per_gram", snapshot.gold_per_gram(), &mut issues);
        self.validate_price("silver_per_kg", snapshot.silver_per_kg(), &mut issues);
        self.validate_rate(snapshot, &mut issues);

        // Only meaningful once both inputs are usable.
        if issues.iter().all(|i| i.severity == ValidationSeverity::Soft) {
            self.validate_converted(snapshot, &mut issues);
        }

        issues
    }

    fn validate_price(&self, field: &str, value: f64, issues: &mut Vec<ValidationIssue>) {
        if !value.is_finite() {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Hard,
                message: format!("{} is not finite: {}", field, value),
            });
            return;
        }

        if value < 0.0 {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Hard,
                message: format!("Negative {}: {}", field, value),
            });
        } else if value == 0.0 {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Soft,
                message: format!("{} is zero", field),
            });
        }

        if let Some(max_price) = self.config.max_price {
            if value > max_price {
                issues.push(ValidationIssue {
                    severity: ValidationSeverity::Soft,
                    message: format!(
                        "{} ({}) exceeds max threshold ({})",
                        field, value, max_price
                    ),
                });
            }
        }
    }

    fn validate_rate(&self, snapshot: &PriceSnapshot, issues: &mut Vec<ValidationIssue>) {
        let rate = snapshot.exchange_rate();
        if !rate.value.is_finite() || rate.value <= 0.0 {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Hard,
                message: format!("Invalid exchange rate: {}", rate.value),
            });
        } else if rate.is_fallback && self.config.warn_on_fallback_rate {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Soft,
                message: format!("Using fallback exchange rate {}", rate.value),
            });
        }
    }

    fn validate_converted(&self, snapshot: &PriceSnapshot, issues: &mut Vec<ValidationIssue>) {
        let converted = convert(snapshot.gold_per_gram(), snapshot.silver_per_kg());
        if !converted.is_well_formed() {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Hard,
                message: format!("Derived ratio is not usable: {}", converted.ratio),
            });
        } else if converted.ratio < 1.0 {
            issues.push(ValidationIssue {
                severity: ValidationSeverity::Soft,
                message: format!("Gold/silver ratio below one: {}", converted.ratio),
            });
        }
    }
}

impl Default for SnapshotValidator {
    fn default() -> Self {
        Self::new()
    }
}
