//! Key registry module.
//!
//! This module provides orchestration of the price provider over the
//! credential pool, including:
//! - Shuffled, one-pass key rotation with early exit on success
//! - Per-key attempt diagnostics
//! - Snapshot data validation

mod diagnostics;
mod rotation;
mod validator;

pub use diagnostics::{FailureKind, FetchDiagnostics, KeyAttempt};
pub use rotation::{KeyRotator, QuotePair};
pub use validator::{SnapshotValidator, ValidationIssue, ValidationSeverity, ValidatorConfig};
