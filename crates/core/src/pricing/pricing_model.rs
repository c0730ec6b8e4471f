use serde::Serialize;
use tolawatch_market_data::FetchDiagnostics;

use crate::history::HistoryEntry;

/// Per-run switches for a price cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleOptions {
    /// Fetch and format only; nothing is persisted or sent.
    pub dry_run: bool,
}

/// What happened to the notification step of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationOutcome {
    Delivered,
    Failed,
    /// No notifier configured.
    Disabled,
    /// Dry run.
    Skipped,
}

/// Result of one successful price cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub entry: HistoryEntry,
    pub message: String,
    /// Number of history entries after the append, `None` on a dry run.
    pub history_len: Option<usize>,
    pub notification: NotificationOutcome,
    pub diagnostics: FetchDiagnostics,
}
