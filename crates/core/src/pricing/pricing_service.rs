use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use tolawatch_market_data::{ConvertedPrices, SnapshotAssembler, SnapshotValidator};

use super::pricing_model::{CycleOptions, CycleReport, NotificationOutcome};
use super::pricing_traits::PriceCycleServiceTrait;
use crate::errors::Result;
use crate::history::{HistoryEntry, HistoryRepositoryTrait};
use crate::notify::{format_price_message, NotifierTrait};

/// Runs price cycles against the assembler, history store and notifier.
///
/// A cycle that fails before the append leaves history and the notifier
/// untouched. A failed notification is reported, not raised.
pub struct PriceCycleService {
    assembler: SnapshotAssembler,
    validator: SnapshotValidator,
    history: Arc<dyn HistoryRepositoryTrait>,
    notifier: Option<Arc<dyn NotifierTrait>>,
}

impl PriceCycleService {
    pub fn new(
        assembler: SnapshotAssembler,
        validator: SnapshotValidator,
        history: Arc<dyn HistoryRepositoryTrait>,
        notifier: Option<Arc<dyn NotifierTrait>>,
    ) -> Self {
        Self {
            assembler,
            validator,
            history,
            notifier,
        }
    }

    pub fn assembler(&self) -> &SnapshotAssembler {
        &self.assembler
    }

    async fn notify(&self, text: &str) -> NotificationOutcome {
        let Some(notifier) = &self.notifier else {
            debug!("No notifier configured, skipping notification");
            return NotificationOutcome::Disabled;
        };

        if notifier.send(text).await {
            info!("Notification sent via {}", notifier.name());
            NotificationOutcome::Delivered
        } else {
            warn!("Notification via {} failed", notifier.name());
            NotificationOutcome::Failed
        }
    }
}

#[async_trait]
impl PriceCycleServiceTrait for PriceCycleService {
    async fn run_cycle(&self, options: CycleOptions) -> Result<CycleReport> {
        let (snapshot, diagnostics) = self.assembler.build_with_diagnostics().await;
        info!("Key attempts: {}", diagnostics.summary());
        let snapshot = snapshot?;

        self.validator.validate(&snapshot)?;

        let prices = ConvertedPrices::from(&snapshot);
        let previous = self.history.latest_entry()?;
        let entry = HistoryEntry::from_snapshot(Utc::now(), &snapshot, prices);
        let message = format_price_message(&entry, previous.as_ref());

        if options.dry_run {
            info!("Dry run: history and notification skipped");
            return Ok(CycleReport {
                entry,
                message,
                history_len: None,
                notification: NotificationOutcome::Skipped,
                diagnostics,
            });
        }

        let history_len = self.history.append_entry(entry.clone())?;
        let notification = self.notify(&message).await;

        Ok(CycleReport {
            entry,
            message,
            history_len: Some(history_len),
            notification,
            diagnostics,
        })
    }

    fn recent_history(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        self.history.recent_entries(limit)
    }
}
