use async_trait::async_trait;

use super::pricing_model::{CycleOptions, CycleReport};
use crate::errors::Result;
use crate::history::HistoryEntry;

/// One fetch, validate, convert, persist and notify pass.
#[async_trait]
pub trait PriceCycleServiceTrait: Send + Sync {
    async fn run_cycle(&self, options: CycleOptions) -> Result<CycleReport>;

    fn recent_history(&self, limit: usize) -> Result<Vec<HistoryEntry>>;
}
