use crate::errors::Result;
use crate::history::history_model::HistoryEntry;

/// Append-only store of price readings.
///
/// The store owns retention; the JSON implementation keeps every entry.
pub trait HistoryRepositoryTrait: Send + Sync {
    fn load_entries(&self) -> Result<Vec<HistoryEntry>>;
    fn latest_entry(&self) -> Result<Option<HistoryEntry>>;
    /// Append one entry and return the new number of entries.
    fn append_entry(&self, entry: HistoryEntry) -> Result<usize>;

    /// The last `limit` entries, oldest first.
    fn recent_entries(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.load_entries()?;
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }
}
