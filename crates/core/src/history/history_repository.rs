//! JSON-file history store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

use crate::errors::{HistoryError, Result};
use crate::history::history_model::HistoryEntry;
use crate::history::history_traits::HistoryRepositoryTrait;

/// History kept as one JSON array in a file.
///
/// Appends rewrite the file through a temporary sibling and a rename, so a
/// crash mid-write leaves the previous history intact. A file that does not
/// parse is reported, never overwritten.
pub struct JsonHistoryRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> std::result::Result<Vec<HistoryEntry>, HistoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| HistoryError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn write_entries(&self, entries: &[HistoryEntry]) -> std::result::Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl HistoryRepositoryTrait for JsonHistoryRepository {
    fn load_entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.read_entries()?)
    }

    fn latest_entry(&self) -> Result<Option<HistoryEntry>> {
        Ok(self.read_entries()?.pop())
    }

    fn append_entry(&self, entry: HistoryEntry) -> Result<usize> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = self.read_entries()?;
        entries.push(entry);
        self.write_entries(&entries)?;

        debug!(
            "Appended history entry to {} ({} entries)",
            self.path.display(),
            entries.len()
        );
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::tempdir;
    use tolawatch_market_data::convert;

    fn entry(hours: i64, gold_per_gram: f64) -> HistoryEntry {
        HistoryEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
                + Duration::hours(hours),
            prices: convert(gold_per_gram, 280_000.0),
            currency: Some("PKR".to_string()),
            exchange_rate: Some(280.0),
            rate_is_fallback: false,
            source: Some("goldapi.io".to_string()),
        }
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let tmp = tempdir().unwrap();
        let repo = JsonHistoryRepository::new(tmp.path().join("history.json"));
        assert!(repo.load_entries().unwrap().is_empty());
        assert!(repo.latest_entry().unwrap().is_none());
    }

    #[test]
    fn test_append_creates_parent_dirs_and_grows() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data").join("history.json");
        let repo = JsonHistoryRepository::new(&path);

        assert_eq!(repo.append_entry(entry(0, 25_000.0)).unwrap(), 1);
        assert_eq!(repo.append_entry(entry(1, 25_100.0)).unwrap(), 2);

        assert!(path.exists());
        let entries = repo.load_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].prices.gold.per_gram, 25_100.0);
        assert_eq!(repo.latest_entry().unwrap().unwrap(), entries[1]);
    }

    #[test]
    fn test_recent_entries() {
        let tmp = tempdir().unwrap();
        let repo = JsonHistoryRepository::new(tmp.path().join("history.json"));
        for h in 0..5 {
            repo.append_entry(entry(h, 25_000.0 + h as f64)).unwrap();
        }

        let recent = repo.recent_entries(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].prices.gold.per_gram, 25_003.0);
        assert_eq!(recent[1].prices.gold.per_gram, 25_004.0);
        assert_eq!(repo.recent_entries(50).unwrap().len(), 5);
    }

    #[test]
    fn test_corrupt_file_is_not_overwritten() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("history.json");
        fs::write(&path, "{ not an array").unwrap();
        let repo = JsonHistoryRepository::new(&path);

        let err = repo.append_entry(entry(0, 25_000.0)).unwrap_err();
        assert!(matches!(err, Error::History(HistoryError::Corrupt { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not an array");
    }

    #[test]
    fn test_blank_file_is_empty_history() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("history.json");
        fs::write(&path, "\n").unwrap();
        let repo = JsonHistoryRepository::new(&path);

        assert_eq!(repo.append_entry(entry(0, 25_000.0)).unwrap(), 1);
    }
}
