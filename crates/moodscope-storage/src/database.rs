//! High-level database interface.

use std::path::PathBuf;

use directories::ProjectDirs;
use moodscope_core::history::DEFAULT_CAPACITY;
use moodscope_core::{AnalysisResult, HistoryEntry, HistoryStore};
use tracing::{debug, info};

use crate::error::{Result, StorageError};
use crate::models::HistoryRecord;
use crate::pool::ConnectionPool;
use crate::repository::HistoryRepo;

/// SQLite-backed, capped analysis history.
#[derive(Clone)]
pub struct Database {
    pool: ConnectionPool,
    capacity: usize,
}

impl Database {
    /// Create a new database in the default app data directory.
    pub fn new() -> Result<Self> {
        Self::with_path(Self::default_db_path()?)
    }

    /// Create a new database at a specific path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening database at: {:?}", path);
        let pool = ConnectionPool::new(&path)?;

        Ok(Self {
            pool,
            capacity: DEFAULT_CAPACITY,
        })
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> Result<Self> {
        let pool = ConnectionPool::in_memory()?;
        Ok(Self {
            pool,
            capacity: DEFAULT_CAPACITY,
        })
    }

    /// Sets how many entries are kept (at least 1).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Get the default database path.
    pub fn default_db_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "moodscope", "moodscope")
            .ok_or_else(|| StorageError::Config("Could not determine app data directory".into()))?;

        Ok(proj_dirs.data_dir().join("moodscope.db"))
    }

    /// Records a history entry and trims the log to capacity.
    pub fn record_entry(&self, entry: &HistoryEntry) -> Result<i64> {
        let conn = self.pool.get()?;

        let id = HistoryRepo::insert(&conn, entry)?;
        let evicted = HistoryRepo::trim(&conn, self.capacity as i64)?;
        if evicted > 0 {
            debug!(evicted, "Trimmed history to {} entries", self.capacity);
        }

        Ok(id)
    }

    /// Summarizes and records an analysis result.
    pub fn record_result(&self, result: &AnalysisResult) -> Result<i64> {
        self.record_entry(&HistoryEntry::from_result(result))
    }

    /// Get up to `limit` records, newest first.
    pub fn recent_records(&self, limit: usize) -> Result<Vec<HistoryRecord>> {
        let conn = self.pool.get()?;
        HistoryRepo::get_recent(&conn, limit.min(i64::MAX as usize) as i64)
    }

    /// Count stored entries.
    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        HistoryRepo::count(&conn)
    }

    /// Delete all entries.
    pub fn clear_history(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        HistoryRepo::clear(&conn)
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl HistoryStore for Database {
    type Error = StorageError;

    fn record(&mut self, entry: HistoryEntry) -> Result<()> {
        self.record_entry(&entry).map(|_| ())
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        Ok(self
            .recent_records(limit)?
            .into_iter()
            .map(HistoryRecord::into_entry)
            .collect())
    }

    fn clear(&mut self) -> Result<usize> {
        self.clear_history().map(|n| n as usize)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodscope_core::{analyze, Sentiment};

    #[test]
    fn test_record_and_read_back() {
        let db = Database::in_memory().unwrap();

        db.record_result(&analyze("I love this, it is great and wonderful"))
            .unwrap();
        db.record_result(&analyze("This is bad and terrible")).unwrap();

        let records = db.recent_records(10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sentiment, Sentiment::Negative);
        assert_eq!(records[1].sentiment, Sentiment::Positive);
        assert_eq!(records[1].preview, "I love this, it is great and wonderful");
    }

    #[test]
    fn test_capped_at_capacity() {
        let db = Database::in_memory().unwrap();
        for i in 0..(DEFAULT_CAPACITY + 5) {
            db.record_result(&analyze(format!("note number {i}").as_str()))
                .unwrap();
        }

        assert_eq!(db.count().unwrap(), DEFAULT_CAPACITY as i64);
        let newest = &db.recent_records(1).unwrap()[0];
        assert_eq!(newest.preview, format!("note number {}", DEFAULT_CAPACITY + 4));
    }

    #[test]
    fn test_custom_capacity() {
        let db = Database::in_memory().unwrap().with_capacity(3);
        for _ in 0..5 {
            db.record_result(&analyze("good")).unwrap();
        }
        assert_eq!(db.count().unwrap(), 3);
        assert_eq!(db.capacity(), 3);
    }

    #[test]
    fn test_history_store_trait() {
        let mut db = Database::in_memory().unwrap();
        let store: &mut dyn HistoryStore<Error = StorageError> = &mut db;

        store
            .record(HistoryEntry::from_result(&analyze("what a success")))
            .unwrap();
        let recent = store.recent(5).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].sentiment, Sentiment::Positive);

        assert_eq!(store.clear().unwrap(), 1);
        assert!(store.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_file_backed_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.db");

        {
            let db = Database::with_path(&path).unwrap();
            db.record_result(&analyze("persist me, it is wonderful"))
                .unwrap();
        }

        let db = Database::with_path(&path).unwrap();
        let records = db.recent_records(10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].preview, "persist me, it is wonderful");
    }
}
