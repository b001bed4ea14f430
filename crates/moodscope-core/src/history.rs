//! Recent-results history.
//!
//! The analyzer never writes history itself. Callers turn an
//! [`AnalysisResult`] into a [`HistoryEntry`] and hand it to a
//! [`HistoryStore`], which keeps the most recent entries first and drops the
//! oldest once its capacity is reached. [`HistoryLog`] is the in-memory store;
//! `moodscope-storage` provides a SQLite-backed one.

use std::collections::VecDeque;
use std::convert::Infallible;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisResult;
use crate::scorer::Sentiment;

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// Maximum preview length in characters.
pub const PREVIEW_MAX_LEN: usize = 50;

/// Trimmed summary of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// First 50 characters of the text, with `...` appended if longer.
    pub preview: String,
    /// Sentiment label.
    pub sentiment: Sentiment,
    /// Certainty of the label (0.0 to 1.0).
    pub confidence: f64,
    /// When the analysis ran.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Summarizes an analysis result.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            preview: create_preview(&result.source_text),
            sentiment: result.sentiment,
            confidence: result.confidence,
            timestamp: result.timestamp,
        }
    }
}

impl From<&AnalysisResult> for HistoryEntry {
    fn from(result: &AnalysisResult) -> Self {
        Self::from_result(result)
    }
}

/// Creates a preview from text: trimmed, control characters (line breaks,
/// tabs) shown as spaces, truncated to [`PREVIEW_MAX_LEN`] characters.
pub fn create_preview(text: &str) -> String {
    let chars: Vec<char> = text
        .trim()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if chars.len() > PREVIEW_MAX_LEN {
        let mut preview: String = chars[..PREVIEW_MAX_LEN].iter().collect();
        preview.push_str("...");
        preview
    } else {
        chars.into_iter().collect()
    }
}

/// A capped, most-recent-first log of history entries.
pub trait HistoryStore {
    /// Error produced by the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Records an entry, evicting the oldest entries beyond capacity.
    fn record(&mut self, entry: HistoryEntry) -> Result<(), Self::Error>;

    /// Returns up to `limit` entries, most recent first.
    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, Self::Error>;

    /// Removes every entry and returns how many were removed.
    fn clear(&mut self) -> Result<usize, Self::Error>;

    /// Maximum number of entries kept.
    fn capacity(&self) -> usize;
}

/// In-memory history store.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log holding at most `capacity` entries (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Summarizes and records an analysis result.
    pub fn push_result(&mut self, result: &AnalysisResult) {
        self.push(HistoryEntry::from_result(result));
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryStore for HistoryLog {
    type Error = Infallible;

    fn record(&mut self, entry: HistoryEntry) -> Result<(), Self::Error> {
        self.push(entry);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, Self::Error> {
        Ok(self.entries.iter().take(limit).cloned().collect())
    }

    fn clear(&mut self) -> Result<usize, Self::Error> {
        let removed = self.entries.len();
        self.entries.clear();
        Ok(removed)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
