//! Data models for storage.

use chrono::{DateTime, Utc};
use moodscope_core::{HistoryEntry, Sentiment};
use serde::{Deserialize, Serialize};

/// A stored history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier, increasing with insertion order.
    pub id: i64,
    /// Truncated preview of the analyzed text.
    pub preview: String,
    /// Sentiment label.
    pub sentiment: Sentiment,
    /// Confidence score (0.0 to 1.0).
    pub confidence: f64,
    /// When the analysis ran.
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Drops the storage id.
    pub fn into_entry(self) -> HistoryEntry {
        HistoryEntry {
            preview: self.preview,
            sentiment: self.sentiment,
            confidence: self.confidence,
            timestamp: self.created_at,
        }
    }
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(record: HistoryRecord) -> Self {
        record.into_entry()
    }
}
