//! API request and response models.

use chrono::{DateTime, Utc};
use moodscope_core::history::DEFAULT_CAPACITY;
use moodscope_core::Sentiment;
use moodscope_storage::HistoryRecord;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to analyze.
    #[serde(default)]
    pub text: String,
}

/// Query parameters for GET /api/history.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of entries to return (default: 10).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_CAPACITY
}

/// History entry in the response.
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub preview: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<HistoryRecord> for HistoryEntryResponse {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: record.id,
            preview: record.preview,
            sentiment: record.sentiment,
            confidence: record.confidence,
            timestamp: record.created_at,
        }
    }
}

/// Response body for GET /api/history.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Entries, most recent first.
    pub entries: Vec<HistoryEntryResponse>,
    /// Total entries stored.
    pub total: i64,
}

/// Response body for DELETE /api/history.
#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    /// Number of entries removed.
    pub cleared: i64,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
