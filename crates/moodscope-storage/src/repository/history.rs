//! History repository.

use chrono::{DateTime, SecondsFormat, Utc};
use moodscope_core::history::create_preview;
use moodscope_core::{HistoryEntry, Sentiment};
use rusqlite::{params, Connection, Row};

use crate::error::Result;
use crate::models::HistoryRecord;

/// Repository for history operations.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Insert a new entry.
    ///
    /// The preview is re-truncated so rows never exceed the preview length,
    /// whoever built the entry.
    pub fn insert(conn: &Connection, entry: &HistoryEntry) -> Result<i64> {
        conn.execute(
            "INSERT INTO history (preview, sentiment, confidence, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                create_preview(&entry.preview),
                entry.sentiment.as_str(),
                entry.confidence,
                entry.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Get recent entries, newest first.
    pub fn get_recent(conn: &Connection, limit: i64) -> Result<Vec<HistoryRecord>> {
        let mut stmt = conn.prepare(
            "SELECT id, preview, sentiment, confidence, created_at
             FROM history ORDER BY id DESC LIMIT ?1",
        )?;

        let records = stmt
            .query_map([limit], map_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Count stored entries.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete everything but the newest `keep` entries.
    pub fn trim(conn: &Connection, keep: i64) -> Result<i64> {
        let deleted = conn.execute(
            "DELETE FROM history WHERE id NOT IN (
                SELECT id FROM history ORDER BY id DESC LIMIT ?1
            )",
            [keep],
        )?;
        Ok(deleted as i64)
    }

    /// Delete all entries.
    pub fn clear(conn: &Connection) -> Result<i64> {
        let deleted = conn.execute("DELETE FROM history", [])?;
        Ok(deleted as i64)
    }
}

fn map_record(row: &Row<'_>) -> rusqlite::Result<HistoryRecord> {
    Ok(HistoryRecord {
        id: row.get(0)?,
        preview: row.get(1)?,
        sentiment: row
            .get::<_, String>(2)
            .ok()
            .and_then(|s| Sentiment::parse(&s))
            .unwrap_or(Sentiment::Neutral),
        confidence: row.get(3)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

/// Parse a datetime from storage format.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.and_utc())
        })
        .unwrap_or_else(|_| Utc::now())
}
