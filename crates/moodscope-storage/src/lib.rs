//! Moodscope Storage - SQLite persistence for the analysis history.
//!
//! Stores the trimmed summaries produced by
//! [`HistoryEntry::from_result`](moodscope_core::HistoryEntry::from_result)
//! and keeps only the newest entries (10 by default).
//!
//! # Example
//!
//! ```no_run
//! use moodscope_core::analyze;
//! use moodscope_storage::Database;
//!
//! let db = Database::in_memory().unwrap();
//! db.record_result(&analyze("What a wonderful day")).unwrap();
//!
//! for record in db.recent_records(10).unwrap() {
//!     println!("{} {:?}", record.preview, record.sentiment);
//! }
//! ```

mod database;
pub mod error;
pub mod models;
mod pool;
pub mod repository;
mod schema;

pub use database::Database;
pub use error::{Result, StorageError};
pub use models::HistoryRecord;
pub use pool::ConnectionPool;
pub use schema::SCHEMA_VERSION;
