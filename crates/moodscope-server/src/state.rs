//! Application state for the API server.

use std::sync::Arc;

use moodscope_core::TextAnalyzer;
use moodscope_storage::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// History database.
    pub db: Arc<Database>,
    /// Text analyzer (immutable, shared across requests).
    pub analyzer: Arc<TextAnalyzer>,
}

impl AppState {
    /// Creates application state with the default analyzer.
    pub fn new(db: Database) -> Self {
        Self::with_analyzer(db, TextAnalyzer::default())
    }

    /// Creates application state with a configured analyzer.
    pub fn with_analyzer(db: Database, analyzer: TextAnalyzer) -> Self {
        Self {
            db: Arc::new(db),
            analyzer: Arc::new(analyzer),
        }
    }

    /// Creates application state with default in-memory database.
    pub fn in_memory() -> Self {
        Self::new(Database::in_memory().expect("Failed to create in-memory database"))
    }
}
