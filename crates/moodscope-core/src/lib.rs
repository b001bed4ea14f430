//! Moodscope Core - lexicon-based sentiment and readability analysis.
//!
//! The analyzer maps raw text to an immutable [`AnalysisResult`]: a sentiment
//! label with confidence, descriptive statistics and a readability estimate.
//! It holds no mutable state; the built-in lexicon is loaded once per process.
//!
//! # Example
//!
//! ```
//! use moodscope_core::{analyze, Sentiment};
//!
//! let result = analyze("I love this, it is great and wonderful");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.positive_hits, 3);
//! assert_eq!(result.confidence, 1.0);
//! ```

pub mod analyzer;
pub mod config;
pub mod history;
pub mod lexicon;
pub mod readability;
pub mod scorer;
pub mod sentence;
pub mod stats;
pub mod tokenizer;

use once_cell::sync::Lazy;

pub use analyzer::{AnalysisResult, TextAnalyzer};
pub use config::{AnalyzerConfig, TiePolicy};
pub use history::{HistoryEntry, HistoryLog, HistoryStore};
pub use lexicon::{Lexicon, LexiconError, Polarity};
pub use readability::ReadabilityLevel;
pub use scorer::{Sentiment, SentimentScore};
pub use stats::TextStats;
pub use tokenizer::{Token, TokenKind, Tokenizer};

static DEFAULT_ANALYZER: Lazy<TextAnalyzer> = Lazy::new(TextAnalyzer::with_defaults);

/// Analyzes text with the built-in lexicon and default configuration.
pub fn analyze<'a>(text: impl Into<Option<&'a str>>) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text)
}

/// Returns the shared default analyzer.
pub fn default_analyzer() -> &'static TextAnalyzer {
    &DEFAULT_ANALYZER
}
