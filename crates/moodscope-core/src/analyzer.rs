//! The text analyzer: tokenize, score, measure.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::lexicon::{Lexicon, Result};
use crate::scorer::{self, Sentiment};
use crate::sentence::split_sentences;
use crate::stats::TextStats;
use crate::tokenizer::Tokenizer;

/// Result of analyzing one piece of text. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sentiment label.
    pub sentiment: Sentiment,
    /// Certainty of the label (0.0 to 1.0).
    pub confidence: f64,
    /// Positive lexicon hits.
    pub positive_hits: usize,
    /// Negative lexicon hits.
    pub negative_hits: usize,
    /// Descriptive statistics and readability.
    pub stats: TextStats,
    /// The input, unmodified.
    pub source_text: String,
    /// When the analysis ran.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Canonical result for empty or absent input.
    pub fn empty() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            positive_hits: 0,
            negative_hits: 0,
            stats: TextStats::default(),
            source_text: String::new(),
            timestamp: Utc::now(),
        }
    }

    /// Confidence as a whole percentage (0 to 100).
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Lexicon-based sentiment and readability analyzer.
///
/// Holds only immutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    lexicon: Arc<Lexicon>,
    tokenizer: Tokenizer,
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    /// Creates an analyzer, loading `config.lexicon_path` if set.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let lexicon = match config.lexicon_path {
            Some(ref path) => Lexicon::from_path(path)?,
            None => Lexicon::builtin().clone(),
        };
        Self::with_lexicon(lexicon, config)
    }

    /// Creates an analyzer over an explicit lexicon. `config.lexicon_path`
    /// is ignored.
    pub fn with_lexicon(lexicon: Lexicon, config: AnalyzerConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&lexicon, config.emoji_aware)?;
        Ok(Self {
            lexicon: Arc::new(lexicon),
            tokenizer,
            config,
        })
    }

    /// Creates an analyzer with the built-in lexicon and default configuration.
    pub fn with_defaults() -> Self {
        Self::with_lexicon(Lexicon::builtin().clone(), AnalyzerConfig::default())
            .expect("built-in lexicon compiles")
    }

    /// Analyzes text. Empty or absent input yields [`AnalysisResult::empty`].
    pub fn analyze<'a>(&self, text: impl Into<Option<&'a str>>) -> AnalysisResult {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return AnalysisResult::empty(),
        };

        let start = Instant::now();
        let tokens = self.tokenizer.tokenize(text);
        let sentences = split_sentences(text);
        let score = scorer::score(&tokens, &self.lexicon, self.config.tie_policy);
        let stats = TextStats::compute(text, &tokens, &sentences);

        debug!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            positive_hits = score.positive_hits,
            negative_hits = score.negative_hits,
            sentiment = score.sentiment.as_str(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Analyzed text"
        );

        AnalysisResult {
            sentiment: score.sentiment,
            confidence: score.confidence,
            positive_hits: score.positive_hits,
            negative_hits: score.negative_hits,
            stats,
            source_text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Returns the active lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
