//! Heuristic readability estimate.
//!
//! The score grows with average word length above 3 characters and average
//! sentence length above 10 words. Each factor is capped at 5 and the sum is
//! rounded to one decimal and clamped to `0.0..=10.0`.

use serde::{Deserialize, Serialize};

/// Lowest possible score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible score.
pub const MAX_SCORE: f64 = 10.0;

const FACTOR_CAP: f64 = 5.0;

/// Display bucket for a readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityLevel {
    /// Score up to 3.
    Easy,
    /// Score above 3 and up to 6.
    Moderate,
    /// Score above 6.
    Complex,
}

impl ReadabilityLevel {
    /// Buckets a score.
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            ReadabilityLevel::Easy
        } else if score <= 6.0 {
            ReadabilityLevel::Moderate
        } else {
            ReadabilityLevel::Complex
        }
    }

    /// Returns the display text for this level.
    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityLevel::Easy => "Easy to read",
            ReadabilityLevel::Moderate => "Moderate",
            ReadabilityLevel::Complex => "Complex",
        }
    }
}

/// Computes the readability score from unrounded averages.
pub fn readability_score(avg_word_length: f64, avg_sentence_length: f64) -> f64 {
    let word_factor = ((avg_word_length - 3.0) * 2.0).min(FACTOR_CAP);
    let sentence_factor = ((avg_sentence_length - 10.0) * 0.3).min(FACTOR_CAP);
    let rounded = ((word_factor + sentence_factor) * 10.0).round() / 10.0;
    rounded.clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_and_sentences_score_zero() {
        assert_eq!(readability_score(3.0, 10.0), 0.0);
        assert_eq!(readability_score(2.0, 4.0), 0.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // word factor 1.5, sentence factor 0.36
        assert_eq!(readability_score(3.75, 11.2), 1.9);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(readability_score(50.0, 500.0), MAX_SCORE);
        assert_eq!(readability_score(0.0, 0.0), MIN_SCORE);
        assert_eq!(readability_score(f64::MAX, f64::MAX), MAX_SCORE);
    }

    #[test]
    fn test_each_factor_is_capped() {
        // word factor capped at 5, sentence factor 0
        assert_eq!(readability_score(100.0, 10.0), 5.0);
    }

    #[test]
    fn test_levels() {
        assert_eq!(ReadabilityLevel::from_score(0.0), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(3.0), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(3.1), ReadabilityLevel::Moderate);
        assert_eq!(ReadabilityLevel::from_score(6.0), ReadabilityLevel::Moderate);
        assert_eq!(ReadabilityLevel::from_score(6.1), ReadabilityLevel::Complex);
        assert_eq!(ReadabilityLevel::Easy.label(), "Easy to read");
    }
}
