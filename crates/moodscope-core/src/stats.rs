//! Descriptive text statistics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::readability::{readability_score, ReadabilityLevel};
use crate::sentence::ratio_sentence_count;
use crate::tokenizer::Token;

/// Descriptive statistics for one analyzed text.
///
/// Every field is zero (and `readability_level` is `None`) when the text has
/// no tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of tokens.
    pub word_count: usize,
    /// Length of the input text in Unicode scalar values.
    pub char_count: usize,
    /// Number of non-empty sentences.
    pub sentence_count: usize,
    /// Number of distinct tokens.
    pub unique_word_count: usize,
    /// Number of emoji tokens.
    pub emoji_count: usize,
    /// Mean token length in characters, two decimals.
    pub avg_word_length: f64,
    /// Unique tokens divided by tokens, two decimals.
    pub vocabulary_diversity: f64,
    /// Tokens per sentence, two decimals.
    pub avg_sentence_length: f64,
    /// Readability score (0.0 to 10.0).
    pub readability_score: f64,
    /// Readability bucket.
    pub readability_level: Option<ReadabilityLevel>,
}

impl TextStats {
    /// Computes statistics from the input text, its tokens and sentences.
    pub fn compute(text: &str, tokens: &[Token], sentences: &[&str]) -> Self {
        if tokens.is_empty() {
            return Self::default();
        }

        let word_count = tokens.len();
        let unique_word_count = tokens
            .iter()
            .map(Token::as_str)
            .collect::<HashSet<_>>()
            .len();
        let emoji_count = tokens.iter().filter(|t| t.is_glyph()).count();
        let total_length: usize = tokens.iter().map(Token::char_len).sum();

        let avg_word_length = total_length as f64 / word_count as f64;
        let avg_sentence_length = word_count as f64 / ratio_sentence_count(sentences) as f64;
        let vocabulary_diversity = unique_word_count as f64 / word_count as f64;
        let readability_score = readability_score(avg_word_length, avg_sentence_length);

        Self {
            word_count,
            char_count: text.chars().count(),
            sentence_count: sentences.len(),
            unique_word_count,
            emoji_count,
            avg_word_length: round2(avg_word_length),
            vocabulary_diversity: round2(vocabulary_diversity),
            avg_sentence_length: round2(avg_sentence_length),
            readability_score,
            readability_level: Some(ReadabilityLevel::from_score(readability_score)),
        }
    }

    /// Returns true if no tokens were found.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::sentence::split_sentences;
    use crate::tokenizer::Tokenizer;

    fn stats(text: &str) -> TextStats {
        let tokens = Tokenizer::new(Lexicon::builtin(), true)
            .unwrap()
            .tokenize(text);
        TextStats::compute(text, &tokens, &split_sentences(text))
    }

    #[test]
    fn test_empty_text() {
        let s = stats("");
        assert!(s.is_empty());
        assert_eq!(s, TextStats::default());
        assert!(s.readability_level.is_none());
    }

    #[test]
    fn test_punctuation_only_text_is_all_zero() {
        let s = stats("?!...  ,,");
        assert_eq!(s, TextStats::default());
    }

    #[test]
    fn test_basic_counts() {
        let s = stats("The cat sat on the mat.");
        assert_eq!(s.word_count, 6);
        assert_eq!(s.char_count, 23);
        assert_eq!(s.sentence_count, 1);
        assert_eq!(s.unique_word_count, 5);
        assert_eq!(s.avg_word_length, 2.83);
        assert_eq!(s.vocabulary_diversity, 0.83);
        assert_eq!(s.avg_sentence_length, 6.0);
        assert_eq!(s.readability_score, 0.0);
        assert_eq!(s.readability_level, Some(ReadabilityLevel::Easy));
    }

    #[test]
    fn test_multiple_sentences() {
        let s = stats("One two. Three four five! Six?");
        assert_eq!(s.sentence_count, 3);
        assert_eq!(s.avg_sentence_length, 2.0);
    }

    #[test]
    fn test_emoji_are_counted_as_chars_and_tokens() {
        let s = stats("great 👍");
        assert_eq!(s.word_count, 2);
        assert_eq!(s.emoji_count, 1);
        assert_eq!(s.char_count, 7);
        assert_eq!(s.avg_word_length, 3.0);
    }

    #[test]
    fn test_unique_never_exceeds_total() {
        for text in ["a a a a", "Hello hello HELLO", "x y z", "one. two! two?"] {
            let s = stats(text);
            assert!(s.unique_word_count <= s.word_count);
            assert!((0.0..=1.0).contains(&s.vocabulary_diversity));
        }
    }

    #[test]
    fn test_complex_text() {
        let text = "Notwithstanding considerable organizational uncertainties, \
                    interdepartmental collaboration nevertheless demonstrated \
                    extraordinarily comprehensive accountability throughout \
                    implementation and institutional restructuring initiatives";
        let s = stats(text);
        assert_eq!(s.word_count, 17);
        assert_eq!(s.readability_score, 7.1);
        assert_eq!(s.readability_level, Some(ReadabilityLevel::Complex));
    }
}
