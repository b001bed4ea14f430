//! Lexicon hit counting and sentiment labelling.

use serde::{Deserialize, Serialize};

use crate::config::TiePolicy;
use crate::lexicon::{Lexicon, Polarity};
use crate::tokenizer::Token;

/// Sentiment label for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// More positive than negative hits.
    Positive,
    /// More negative hits, or a tie under [`TiePolicy::Negative`].
    Negative,
    /// No lexicon hits.
    #[default]
    Neutral,
    /// Equal nonzero hits under [`TiePolicy::Mixed`].
    Mixed,
}

impl Sentiment {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Mixed => "Mixed",
        }
    }

    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Mixed => "mixed",
        }
    }

    /// Parse from the stored string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "mixed" => Some(Sentiment::Mixed),
            _ => None,
        }
    }
}

/// Outcome of scoring a token sequence against a lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Assigned label.
    pub sentiment: Sentiment,
    /// Certainty of the label (0.0 to 1.0).
    pub confidence: f64,
    /// Tokens found in the positive list, counted per occurrence.
    pub positive_hits: usize,
    /// Tokens found in the negative list, counted per occurrence.
    pub negative_hits: usize,
}

impl SentimentScore {
    /// Share of positive hits among all hits (0.0 when there are none).
    pub fn positive_probability(&self) -> f64 {
        positive_probability(self.positive_hits, self.negative_hits)
    }

    /// Total lexicon hits.
    pub fn total_hits(&self) -> usize {
        self.positive_hits + self.negative_hits
    }
}

/// Scores tokens against the lexicon.
pub fn score(tokens: &[Token], lexicon: &Lexicon, tie_policy: TiePolicy) -> SentimentScore {
    let (positive_hits, negative_hits) =
        tokens
            .iter()
            .fold((0, 0), |(pos, neg), token| match lexicon.polarity(&token.text) {
                Some(Polarity::Positive) => (pos + 1, neg),
                Some(Polarity::Negative) => (pos, neg + 1),
                None => (pos, neg),
            });

    label(positive_hits, negative_hits, tie_policy)
}

/// Labels raw hit counts.
pub fn label(positive_hits: usize, negative_hits: usize, tie_policy: TiePolicy) -> SentimentScore {
    if positive_hits == 0 && negative_hits == 0 {
        return SentimentScore::default();
    }

    let probability = positive_probability(positive_hits, negative_hits);
    let (sentiment, confidence) =
        if positive_hits == negative_hits && tie_policy == TiePolicy::Mixed {
            (Sentiment::Mixed, 0.5)
        } else if probability > 0.5 {
            (Sentiment::Positive, probability)
        } else {
            (Sentiment::Negative, 1.0 - probability)
        };

    SentimentScore {
        sentiment,
        confidence,
        positive_hits,
        negative_hits,
    }
}

fn positive_probability(positive_hits: usize, negative_hits: usize) -> f64 {
    let total = (positive_hits + negative_hits).max(1);
    positive_hits as f64 / total as f64
}
