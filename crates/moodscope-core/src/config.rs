//! Analyzer configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How equal, nonzero positive and negative hit counts are labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Strict `> 0.5` rule: a tie resolves to negative.
    #[default]
    Negative,
    /// A tie is reported as mixed with confidence 0.5.
    Mixed,
}

/// Configuration for [`TextAnalyzer`](crate::TextAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Recognize lexicon emoji as tokens.
    pub emoji_aware: bool,
    /// Labelling of balanced hit counts.
    pub tie_policy: TiePolicy,
    /// Optional JSON lexicon replacing the built-in one.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            emoji_aware: true,
            tie_policy: TiePolicy::default(),
            lexicon_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert!(config.emoji_aware);
        assert_eq!(config.tie_policy, TiePolicy::Negative);
        assert!(config.lexicon_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"tie_policy": "mixed"}"#).unwrap();
        assert_eq!(config.tie_policy, TiePolicy::Mixed);
        assert!(config.emoji_aware);
    }
}
