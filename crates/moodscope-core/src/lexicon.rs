//! Positive and negative word lists used for polarity scoring.
//!
//! A [`Lexicon`] holds two disjoint sets of lowercase entries. Each entry is
//! either a word (letters, digits, underscores and inner apostrophes) or a
//! single emoji glyph such as `😊` or `❤`. Emoji variation selectors
//! (U+FE0F) are not part of an entry, so `❤` and `❤️` are the same glyph.
//! The built-in lexicon is shared
//! process-wide through [`Lexicon::builtin`]; custom lexicons can be loaded
//! from a JSON file of the form `{"positive": [...], "negative": [...]}`.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors raised while building or loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// An entry was blank after trimming.
    #[error("lexicon entry cannot be empty")]
    EmptyEntry,

    /// An entry can never be produced by the tokenizer.
    #[error("lexicon entry {0:?} is neither a word nor an emoji glyph")]
    InvalidEntry(String),

    /// The same entry is listed as both positive and negative.
    #[error("{0:?} appears in both the positive and negative lists")]
    Overlap(String),

    /// The lexicon file could not be read.
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// The lexicon file is not valid JSON.
    #[error("failed to parse lexicon file: {0}")]
    Json(#[from] serde_json::Error),

    /// The token pattern built from the lexicon failed to compile.
    #[error("failed to compile token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Polarity of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Indicates positive sentiment.
    Positive,
    /// Indicates negative sentiment.
    Negative,
}

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "happy", "joy",
    "beautiful", "perfect", "love", "best", "brilliant", "awesome", "outstanding", "superb",
    "delightful", "incredible", "magnificent", "splendid", "success", "positive", "win",
    "winning", "excited", "thrilled", "proud", "blessed", "grateful", "thankful", "efficient",
    "effective", "innovative", "creative", "inspiring", "motivated", "dedicated",
    "accomplished", "achieved", "succeeded", "improved", "enhanced", "recommended", "praised",
    "appreciated", "supported", "helped",
];

const POSITIVE_EMOJI: &[&str] = &["😊", "😃", "😄", "👍", "❤️", "🌟", "✨", "💪", "👏", "🎉"];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "horrible", "awful", "worst", "hate", "sad", "angry", "upset",
    "disappointing", "poor", "ugly", "disgusting", "dreadful", "unpleasant", "fail", "failure",
    "negative", "lose", "losing", "worse", "problem", "frustrated", "annoyed", "unhappy",
    "miserable", "wrong", "difficult", "tough", "complicated", "confusing", "inefficient",
    "ineffective", "problematic", "concerning", "worried", "anxious", "stressed", "damaged",
    "broken", "failed", "wasted", "ruined", "destroyed",
];

const NEGATIVE_EMOJI: &[&str] = &["😠", "😢", "😭", "👎", "💔", "😤", "😫", "😩", "😰", "😱"];

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let positive = POSITIVE_WORDS.iter().chain(POSITIVE_EMOJI);
    let negative = NEGATIVE_WORDS.iter().chain(NEGATIVE_EMOJI);
    Lexicon::new(positive, negative).expect("built-in lexicon is valid")
});

/// On-disk representation of a lexicon file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    /// Positive entries.
    #[serde(default)]
    pub positive: Vec<String>,
    /// Negative entries.
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Two disjoint sets of case-normalized sentiment indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon from positive and negative entries.
    ///
    /// Entries are trimmed and lowercased. Duplicates within one list are
    /// merged; an entry present in both lists is rejected.
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive = normalize_all(positive)?;
        let negative = normalize_all(negative)?;

        let overlap: BTreeSet<&String> = positive.intersection(&negative).collect();
        if let Some(entry) = overlap.into_iter().next() {
            return Err(LexiconError::Overlap(entry.clone()));
        }

        Ok(Self { positive, negative })
    }

    /// Returns the built-in English lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parses a lexicon from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::new(file.positive, file.negative)
    }

    /// Loads a lexicon from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&contents)?;
        info!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "Loaded lexicon from {:?}",
            path
        );
        Ok(lexicon)
    }

    /// Returns the polarity of a (lowercase) token, if it is listed.
    pub fn polarity(&self, token: &str) -> Option<Polarity> {
        if self.positive.contains(token) {
            Some(Polarity::Positive)
        } else if self.negative.contains(token) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Returns true if the token is a positive indicator.
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    /// Returns true if the token is a negative indicator.
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Returns every emoji glyph in the lexicon, in no particular order.
    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.positive
            .iter()
            .chain(&self.negative)
            .map(String::as_str)
            .filter(|entry| is_glyph(entry))
    }

    /// Number of positive entries.
    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    /// Number of negative entries.
    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    /// Converts back to the file representation, sorted for stable output.
    pub fn to_file(&self) -> LexiconFile {
        let sorted = |set: &HashSet<String>| {
            let mut entries: Vec<String> = set.iter().cloned().collect();
            entries.sort();
            entries
        };
        LexiconFile {
            positive: sorted(&self.positive),
            negative: sorted(&self.negative),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Returns true for characters that can appear inside a word token.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Returns true if the entry contains no word characters and no whitespace.
pub(crate) fn is_glyph(entry: &str) -> bool {
    !entry.is_empty() && !entry.chars().any(|c| is_word_char(c) || c.is_whitespace())
}

fn is_word(entry: &str) -> bool {
    match (entry.chars().next(), entry.chars().next_back()) {
        (Some(first), Some(last)) => {
            first != '\''
                && last != '\''
                && !is_mark(first)
                && entry.chars().all(|c| is_word_char(c) || is_mark(c))
        }
        _ => false,
    }
}

// Variation selectors and zero-width joiners ride along with letters.
fn is_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{FE00}'..='\u{FE0F}' | '\u{200D}')
}

fn normalize_all<I, S>(entries: I) -> Result<HashSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| normalize(entry.as_ref()))
        .collect()
}

/// Emoji presentation selector, optional after any glyph.
pub(crate) const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Removes emoji presentation selectors.
pub(crate) fn strip_variation_selectors(text: &str) -> String {
    text.chars().filter(|&c| c != VARIATION_SELECTOR).collect()
}

fn normalize(entry: &str) -> Result<String> {
    let entry = strip_variation_selectors(entry.trim()).to_lowercase();
    if entry.is_empty() {
        return Err(LexiconError::EmptyEntry);
    }
    if is_word(&entry) || is_glyph(&entry) {
        Ok(entry)
    } else {
        Err(LexiconError::InvalidEntry(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists_are_disjoint() {
        let lexicon = Lexicon::builtin();
        for word in POSITIVE_WORDS.iter().chain(POSITIVE_EMOJI) {
            assert!(!lexicon.is_negative(word), "{word} is also negative");
        }
        assert_eq!(
            lexicon.positive_len(),
            POSITIVE_WORDS.len() + POSITIVE_EMOJI.len()
        );
        assert_eq!(
            lexicon.negative_len(),
            NEGATIVE_WORDS.len() + NEGATIVE_EMOJI.len()
        );
    }

    #[test]
    fn test_polarity_lookup() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.polarity("love"), Some(Polarity::Positive));
        assert_eq!(lexicon.polarity("terrible"), Some(Polarity::Negative));
        assert_eq!(lexicon.polarity("😊"), Some(Polarity::Positive));
        assert_eq!(lexicon.polarity("💔"), Some(Polarity::Negative));
        assert_eq!(lexicon.polarity("cat"), None);
    }

    #[test]
    fn test_entries_are_normalized() {
        let lexicon = Lexicon::new(["  Happy ", "HAPPY"], ["Sad"]).unwrap();
        assert_eq!(lexicon.positive_len(), 1);
        assert!(lexicon.is_positive("happy"));
        assert!(lexicon.is_negative("sad"));
    }

    #[test]
    fn test_overlap_is_rejected() {
        let err = Lexicon::new(["good", "fine"], ["bad", "Fine"]).unwrap_err();
        assert!(matches!(err, LexiconError::Overlap(ref e) if e == "fine"));
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        assert!(matches!(
            Lexicon::new(["   "], Vec::<&str>::new()).unwrap_err(),
            LexiconError::EmptyEntry
        ));
        assert!(matches!(
            Lexicon::new(["not good"], Vec::<&str>::new()).unwrap_err(),
            LexiconError::InvalidEntry(_)
        ));
        assert!(matches!(
            Lexicon::new(["'quoted'"], Vec::<&str>::new()).unwrap_err(),
            LexiconError::InvalidEntry(_)
        ));
        assert!(Lexicon::new(["don't"], Vec::<&str>::new()).is_ok());
    }

    #[test]
    fn test_glyphs() {
        let lexicon = Lexicon::builtin();
        let glyphs: HashSet<&str> = lexicon.glyphs().collect();
        assert_eq!(glyphs.len(), POSITIVE_EMOJI.len() + NEGATIVE_EMOJI.len());
        assert!(glyphs.contains("\u{2764}"));
        assert!(!glyphs.contains("\u{2764}\u{FE0F}"));
        assert!(!glyphs.contains("love"));
    }

    #[test]
    fn test_variation_selector_is_not_part_of_entry() {
        let lexicon = Lexicon::new(["\u{2764}\u{FE0F}", "\u{2764}"], ["\u{1F494}"]).unwrap();
        assert_eq!(lexicon.positive_len(), 1);
        assert_eq!(lexicon.polarity("\u{2764}"), Some(Polarity::Positive));
        assert_eq!(Lexicon::builtin().polarity("\u{2764}"), Some(Polarity::Positive));
    }

    #[test]
    fn test_from_json_str() {
        let lexicon =
            Lexicon::from_json_str(r#"{"positive": ["sunny"], "negative": ["rainy", "🌧"]}"#)
                .unwrap();
        assert!(lexicon.is_positive("sunny"));
        assert!(lexicon.is_negative("🌧"));

        assert!(matches!(
            Lexicon::from_json_str("not json").unwrap_err(),
            LexiconError::Json(_)
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        let file = Lexicon::new(["nice"], ["meh"]).unwrap().to_file();
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        let lexicon = Lexicon::from_path(&path).unwrap();
        assert!(lexicon.is_positive("nice"));
        assert!(lexicon.is_negative("meh"));

        assert!(matches!(
            Lexicon::from_path(dir.path().join("missing.json")).unwrap_err(),
            LexiconError::Io(_)
        ));
    }
}
