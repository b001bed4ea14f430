//! Word and emoji tokenization.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::{strip_variation_selectors, Lexicon, Result};

/// A run of letters, digits and underscores with optional inner apostrophes.
///
/// Trailing combining marks (accents, variation selectors) stay attached.
const WORD_PATTERN: &str =
    r"[\p{Alphabetic}\p{N}_](?:[\p{Alphabetic}\p{M}\p{N}_']*[\p{Alphabetic}\p{M}\p{N}_])?";

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A word.
    Word,
    /// An emoji glyph recognized from the lexicon.
    Glyph,
}

/// A single lowercase token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lowercased token text.
    pub text: String,
    /// Whether this is a word or a glyph.
    pub kind: TokenKind,
}

impl Token {
    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true for emoji tokens.
    pub fn is_glyph(&self) -> bool {
        self.kind == TokenKind::Glyph
    }
}

/// Splits text into lowercase word and glyph tokens.
///
/// The pattern is compiled once per lexicon. Glyph alternatives are ordered
/// longest-first so that multi-codepoint emoji win over any shorter prefix.
/// A variation selector after any glyph character is accepted and dropped
/// from the token, so `❤` and `❤️` both yield the token `❤`.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Creates a tokenizer that recognizes the lexicon's emoji when
    /// `emoji_aware` is set.
    pub fn new(lexicon: &Lexicon, emoji_aware: bool) -> Result<Self> {
        let mut glyphs: Vec<&str> = if emoji_aware {
            lexicon.glyphs().collect()
        } else {
            Vec::new()
        };
        glyphs.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = if glyphs.is_empty() {
            format!("(?P<word>{WORD_PATTERN})")
        } else {
            let alternatives: Vec<String> = glyphs.iter().map(|g| glyph_pattern(g)).collect();
            format!(
                "(?P<word>{WORD_PATTERN})|(?P<glyph>{})",
                alternatives.join("|")
            )
        };

        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Tokenizes text. Empty or whitespace-only input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        self.pattern
            .captures_iter(&lowered)
            .filter_map(|caps| {
                if let Some(m) = caps.name("word") {
                    Some(Token {
                        text: m.as_str().to_string(),
                        kind: TokenKind::Word,
                    })
                } else {
                    caps.name("glyph").map(|m| Token {
                        text: strip_variation_selectors(m.as_str()),
                        kind: TokenKind::Glyph,
                    })
                }
            })
            .collect()
    }
}

/// Escapes a glyph, allowing a variation selector after each character.
fn glyph_pattern(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("{}\\x{{FE0F}}?", regex::escape(c.encode_utf8(&mut [0; 4]))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Lexicon::builtin(), true).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let t = tokenizer();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize("   \n\t ").is_empty());
        assert!(t.tokenize("... !!! ???").is_empty());
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let t = tokenizer();
        let tokens = t.tokenize("Hello, World! It's GREAT.");
        assert_eq!(texts(&tokens), vec!["hello", "world", "it's", "great"]);
        assert!(tokens.iter().all(|tok| tok.kind == TokenKind::Word));
    }

    #[test]
    fn test_outer_apostrophes_are_separators() {
        let t = tokenizer();
        assert_eq!(
            texts(&t.tokenize("'quoted' the dogs' bone")),
            vec!["quoted", "the", "dogs", "bone"]
        );
    }

    #[test]
    fn test_emoji_tokens() {
        let t = tokenizer();
        let tokens = t.tokenize("love it😊 so much❤️!");
        assert_eq!(texts(&tokens), vec!["love", "it", "😊", "so", "much", "❤"]);
        assert!(tokens[2].is_glyph());
        assert!(tokens[5].is_glyph());
        assert_eq!(tokens[2].char_len(), 1);
    }

    #[test]
    fn test_unknown_emoji_are_separators() {
        let t = tokenizer();
        assert_eq!(texts(&t.tokenize("sun ☀️ rain")), vec!["sun", "rain"]);
    }

    #[test]
    fn test_bare_and_selector_hearts_are_one_glyph() {
        let t = tokenizer();
        let tokens = t.tokenize("I \u{2764} you, \u{2764}\u{FE0F}\u{2764}");
        assert_eq!(
            texts(&tokens),
            vec!["i", "\u{2764}", "you", "\u{2764}", "\u{2764}"]
        );
        assert!(tokens[1].is_glyph());
        assert_eq!(tokens[3].char_len(), 1);
    }

    #[test]
    fn test_emoji_unaware_ignores_emoji() {
        let t = Tokenizer::new(Lexicon::builtin(), false).unwrap();
        assert_eq!(texts(&t.tokenize("great 👍 day")), vec!["great", "day"]);
    }

    #[test]
    fn test_unicode_words() {
        let t = tokenizer();
        assert_eq!(
            texts(&t.tokenize("Café naïve 42 snake_case")),
            vec!["café", "naïve", "42", "snake_case"]
        );
    }

    #[test]
    fn test_deterministic() {
        let t = tokenizer();
        let text = "Same input, same 👍 output.";
        assert_eq!(t.tokenize(text), t.tokenize(text));
    }
}
