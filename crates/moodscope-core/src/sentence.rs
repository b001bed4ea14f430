//! Sentence splitting.

/// Characters that terminate a sentence.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits text on runs of `.`, `!` and `?`.
///
/// Fragments are trimmed and empty fragments are dropped, so trailing
/// terminators and terminator-only input simply produce fewer sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(TERMINATORS)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Sentence count for use as a divisor. Never zero.
pub fn ratio_sentence_count(sentences: &[&str]) -> usize {
    sentences.len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        assert_eq!(
            split_sentences("The cat sat on the mat."),
            vec!["The cat sat on the mat"]
        );
    }

    #[test]
    fn test_runs_of_terminators() {
        assert_eq!(
            split_sentences("Really?! Yes... I think so!!  Fine"),
            vec!["Really", "Yes", "I think so", "Fine"]
        );
    }

    #[test]
    fn test_no_fragments() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("?!. ..").is_empty());
    }

    #[test]
    fn test_ratio_count_is_never_zero() {
        assert_eq!(ratio_sentence_count(&[]), 1);
        assert_eq!(ratio_sentence_count(&split_sentences("One. Two.")), 2);
    }
}
