//! Vocabularies for the game
//!
//! Provides the built-in vocabulary compiled into the binary plus a loader
//! for custom word list files.

mod embedded;
pub mod loader;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn vocabulary_count_matches_const() {
        assert_eq!(VOCABULARY.len(), VOCABULARY_COUNT);
    }

    #[test]
    fn vocabulary_words_are_valid() {
        // Every built-in word must pass Word validation
        for &word in VOCABULARY {
            assert!(Word::new(word).is_ok(), "Word '{word}' is invalid");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn vocabulary_words_are_scramblable() {
        // No built-in word should scramble to itself
        for &word in VOCABULARY {
            assert!(
                Word::new(word).unwrap().is_scramblable(),
                "Word '{word}' has no distinct permutation"
            );
        }
    }

    #[test]
    fn vocabulary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = VOCABULARY.iter().collect();
        assert_eq!(unique.len(), VOCABULARY.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(VOCABULARY_COUNT, 162, "Expected 162 built-in words");
    }
}
