//! Vocabulary word representation
//!
//! A Word stores a lowercase ASCII-alphabetic word of any length.

use std::fmt;

/// A vocabulary word
///
/// Stores the word as lowercase ASCII. Words of any nonzero length are
/// accepted; single-character words scramble to themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("balloon").unwrap();
    /// assert_eq!(word.text(), "balloon");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("x-ray").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for the empty word (never constructed through `new`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as a byte slice
    ///
    /// Safe to treat as characters since the word is validated ASCII.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// True if the word has a character permutation different from itself
    ///
    /// False for single-character words and words whose characters are all
    /// identical, which scramble to themselves.
    #[must_use]
    pub fn is_scramblable(&self) -> bool {
        let bytes = self.text.as_bytes();
        bytes.len() > 1 && bytes.iter().any(|&b| b != bytes[0])
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("balloon").unwrap();
        assert_eq!(word.text(), "balloon");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BALLOON").unwrap();
        assert_eq!(word.text(), "balloon");

        let word2 = Word::new("BaLlOoN").unwrap();
        assert_eq!(word2.text(), "balloon");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("marshmallow").unwrap().len(), 11);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cat3").is_err()); // Number
        assert!(Word::new("big cat").is_err()); // Space
        assert!(Word::new("x-ray").is_err()); // Punctuation
    }

    #[test]
    fn word_scramblable() {
        assert!(Word::new("cat").unwrap().is_scramblable());
        assert!(Word::new("ab").unwrap().is_scramblable());
        assert!(!Word::new("a").unwrap().is_scramblable());
        assert!(!Word::new("aaaa").unwrap().is_scramblable());
    }

    #[test]
    fn word_display() {
        let word = Word::new("picnic").unwrap();
        assert_eq!(format!("{word}"), "picnic");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("lemon").unwrap();
        let word2 = Word::new("lemon").unwrap();
        let word3 = Word::new("LEMON").unwrap();
        let word4 = Word::new("melon").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case normalized
        assert_ne!(word1, word4);
    }
}
