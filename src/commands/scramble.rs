//! Scramble utility command
//!
//! Validates a word and produces scrambled variants of it.

use crate::core::{Word, scramble};
use rand::Rng;

/// Result of scrambling a word
pub struct ScrambleResult {
    pub word: String,
    /// False when the word has no distinct permutation
    pub scramblable: bool,
    pub variants: Vec<String>,
}

/// Produce `count` scrambled variants of a word
///
/// # Errors
///
/// Returns an error if the word is empty or contains non-letter characters.
pub fn scramble_word<R: Rng>(word: &str, count: usize, rng: &mut R) -> Result<ScrambleResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let variants = (0..count.max(1))
        .map(|_| scramble(&word_obj, rng))
        .collect();

    Ok(ScrambleResult {
        word: word_obj.text().to_string(),
        scramblable: word_obj.is_scramblable(),
        variants,
    })
}
