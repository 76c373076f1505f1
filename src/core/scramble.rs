//! Word scrambling
//!
//! Produces the display form of a target word: a random character
//! permutation guaranteed to differ from the original whenever a
//! distinct permutation exists.

use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Scramble a word into a random character permutation
///
/// The result always contains exactly the characters of `word`. When the
/// word has at least two distinct characters the result is guaranteed to
/// differ from the input; shuffles equal to the input are rejected and
/// redrawn. Degenerate words (single character, or all characters
/// identical) have no distinct permutation and are returned unchanged.
///
/// # Examples
/// ```
/// use unscramble::core::{Word, scramble};
///
/// let word = Word::new("balloon").unwrap();
/// let mut rng = rand::rng();
/// let scrambled = scramble(&word, &mut rng);
///
/// let mut a: Vec<u8> = scrambled.bytes().collect();
/// let mut b: Vec<u8> = word.as_bytes().to_vec();
/// a.sort_unstable();
/// b.sort_unstable();
/// assert_eq!(a, b);
/// assert_ne!(scrambled, word.text());
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    if !word.is_scramblable() {
        return word.text().to_string();
    }

    let mut letters: Vec<u8> = word.as_bytes().to_vec();
    loop {
        letters.shuffle(rng);
        if letters != word.as_bytes() {
            // Validated ASCII in, ASCII out
            return String::from_utf8(letters).unwrap_or_else(|_| word.text().to_string());
        }
    }
}
