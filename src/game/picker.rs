//! Random word selection without repeats
//!
//! Draws uniformly from the unused portion of the vocabulary, so selection
//! is bounded by vocabulary size rather than retrying against an
//! already-used set.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Draws words from a vocabulary, never repeating one within a session
pub struct WordPicker<'a> {
    vocabulary: &'a [Word],
    used: FxHashSet<usize>,
}

impl<'a> WordPicker<'a> {
    #[must_use]
    pub fn new(vocabulary: &'a [Word]) -> Self {
        Self {
            vocabulary,
            used: FxHashSet::default(),
        }
    }

    /// Pick the next word uniformly at random from the unused vocabulary
    ///
    /// Marks the chosen word as used. Returns `None` once the vocabulary
    /// is exhausted.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'a Word> {
        let unused: Vec<usize> = (0..self.vocabulary.len())
            .filter(|i| !self.used.contains(i))
            .collect();

        let &index = unused.choose(rng)?;
        self.used.insert(index);
        Some(&self.vocabulary[index])
    }

    /// Number of words not yet presented
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.vocabulary.len() - self.used.len()
    }

    /// Number of words already presented
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Forget all used words, making the full vocabulary available again
    pub fn reset(&mut self) {
        self.used.clear();
    }
}
