//! Game session
//!
//! The externally owned state object behind both presentation surfaces:
//! score, attempt count, current target and its scrambled display form.
//! Surfaces read state through getters and drive it through
//! `submit_guess`, `skip` and `restart`.

use crate::core::{Word, scramble};
use crate::game::{GameConfig, WordPicker};
use rand::Rng;

/// Progression state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Words remain and the attempt limit has not been reached
    InProgress,
    /// Attempt limit reached or vocabulary exhausted
    Finished,
}

/// Result of evaluating a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess matched the target exactly; score increased, attempt consumed
    Correct,
    /// Guess did not match; target retained, no attempt consumed
    Incorrect,
}

/// A single game session over a borrowed vocabulary
///
/// Constructed at session start with the first word already presented,
/// mutated by submit/skip, reset by [`restart`](Self::restart), and
/// dropped on exit.
pub struct GameSession<'a, R: Rng> {
    config: GameConfig,
    picker: WordPicker<'a>,
    rng: R,
    score: u32,
    attempt_count: usize,
    target: Option<&'a Word>,
    scrambled: String,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Start a session: zero score, zero attempts, first word presented
    ///
    /// An empty vocabulary yields a session that is `Finished` immediately.
    pub fn new(vocabulary: &'a [Word], config: GameConfig, rng: R) -> Self {
        let mut session = Self {
            config,
            picker: WordPicker::new(vocabulary),
            rng,
            score: 0,
            attempt_count: 0,
            target: None,
            scrambled: String::new(),
        };
        session.present_next();
        session
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Attempts consumed so far (correct guesses plus skips)
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    /// Ordinal of the word currently on screen, for "word N of M" display
    #[must_use]
    pub fn word_number(&self) -> usize {
        (self.attempt_count + 1).min(self.config.max_words)
    }

    /// Session configuration
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The scrambled display form of the current target
    ///
    /// Empty once the session is finished.
    #[must_use]
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled
    }

    /// The current target word, if the session is still in progress
    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.target.map(Word::text)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.target.is_some() {
            GameStatus::InProgress
        } else {
            GameStatus::Finished
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Finished
    }

    /// Evaluate a guess against the current target
    ///
    /// Comparison is exact and case-sensitive with no trimming. A correct
    /// guess increases the score by the configured increment, consumes the
    /// attempt and presents the next word (or finishes the session). An
    /// incorrect guess leaves the session untouched so the surface can
    /// flag the error and keep the same word on screen.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        let Some(target) = self.target else {
            return GuessOutcome::Incorrect;
        };

        if input != target.text() {
            return GuessOutcome::Incorrect;
        }

        self.score += self.config.score_increase;
        self.consume_attempt();
        GuessOutcome::Correct
    }

    /// Give up on the current word without scoring
    ///
    /// Consumes the attempt and presents the next word (or finishes the
    /// session). Returns the abandoned target so the surface can reveal it.
    pub fn skip(&mut self) -> Option<&'a Word> {
        let skipped = self.target?;
        self.consume_attempt();
        Some(skipped)
    }

    /// Reset to a fresh session: score 0, attempts 0, full vocabulary
    pub fn restart(&mut self) {
        self.score = 0;
        self.attempt_count = 0;
        self.picker.reset();
        self.present_next();
    }

    fn consume_attempt(&mut self) {
        self.attempt_count += 1;
        if self.attempt_count >= self.config.max_words {
            self.finish();
        } else {
            self.present_next();
        }
    }

    fn present_next(&mut self) {
        match self.picker.next(&mut self.rng) {
            Some(word) => {
                self.scrambled = scramble(word, &mut self.rng);
                self.target = Some(word);
            }
            // Vocabulary exhausted before the attempt limit
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.target = None;
        self.scrambled.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    fn session<'a>(vocab: &'a [Word], max_words: usize) -> GameSession<'a, StdRng> {
        let config = GameConfig {
            max_words,
            score_increase: 20,
        };
        GameSession::new(vocab, config, StdRng::seed_from_u64(42))
    }

    fn sorted_bytes(s: &str) -> Vec<u8> {
        let mut bytes: Vec<u8> = s.bytes().collect();
        bytes.sort_unstable();
        bytes
    }

    #[test]
    fn new_session_presents_first_word() {
        let vocab = vocabulary(&["cat", "dog"]);
        let game = session(&vocab, 2);

        assert_eq!(game.score(), 0);
        assert_eq!(game.attempt_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);

        let target = game.target_word().unwrap();
        let scrambled = game.scrambled_word();
        assert_eq!(sorted_bytes(scrambled), sorted_bytes(target));
        assert_ne!(scrambled, target);
    }

    #[test]
    fn correct_guess_scores_and_advances() {
        let vocab = vocabulary(&["cat", "dog"]);
        let mut game = session(&vocab, 2);

        let first = game.target_word().unwrap().to_string();
        assert_eq!(game.submit_guess(&first), GuessOutcome::Correct);
        assert_eq!(game.score(), 20);
        assert_eq!(game.attempt_count(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);

        // The other word is now up, scrambled differently from itself
        let second = game.target_word().unwrap();
        assert_ne!(second, first);
        assert_ne!(game.scrambled_word(), second);
    }

    #[test]
    fn incorrect_guess_retains_target() {
        let vocab = vocabulary(&["cat", "dog"]);
        let mut game = session(&vocab, 2);

        let target = game.target_word().unwrap().to_string();
        let wrong = if target == "cat" { "dog" } else { "cat" };

        assert_eq!(game.submit_guess(wrong), GuessOutcome::Incorrect);
        assert_eq!(game.score(), 0);
        assert_eq!(game.attempt_count(), 0);
        assert_eq!(game.target_word().unwrap(), target);
    }

    #[test]
    fn guess_is_case_sensitive() {
        let vocab = vocabulary(&["cat"]);
        let mut game = session(&vocab, 1);

        assert_eq!(game.submit_guess("Cat"), GuessOutcome::Incorrect);
        assert_eq!(game.submit_guess("CAT"), GuessOutcome::Incorrect);
        assert_eq!(game.submit_guess("cat"), GuessOutcome::Correct);
    }

    #[test]
    fn guess_is_not_trimmed() {
        let vocab = vocabulary(&["cat"]);
        let mut game = session(&vocab, 1);
        assert_eq!(game.submit_guess(" cat "), GuessOutcome::Incorrect);
    }

    #[test]
    fn skip_consumes_attempt_without_scoring() {
        let vocab = vocabulary(&["cat", "dog"]);
        let mut game = session(&vocab, 2);

        let target = game.target_word().unwrap().to_string();
        let skipped = game.skip().unwrap();
        assert_eq!(skipped.text(), target);
        assert_eq!(game.score(), 0);
        assert_eq!(game.attempt_count(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn session_finishes_after_max_attempts() {
        let vocab = vocabulary(&["cat", "dog", "moon"]);
        let mut game = session(&vocab, 2);

        game.skip();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.skip();
        assert_eq!(game.status(), GameStatus::Finished);
        assert!(game.target_word().is_none());
        assert!(game.scrambled_word().is_empty());

        // Further actions are no-ops
        assert!(game.skip().is_none());
        assert_eq!(game.submit_guess("cat"), GuessOutcome::Incorrect);
        assert_eq!(game.attempt_count(), 2);
    }

    #[test]
    fn session_finishes_on_vocabulary_exhaustion() {
        // One word but a limit of five: the exhaustion guard ends the game
        let vocab = vocabulary(&["cat"]);
        let mut game = session(&vocab, 5);

        assert_eq!(game.submit_guess("cat"), GuessOutcome::Correct);
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.score(), 20);
    }

    #[test]
    fn empty_vocabulary_finishes_immediately() {
        let vocab: Vec<Word> = Vec::new();
        let game = session(&vocab, 10);
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn restart_resets_everything() {
        let vocab = vocabulary(&["cat", "dog"]);
        let mut game = session(&vocab, 2);

        let first = game.target_word().unwrap().to_string();
        game.submit_guess(&first);
        game.skip();
        assert_eq!(game.status(), GameStatus::Finished);

        game.restart();
        assert_eq!(game.score(), 0);
        assert_eq!(game.attempt_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.target_word().is_some());
    }

    #[test]
    fn score_only_increases_by_fixed_increment() {
        let vocab = vocabulary(&["cat", "dog", "moon", "lemon"]);
        let mut game = session(&vocab, 4);

        let mut expected = 0;
        while !game.is_finished() {
            let target = game.target_word().unwrap().to_string();
            game.submit_guess(&target);
            expected += 20;
            assert_eq!(game.score(), expected);
        }
        assert_eq!(game.score(), 80);
    }

    #[test]
    fn word_number_is_clamped_for_display() {
        let vocab = vocabulary(&["cat", "dog"]);
        let mut game = session(&vocab, 2);

        assert_eq!(game.word_number(), 1);
        game.skip();
        assert_eq!(game.word_number(), 2);
        game.skip();
        // Finished: still reads "word 2 of 2"
        assert_eq!(game.word_number(), 2);
    }

    #[test]
    fn no_word_repeats_within_a_session() {
        let vocab = vocabulary(&["cat", "dog", "moon", "lemon", "pizza"]);
        let mut game = session(&vocab, 5);

        let mut seen = std::collections::HashSet::new();
        while let Some(target) = game.target_word().map(str::to_string) {
            assert!(seen.insert(target.clone()), "repeated {target}");
            game.skip();
        }
        assert_eq!(seen.len(), 5);
    }
}
