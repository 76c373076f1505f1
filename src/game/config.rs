//! Session configuration

/// Default number of words presented per session
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Default points awarded per correct guess
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Tunable parameters for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of words presented before the session finishes
    pub max_words: usize,
    /// Points awarded per correct guess
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}
