//! Game session state machine
//!
//! Word selection, guess evaluation and session progression.

mod config;
mod picker;
mod session;

pub use config::GameConfig;
pub use picker::WordPicker;
pub use session::{GameSession, GameStatus, GuessOutcome};
