//! Unscramble
//!
//! A terminal word-unscrambling game: guess the original word behind a
//! random permutation of its letters. Ships a TUI mode, a plain CLI mode
//! and a scramble utility.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::Word;
//! use unscramble::game::{GameConfig, GameSession};
//!
//! let vocabulary = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
//! let mut game = GameSession::new(&vocabulary, GameConfig::default(), rand::rng());
//!
//! // The session presents a scrambled word; a correct guess scores points
//! let target = game.target_word().unwrap().to_string();
//! game.submit_guess(&target);
//! assert_eq!(game.score(), 20);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
