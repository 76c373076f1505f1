//! Core domain types for the unscramble game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear properties.

mod scramble;
mod word;

pub use scramble::scramble;
pub use word::{Word, WordError};
