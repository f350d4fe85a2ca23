//! Core domain types for Wordle
//!
//! Words and per-letter clues. Pure values with no game state attached.

mod clue;
mod word;

pub use clue::{Feedback, LetterClue, LetterDiff, LetterHints};
pub use word::{WORD_LENGTH, Word, WordError};
