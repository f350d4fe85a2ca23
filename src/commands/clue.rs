//! Single clue command
//!
//! Scores one guess against a given answer without running a game.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Compute the clues for `guess` against `answer`
///
/// Both words must have `word_length` letters; dictionary membership is not
/// checked.
///
/// # Errors
///
/// Returns an error if either word is malformed.
pub fn score_guess(answer: &str, guess: &str, word_length: usize) -> Result<Feedback> {
    let answer = Word::with_length(answer.trim(), word_length)
        .with_context(|| format!("invalid answer '{answer}'"))?;
    let guess = Word::with_length(guess.trim(), word_length)
        .with_context(|| format!("invalid guess '{guess}'"))?;

    Ok(Feedback::calculate(&guess, &answer))
}
