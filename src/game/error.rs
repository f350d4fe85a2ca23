//! Game error types

use super::session::RoundState;
use std::fmt;

/// Errors raised by the guess evaluator
///
/// Illegal guesses are not errors; they come back as rejected outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No candidate answers were supplied
    EmptyCorpus,
    /// `max_attempts` is zero
    NoAttempts,
    /// `word_length` is zero
    ZeroWordLength,
    /// A corpus or dictionary entry does not have the configured length
    WordLength { word: String, expected: usize },
    /// Every corpus word has already been used as an answer
    CorpusExhausted { used: usize },
    /// A guess arrived while no round is in progress
    RoundNotActive(RoundState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "answer corpus is empty"),
            Self::NoAttempts => write!(f, "a round needs at least one attempt"),
            Self::ZeroWordLength => write!(f, "word length must be at least 1"),
            Self::WordLength { word, expected } => {
                write!(f, "word '{word}' does not have {expected} letters")
            }
            Self::CorpusExhausted { used } => {
                write!(f, "answer corpus exhausted after {used} answers")
            }
            Self::RoundNotActive(state) => {
                write!(f, "no round in progress ({state}); start a new round first")
            }
        }
    }
}

impl std::error::Error for GameError {}
