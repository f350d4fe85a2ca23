//! Result of evaluating one guess

use crate::core::{LetterDiff, Word, WordError};
use std::fmt;

/// Why a guess was refused without consuming an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Well-formed word missing from the legal-guess set
    NotInDictionary,
    /// Wrong length or non-letter characters
    Malformed(WordError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInDictionary => write!(f, "not in word list"),
            Self::Malformed(e) => write!(f, "{e}"),
        }
    }
}

/// Everything a presenter needs to render one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Per-letter clues; empty on rejection and on a withheld losing guess
    pub letter_clues: Vec<LetterDiff>,
    pub round_over: bool,
    pub won: bool,
    /// Present only once the round has ended
    pub revealed_answer: Option<Word>,
    pub rejection: Option<Rejection>,
    /// Attempts left after this guess
    pub attempts_remaining: u8,
}

impl GuessOutcome {
    pub(super) const fn rejected(rejection: Rejection, attempts_remaining: u8) -> Self {
        Self {
            letter_clues: Vec::new(),
            round_over: false,
            won: false,
            revealed_answer: None,
            rejection: Some(rejection),
            attempts_remaining,
        }
    }

    pub(super) const fn in_progress(letter_clues: Vec<LetterDiff>, attempts_remaining: u8) -> Self {
        Self {
            letter_clues,
            round_over: false,
            won: false,
            revealed_answer: None,
            rejection: None,
            attempts_remaining,
        }
    }

    pub(super) const fn won(
        letter_clues: Vec<LetterDiff>,
        answer: Word,
        attempts_remaining: u8,
    ) -> Self {
        Self {
            letter_clues,
            round_over: true,
            won: true,
            revealed_answer: Some(answer),
            rejection: None,
            attempts_remaining,
        }
    }

    pub(super) const fn lost(letter_clues: Vec<LetterDiff>, answer: Word) -> Self {
        Self {
            letter_clues,
            round_over: true,
            won: false,
            revealed_answer: Some(answer),
            rejection: None,
            attempts_remaining: 0,
        }
    }

    /// The guess was refused and no attempt was consumed
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// Round ended with attempts exhausted
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.round_over && !self.won
    }
}
