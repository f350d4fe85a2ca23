//! Per-letter clue calculation and representation
//!
//! Each guessed letter receives one of three clues:
//! - Correct (right letter, right position)
//! - Elsewhere (letter occurs in an unmatched position of the answer)
//! - Absent (no unmatched occurrence remains)

use super::Word;
use std::fmt;

/// Feedback for one guessed letter
///
/// Ordered by strength so `max` picks the most informative clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterClue {
    Absent,
    Elsewhere,
    Correct,
}

impl LetterClue {
    /// Emoji square for sharing
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Elsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Clue for a single symbol: 'G'/🟩, 'Y'/🟨, '-'/'_'/⬜
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Elsewhere),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Parse a clue row like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Returns `None` if any symbol is unrecognized.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::LetterClue;
    ///
    /// let row = LetterClue::parse_row("GY-GY").unwrap();
    /// assert_eq!(row, LetterClue::parse_row("🟩🟨⬜🟩🟨").unwrap());
    /// ```
    #[must_use]
    pub fn parse_row(s: &str) -> Option<Vec<Self>> {
        s.trim().chars().map(Self::from_symbol).collect()
    }
}

/// A guessed letter paired with its clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterDiff {
    pub letter: char,
    pub clue: LetterClue,
}

/// Clues for a whole guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Word,
    diffs: Vec<LetterDiff>,
}

impl Feedback {
    /// Calculate the clues when `guess` is played against `answer`
    ///
    /// Duplicate letters are never over-credited: a letter of the answer
    /// backs at most one Correct or Elsewhere clue.
    ///
    /// # Algorithm
    /// 1. First pass: exact matches become Correct; every unmatched answer
    ///    letter is pushed onto a multiset of missed letters
    /// 2. Second pass: left to right, a non-Correct letter found in the
    ///    missed multiset becomes Elsewhere and consumes the first occurrence,
    ///    otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, LetterClue, Word};
    ///
    /// let guess = Word::new("error").unwrap();
    /// let answer = Word::new("robot").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     feedback.clues().collect::<Vec<_>>(),
    ///     [
    ///         LetterClue::Absent,
    ///         LetterClue::Elsewhere,
    ///         LetterClue::Absent,
    ///         LetterClue::Correct,
    ///         LetterClue::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let mut result = vec![LetterClue::Absent; guess.len()];
        let mut missed: Vec<u8> = Vec::with_capacity(answer.len());

        // First pass: greens, remembering the answer letters we missed
        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                result[i] = LetterClue::Correct;
            } else {
                missed.push(a);
            }
        }

        // Second pass: yellows consume one missed occurrence each
        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == LetterClue::Correct {
                continue;
            }
            if let Some(pos) = missed.iter().position(|&m| m == g) {
                missed.remove(pos);
                result[i] = LetterClue::Elsewhere;
            }
        }

        let diffs = guess
            .letters()
            .iter()
            .zip(result)
            .map(|(&letter, clue)| LetterDiff {
                letter: char::from(letter),
                clue,
            })
            .collect();

        Self {
            guess: guess.clone(),
            diffs,
        }
    }

    /// The guess these clues belong to
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Letters with their clues
    #[must_use]
    pub fn diffs(&self) -> &[LetterDiff] {
        &self.diffs
    }

    /// Clues only, in guess order
    pub fn clues(&self) -> impl Iterator<Item = LetterClue> + '_ {
        self.diffs.iter().map(|d| d.clue)
    }

    /// Every letter is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.clues().all(|c| c == LetterClue::Correct)
    }

    /// Number of Correct clues
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.clues().filter(|&c| c == LetterClue::Correct).count()
    }

    /// Number of Elsewhere clues
    #[must_use]
    pub fn count_elsewhere(&self) -> usize {
        self.clues().filter(|&c| c == LetterClue::Elsewhere).count()
    }

    /// Emoji row like "⬜🟨⬜🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.clues().map(LetterClue::to_emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess.text().to_uppercase(), self.to_emoji())
    }
}

/// Strongest known clue per letter across a round
///
/// Feeds on-screen keyboards: once a letter is known Correct somewhere it
/// stays Correct, even if a later guess shows it Absent elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    known: [Option<LetterClue>; 26],
}

impl LetterHints {
    /// Fold a sequence of feedback rows into hints
    #[must_use]
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a Feedback>) -> Self {
        let mut hints = Self::default();
        for feedback in history {
            hints.record(feedback);
        }
        hints
    }

    /// Merge one row of feedback
    pub fn record(&mut self, feedback: &Feedback) {
        self.record_diffs(feedback.diffs());
    }

    /// Merge a row of letter clues
    pub fn record_diffs(&mut self, diffs: &[LetterDiff]) {
        for diff in diffs {
            if let Some(slot) = Self::slot(diff.letter) {
                let current = &mut self.known[slot];
                *current = Some(current.map_or(diff.clue, |c| c.max(diff.clue)));
            }
        }
    }

    /// Best known clue for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterClue> {
        Self::slot(letter).and_then(|slot| self.known[slot])
    }

    fn slot(letter: char) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| (lower as u8 - b'a') as usize)
    }
}
