//! Per-session game state
//!
//! Everything mutable about a game lives here, owned by one evaluator.
//! Nothing is process-wide, so independent sessions never interfere.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// No round has been started yet
    #[default]
    NotStarted,
    InProgress,
    Won,
    /// Attempts exhausted without a correct guess
    Lost,
}

impl RoundState {
    /// Won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Win/loss record across the rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Index `n` counts rounds won on guess `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    pub(crate) fn record_win(&mut self, guesses: usize) {
        self.rounds_played += 1;
        self.rounds_won += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);

        if self.guess_distribution.len() <= guesses {
            self.guess_distribution.resize(guesses + 1, 0);
        }
        self.guess_distribution[guesses] += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.rounds_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// Mutable state of one player's game
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub(super) secret_answer: Option<Word>,
    pub(super) attempts_remaining: u8,
    pub(super) used_answers: FxHashSet<Word>,
    pub(super) history: Vec<Feedback>,
    pub(super) state: RoundState,
    pub(super) round: u32,
    pub(super) stats: Statistics,
}

impl GameSession {
    /// Move the current answer into the used set
    ///
    /// Returns true when the answer was not recorded before.
    pub(super) fn retire_answer(&mut self) -> bool {
        match &self.secret_answer {
            Some(answer) if !self.used_answers.contains(answer) => {
                self.used_answers.insert(answer.clone());
                true
            }
            _ => false,
        }
    }

    pub(super) fn begin_round(&mut self, answer: Word, max_attempts: u8) {
        self.secret_answer = Some(answer);
        self.attempts_remaining = max_attempts;
        self.history.clear();
        self.state = RoundState::InProgress;
        self.round += 1;
    }

    /// Current secret answer, `None` before the first round
    #[must_use]
    pub const fn secret_answer(&self) -> Option<&Word> {
        self.secret_answer.as_ref()
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Answers issued in earlier rounds
    #[must_use]
    pub const fn used_answers(&self) -> &FxHashSet<Word> {
        &self.used_answers
    }

    /// Accepted guesses of the current round
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// 1-based number of the current round, 0 before the first
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }
}
