//! Game configuration

use crate::core::WORD_LENGTH;

/// Attempts per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u8 = 6;

/// Draws allowed before rejection sampling falls back to a filtered pick
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// How a fresh secret answer is picked from the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Uniform draws until an unused word appears, at most `max_retries` times
    Sampling { max_retries: usize },
    /// Pop from a shuffled copy of the corpus
    Shuffled,
}

impl SelectionMode {
    /// Create a selection mode from its name
    ///
    /// Supported names: "sampling", "shuffled" (alias "deck").
    /// Defaults to sampling if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, max_retries: usize) -> Self {
        match name {
            "shuffled" | "deck" => Self::Shuffled,
            _ => Self::Sampling { max_retries },
        }
    }
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::Sampling {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Attempts granted at the start of each round
    pub max_attempts: u8,
    /// Answer selection strategy
    pub selection: SelectionMode,
    /// Show the clues of the final losing guess instead of withholding them
    pub reveal_final_clues: bool,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            selection: SelectionMode::default(),
            reveal_final_clues: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Same configuration with a fixed seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
