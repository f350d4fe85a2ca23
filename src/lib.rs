//! Wordle Engine
//!
//! Rule engine for Wordle-style games: secret answer selection without
//! repeats, a legality gate for guesses, duplicate-aware letter clues and a
//! fixed attempt budget per round.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_engine::game::{GameConfig, GuessEvaluator};
//! use wordle_engine::wordlists::{EmbeddedSource, WordSource};
//!
//! let source = EmbeddedSource;
//! let config = GameConfig::default();
//! let mut game = GuessEvaluator::new(
//!     source.answers(config.word_length).unwrap(),
//!     source.dictionary(config.word_length).unwrap(),
//!     config,
//! )
//! .unwrap();
//!
//! game.start_round().unwrap();
//! let outcome = game.evaluate_guess("crane").unwrap();
//! println!("{} tries left", outcome.attempts_remaining);
//! ```

// Core domain types
pub mod core;

// Rounds, sessions and the guess evaluator
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
