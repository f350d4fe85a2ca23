//! Wordle game engine
//!
//! The guess evaluator, its per-session state and answer selection.

pub mod config;
mod error;
mod evaluator;
mod outcome;
pub mod selection;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_RETRIES, GameConfig, SelectionMode};
pub use error::GameError;
pub use evaluator::GuessEvaluator;
pub use outcome::{GuessOutcome, Rejection};
pub use session::{GameSession, RoundState, Statistics};
