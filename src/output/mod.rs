//! Terminal output formatting
//!
//! The `Presenter` capability and its line-oriented terminal implementation.

pub mod display;
pub mod formatters;

pub use display::TerminalPresenter;

use crate::game::GuessOutcome;
use std::io;

/// Renders game events for one target UI
pub trait Presenter {
    /// A new round has begun
    ///
    /// # Errors
    /// Returns any error from the output device.
    fn round_started(&mut self, word_length: usize, max_attempts: u8) -> io::Result<()>;

    /// Show the result of one submitted guess
    ///
    /// # Errors
    /// Returns any error from the output device.
    fn render(&mut self, outcome: &GuessOutcome) -> io::Result<()>;
}
