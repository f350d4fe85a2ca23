//! Command implementations

pub mod clue;
pub mod simple;

pub use clue::score_guess;
pub use simple::run_simple;
