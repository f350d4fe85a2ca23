//! Word lists for the game
//!
//! The `WordSource` trait supplies the answer corpus and the legal-guess
//! dictionary. Embedded lists are compiled into the binary; files override
//! them per list.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use anyhow::Result;
use std::path::PathBuf;

/// Supplier of the answer pool and the legal-guess dictionary
pub trait WordSource {
    /// Words that may be drawn as the secret answer
    ///
    /// # Errors
    /// Returns an error if the underlying list cannot be read.
    fn answers(&self, word_length: usize) -> Result<Vec<Word>>;

    /// Words accepted as guesses
    ///
    /// # Errors
    /// Returns an error if the underlying list cannot be read.
    fn dictionary(&self, word_length: usize) -> Result<Vec<Word>>;
}

/// The lists compiled in from `data/`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn answers(&self, word_length: usize) -> Result<Vec<Word>> {
        Ok(loader::words_from_slice(ANSWERS, word_length))
    }

    fn dictionary(&self, word_length: usize) -> Result<Vec<Word>> {
        Ok(loader::words_from_slice(ALLOWED, word_length))
    }
}

/// Lists read from disk, falling back to the embedded list when a path is unset
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    pub answers: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
}

impl WordSource for FileSource {
    fn answers(&self, word_length: usize) -> Result<Vec<Word>> {
        match &self.answers {
            Some(path) => loader::load_from_file(path, word_length),
            None => EmbeddedSource.answers(word_length),
        }
    }

    fn dictionary(&self, word_length: usize) -> Result<Vec<Word>> {
        match &self.dictionary {
            Some(path) => loader::load_from_file(path, word_length),
            None => EmbeddedSource.dictionary(word_length),
        }
    }
}
