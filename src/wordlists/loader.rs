//! Word list loading utilities
//!
//! Reads word lists from plain-text files (one word per line) or JSON files
//! (an object whose keys are words, or an array of strings).

use crate::core::Word;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load words of the given length from a file
///
/// Files ending in `.json` are parsed as JSON, anything else as plain text.
/// Entries that are not valid words of `word_length` letters are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed JSON.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        parse_json(&content, word_length)
            .with_context(|| format!("parsing JSON word list {}", path.display()))?
    } else {
        parse_lines(&content, word_length)
    };

    debug!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// Parse a plain-text list, one word per line
#[must_use]
pub fn parse_lines(content: &str, word_length: usize) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::with_length(trimmed, word_length).ok()
            }
        })
        .collect()
}

/// Parse a JSON word list
///
/// Accepts `{"word": ..., ...}` dictionaries (only keys are read) and
/// `["word", ...]` arrays.
///
/// # Errors
///
/// Returns an error for invalid JSON or any other top-level shape.
pub fn parse_json(content: &str, word_length: usize) -> Result<Vec<Word>> {
    let value: Value = serde_json::from_str(content)?;

    let entries: Vec<&str> = match &value {
        Value::Object(map) => map.keys().map(String::as_str).collect(),
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => bail!("expected a JSON object or array of words"),
    };

    Ok(entries
        .into_iter()
        .filter_map(|w| Word::with_length(w, word_length).ok())
        .collect())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, word_length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "Slate", "r0bot"];
        let words = words_from_slice(input, 5);

        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_custom_length() {
        let words = words_from_slice(&["cat", "dog", "horse"], 3);
        assert_eq!(texts(&words), ["cat", "dog"]);
    }

    #[test]
    fn parse_lines_trims_and_skips_blanks() {
        let words = parse_lines("  robot\n\nERROR\r\nbad\n", 5);
        assert_eq!(texts(&words), ["robot", "error"]);
    }

    #[test]
    fn parse_json_object_keys() {
        let content = r#"{"a": 1, "robot": 1, "apple": 1, "aardvark": 1}"#;
        let mut words = parse_json(content, 5).unwrap();
        words.sort();
        assert_eq!(texts(&words), ["apple", "robot"]);
    }

    #[test]
    fn parse_json_array() {
        let words = parse_json(r#"["robot", 3, "apple", "xx"]"#, 5).unwrap();
        assert_eq!(texts(&words), ["robot", "apple"]);
    }

    #[test]
    fn parse_json_rejects_other_shapes() {
        assert!(parse_json("42", 5).is_err());
        assert!(parse_json("{not json", 5).is_err());
    }

    #[test]
    fn load_from_file_detects_format() {
        let dir = env::temp_dir();
        let txt = dir.join(format!("wordle_engine_loader_{}.txt", std::process::id()));
        let json = dir.join(format!("wordle_engine_loader_{}.json", std::process::id()));
        fs::write(&txt, "robot\napple\n").unwrap();
        fs::write(&json, r#"{"amend": 1}"#).unwrap();

        let from_txt = load_from_file(&txt, 5).unwrap();
        let from_json = load_from_file(&json, 5).unwrap();
        fs::remove_file(&txt).unwrap();
        fs::remove_file(&json).unwrap();

        assert_eq!(texts(&from_txt), ["robot", "apple"]);
        assert_eq!(texts(&from_json), ["amend"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/definitely/not/here.txt", 5).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
