//! Formatting utilities for terminal output

use crate::core::{LetterClue, LetterDiff};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. " R " on green
#[must_use]
pub fn letter_tile(diff: LetterDiff) -> ColoredString {
    let tile = format!(" {} ", diff.letter.to_ascii_uppercase());
    match diff.clue {
        LetterClue::Correct => tile.black().on_green().bold(),
        LetterClue::Elsewhere => tile.black().on_yellow().bold(),
        LetterClue::Absent => tile.white().on_bright_black(),
    }
}

/// A full guess as a row of tiles
#[must_use]
pub fn clue_row(diffs: &[LetterDiff]) -> String {
    diffs.iter().map(|&d| letter_tile(d).to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_row_shows_uppercase_letters() {
        colored::control::set_override(false);
        let diffs = [
            LetterDiff {
                letter: 'o',
                clue: LetterClue::Correct,
            },
            LetterDiff {
                letter: 'k',
                clue: LetterClue::Absent,
            },
        ];
        assert_eq!(clue_row(&diffs), " O  K ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
