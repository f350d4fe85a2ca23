//! Line-oriented terminal presenter

use super::Presenter;
use super::formatters::{clue_row, create_progress_bar};
use crate::game::{GuessOutcome, Statistics};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Renders outcomes as rows of colored tiles on any writer
///
/// Keeps the stack of accepted guesses and redraws it after each one.
pub struct TerminalPresenter<W: Write> {
    out: W,
    rows: Vec<String>,
    clear_screen: bool,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter on stdout that clears the screen between redraws
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            rows: Vec::new(),
            clear_screen: true,
        }
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// Presenter on an arbitrary writer, appending instead of clearing
    pub const fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
            clear_screen: false,
        }
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a highlighted one-line message
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.bright_yellow())?;
        self.out.flush()
    }

    /// Print a prompt without a trailing newline
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}: ")?;
        self.out.flush()
    }

    /// Print the session record with a guess distribution chart
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn render_statistics(&mut self, stats: &Statistics) -> io::Result<()> {
        writeln!(self.out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
        writeln!(self.out, "   Played:       {}", stats.rounds_played)?;
        writeln!(self.out, "   Win rate:     {:.0}%", stats.win_rate())?;
        writeln!(self.out, "   Streak:       {}", stats.current_streak)?;
        writeln!(self.out, "   Best streak:  {}", stats.best_streak)?;

        let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
        if max > 0 {
            writeln!(self.out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
            for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
                let bar = create_progress_bar(count as f64, max as f64, 30);
                writeln!(self.out, "   {guesses}: {} {count}", bar.green())?;
            }
        }

        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        for row in &self.rows {
            writeln!(self.out, "{row}")?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn round_started(&mut self, word_length: usize, max_attempts: u8) -> io::Result<()> {
        self.rows.clear();
        writeln!(
            self.out,
            "{}",
            format!("New round: guess the {word_length}-letter word in {max_attempts} tries")
                .bright_cyan()
                .bold()
        )?;
        self.out.flush()
    }

    fn render(&mut self, outcome: &GuessOutcome) -> io::Result<()> {
        if let Some(rejection) = &outcome.rejection {
            writeln!(
                self.out,
                "{}",
                format!("✗ {rejection}, try again").red()
            )?;
            return self.out.flush();
        }

        if !outcome.letter_clues.is_empty() {
            self.rows.push(clue_row(&outcome.letter_clues));
        }
        self.redraw()?;

        if outcome.won {
            let guesses = self.rows.len();
            writeln!(self.out, "\n{}", "🎉 You win! 🎉".green().bold())?;
            writeln!(
                self.out,
                "Solved in {guesses} {}",
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        } else if outcome.round_over {
            writeln!(self.out, "\n{}", "Game over, you lost!".red().bold())?;
            if let Some(answer) = &outcome.revealed_answer {
                writeln!(
                    self.out,
                    "The correct answer is: {}",
                    format!(" {} ", answer.text().to_uppercase())
                        .white()
                        .on_magenta()
                        .bold()
                )?;
            }
        } else {
            writeln!(
                self.out,
                "{}",
                format!("{} tries left", outcome.attempts_remaining).bright_black()
            )?;
        }

        self.out.flush()
    }
}
