//! TUI application state and logic

use crate::core::{LetterDiff, LetterHints};
use crate::game::{GameError, GuessEvaluator, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App {
    pub game: GuessEvaluator,
    /// Rows shown on the board, taken from outcomes so withheld clues stay hidden
    pub board: Vec<Vec<LetterDiff>>,
    pub hints: LetterHints,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub revealed_answer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
    /// Every answer has been played
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Wrap an evaluator and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the first round cannot be started.
    pub fn new(mut game: GuessEvaluator) -> Result<Self> {
        game.start_round()?;

        let mut app = Self {
            game,
            board: Vec::new(),
            hints: LetterHints::default(),
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            revealed_answer: None,
        };
        app.add_message(
            &format!(
                "Welcome! Guess the {}-letter word.",
                app.game.config().word_length
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Type one letter into the current guess
    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < self.game.config().word_length
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess to the evaluator
    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        match self.game.evaluate_guess(&guess) {
            Ok(outcome) => self.apply_outcome(&guess, &outcome),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn apply_outcome(&mut self, guess: &str, outcome: &GuessOutcome) {
        if let Some(rejection) = &outcome.rejection {
            // Keep the text so the player can fix it
            self.input_buffer = guess.to_string();
            self.add_message(
                &format!("{}: {rejection}", guess.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        if !outcome.letter_clues.is_empty() {
            self.hints.record_diffs(&outcome.letter_clues);
            self.board.push(outcome.letter_clues.clone());
        }

        if outcome.won {
            self.input_mode = InputMode::RoundOver;
            let celebration = match self.game.history().len() {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if outcome.round_over {
            self.input_mode = InputMode::RoundOver;
            self.revealed_answer = outcome
                .revealed_answer
                .as_ref()
                .map(|w| w.text().to_uppercase());
            self.add_message("Out of guesses!", MessageStyle::Error);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!("{} tries left", outcome.attempts_remaining),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        match self.game.start_round() {
            Ok(()) => {
                self.board.clear();
                self.hints = LetterHints::default();
                self.input_buffer.clear();
                self.messages.clear();
                self.revealed_answer = None;
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(GameError::CorpusExhausted { used }) => {
                warn!(used, "no unused answers left");
                self.input_mode = InputMode::Exhausted;
                self.add_message(
                    &format!("All {used} words played. Press 'q' to quit."),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::RoundOver => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Exhausted => {
                if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        rounds = app.game.session().statistics().rounds_played,
        won = app.game.session().statistics().rounds_won,
        "tui session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterClue, Word};
    use crate::game::GameConfig;

    fn app(corpus: &[&str], config: GameConfig) -> App {
        let words = |list: &[&str]| -> Vec<Word> {
            list.iter().map(|w| Word::new(*w).unwrap()).collect()
        };
        let game = GuessEvaluator::new(words(corpus), words(&["error", "crane"]), config).unwrap();
        App::new(game).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let mut app = app(&["robot"], GameConfig::default().with_seed(1));
        for c in "errors1".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "error");
        app.pop_char();
        assert_eq!(app.input_buffer, "erro");
    }

    #[test]
    fn accepted_guess_fills_board_and_hints() {
        let mut app = app(&["robot"], GameConfig::default().with_seed(1));
        type_word(&mut app, "ERROR");

        assert_eq!(app.board.len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.hints.get('o'), Some(LetterClue::Correct));
        assert_eq!(app.hints.get('r'), Some(LetterClue::Elsewhere));
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let mut app = app(&["robot"], GameConfig::default().with_seed(1));
        type_word(&mut app, "zzzzz");

        assert!(app.board.is_empty());
        assert_eq!(app.input_buffer, "zzzzz");
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn losing_hides_final_row_and_reveals_answer() {
        let config = GameConfig {
            max_attempts: 2,
            ..GameConfig::default().with_seed(1)
        };
        let mut app = app(&["robot"], config);
        type_word(&mut app, "crane");
        type_word(&mut app, "error");

        assert_eq!(app.board.len(), 1);
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.revealed_answer.as_deref(), Some("ROBOT"));
        assert_eq!(app.hints.get('o'), None);
    }

    #[test]
    fn new_game_after_exhaustion_locks_input() {
        let mut app = app(&["robot"], GameConfig::default().with_seed(1));
        type_word(&mut app, "robot");
        assert_eq!(app.input_mode, InputMode::RoundOver);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Exhausted);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = app(&["robot", "crane"], GameConfig::default().with_seed(4));
        type_word(&mut app, "error");
        app.input_mode = InputMode::RoundOver;

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(app.board.is_empty());
        assert_eq!(app.hints, LetterHints::default());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut app = app(&["robot"], GameConfig::default().with_seed(1));
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
