//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameError, GuessEvaluator};
use crate::output::{Presenter, TerminalPresenter};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Run the line-oriented game until the input ends or the player quits
///
/// Each input line is a guess or one of the commands `quit`, `new`,
/// `stats`. A line that is a legal guess is always played as a guess.
/// After a round ends the player is asked whether to play again.
///
/// # Errors
///
/// Returns an error on I/O failure. Running out of unused answers ends the
/// loop normally with a notice.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut GuessEvaluator,
    presenter: &mut TerminalPresenter<W>,
    mut input: R,
) -> Result<()> {
    if !start_round(game, presenter)? {
        return Ok(());
    }

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim().to_lowercase();
        if entry.is_empty() {
            continue;
        }

        // Commands only apply when the entry is not itself a legal guess
        if !game.is_legal(&entry) {
            match entry.as_str() {
                "quit" | "q" | "exit" => break,
                "new" | "n" => {
                    if !start_round(game, presenter)? {
                        break;
                    }
                    continue;
                }
                "stats" => {
                    presenter.render_statistics(game.session().statistics())?;
                    continue;
                }
                _ => {}
            }
        }

        let outcome = game.evaluate_guess(&entry)?;
        presenter.render(&outcome)?;

        if outcome.round_over {
            presenter.render_statistics(game.session().statistics())?;
            if !ask_play_again(presenter, &mut input)? || !start_round(game, presenter)? {
                break;
            }
        }
    }

    info!(
        rounds = game.session().statistics().rounds_played,
        "simple mode finished"
    );
    Ok(())
}

/// Start a round; false when the corpus has run dry
fn start_round<W: Write>(
    game: &mut GuessEvaluator,
    presenter: &mut TerminalPresenter<W>,
) -> Result<bool> {
    match game.start_round() {
        Ok(()) => {
            let config = game.config();
            presenter.round_started(config.word_length, config.max_attempts)?;
            Ok(true)
        }
        Err(GameError::CorpusExhausted { used }) => {
            presenter.notice(&format!("You have played all {used} words. Thanks for playing!"))?;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn ask_play_again<R: BufRead, W: Write>(
    presenter: &mut TerminalPresenter<W>,
    input: &mut R,
) -> Result<bool> {
    presenter.prompt("Play again? (yes/no)")?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "yes" | "y"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use std::io::Cursor;

    fn game(corpus: &[&str]) -> GuessEvaluator {
        let words = |list: &[&str]| -> Vec<Word> {
            list.iter().map(|w| Word::new(*w).unwrap()).collect()
        };
        GuessEvaluator::new(
            words(corpus),
            words(&["error", "crane"]),
            GameConfig::default().with_seed(2),
        )
        .unwrap()
    }

    fn play(game: &mut GuessEvaluator, script: &str) -> String {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new());
        run_simple(game, &mut presenter, Cursor::new(script.to_string())).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn plays_until_win_then_stops() {
        let mut game = game(&["robot"]);
        let text = play(&mut game, "error\nzzzzz\nROBOT\nno\n");

        assert!(text.contains(" E  R  R  O  R "));
        assert!(text.contains("not in word list"));
        assert!(text.contains("You win!"));
        assert!(text.contains("Play again? (yes/no)"));
        assert_eq!(game.session().statistics().rounds_won, 1);
    }

    #[test]
    fn play_again_moves_to_fresh_answer() {
        let mut game = game(&["robot", "crane"]);
        let first = {
            // Peek at the answer chosen by a twin evaluator with the same seed
            let mut twin = self::game(&["robot", "crane"]);
            twin.start_round().unwrap();
            twin.session().secret_answer().cloned().unwrap()
        };

        let script = format!("{first}\nyes\nquit\n");
        let text = play(&mut game, &script);

        assert_eq!(text.matches("New round").count(), 2);
        assert_ne!(game.session().secret_answer(), Some(&first));
    }

    #[test]
    fn corpus_exhaustion_ends_the_loop() {
        let mut game = game(&["robot"]);
        let text = play(&mut game, "new\nerror\n");

        assert!(text.contains("You have played all 1 words"));
        assert!(!text.contains(" E  R  R  O  R "));
    }

    #[test]
    fn legal_word_spelled_like_a_command_is_a_guess() {
        let words = |list: &[&str]| -> Vec<Word> {
            list.iter().map(|w| Word::new(*w).unwrap()).collect()
        };
        let mut game = GuessEvaluator::new(
            words(&["robot"]),
            words(&["stats", "error"]),
            GameConfig::default().with_seed(2),
        )
        .unwrap();

        let text = play(&mut game, "stats\nquit\n");

        assert!(text.contains(" S  T  A  T  S "));
        assert!(!text.contains("Statistics:"));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn stats_command_without_matching_word() {
        let mut game = game(&["robot"]);
        let text = play(&mut game, "stats\nquit\n");

        assert!(text.contains("Statistics:"));
        assert!(game.history().is_empty());
    }

    #[test]
    fn quit_and_eof_end_cleanly() {
        let mut game = game(&["robot"]);
        play(&mut game, "quit\nerror\n");
        assert!(game.history().is_empty());

        let mut game = self::game(&["robot"]);
        play(&mut game, "error");
        assert_eq!(game.history().len(), 1);
    }
}
