//! Wordle - CLI
//!
//! Play Wordle in a TUI or a plain terminal, or score a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::{fs::File, io, path::PathBuf, sync::Mutex};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_engine::{
    commands::{run_simple, score_guess},
    core::WORD_LENGTH,
    game::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_RETRIES, GameConfig, GuessEvaluator, SelectionMode,
    },
    output::{TerminalPresenter, formatters::clue_row},
    wordlists::{FileSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: one word per line, or a .json object/array of words
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Legal guess dictionary: one word per line, or a .json object/array of words
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Attempts per round
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u8,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Seed for answer selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Answer selection: sampling (default) or shuffled
    #[arg(long, global = true, default_value = "sampling")]
    selection: String,

    /// Draws before sampling falls back to a filtered pick
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: usize,

    /// Show the clues of the final guess when a round is lost
    #[arg(long, global = true)]
    reveal_final_clues: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the clues for one guess against a given answer
    Clue {
        /// The secret answer
        answer: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        if self.attempts == 0 {
            bail!("--attempts must be at least 1");
        }
        if self.length == 0 {
            bail!("--length must be at least 1");
        }

        Ok(GameConfig {
            word_length: self.length,
            max_attempts: self.attempts,
            selection: SelectionMode::from_name(&self.selection, self.max_retries),
            reveal_final_clues: self.reveal_final_clues,
            seed: self.seed,
        })
    }

    fn word_source(&self) -> FileSource {
        FileSource {
            answers: self.answers.clone(),
            dictionary: self.dictionary.clone(),
        }
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` overrides the level picked by `-v`. Without a log file the TUI
/// stays silent since stderr output would corrupt the screen.
fn init_tracing(verbose: u8, log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_engine={level},wordle={level}")));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tui = matches!(cli.command, None | Some(Commands::Play));
    init_tracing(cli.verbose, cli.log_file.as_ref(), tui)?;

    let config = cli.game_config()?;

    // Default to Play mode if no command given
    match cli.command {
        Some(Commands::Clue { ref answer, ref guess }) => {
            run_clue_command(answer, guess, config.word_length)
        }
        Some(Commands::Simple) => run_simple_command(build_game(&cli, config)?),
        None | Some(Commands::Play) => run_play_command(build_game(&cli, config)?),
    }
}

/// Load the word lists and construct the evaluator
fn build_game(cli: &Cli, config: GameConfig) -> Result<GuessEvaluator> {
    let source = cli.word_source();
    let answers = source
        .answers(config.word_length)
        .context("Failed to load answer list")?;
    let dictionary = source
        .dictionary(config.word_length)
        .context("Failed to load dictionary")?;

    tracing::info!(
        answers = answers.len(),
        dictionary = dictionary.len(),
        word_length = config.word_length,
        "word lists loaded"
    );

    GuessEvaluator::new(answers, dictionary, config).context("Failed to set up the game")
}

fn run_clue_command(answer: &str, guess: &str, word_length: usize) -> Result<()> {
    let feedback = score_guess(answer, guess, word_length)?;
    println!("{}", clue_row(feedback.diffs()));
    println!("{}", feedback.to_emoji());
    Ok(())
}

fn run_simple_command(mut game: GuessEvaluator) -> Result<()> {
    let mut presenter = TerminalPresenter::stdout();
    run_simple(&mut game, &mut presenter, io::stdin().lock())
}

fn run_play_command(game: GuessEvaluator) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let app = App::new(game)?;
    run_tui(app)
}
