//! Main game interface

use super::config::GameConfig;
use super::error::GameError;
use super::outcome::{GuessOutcome, Rejection};
use super::selection::{AnswerSelector, Selector};
use super::session::{GameSession, RoundState, Statistics};
use crate::core::{Feedback, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

/// Wordle rule engine for a single player
///
/// Owns the answer corpus, the legal-guess set and the session state.
/// Start a round with [`start_round`](Self::start_round), then feed guesses
/// to [`evaluate_guess`](Self::evaluate_guess) until the outcome reports
/// `round_over`.
pub struct GuessEvaluator {
    config: GameConfig,
    corpus: Vec<Word>,
    legal_guesses: FxHashSet<Word>,
    selector: Selector,
    rng: StdRng,
    session: GameSession,
}

impl GuessEvaluator {
    /// Create an evaluator over the given word lists
    ///
    /// # Parameters
    /// - `corpus`: Words that can be chosen as the secret answer
    /// - `legal_guesses`: Words accepted as guesses; the corpus is always added
    /// - `config`: Game settings
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoAttempts` or `GameError::ZeroWordLength` for a
    /// zero setting, `GameError::EmptyCorpus` for an empty corpus and
    /// `GameError::WordLength` when any word does not match
    /// `config.word_length`.
    pub fn new(
        mut corpus: Vec<Word>,
        legal_guesses: impl IntoIterator<Item = Word>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if config.max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        if config.word_length == 0 {
            return Err(GameError::ZeroWordLength);
        }

        // Selection draws by index, so each word appears once
        let mut seen = FxHashSet::default();
        corpus.retain(|w| seen.insert(w.clone()));

        if corpus.is_empty() {
            return Err(GameError::EmptyCorpus);
        }

        let mut legal: FxHashSet<Word> = legal_guesses.into_iter().collect();
        legal.extend(corpus.iter().cloned());

        if let Some(bad) = legal.iter().find(|w| w.len() != config.word_length) {
            return Err(GameError::WordLength {
                word: bad.text().to_string(),
                expected: config.word_length,
            });
        }

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        debug!(
            corpus = corpus.len(),
            legal = legal.len(),
            word_length = config.word_length,
            max_attempts = config.max_attempts,
            "guess evaluator ready"
        );

        Ok(Self {
            selector: Selector::from(config.selection),
            config,
            corpus,
            legal_guesses: legal,
            rng,
            session: GameSession::default(),
        })
    }

    /// Begin a new round with a fresh secret answer
    ///
    /// The previous answer is recorded as used before the pick, so it can
    /// never be chosen twice in a row. An unfinished round is abandoned
    /// without touching the statistics.
    ///
    /// # Errors
    ///
    /// Returns `GameError::CorpusExhausted` when every corpus word has been
    /// used. The session keeps its previous state in that case.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.session.retire_answer();

        let index = self
            .selector
            .select(&self.corpus, &self.session.used_answers, &mut self.rng)
            .ok_or(GameError::CorpusExhausted {
                used: self.session.used_answers.len(),
            })?;

        let answer = self.corpus[index].clone();
        trace!(answer = %answer, "secret answer chosen");

        self.session.begin_round(answer, self.config.max_attempts);
        debug!(
            round = self.session.round,
            used = self.session.used_answers.len(),
            "round started"
        );

        Ok(())
    }

    /// Evaluate one guess against the secret answer
    ///
    /// The guess is trimmed and lowercased. Malformed words and words outside
    /// the legal-guess set come back rejected without consuming an attempt.
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundNotActive` when no round is in progress.
    pub fn evaluate_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let answer = match (&self.session.secret_answer, self.session.state) {
            (Some(answer), RoundState::InProgress) => answer.clone(),
            (_, state) => return Err(GameError::RoundNotActive(state)),
        };
        let attempts = self.session.attempts_remaining;

        let guess = match Word::with_length(guess.trim(), self.config.word_length) {
            Ok(word) => word,
            Err(e) => {
                debug!(guess, error = %e, "malformed guess rejected");
                return Ok(GuessOutcome::rejected(Rejection::Malformed(e), attempts));
            }
        };

        if !self.legal_guesses.contains(&guess) {
            debug!(guess = %guess, "guess not in dictionary");
            return Ok(GuessOutcome::rejected(Rejection::NotInDictionary, attempts));
        }

        self.session.attempts_remaining = attempts.saturating_sub(1);
        let attempts = self.session.attempts_remaining;

        let feedback = Feedback::calculate(&guess, &answer);
        let won = feedback.is_perfect();
        let clues = feedback.diffs().to_vec();
        debug!(
            guess = %guess,
            pattern = %feedback.to_emoji(),
            attempts_remaining = attempts,
            "guess evaluated"
        );
        self.session.history.push(feedback);

        if won {
            let guesses = self.session.history.len();
            self.session.state = RoundState::Won;
            self.session.stats.record_win(guesses);
            info!(round = self.session.round, guesses, "round won");
            return Ok(GuessOutcome::won(clues, answer, attempts));
        }

        if attempts == 0 {
            self.session.state = RoundState::Lost;
            self.session.stats.record_loss();
            info!(round = self.session.round, answer = %answer, "round lost");
            let clues = if self.config.reveal_final_clues {
                clues
            } else {
                Vec::new()
            };
            return Ok(GuessOutcome::lost(clues, answer));
        }

        Ok(GuessOutcome::in_progress(clues, attempts))
    }

    /// Whether a word would pass the legality gate
    #[must_use]
    pub fn is_legal(&self, guess: &str) -> bool {
        Word::with_length(guess.trim(), self.config.word_length)
            .is_ok_and(|w| self.legal_guesses.contains(&w))
    }

    /// Session state (answer, attempts, history, statistics)
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.session.state
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.session.attempts_remaining
    }

    /// Accepted guesses of the current round
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.session.history
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.session.stats
    }

    /// Answers already played, the current one included once it is retired
    #[must_use]
    pub const fn used_answers(&self) -> &FxHashSet<Word> {
        &self.session.used_answers
    }

    /// The current secret, for revealing at game end
    #[must_use]
    pub const fn secret_answer(&self) -> Option<&Word> {
        self.session.secret_answer.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Words eligible as secret answers
    #[must_use]
    pub fn corpus(&self) -> &[Word] {
        &self.corpus
    }

    /// Number of legal guesses, corpus included
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.legal_guesses.len()
    }
}
