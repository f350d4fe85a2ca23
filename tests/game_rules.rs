//! End-to-end rules of a game session through the public API.

use wordle_engine::core::{LetterClue, Word};
use wordle_engine::game::{
    GameConfig, GameError, GuessEvaluator, Rejection, RoundState, SelectionMode,
};
use wordle_engine::wordlists::{EmbeddedSource, WordSource};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(*w).unwrap()).collect()
}

fn single_answer_game(answer: &str, config: GameConfig) -> GuessEvaluator {
    let mut game = GuessEvaluator::new(
        words(&[answer]),
        words(&["error", "pique", "crane", "slate", "amend"]),
        config,
    )
    .unwrap();
    game.start_round().unwrap();
    game
}

#[test]
fn evaluator_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<GuessEvaluator>();
}

#[test]
fn error_against_robot_letter_by_letter() {
    let mut game = single_answer_game("robot", GameConfig::default().with_seed(3));
    let outcome = game.evaluate_guess("error").unwrap();

    let clues: Vec<(char, LetterClue)> = outcome
        .letter_clues
        .iter()
        .map(|d| (d.letter, d.clue))
        .collect();
    assert_eq!(
        clues,
        [
            ('e', LetterClue::Absent),
            ('r', LetterClue::Elsewhere),
            ('r', LetterClue::Absent),
            ('o', LetterClue::Correct),
            ('r', LetterClue::Absent),
        ]
    );
    assert!(!outcome.round_over);
    assert_eq!(outcome.attempts_remaining, 5);
}

#[test]
fn guessing_the_answer_wins_immediately() {
    let mut game = single_answer_game("apple", GameConfig::default().with_seed(3));
    let outcome = game.evaluate_guess("APPLE").unwrap();

    assert!(outcome.won);
    assert!(outcome.round_over);
    assert!(
        outcome
            .letter_clues
            .iter()
            .all(|d| d.clue == LetterClue::Correct)
    );
    assert_eq!(outcome.revealed_answer.as_ref().map(Word::text), Some("apple"));
    assert_eq!(game.state(), RoundState::Won);
}

#[test]
fn shared_e_is_credited_once() {
    let mut game = single_answer_game("amend", GameConfig::default().with_seed(3));
    let outcome = game.evaluate_guess("pique").unwrap();

    let clues: Vec<LetterClue> = outcome.letter_clues.iter().map(|d| d.clue).collect();
    assert_eq!(
        clues,
        [
            LetterClue::Absent,
            LetterClue::Absent,
            LetterClue::Absent,
            LetterClue::Absent,
            LetterClue::Elsewhere,
        ]
    );
}

#[test]
fn illegal_guesses_are_free() {
    let mut game = single_answer_game("robot", GameConfig::default().with_seed(3));

    for guess in ["zzzzz", "rob", "rob0t", "toolong", ""] {
        let outcome = game.evaluate_guess(guess).unwrap();
        assert!(outcome.is_rejected(), "{guess} should be rejected");
        assert!(outcome.letter_clues.is_empty());
        assert!(!outcome.round_over);
        assert_eq!(outcome.attempts_remaining, 6);
    }

    assert_eq!(
        game.evaluate_guess("zzzzz").unwrap().rejection,
        Some(Rejection::NotInDictionary)
    );
    assert!(matches!(
        game.evaluate_guess("rob").unwrap().rejection,
        Some(Rejection::Malformed(_))
    ));
    assert_eq!(game.attempts_remaining(), 6);
    assert!(game.history().is_empty());
}

#[test]
fn six_misses_lose_and_lock_the_round() {
    let mut game = single_answer_game("robot", GameConfig::default().with_seed(3));

    for n in 1..=5 {
        let outcome = game.evaluate_guess("crane").unwrap();
        assert!(!outcome.round_over);
        assert_eq!(usize::from(outcome.attempts_remaining), 6 - n);
    }

    let last = game.evaluate_guess("slate").unwrap();
    assert!(last.round_over);
    assert!(!last.won);
    assert!(last.letter_clues.is_empty());
    assert_eq!(last.revealed_answer.as_ref().map(Word::text), Some("robot"));

    assert!(matches!(
        game.evaluate_guess("robot"),
        Err(GameError::RoundNotActive(RoundState::Lost))
    ));
    assert_eq!(game.statistics().rounds_played, 1);
    assert_eq!(game.statistics().rounds_won, 0);
}

#[test]
fn consecutive_rounds_never_repeat_the_answer() {
    for mode in [SelectionMode::default(), SelectionMode::Shuffled] {
        let config = GameConfig {
            selection: mode,
            ..GameConfig::default().with_seed(11)
        };
        let mut game =
            GuessEvaluator::new(words(&["robot", "crane"]), Vec::new(), config).unwrap();

        game.start_round().unwrap();
        let first = game.secret_answer().cloned().unwrap();
        game.start_round().unwrap();
        let second = game.secret_answer().cloned().unwrap();

        assert_ne!(first, second);
        assert!(matches!(
            game.start_round(),
            Err(GameError::CorpusExhausted { used: 2 })
        ));
    }
}

#[test]
fn embedded_lists_play_a_full_session() {
    let source = EmbeddedSource;
    let config = GameConfig::default().with_seed(2024);
    let answers = source.answers(config.word_length).unwrap();
    let dictionary = source.dictionary(config.word_length).unwrap();
    let mut game = GuessEvaluator::new(answers, dictionary, config).unwrap();

    let mut seen = Vec::new();
    for _ in 0..20 {
        game.start_round().unwrap();
        let answer = game.secret_answer().cloned().unwrap();
        assert!(!seen.contains(&answer));

        let outcome = game.evaluate_guess(answer.text()).unwrap();
        assert!(outcome.won);
        seen.push(answer);
    }

    let stats = game.statistics();
    assert_eq!(stats.rounds_won, 20);
    assert_eq!(stats.best_streak, 20);
    assert_eq!(stats.guess_distribution.get(1).copied(), Some(20));
}
