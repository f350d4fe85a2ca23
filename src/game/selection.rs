//! Secret answer selection
//!
//! Defines the `AnswerSelector` trait and the two concrete pickers. Both
//! terminate: they return `None` once no unused word remains.

use super::config::SelectionMode;
use crate::core::Word;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use tracing::warn;

/// A strategy for picking the next secret answer
pub trait AnswerSelector {
    /// Pick the index of a corpus word that is not in `used`
    ///
    /// Returns `None` when every corpus word has been used.
    fn select<R: Rng>(
        &mut self,
        corpus: &[Word],
        used: &FxHashSet<Word>,
        rng: &mut R,
    ) -> Option<usize>;
}

/// Enum wrapper over the selectors
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum Selector {
    Sampling(RejectionSampler),
    Shuffled(ShuffledDeck),
}

impl From<SelectionMode> for Selector {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Sampling { max_retries } => {
                Self::Sampling(RejectionSampler::new(max_retries))
            }
            SelectionMode::Shuffled => Self::Shuffled(ShuffledDeck::default()),
        }
    }
}

impl AnswerSelector for Selector {
    fn select<R: Rng>(
        &mut self,
        corpus: &[Word],
        used: &FxHashSet<Word>,
        rng: &mut R,
    ) -> Option<usize> {
        match self {
            Self::Sampling(s) => s.select(corpus, used, rng),
            Self::Shuffled(s) => s.select(corpus, used, rng),
        }
    }
}

/// Uniform rejection sampling with a retry cap
///
/// After `max_retries` misses the pick is made uniformly among the words
/// still unused, so the result stays uniform and the loop always ends.
#[derive(Debug, Clone)]
pub struct RejectionSampler {
    pub max_retries: usize,
}

impl RejectionSampler {
    #[must_use]
    pub const fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }
}

impl AnswerSelector for RejectionSampler {
    fn select<R: Rng>(
        &mut self,
        corpus: &[Word],
        used: &FxHashSet<Word>,
        rng: &mut R,
    ) -> Option<usize> {
        if corpus.is_empty() {
            return None;
        }

        for _ in 0..self.max_retries {
            let index = rng.random_range(0..corpus.len());
            if !used.contains(&corpus[index]) {
                return Some(index);
            }
        }

        let remaining: Vec<usize> = (0..corpus.len())
            .filter(|&i| !used.contains(&corpus[i]))
            .collect();

        if !remaining.is_empty() {
            warn!(
                retries = self.max_retries,
                remaining = remaining.len(),
                "rejection sampling hit its retry cap, picking from unused words"
            );
        }

        remaining.choose(rng).copied()
    }
}

/// Shuffle-and-pop over a copy of the corpus indices
///
/// The deck is dealt lazily on first use and never refilled.
#[derive(Debug, Clone, Default)]
pub struct ShuffledDeck {
    deck: Option<Vec<usize>>,
}

impl ShuffledDeck {
    /// Cards left in the deck, `None` before the first deal
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        self.deck.as_ref().map(Vec::len)
    }
}

impl AnswerSelector for ShuffledDeck {
    fn select<R: Rng>(
        &mut self,
        corpus: &[Word],
        used: &FxHashSet<Word>,
        rng: &mut R,
    ) -> Option<usize> {
        let deck = self.deck.get_or_insert_with(|| {
            let mut indices: Vec<usize> = (0..corpus.len()).collect();
            indices.shuffle(rng);
            indices
        });

        while let Some(index) = deck.pop() {
            if !used.contains(&corpus[index]) {
                return Some(index);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn sampler_skips_used_words() {
        let words = corpus(&["crane", "slate", "robot"]);
        let used: FxHashSet<Word> = words[..2].iter().cloned().collect();
        let mut rng = StdRng::seed_from_u64(7);

        let mut sampler = RejectionSampler::new(100);
        for _ in 0..20 {
            assert_eq!(sampler.select(&words, &used, &mut rng), Some(2));
        }
    }

    #[test]
    fn sampler_falls_back_when_retries_run_out() {
        let words = corpus(&["crane", "slate", "robot", "apple"]);
        let used: FxHashSet<Word> = words[..3].iter().cloned().collect();
        let mut rng = StdRng::seed_from_u64(1);

        // Zero retries forces the filtered pick every time
        let mut sampler = RejectionSampler::new(0);
        assert_eq!(sampler.select(&words, &used, &mut rng), Some(3));
    }

    #[test]
    fn sampler_reports_exhaustion() {
        let words = corpus(&["crane", "slate"]);
        let used: FxHashSet<Word> = words.iter().cloned().collect();
        let mut rng = StdRng::seed_from_u64(3);

        let mut sampler = RejectionSampler::new(10);
        assert_eq!(sampler.select(&words, &used, &mut rng), None);
        assert_eq!(sampler.select(&[], &used, &mut rng), None);
    }

    #[test]
    fn deck_deals_every_word_once() {
        let words = corpus(&["crane", "slate", "robot", "apple", "amend"]);
        let used = FxHashSet::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = ShuffledDeck::default();
        assert_eq!(deck.remaining(), None);

        let mut dealt: Vec<usize> = (0..words.len())
            .map(|_| deck.select(&words, &used, &mut rng).unwrap())
            .collect();
        dealt.sort_unstable();

        assert_eq!(dealt, [0, 1, 2, 3, 4]);
        assert_eq!(deck.remaining(), Some(0));
        assert_eq!(deck.select(&words, &used, &mut rng), None);
    }

    #[test]
    fn deck_skips_used_words() {
        let words = corpus(&["crane", "slate", "robot"]);
        let used: FxHashSet<Word> = [words[0].clone(), words[2].clone()].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(5);
        let mut deck = ShuffledDeck::default();

        assert_eq!(deck.select(&words, &used, &mut rng), Some(1));
        assert_eq!(deck.select(&words, &used, &mut rng), None);
    }

    #[test]
    fn selector_from_mode() {
        assert!(matches!(
            Selector::from(SelectionMode::Sampling { max_retries: 3 }),
            Selector::Sampling(RejectionSampler { max_retries: 3 })
        ));
        assert!(matches!(
            Selector::from(SelectionMode::Shuffled),
            Selector::Shuffled(_)
        ));
    }
}
