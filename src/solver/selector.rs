//! Guess selection
//!
//! Gives the strategy first refusal, then takes the argmax of the composite
//! score over the live candidates.

use super::context::Context;
use super::entropy::EntropyTable;
use super::frequency::FrequencySnapshot;
use super::scoring::{CompositeScorer, ScoreWeights};
use super::strategy::{Strategy, StrategyType, TurnView};
use crate::core::Word;
use log::debug;
use rayon::prelude::*;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Picks the next guess under fixed weights and a strategy
#[derive(Debug, Clone)]
pub struct GuessSelector<S: Strategy = StrategyType> {
    scorer: CompositeScorer,
    strategy: S,
}

impl<S: Strategy> GuessSelector<S> {
    #[must_use]
    pub const fn new(weights: ScoreWeights, uniqueness_exponent: f64, strategy: S) -> Self {
        Self {
            scorer: CompositeScorer::new(weights, uniqueness_exponent),
            strategy,
        }
    }

    /// Selector using the context's uniqueness exponent
    #[must_use]
    pub const fn for_context(ctx: &Context, weights: ScoreWeights, strategy: S) -> Self {
        Self::new(weights, ctx.config().uniqueness_exponent, strategy)
    }

    #[must_use]
    pub const fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Choose the next guess
    ///
    /// Returns `None` only when there are no candidates.
    ///
    /// # Examples
    /// ```
    /// use wordle_calibrator::solver::{Context, GuessSelector, ScoreWeights, StrategyType, TurnView};
    ///
    /// let ctx = Context::from_words(&["crane", "crone", "trace"]).unwrap();
    /// let selector = GuessSelector::for_context(&ctx, ScoreWeights::default(), StrategyType::Composite);
    /// let candidates = ctx.candidates();
    ///
    /// let guess = selector.select(&ctx, &TurnView::opening(&candidates, 6));
    /// assert_eq!(guess.map(|w| w.text()), Some("crane"));
    /// ```
    pub fn select<'a>(&self, ctx: &'a Context, turn: &TurnView<'a, '_>) -> Option<&'a Word> {
        if turn.candidates.is_empty() {
            return None;
        }

        if let Some(probe) = self.strategy.probe(ctx, turn) {
            return Some(probe);
        }

        if let [only] = turn.candidates {
            return Some(*only);
        }

        let snapshot = FrequencySnapshot::from_candidates(turn.candidates);
        let entropy = self.entropy_for(ctx, turn);

        let (best, score) = self.best_scoring(ctx, turn.candidates, &snapshot, &entropy)?;
        debug!(
            "Selected '{best}' (score {score:.4}) from {} candidates",
            turn.candidates.len()
        );
        Some(best)
    }

    /// Entropy scores for this turn
    ///
    /// The opening table is reused on the first turn; later turns score the
    /// candidates against themselves. Nothing is computed when entropy carries
    /// no weight.
    fn entropy_for<'t>(&self, ctx: &'t Context, turn: &TurnView<'_, '_>) -> Cow<'t, EntropyTable> {
        if self.scorer.weights().entropy() <= 0.0 {
            return Cow::Owned(EntropyTable::default());
        }

        match ctx.opening_entropy() {
            Some(table) if turn.opening => Cow::Borrowed(table),
            _ => Cow::Owned(EntropyTable::compute(turn.candidates, turn.candidates)),
        }
    }

    /// Highest-scoring candidate and its score
    ///
    /// Ties go to the lexically smallest word, or first to the higher usage
    /// frequency when the context prefers common words.
    pub fn best_scoring<'a>(
        &self,
        ctx: &Context,
        candidates: &[&'a Word],
        snapshot: &FrequencySnapshot,
        entropy: &EntropyTable,
    ) -> Option<(&'a Word, f64)> {
        candidates
            .par_iter()
            .map(|&word| (word, self.scorer.score(word, snapshot, entropy.get(word))))
            .max_by(|a, b| prefer(ctx, *a, *b))
    }
}

/// Order two scored words so the preferred one compares greater
fn prefer(ctx: &Context, (w1, s1): (&Word, f64), (w2, s2): (&Word, f64)) -> Ordering {
    s1.total_cmp(&s2)
        .then_with(|| {
            if ctx.config().prefer_common_words {
                ctx.frequency(w1).cmp(&ctx.frequency(w2))
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| w2.cmp(w1))
}
