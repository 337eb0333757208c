//! Batch simulation
//!
//! Plays many independent games in parallel. Each game owns its candidate set
//! and reads only the shared context, so games never contend.

use super::context::Context;
use super::game::{ExhaustReason, Game, GameRecord};
use super::selector::GuessSelector;
use super::strategy::Strategy;
use crate::core::Word;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Play one game per answer, in parallel, returning records in answer order
pub fn play_answers<S: Strategy>(
    ctx: &Context,
    selector: &GuessSelector<S>,
    answers: &[&Word],
) -> Vec<GameRecord> {
    answers
        .par_iter()
        .map(|&answer| Game::with_answer(ctx, selector, answer).play())
        .collect()
}

/// Play `num_games` games on answers drawn uniformly with replacement
///
/// Game `i` draws its answer from a `SmallRng` seeded with `seed + i`, so a
/// batch is reproducible regardless of thread count.
pub fn simulate_batch<S: Strategy>(
    ctx: &Context,
    selector: &GuessSelector<S>,
    num_games: usize,
    seed: u64,
) -> Vec<GameRecord> {
    simulate_batch_with(ctx, selector, num_games, seed, |_| {})
}

/// `simulate_batch`, calling `on_game` from the worker thread as each game
/// finishes
pub fn simulate_batch_with<S, F>(
    ctx: &Context,
    selector: &GuessSelector<S>,
    num_games: usize,
    seed: u64,
    on_game: F,
) -> Vec<GameRecord>
where
    S: Strategy,
    F: Fn(&GameRecord) + Sync,
{
    let words = ctx.words();
    (0..num_games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let answer = &words[rng.random_range(0..words.len())];
            let record = Game::with_answer(ctx, selector, answer).play();
            on_game(&record);
            record
        })
        .collect()
}

/// Mean attempts over successful games; `INFINITY` when none succeeded
#[must_use]
pub fn average_attempts(records: &[GameRecord]) -> f64 {
    let (sum, solved) = records
        .iter()
        .filter(|r| r.is_success())
        .fold((0usize, 0usize), |(sum, n), r| (sum + r.attempts, n + 1));

    if solved == 0 {
        f64::INFINITY
    } else {
        sum as f64 / solved as f64
    }
}

/// Aggregate statistics over a batch of games
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub total_games: usize,
    pub solved: usize,
    pub out_of_guesses: usize,
    pub no_candidates: usize,
    /// Mean attempts over solved games
    pub average_attempts: f64,
    /// `guess_distribution[k]`: games solved in `k + 1` guesses
    pub guess_distribution: Vec<usize>,
}

impl SimulationSummary {
    #[must_use]
    pub fn from_records(records: &[GameRecord], max_guesses: usize) -> Self {
        let mut guess_distribution = vec![0; max_guesses];
        let mut out_of_guesses = 0;
        let mut no_candidates = 0;

        for record in records {
            match record.exhausted {
                Some(ExhaustReason::OutOfGuesses) => out_of_guesses += 1,
                Some(ExhaustReason::NoCandidates) => no_candidates += 1,
                None => {
                    if let Some(slot) = guess_distribution.get_mut(record.attempts.saturating_sub(1)) {
                        *slot += 1;
                    }
                }
            }
        }

        Self {
            total_games: records.len(),
            solved: records.iter().filter(|r| r.is_success()).count(),
            out_of_guesses,
            no_candidates,
            average_attempts: average_attempts(records),
            guess_distribution,
        }
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.out_of_guesses + self.no_candidates
    }

    /// Fraction of games solved
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_games as f64
        }
    }
}
