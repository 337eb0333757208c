//! Simulated games
//!
//! A `Game` plays the selector against a known answer, one state transition
//! per `step()`:
//!
//! ```text
//! Start → Selecting → Scoring → Solved
//!                        ↓
//!                    Filtering → Selecting
//! ```
//!
//! `Exhausted` ends the game when the guess budget runs out or no candidate
//! is consistent with the feedback.

use super::context::Context;
use super::entropy::calculate_entropy;
use super::filter::retain_consistent;
use super::selector::GuessSelector;
use super::strategy::{Strategy, TurnView};
use crate::core::{Pattern, Word};
use crate::error::EngineError;
use log::debug;
use std::fmt;

/// Why a game ended unsolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExhaustReason {
    OutOfGuesses,
    NoCandidates,
}

impl fmt::Display for ExhaustReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfGuesses => write!(f, "out of guesses"),
            Self::NoCandidates => write!(f, "no candidates left"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    Selecting,
    Scoring,
    Filtering,
    Solved,
    Exhausted(ExhaustReason),
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted(_))
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub answer: String,
    pub guesses: Vec<String>,
    /// Guesses used on success, 0 on failure
    pub attempts: usize,
    pub exhausted: Option<ExhaustReason>,
}

impl GameRecord {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.attempts > 0
    }

    /// Simulation log fields: answer, `max_guesses` guesses padded blank,
    /// attempts
    #[must_use]
    pub fn log_fields(&self, max_guesses: usize) -> Vec<String> {
        let mut fields = Vec::with_capacity(max_guesses + 2);
        fields.push(self.answer.clone());
        fields.extend((0..max_guesses).map(|i| self.guesses.get(i).cloned().unwrap_or_default()));
        fields.push(self.attempts.to_string());
        fields
    }
}

/// One completed guess, as reported by `Game::take_turn`
#[derive(Debug, Clone, Copy)]
pub struct TurnSummary<'a> {
    pub guess: &'a Word,
    pub pattern: Pattern,
    /// Entropy of the guess against the candidates it was chosen from
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A game against a known answer
pub struct Game<'a, 's, S: Strategy> {
    ctx: &'a Context,
    selector: &'s GuessSelector<S>,
    answer: &'a Word,
    candidates: Vec<&'a Word>,
    history: Vec<(&'a Word, Pattern)>,
    pending: Option<&'a Word>,
    state: GameState,
}

impl<'a, 's, S: Strategy> Game<'a, 's, S> {
    /// Start a game whose answer is the dictionary word `answer`
    ///
    /// # Errors
    /// Returns `EngineError::UnknownAnswer` if `answer` is not in the
    /// dictionary.
    pub fn new(
        ctx: &'a Context,
        selector: &'s GuessSelector<S>,
        answer: &str,
    ) -> Result<Self, EngineError> {
        let answer = ctx
            .find(answer)
            .ok_or_else(|| EngineError::UnknownAnswer(answer.to_string()))?;
        Ok(Self::with_answer(ctx, selector, answer))
    }

    /// Start a game for an answer already borrowed from `ctx`
    pub(crate) const fn with_answer(
        ctx: &'a Context,
        selector: &'s GuessSelector<S>,
        answer: &'a Word,
    ) -> Self {
        Self {
            ctx,
            selector,
            answer,
            candidates: Vec::new(),
            history: Vec::new(),
            pending: None,
            state: GameState::Start,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn answer(&self) -> &'a Word {
        self.answer
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Guesses made so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(&'a Word, Pattern)] {
        &self.history
    }

    fn remaining_guesses(&self) -> usize {
        self.ctx.config().max_guesses.saturating_sub(self.history.len())
    }

    /// Perform one transition and return the new state
    ///
    /// Terminal states are returned unchanged.
    pub fn step(&mut self) -> GameState {
        self.state = match self.state {
            GameState::Start => {
                self.candidates = self.ctx.candidates();
                GameState::Selecting
            }
            GameState::Selecting => self.select(),
            GameState::Scoring => self.score(),
            GameState::Filtering => {
                if let Some(&(guess, pattern)) = self.history.last() {
                    self.candidates = retain_consistent(&self.candidates, guess, pattern);
                }
                GameState::Selecting
            }
            terminal @ (GameState::Solved | GameState::Exhausted(_)) => terminal,
        };
        self.state
    }

    fn select(&mut self) -> GameState {
        if self.candidates.is_empty() {
            return GameState::Exhausted(ExhaustReason::NoCandidates);
        }
        if self.remaining_guesses() == 0 {
            return GameState::Exhausted(ExhaustReason::OutOfGuesses);
        }

        let turn = TurnView {
            candidates: &self.candidates,
            last_pattern: self.history.last().map(|&(_, p)| p),
            remaining_guesses: self.remaining_guesses(),
            opening: self.history.is_empty(),
            excluded: &[],
        };

        match self.selector.select(self.ctx, &turn) {
            Some(guess) => {
                self.pending = Some(guess);
                GameState::Scoring
            }
            None => GameState::Exhausted(ExhaustReason::NoCandidates),
        }
    }

    fn score(&mut self) -> GameState {
        let Some(guess) = self.pending.take() else {
            return GameState::Selecting;
        };

        let pattern = Pattern::calculate(guess, self.answer);
        self.history.push((guess, pattern));
        debug!(
            "[{}] guess {} '{guess}' -> {pattern}",
            self.answer,
            self.history.len()
        );

        if pattern.is_solved() {
            GameState::Solved
        } else if self.remaining_guesses() == 0 {
            GameState::Exhausted(ExhaustReason::OutOfGuesses)
        } else {
            GameState::Filtering
        }
    }

    /// Advance through one full guess and report it
    ///
    /// Returns `None` once the game is over.
    pub fn take_turn(&mut self) -> Option<TurnSummary<'a>> {
        while !matches!(self.state, GameState::Scoring) {
            if self.state.is_terminal() {
                return None;
            }
            self.step();
        }

        let candidates_before = self.candidates.len();
        let entropy = self
            .pending
            .map_or(0.0, |guess| calculate_entropy(guess, &self.candidates));

        if self.step() == GameState::Filtering {
            self.step();
        }

        let &(guess, pattern) = self.history.last()?;
        // the last guess of an exhausted game skips Filtering, so count here
        let candidates_after = match self.state {
            GameState::Solved => 1,
            GameState::Exhausted(ExhaustReason::OutOfGuesses) => {
                retain_consistent(&self.candidates, guess, pattern).len()
            }
            _ => self.candidates.len(),
        };

        Some(TurnSummary {
            guess,
            pattern,
            entropy,
            candidates_before,
            candidates_after,
        })
    }

    /// Run to a terminal state
    #[must_use]
    pub fn play(mut self) -> GameRecord {
        while !self.state.is_terminal() {
            self.step();
        }
        self.record()
    }

    /// Snapshot of the game so far
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            answer: self.answer.text().to_string(),
            guesses: self.history.iter().map(|(w, _)| w.text().to_string()).collect(),
            attempts: if self.state == GameState::Solved {
                self.history.len()
            } else {
                0
            },
            exhausted: match self.state {
                GameState::Exhausted(reason) => Some(reason),
                _ => None,
            },
        }
    }
}
