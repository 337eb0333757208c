//! Interactive session
//!
//! The player enters the engine's suggestion in a real game and reports the
//! feedback back. Nothing is known about the answer, so the candidate set is
//! narrowed purely from the reported patterns.

use super::context::Context;
use super::filter::retain_consistent;
use super::game::ExhaustReason;
use super::selector::GuessSelector;
use super::strategy::{Strategy, TurnView};
use crate::core::{Pattern, Word};
use crate::error::EngineError;
use log::{debug, info};

/// Input that rejects the current suggestion, e.g. when the game does not
/// accept the word
pub const REJECT_SENTINEL: &str = "n";

/// Result of submitting feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Solved { guesses: usize },
    Exhausted(ExhaustReason),
}

impl SessionStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// A live game driven by user feedback
pub struct Session<'a, 's, S: Strategy> {
    ctx: &'a Context,
    selector: &'s GuessSelector<S>,
    candidates: Vec<&'a Word>,
    history: Vec<(&'a Word, Pattern)>,
    rejected: Vec<&'a Word>,
    suggestion: Option<&'a Word>,
    status: SessionStatus,
}

impl<'a, 's, S: Strategy> Session<'a, 's, S> {
    #[must_use]
    pub fn new(ctx: &'a Context, selector: &'s GuessSelector<S>) -> Self {
        Self {
            ctx,
            selector,
            candidates: ctx.candidates(),
            history: Vec::new(),
            rejected: Vec::new(),
            suggestion: None,
            status: SessionStatus::Continue,
        }
    }

    /// Guesses consumed so far, rejected suggestions included
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len() + self.rejected.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.ctx.config().max_guesses.saturating_sub(self.guesses_used())
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[(&'a Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// The word to play next
    ///
    /// Repeated calls return the same word until feedback is submitted.
    ///
    /// # Errors
    /// Returns `EngineError::SessionOver` once the session has ended.
    pub fn suggest(&mut self) -> Result<&'a Word, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::SessionOver);
        }
        if let Some(word) = self.suggestion {
            return Ok(word);
        }

        let turn = TurnView {
            candidates: &self.candidates,
            last_pattern: self.history.last().map(|&(_, p)| p),
            remaining_guesses: self.remaining_guesses(),
            opening: self.history.is_empty() && self.rejected.is_empty(),
            excluded: &self.rejected,
        };

        let word = self
            .selector
            .select(self.ctx, &turn)
            .ok_or(EngineError::SessionOver)?;
        self.suggestion = Some(word);
        Ok(word)
    }

    /// Report feedback for the current suggestion
    ///
    /// `input` is a pattern such as `GYBBG` or the reject sentinel `N`, which
    /// drops the suggestion from the candidates and still costs a guess.
    ///
    /// # Errors
    /// - `SessionOver` once the session has ended
    /// - `InvalidPattern` for malformed feedback; the session is unchanged
    pub fn submit(&mut self, input: &str) -> Result<SessionStatus, EngineError> {
        let guess = self.suggest()?;

        if input.trim().eq_ignore_ascii_case(REJECT_SENTINEL) {
            info!("Suggestion '{guess}' rejected");
            self.candidates.retain(|&w| w != guess);
            self.rejected.push(guess);
        } else {
            let pattern = Pattern::parse(input, self.ctx.word_len())?;
            self.history.push((guess, pattern));

            if pattern.is_solved() {
                self.suggestion = None;
                self.status = SessionStatus::Solved {
                    guesses: self.guesses_used(),
                };
                return Ok(self.status);
            }

            self.candidates = retain_consistent(&self.candidates, guess, pattern);
            debug!(
                "'{guess}' -> {pattern}: {} candidates remain",
                self.candidates.len()
            );
        }

        self.suggestion = None;
        self.status = if self.candidates.is_empty() {
            SessionStatus::Exhausted(ExhaustReason::NoCandidates)
        } else if self.remaining_guesses() == 0 {
            SessionStatus::Exhausted(ExhaustReason::OutOfGuesses)
        } else {
            SessionStatus::Continue
        };
        Ok(self.status)
    }
}
