//! Guess selection strategies
//!
//! A strategy may claim a turn before the composite score is consulted. The
//! selector falls back to the composite argmax whenever the strategy declines.

use super::context::Context;
use crate::core::{Feedback, Pattern, Word, letter_index};
use log::debug;

/// What a strategy sees of the current turn
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a, 'b> {
    /// Remaining candidates, in dictionary order
    pub candidates: &'b [&'a Word],
    /// Feedback received for the previous guess
    pub last_pattern: Option<Pattern>,
    /// Guesses left including this one
    pub remaining_guesses: usize,
    /// True on the first turn, while the candidates are the full dictionary
    pub opening: bool,
    /// Words that must not be suggested again
    pub excluded: &'b [&'a Word],
}

impl<'a, 'b> TurnView<'a, 'b> {
    /// View of the first turn of a game
    #[must_use]
    pub const fn opening(candidates: &'b [&'a Word], remaining_guesses: usize) -> Self {
        Self {
            candidates,
            last_pattern: None,
            remaining_guesses,
            opening: true,
            excluded: &[],
        }
    }
}

/// Strategy consulted ahead of the composite score
pub trait Strategy: Sync {
    /// Return a guess to override the composite choice, or `None` to decline
    fn probe<'a>(&self, ctx: &'a Context, turn: &TurnView<'a, '_>) -> Option<&'a Word>;
}

/// Enum wrapper for the available strategies
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Always defer to the composite score
    #[default]
    Composite,
    /// Probe for the ambiguous letter when one slot is left open
    Disambiguation(DisambiguationStrategy),
}

impl Strategy for StrategyType {
    fn probe<'a>(&self, ctx: &'a Context, turn: &TurnView<'a, '_>) -> Option<&'a Word> {
        match self {
            Self::Composite => None,
            Self::Disambiguation(s) => s.probe(ctx, turn),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "composite", "disambiguate", "disambiguation".
    /// Defaults to composite if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "disambiguate" | "disambiguation" => {
                Self::Disambiguation(DisambiguationStrategy::default())
            }
            "composite" => Self::Composite,
            other => {
                log::warn!("Unknown strategy '{other}', using composite");
                Self::Composite
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Composite => "composite",
            Self::Disambiguation(_) => "disambiguation",
        }
    }
}

/// Spend a guess on a probe word when every slot but one is solved
///
/// With L−1 Correct and one Absent slot, the remaining candidates differ only
/// in that slot. Guessing them one by one can run out of guesses, so the probe
/// picks the dictionary word that tests the most of those letters at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisambiguationStrategy {
    /// Only probe while at least this many guesses remain
    pub min_remaining_guesses: usize,
    /// Minimum number of ambiguous letters the probe must cover
    pub min_coverage: u32,
}

impl Default for DisambiguationStrategy {
    fn default() -> Self {
        Self {
            min_remaining_guesses: 3,
            min_coverage: 2,
        }
    }
}

impl DisambiguationStrategy {
    /// Slot left open by the last pattern, if it has exactly one Absent and
    /// every other position Correct
    fn open_slot(pattern: Pattern) -> Option<usize> {
        let len = pattern.len();
        if len == 0
            || pattern.count(Feedback::Correct) != len - 1
            || pattern.count(Feedback::Absent) != 1
        {
            return None;
        }
        (0..len).find(|&i| pattern.at(i) == Feedback::Absent)
    }
}

impl Strategy for DisambiguationStrategy {
    fn probe<'a>(&self, ctx: &'a Context, turn: &TurnView<'a, '_>) -> Option<&'a Word> {
        let slot = Self::open_slot(turn.last_pattern?)?;

        if turn.candidates.len() <= turn.remaining_guesses
            || turn.remaining_guesses < self.min_remaining_guesses
        {
            return None;
        }

        let open_letters = turn
            .candidates
            .iter()
            .fold(0u32, |mask, w| mask | (1 << letter_index(w.char_at(slot))));

        let (probe, coverage) = ctx
            .words()
            .iter()
            .filter(|w| !turn.excluded.contains(w))
            .map(|w| (w, (w.letter_mask() & open_letters).count_ones()))
            .max_by(|(w1, c1), (w2, c2)| c1.cmp(c2).then_with(|| w2.cmp(w1)))?;

        if coverage < self.min_coverage {
            return None;
        }

        debug!(
            "Probing with '{probe}' covering {coverage} of {} open letters at slot {slot}",
            open_letters.count_ones()
        );
        Some(probe)
    }
}
