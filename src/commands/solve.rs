//! Word solving command
//!
//! Plays one game against a known target and records every turn.

use crate::core::Pattern;
use crate::error::EngineError;
use crate::solver::{Context, ExhaustReason, Game, GuessSelector, Strategy};

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub exhausted: Option<ExhaustReason>,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Solve `target` with the given selector
///
/// # Errors
///
/// Returns `EngineError::UnknownAnswer` if the target is not in the
/// dictionary.
pub fn solve_word<S: Strategy>(
    ctx: &Context,
    selector: &GuessSelector<S>,
    target: &str,
) -> Result<SolveResult, EngineError> {
    let mut game = Game::new(ctx, selector, target)?;
    let mut guesses = Vec::new();

    while let Some(turn) = game.take_turn() {
        guesses.push(GuessStep {
            word: turn.guess.text().to_string(),
            pattern: turn.pattern,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
            entropy: turn.entropy,
            expected_remaining: turn.candidates_before as f64 / turn.entropy.exp2(),
        });
    }

    let record = game.record();
    let success = record.is_success();
    Ok(SolveResult {
        target: record.answer,
        success,
        exhausted: record.exhausted,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EngineConfig, ScoreWeights, StrategyType};
    use rustc_hash::FxHashMap;

    fn selector() -> GuessSelector {
        GuessSelector::new(ScoreWeights::default(), 1.5, StrategyType::Composite)
    }

    #[test]
    fn solve_word_succeeds() {
        let ctx = Context::from_words(&["crane", "crone", "trace"]).unwrap();
        let result = solve_word(&ctx, &selector(), "CRONE").unwrap();

        assert!(result.success);
        assert_eq!(result.target, "crone");
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.guesses[0].word, "crane");
        assert_eq!(result.guesses[0].pattern.to_string(), "GGBGG");
        assert!(result.guesses[1].pattern.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let ctx = Context::from_words(&[
            "crane", "crate", "trace", "slate", "irate", "grate", "speed", "abide", "erase",
        ])
        .unwrap();
        let result = solve_word(&ctx, &selector(), "grate").unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.expected_remaining <= step.candidates_before as f64);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let ctx = Context::from_words(&["crane", "crone"]).unwrap();
        assert!(matches!(
            solve_word(&ctx, &selector(), "zzzzz"),
            Err(EngineError::UnknownAnswer(_))
        ));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let words = ["batch", "catch", "hatch", "latch", "match", "patch"]
            .iter()
            .map(|w| crate::core::Word::new(*w).unwrap())
            .collect();
        let config = EngineConfig {
            max_guesses: 3,
            ..EngineConfig::default()
        };
        let ctx = Context::new(words, FxHashMap::default(), config).unwrap();
        let result = solve_word(&ctx, &selector(), "patch").unwrap();

        assert!(!result.success);
        assert_eq!(result.target, "patch");
        assert_eq!(result.guesses.len(), 3);
        assert_eq!(result.exhausted, Some(ExhaustReason::OutOfGuesses));
    }
}
