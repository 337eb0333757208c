//! Word analysis command
//!
//! Breaks down the composite score of a word as an opening guess against the
//! full dictionary.

use crate::core::Word;
use crate::error::EngineError;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{CompositeScorer, Context, FrequencySnapshot, ScoreBreakdown};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub breakdown: ScoreBreakdown,
    pub metrics: GuessMetrics,
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// 1-based position among all dictionary words by composite score, when
    /// an opening entropy table is available
    pub rank: Option<usize>,
}

/// Analyze `word` as an opening guess
///
/// The word need not be in the dictionary but must have the dictionary's
/// length.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The word length differs from the dictionary's
pub fn analyze_word(
    ctx: &Context,
    scorer: &CompositeScorer,
    word: &str,
) -> Result<AnalysisResult, EngineError> {
    let word = Word::new(word.trim())?;
    if word.len() != ctx.word_len() {
        return Err(EngineError::LengthMismatch {
            word: word.text().to_string(),
            expected: ctx.word_len(),
            found: word.len(),
        });
    }

    let candidates = ctx.candidates();
    let snapshot = FrequencySnapshot::from_candidates(&candidates);
    let metrics = calculate_metrics(&word, &candidates);
    let breakdown = scorer.breakdown(&word, &snapshot, metrics.entropy);

    let rank = ctx.opening_entropy().map(|table| {
        1 + candidates
            .iter()
            .filter(|w| scorer.score(w, &snapshot, table.get(w)) > breakdown.total)
            .count()
    });

    Ok(AnalysisResult {
        word: word.text().to_string(),
        breakdown,
        metrics,
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: candidates.len(),
        rank,
    })
}
