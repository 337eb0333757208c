//! Candidate filtering
//!
//! A candidate survives a turn when guessing the same word against it would
//! have produced the observed pattern. The feedback calculation is the only
//! definition of consistency.

use crate::core::{Pattern, Word};
use crate::error::EngineError;

/// Keep the candidates consistent with `pattern` observed for `guess`
///
/// Returns a new vector in the input order; `candidates` is untouched.
///
/// # Errors
/// - `InvalidPattern` if the pattern length differs from the guess length
/// - `LengthMismatch` if a candidate has a different length than the guess
///
/// # Examples
/// ```
/// use wordle_calibrator::core::{Pattern, Word};
/// use wordle_calibrator::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "crone", "trace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
/// let pattern = Pattern::parse("GGBGG", 5).unwrap();
///
/// let remaining = filter_candidates(&candidates, &words[0], pattern).unwrap();
/// assert_eq!(remaining, vec![&words[1]]);
/// ```
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    pattern: Pattern,
) -> Result<Vec<&'a Word>, EngineError> {
    if pattern.len() != guess.len() {
        return Err(EngineError::InvalidPattern {
            input: pattern.to_string(),
            reason: format!(
                "pattern has {} positions but the guess has {} letters",
                pattern.len(),
                guess.len()
            ),
        });
    }

    if let Some(other) = candidates.iter().find(|w| w.len() != guess.len()) {
        return Err(EngineError::LengthMismatch {
            word: other.text().to_string(),
            expected: guess.len(),
            found: other.len(),
        });
    }

    Ok(retain_consistent(candidates, guess, pattern))
}

/// Filter without length checks, for callers that built the candidates from
/// a validated context
pub(crate) fn retain_consistent<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    pattern: Pattern,
) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn keeps_only_consistent_candidates() {
        let dict = words(&["crane", "crone", "trace", "slate"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let guess = Word::new("crane").unwrap();
        let pattern = Pattern::calculate(&guess, &dict[1]);

        let remaining = filter_candidates(&candidates, &guess, pattern).unwrap();
        assert_eq!(remaining, vec![&dict[1]]);
    }

    #[test]
    fn answer_always_survives() {
        let dict = words(&["speed", "abide", "erase", "steep", "geese"]);
        let candidates: Vec<&Word> = dict.iter().collect();

        for guess in &dict {
            for answer in &dict {
                let pattern = Pattern::calculate(guess, answer);
                let remaining = filter_candidates(&candidates, guess, pattern).unwrap();
                assert!(remaining.contains(&answer));
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let dict = words(&["crane", "crate", "trace", "slate", "irate", "grate"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let guess = Word::new("slate").unwrap();
        let pattern = Pattern::parse("BBGGG", 5).unwrap();

        let once = filter_candidates(&candidates, &guess, pattern).unwrap();
        let twice = filter_candidates(&once, &guess, pattern).unwrap();
        assert_eq!(once, twice);
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn preserves_input_order() {
        let dict = words(&["grate", "crate", "irate"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let guess = Word::new("slate").unwrap();
        let pattern = Pattern::parse("BBGGG", 5).unwrap();

        let remaining = filter_candidates(&candidates, &guess, pattern).unwrap();
        let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["grate", "crate", "irate"]);
    }

    #[test]
    fn rejects_pattern_of_wrong_length() {
        let dict = words(&["crane"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::parse("GGG", 3).unwrap();

        let result = filter_candidates(&candidates, &dict[0], pattern);
        assert!(matches!(result, Err(EngineError::InvalidPattern { .. })));
    }

    #[test]
    fn rejects_candidates_of_wrong_length() {
        let dict = words(&["crane", "cat"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::solved(5);

        let result = filter_candidates(&candidates, &dict[0], pattern);
        assert!(matches!(
            result,
            Err(EngineError::LengthMismatch {
                expected: 5,
                found: 3,
                ..
            })
        ));
    }
}
