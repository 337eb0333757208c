//! Precomputed entropy scores
//!
//! Scoring every word of a pool against the candidates is the expensive part
//! of a turn, so the pool is scored once in parallel and looked up by word.

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Entropy of each scored word against one candidate set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropyTable {
    scores: FxHashMap<String, f64>,
}

impl EntropyTable {
    /// Score every word of `pool` against `candidates`
    ///
    /// # Examples
    /// ```
    /// use wordle_calibrator::core::Word;
    /// use wordle_calibrator::solver::entropy::EntropyTable;
    ///
    /// let words = [Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];
    /// let refs: Vec<&Word> = words.iter().collect();
    ///
    /// let table = EntropyTable::compute(&refs, &refs);
    /// assert!((table.get(&words[0]) - 1.0).abs() < 1e-9);
    /// assert_eq!(table.get(&Word::new("crane").unwrap()), 0.0);
    /// ```
    #[must_use]
    pub fn compute(pool: &[&Word], candidates: &[&Word]) -> Self {
        let scores = pool
            .par_iter()
            .map(|&word| (word.text().to_string(), calculate_entropy(word, candidates)))
            .collect();

        Self { scores }
    }

    /// Build a table from already known scores
    pub fn from_scores(scores: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    /// Entropy of `word`; 0 for a word that was never scored
    #[inline]
    #[must_use]
    pub fn get(&self, word: &Word) -> f64 {
        self.scores.get(word.text()).copied().unwrap_or(0.0)
    }

    /// Whether `word` has a score
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.scores.contains_key(word.text())
    }

    /// Whether the table scores exactly `words`
    #[must_use]
    pub fn covers(&self, words: &[Word]) -> bool {
        self.scores.len() == words.len() && words.iter().all(|w| self.contains(w))
    }

    /// Scores sorted by descending entropy, then by word
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(word, &entropy)| (word.as_str(), entropy))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Number of scored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if nothing was scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn covers_requires_exact_word_set() {
        let dict = words(&["crane", "crone", "trace"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let table = EntropyTable::compute(&refs, &refs);

        assert!(table.covers(&dict));
        assert!(!table.covers(&dict[..2]));
        assert!(!table.covers(&words(&["crane", "crone", "slate"])));
        assert!(!EntropyTable::default().covers(&dict));
    }

    #[test]
    fn matches_sequential_calculation() {
        let dict = words(&["crane", "crate", "trace", "slate", "irate", "grate"]);
        let refs: Vec<&Word> = dict.iter().collect();

        let table = EntropyTable::compute(&refs, &refs);
        assert_eq!(table.len(), dict.len());
        for word in &dict {
            assert!((table.get(word) - calculate_entropy(word, &refs)).abs() < 1e-12);
        }
    }

    #[test]
    fn pool_may_exceed_candidates() {
        let pool = words(&["aeros", "aaaaa"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let table = EntropyTable::compute(&pool_refs, &candidate_refs);
        assert!(table.get(&pool[0]) > table.get(&pool[1]));
        assert!(!table.contains(&candidates[0]));
    }

    #[test]
    fn ranked_orders_by_entropy_then_word() {
        let table = EntropyTable::from_scores([
            ("slate".to_string(), 1.0),
            ("crane".to_string(), 2.0),
            ("arise".to_string(), 1.0),
        ]);

        let ranked: Vec<&str> = table.ranked().into_iter().map(|(w, _)| w).collect();
        assert_eq!(ranked, vec!["crane", "arise", "slate"]);
    }

    #[test]
    fn empty_table_scores_zero() {
        let table = EntropyTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get(&Word::new("crane").unwrap()), 0.0);
    }
}
