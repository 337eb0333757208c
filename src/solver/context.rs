//! Shared engine context
//!
//! Built once from the loaded dictionary and handed by reference to every
//! game, session and optimizer worker. Nothing in it changes after
//! construction.

use super::entropy::EntropyTable;
use crate::core::Word;
use crate::error::EngineError;
use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

/// Engine constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Guesses allowed per game
    pub max_guesses: usize,
    /// Exponent applied to the distinct-letter ratio in the composite score
    pub uniqueness_exponent: f64,
    /// Break score ties by usage frequency before falling back to the
    /// lexically smallest word
    pub prefer_common_words: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            uniqueness_exponent: 1.5,
            prefer_common_words: false,
        }
    }
}

/// Dictionary, usage frequencies and configuration
#[derive(Debug, Clone)]
pub struct Context {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_len: usize,
    frequencies: FxHashMap<String, u64>,
    config: EngineConfig,
    opening: Option<EntropyTable>,
}

impl Context {
    /// Build a context from dictionary words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// - `EmptyDictionary` if `words` is empty
    /// - `LengthMismatch` if the words do not all share the first word's length
    /// - `InvalidExponent` for a negative or non-finite uniqueness exponent
    pub fn new(
        words: Vec<Word>,
        frequencies: FxHashMap<String, u64>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let exponent = config.uniqueness_exponent;
        if !exponent.is_finite() || exponent < 0.0 {
            return Err(EngineError::InvalidExponent(exponent));
        }

        let word_len = words.first().ok_or(EngineError::EmptyDictionary)?.len();

        if let Some(other) = words.iter().find(|w| w.len() != word_len) {
            return Err(EngineError::LengthMismatch {
                word: other.text().to_string(),
                expected: word_len,
                found: other.len(),
            });
        }

        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| {
                let fresh = seen.insert(w.text().to_string());
                if !fresh {
                    debug!("Dropping duplicate dictionary word '{w}'");
                }
                fresh
            })
            .collect();

        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), i))
            .collect();

        info!(
            "Context ready: {} words of length {word_len}, {} usage frequencies",
            words.len(),
            frequencies.len()
        );

        Ok(Self {
            words,
            index,
            word_len,
            frequencies,
            config,
            opening: None,
        })
    }

    /// Build a context from plain strings with default configuration and no
    /// usage frequencies
    ///
    /// # Errors
    /// Returns `InvalidWord` for a malformed word, otherwise as `Context::new`.
    ///
    /// # Examples
    /// ```
    /// use wordle_calibrator::solver::Context;
    ///
    /// let ctx = Context::from_words(&["crane", "CRONE", "trace", "crane"]).unwrap();
    /// assert_eq!(ctx.len(), 3);
    /// assert_eq!(ctx.word_len(), 5);
    /// assert!(Context::from_words(&["crane", "cat"]).is_err());
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Self, EngineError> {
        let words = words
            .iter()
            .map(|w| Word::new(*w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words, FxHashMap::default(), EngineConfig::default())
    }

    /// Compute the opening entropy table: every dictionary word scored
    /// against the full dictionary
    #[must_use]
    pub fn with_opening_entropy(mut self) -> Self {
        let all = self.candidates();
        let table = EntropyTable::compute(&all, &all);
        info!("Computed opening entropy for {} words", table.len());
        self.opening = Some(table);
        self
    }

    /// Attach a previously computed opening table
    ///
    /// A table that does not score exactly the dictionary words was built
    /// for another word list; it is discarded and the table recomputed.
    #[must_use]
    pub fn with_opening_table(mut self, table: EntropyTable) -> Self {
        if !table.covers(&self.words) {
            warn!(
                "Opening table has {} entries but does not match the {} dictionary words, recomputing",
                table.len(),
                self.words.len()
            );
            return self.with_opening_entropy();
        }
        self.opening = Some(table);
        self
    }

    /// Dictionary words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Full dictionary as a fresh candidate set
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }

    /// Look up a dictionary word, case-insensitively
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.index
            .get(text.trim().to_lowercase().as_str())
            .map(|&i| &self.words[i])
    }

    /// Number of dictionary words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed context
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared word length
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Usage frequency of a word; 0 when unknown
    #[must_use]
    pub fn frequency(&self, word: &Word) -> u64 {
        self.frequencies.get(word.text()).copied().unwrap_or(0)
    }

    #[must_use]
    pub const fn opening_entropy(&self) -> Option<&EntropyTable> {
        self.opening.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dictionary() {
        let result = Context::new(Vec::new(), FxHashMap::default(), EngineConfig::default());
        assert_eq!(result.unwrap_err(), EngineError::EmptyDictionary);
    }

    #[test]
    fn rejects_mixed_lengths() {
        let err = Context::from_words(&["crane", "crate", "cranes"]).unwrap_err();
        assert_eq!(
            err,
            EngineError::LengthMismatch {
                word: "cranes".to_string(),
                expected: 5,
                found: 6,
            }
        );
    }

    #[test]
    fn rejects_invalid_word() {
        assert!(matches!(
            Context::from_words(&["crane", "cr4ne"]),
            Err(EngineError::InvalidWord(_))
        ));
    }

    #[test]
    fn drops_duplicates_keeping_order() {
        let ctx = Context::from_words(&["trace", "crane", "TRACE", "crone"]).unwrap();
        let texts: Vec<&str> = ctx.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["trace", "crane", "crone"]);
    }

    #[test]
    fn find_is_case_insensitive() {
        let ctx = Context::from_words(&["crane", "crone"]).unwrap();
        assert_eq!(ctx.find("CRONE").map(Word::text), Some("crone"));
        assert!(ctx.find("trace").is_none());
    }

    #[test]
    fn frequency_defaults_to_zero() {
        let mut frequencies = FxHashMap::default();
        frequencies.insert("crane".to_string(), 42);
        let words = vec![Word::new("crane").unwrap(), Word::new("crone").unwrap()];
        let ctx = Context::new(words, frequencies, EngineConfig::default()).unwrap();

        assert_eq!(ctx.frequency(&ctx.words()[0]), 42);
        assert_eq!(ctx.frequency(&ctx.words()[1]), 0);
    }

    #[test]
    fn opening_entropy_covers_dictionary() {
        let ctx = Context::from_words(&["crane", "crone", "trace"])
            .unwrap()
            .with_opening_entropy();
        let table = ctx.opening_entropy().unwrap();

        assert_eq!(table.len(), 3);
        assert!((table.get(&ctx.words()[0]) - 3f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn mismatched_opening_table_is_recomputed() {
        let words = ["crane", "crate", "trace", "slate", "irate", "grate", "speed"];
        let fresh = Context::from_words(&words).unwrap().with_opening_entropy();

        let foreign = EntropyTable::from_scores([("zzzzz".to_string(), 9.0)]);
        let ctx = Context::from_words(&words)
            .unwrap()
            .with_opening_table(foreign);
        assert_eq!(ctx.opening_entropy(), fresh.opening_entropy());

        let partial = EntropyTable::from_scores([("crane".to_string(), 9.0)]);
        let ctx = Context::from_words(&words)
            .unwrap()
            .with_opening_table(partial);
        assert_eq!(ctx.opening_entropy(), fresh.opening_entropy());
    }

    #[test]
    fn matching_opening_table_is_kept() {
        let ctx = Context::from_words(&["crane", "crone"]).unwrap();
        let table = EntropyTable::from_scores([
            ("crane".to_string(), 0.5),
            ("crone".to_string(), 0.25),
        ]);
        let ctx = ctx.with_opening_table(table.clone());
        assert_eq!(ctx.opening_entropy(), Some(&table));
    }

    #[test]
    fn rejects_invalid_uniqueness_exponent() {
        for exponent in [f64::NAN, f64::INFINITY, -0.5] {
            let config = EngineConfig {
                uniqueness_exponent: exponent,
                ..EngineConfig::default()
            };
            let words = vec![Word::new("crane").unwrap()];
            assert!(matches!(
                Context::new(words, FxHashMap::default(), config),
                Err(EngineError::InvalidExponent(_))
            ));
        }

        let config = EngineConfig {
            uniqueness_exponent: 0.0,
            ..EngineConfig::default()
        };
        let words = vec![Word::new("crane").unwrap()];
        assert!(Context::new(words, FxHashMap::default(), config).is_ok());
    }

    #[test]
    fn other_word_lengths_are_supported() {
        let ctx = Context::from_words(&["cat", "cot", "dog"]).unwrap();
        assert_eq!(ctx.word_len(), 3);
        assert_eq!(ctx.config().max_guesses, 6);
    }
}
