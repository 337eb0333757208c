//! Letter frequency tables
//!
//! Rebuilt from the live candidate set every turn.

use crate::core::{ALPHABET_SIZE, Word, letter_index};

/// Letter and positional letter counts over a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySnapshot {
    /// Number of words containing each letter at least once
    letters: [u32; ALPHABET_SIZE],
    /// `positions[i][c]`: number of words with letter `c` at position `i`
    positions: Vec<[u32; ALPHABET_SIZE]>,
}

impl FrequencySnapshot {
    /// Count letters over `candidates`
    ///
    /// The word length is taken from the first candidate; an empty slice
    /// yields an empty snapshot that scores every word 0.
    ///
    /// # Examples
    /// ```
    /// use wordle_calibrator::core::Word;
    /// use wordle_calibrator::solver::FrequencySnapshot;
    ///
    /// let words = [Word::new("speed").unwrap(), Word::new("erase").unwrap()];
    /// let refs: Vec<&Word> = words.iter().collect();
    /// let snapshot = FrequencySnapshot::from_candidates(&refs);
    ///
    /// assert_eq!(snapshot.letter(b'e'), 2);
    /// assert_eq!(snapshot.position(0, b'e'), 1);
    /// ```
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let word_len = candidates.first().map_or(0, |w| w.len());
        let mut letters = [0u32; ALPHABET_SIZE];
        let mut positions = vec![[0u32; ALPHABET_SIZE]; word_len];

        for word in candidates {
            for letter in word.distinct_letters() {
                letters[letter_index(letter)] += 1;
            }
            for (slot, &letter) in positions.iter_mut().zip(word.chars()) {
                slot[letter_index(letter)] += 1;
            }
        }

        Self { letters, positions }
    }

    /// Number of words containing `letter`
    #[inline]
    #[must_use]
    pub fn letter(&self, letter: u8) -> u32 {
        self.letters[letter_index(letter)]
    }

    /// Number of words with `letter` at `position`; 0 past the word length
    #[inline]
    #[must_use]
    pub fn position(&self, position: usize, letter: u8) -> u32 {
        self.positions
            .get(position)
            .map_or(0, |slot| slot[letter_index(letter)])
    }

    /// Sum of letter frequencies over the distinct letters of `word`
    #[must_use]
    pub fn base_score(&self, word: &Word) -> u32 {
        word.distinct_letters().map(|c| self.letter(c)).sum()
    }

    /// Sum of positional frequencies of each letter of `word` in place
    #[must_use]
    pub fn positional_score(&self, word: &Word) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &c)| self.position(i, c))
            .sum()
    }
}
