//! Composite word scoring
//!
//! Blends letter frequency, positional frequency and entropy into one number:
//!
//! ```text
//! base        = Σ letter[c]            over distinct letters c
//! positional  = Σ position[i][word[i]]
//! uniqueness  = (distinct letters / length) ^ exponent
//! score       = w_base·base + w_positional·positional·uniqueness + w_entropy·entropy
//! ```

use super::frequency::FrequencySnapshot;
use crate::core::Word;
use crate::error::EngineError;
use std::fmt;

/// Weights of the three score components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    base: f64,
    positional: f64,
    entropy: f64,
}

impl ScoreWeights {
    /// Pure entropy weighting, used when no calibrated weights exist
    pub const PURE_ENTROPY: Self = Self {
        base: 0.0,
        positional: 0.0,
        entropy: 1.0,
    };

    /// Create weights; components are not normalised
    ///
    /// # Errors
    /// Returns `EngineError::InvalidWeights` if any component is negative or
    /// not finite.
    pub fn new(base: f64, positional: f64, entropy: f64) -> Result<Self, EngineError> {
        for (name, value) in [
            ("w_base", base),
            ("w_positional", positional),
            ("w_entropy", entropy),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidWeights(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        Ok(Self {
            base,
            positional,
            entropy,
        })
    }

    #[must_use]
    pub const fn base(self) -> f64 {
        self.base
    }

    #[must_use]
    pub const fn positional(self) -> f64 {
        self.positional
    }

    #[must_use]
    pub const fn entropy(self) -> f64 {
        self.entropy
    }

    /// Sum of the three components
    #[must_use]
    pub fn sum(self) -> f64 {
        self.base + self.positional + self.entropy
    }

    /// Scale the components to sum to 1; all-zero weights are returned as is
    #[must_use]
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        if sum <= 0.0 {
            return self;
        }
        Self {
            base: self.base / sum,
            positional: self.positional / sum,
            entropy: self.entropy / sum,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::PURE_ENTROPY
    }
}

impl fmt::Display for ScoreWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w_base={:.2}, w_positional={:.2}, w_entropy={:.2}",
            self.base, self.positional, self.entropy
        )
    }
}

/// Raw components of a composite score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub positional: f64,
    pub uniqueness: f64,
    pub entropy: f64,
    pub total: f64,
}

/// Scores words under fixed weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeScorer {
    weights: ScoreWeights,
    uniqueness_exponent: f64,
}

impl CompositeScorer {
    #[must_use]
    pub const fn new(weights: ScoreWeights, uniqueness_exponent: f64) -> Self {
        Self {
            weights,
            uniqueness_exponent,
        }
    }

    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Uniqueness factor: `(distinct / len) ^ exponent`
    #[must_use]
    pub fn uniqueness(&self, word: &Word) -> f64 {
        (f64::from(word.distinct_count()) / word.len() as f64).powf(self.uniqueness_exponent)
    }

    /// All score components for `word` given its `entropy`
    #[must_use]
    pub fn breakdown(&self, word: &Word, snapshot: &FrequencySnapshot, entropy: f64) -> ScoreBreakdown {
        let base = f64::from(snapshot.base_score(word));
        let positional = f64::from(snapshot.positional_score(word));
        let uniqueness = self.uniqueness(word);
        let total = self.weights.base * base
            + self.weights.positional * positional * uniqueness
            + self.weights.entropy * entropy;

        ScoreBreakdown {
            base,
            positional,
            uniqueness,
            entropy,
            total,
        }
    }

    /// Composite score for `word` given its `entropy`
    #[must_use]
    pub fn score(&self, word: &Word, snapshot: &FrequencySnapshot, entropy: f64) -> f64 {
        self.breakdown(word, snapshot, entropy).total
    }
}
