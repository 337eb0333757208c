//! Engine error type

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the guessing engine and its file adapters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("dictionary contains no words")]
    EmptyDictionary,
    #[error("word '{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid feedback pattern '{input}': {reason}")]
    InvalidPattern { input: String, reason: String },
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
    #[error("uniqueness exponent must be finite and non-negative, got {0}")]
    InvalidExponent(f64),
    #[error("grid step must be in (0, 1], got {0}")]
    InvalidStep(f64),
    #[error("answer '{0}' is not in the dictionary")]
    UnknownAnswer(String),
    #[error("the game is already over")]
    SessionOver,
}
