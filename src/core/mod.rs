//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words and the feedback
//! patterns they produce against each other. Everything here is pure.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{ALPHABET_SIZE, MAX_WORD_LEN, Word, WordError, letter_index};
