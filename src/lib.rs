//! Wordle Calibrator
//!
//! An entropy-weighted Wordle guessing engine with a simulation-driven
//! calibrator for its score weights.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_calibrator::core::{Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("crone").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.to_string(), "GGBGG");
//! ```

// Core domain types
pub mod core;

// Engine errors
pub mod error;

// Guess selection, games, simulation and calibration
pub mod solver;

// Dictionary and frequency loading
pub mod wordlists;

// Weights, entropy cache and simulation log files
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::EngineError;
