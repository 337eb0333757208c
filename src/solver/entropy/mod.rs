//! Entropy scoring
//!
//! Shannon entropy of the pattern partition a guess induces over the
//! candidates, and tables of those scores computed in parallel.

mod calculator;
mod table;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, partition, shannon_entropy,
};
pub use table::EntropyTable;
