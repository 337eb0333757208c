//! Command implementations

pub mod analyze;
pub mod optimize;
pub mod play;
pub mod precompute;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use optimize::run_optimization;
pub use play::run_play;
pub use precompute::precompute_opening;
pub use simulate::{SimulationReport, run_simulation};
pub use solve::{GuessStep, SolveResult, solve_word};
