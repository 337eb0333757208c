//! Guessing engine
//!
//! Candidate filtering, letter frequency and entropy scoring, the composite
//! guess selector, simulated games and the weight optimizer that calibrates
//! them.

mod context;
pub mod entropy;
mod filter;
mod frequency;
mod game;
mod optimizer;
mod scoring;
mod selector;
mod session;
mod simulation;
mod strategy;

pub use context::{Context, EngineConfig};
pub use filter::filter_candidates;
pub use frequency::FrequencySnapshot;
pub use game::{ExhaustReason, Game, GameRecord, GameState, TurnSummary};
pub use optimizer::{
    GridPointResult, OptimizationResult, OptimizerConfig, WeightOptimizer, grid_points,
};
pub use scoring::{CompositeScorer, ScoreBreakdown, ScoreWeights};
pub use selector::GuessSelector;
pub use session::{REJECT_SENTINEL, Session, SessionStatus};
pub use simulation::{
    SimulationSummary, average_attempts, play_answers, simulate_batch, simulate_batch_with,
};
pub use strategy::{DisambiguationStrategy, Strategy, StrategyType, TurnView};
