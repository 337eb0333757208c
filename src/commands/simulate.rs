//! Simulation command
//!
//! Plays a seeded batch of games and summarises the outcome.

use crate::output::formatters::batch_progress;
use crate::solver::{
    Context, GameRecord, GuessSelector, SimulationSummary, Strategy, simulate_batch_with,
};
use std::time::{Duration, Instant};

/// Records and statistics of a simulated batch
pub struct SimulationReport {
    pub records: Vec<GameRecord>,
    pub summary: SimulationSummary,
    pub duration: Duration,
}

/// Simulate `num_games` games on randomly drawn answers
pub fn run_simulation<S: Strategy>(
    ctx: &Context,
    selector: &GuessSelector<S>,
    num_games: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationReport {
    let pb = batch_progress(num_games, show_progress);
    pb.set_message(format!("seed {seed}"));

    let start = Instant::now();
    let records = simulate_batch_with(ctx, selector, num_games, seed, |_| pb.inc(1));
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let summary = SimulationSummary::from_records(&records, ctx.config().max_guesses);
    log::info!(
        "Simulated {} games in {:.2}s: {} solved, average {:.3}",
        summary.total_games,
        duration.as_secs_f64(),
        summary.solved,
        summary.average_attempts
    );

    SimulationReport {
        records,
        summary,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ScoreWeights, StrategyType};

    #[test]
    fn report_matches_records() {
        let ctx = Context::from_words(&["crane", "crone", "trace", "slate", "irate"]).unwrap();
        let selector = GuessSelector::new(ScoreWeights::default(), 1.5, StrategyType::Composite);

        let report = run_simulation(&ctx, &selector, 12, 1, false);
        assert_eq!(report.records.len(), 12);
        assert_eq!(report.summary.total_games, 12);
        assert_eq!(
            report.summary.solved + report.summary.failed(),
            report.summary.total_games
        );
        assert_eq!(report.summary.guess_distribution.len(), 6);
    }
}
