//! Weight optimization command

use crate::error::EngineError;
use crate::output::formatters::batch_progress;
use crate::solver::{Context, OptimizationResult, OptimizerConfig, WeightOptimizer};

/// Grid search the score weights, showing a progress bar over grid points
///
/// # Errors
///
/// Returns `EngineError::InvalidStep` for a step outside (0, 1].
pub fn run_optimization(
    ctx: &Context,
    config: OptimizerConfig,
    show_progress: bool,
) -> Result<OptimizationResult, EngineError> {
    let optimizer = WeightOptimizer::new(ctx, config)?;
    let pb = batch_progress(optimizer.grid_points().len(), show_progress);

    let mut best = f64::INFINITY;
    let result = optimizer.run_with(|point| {
        best = best.min(point.average_attempts);
        pb.set_message(format!("{} | best avg {best:.3}", point.weights));
        pb.inc(1);
    });
    pb.finish_with_message("Complete!");

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    #[test]
    fn optimization_covers_grid() {
        let ctx = Context::from_words(&["crane", "crone", "trace", "slate", "irate"]).unwrap();
        let config = OptimizerConfig {
            step: 0.5,
            games_per_point: 5,
            seed: 9,
            strategy: StrategyType::Composite,
        };

        let result = run_optimization(&ctx, config, false).unwrap();
        assert_eq!(result.points.len(), 6);
        assert!(result.best.average_attempts.is_finite());
        assert!(
            result
                .points
                .iter()
                .all(|p| p.average_attempts >= result.best.average_attempts)
        );
    }

    #[test]
    fn invalid_step_is_reported() {
        let ctx = Context::from_words(&["crane", "crone"]).unwrap();
        let config = OptimizerConfig {
            step: 2.0,
            ..OptimizerConfig::default()
        };
        assert!(run_optimization(&ctx, config, false).is_err());
    }
}
