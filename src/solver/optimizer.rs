//! Weight calibration by grid search
//!
//! Every point of a regular grid over the weight simplex is scored by
//! simulating games, and the point with the fewest average attempts wins.

use super::context::Context;
use super::scoring::ScoreWeights;
use super::selector::GuessSelector;
use super::simulation::{average_attempts, play_answers};
use super::strategy::StrategyType;
use crate::core::Word;
use crate::error::EngineError;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Grid search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    /// Grid spacing in (0, 1]
    pub step: f64,
    /// Games simulated per grid point
    pub games_per_point: usize,
    /// Seed for the answer sample
    pub seed: u64,
    /// Strategy used in every simulated game
    pub strategy: StrategyType,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            games_per_point: 50,
            seed: 42,
            strategy: StrategyType::Composite,
        }
    }
}

/// Score of one grid point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPointResult {
    pub weights: ScoreWeights,
    /// Mean attempts over solved games; `INFINITY` if none solved
    pub average_attempts: f64,
    pub solved: usize,
    pub failed: usize,
}

/// All evaluated points and the winner
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    pub best: GridPointResult,
    pub points: Vec<GridPointResult>,
}

/// Enumerate the weight simplex at spacing `step`
///
/// With `n = round(1 / step)`, yields `(i/n, j/n, (n-i-j)/n)` for every
/// `i + j <= n`, `w_base` outermost and ascending.
///
/// # Errors
/// Returns `EngineError::InvalidStep` unless `0 < step <= 1`.
///
/// # Examples
/// ```
/// use wordle_calibrator::solver::grid_points;
///
/// let points = grid_points(0.5).unwrap();
/// assert_eq!(points.len(), 6);
/// assert!((points[0].entropy() - 1.0).abs() < 1e-12);
/// assert!(grid_points(0.0).is_err());
/// ```
pub fn grid_points(step: f64) -> Result<Vec<ScoreWeights>, EngineError> {
    if !step.is_finite() || step <= 0.0 || step > 1.0 {
        return Err(EngineError::InvalidStep(step));
    }

    let n = (1.0 / step).round() as usize;
    let scale = n as f64;
    let mut points = Vec::with_capacity((n + 1) * (n + 2) / 2);

    for i in 0..=n {
        for j in 0..=(n - i) {
            let k = n - i - j;
            points.push(ScoreWeights::new(
                i as f64 / scale,
                j as f64 / scale,
                k as f64 / scale,
            )?);
        }
    }

    Ok(points)
}

/// Grid search over score weights
pub struct WeightOptimizer<'a> {
    ctx: &'a Context,
    config: OptimizerConfig,
}

impl<'a> WeightOptimizer<'a> {
    /// # Errors
    /// Returns `EngineError::InvalidStep` for a step outside (0, 1].
    pub fn new(ctx: &'a Context, config: OptimizerConfig) -> Result<Self, EngineError> {
        grid_points(config.step)?;
        Ok(Self { ctx, config })
    }

    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Grid points in evaluation order
    #[must_use]
    pub fn grid_points(&self) -> Vec<ScoreWeights> {
        grid_points(self.config.step).unwrap_or_default()
    }

    /// Answers shared by every grid point
    ///
    /// Drawn without replacement, clamped to the dictionary size.
    #[must_use]
    pub fn sample_answers(&self) -> Vec<&'a Word> {
        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let amount = self.config.games_per_point.min(self.ctx.len());
        self.ctx
            .words()
            .choose_multiple(&mut rng, amount)
            .collect()
    }

    /// Simulate one game per answer under `weights`
    #[must_use]
    pub fn evaluate(&self, weights: ScoreWeights, answers: &[&Word]) -> GridPointResult {
        let selector = GuessSelector::for_context(self.ctx, weights, self.config.strategy);
        let records = play_answers(self.ctx, &selector, answers);
        let solved = records.iter().filter(|r| r.is_success()).count();

        GridPointResult {
            weights,
            average_attempts: average_attempts(&records),
            solved,
            failed: records.len() - solved,
        }
    }

    /// Evaluate every grid point
    #[must_use]
    pub fn run(&self) -> OptimizationResult {
        self.run_with(|_| {})
    }

    /// Evaluate every grid point, reporting each result as it completes
    pub fn run_with(&self, mut on_point: impl FnMut(&GridPointResult)) -> OptimizationResult {
        let grid = self.grid_points();
        let answers = self.sample_answers();
        info!(
            "Evaluating {} grid points with {} games each",
            grid.len(),
            answers.len()
        );

        let mut points = Vec::with_capacity(grid.len());
        let mut best: Option<GridPointResult> = None;

        for weights in grid {
            let result = self.evaluate(weights, &answers);
            debug!(
                "{weights}: avg {:.3} ({} solved, {} failed)",
                result.average_attempts, result.solved, result.failed
            );
            on_point(&result);

            if best.is_none_or(|b| result.average_attempts < b.average_attempts) {
                best = Some(result);
            }
            points.push(result);
        }

        let best = best.unwrap_or(GridPointResult {
            weights: ScoreWeights::default(),
            average_attempts: f64::INFINITY,
            solved: 0,
            failed: 0,
        });
        info!(
            "Best weights {} with average {:.3} attempts",
            best.weights, best.average_attempts
        );

        OptimizationResult { best, points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::from_words(&[
            "crane", "crate", "trace", "slate", "irate", "grate", "speed", "abide", "erase",
            "steep",
        ])
        .unwrap()
    }

    #[test]
    fn grid_has_triangular_size() {
        assert_eq!(grid_points(0.1).unwrap().len(), 66);
        assert_eq!(grid_points(1.0).unwrap().len(), 3);
        assert_eq!(grid_points(0.25).unwrap().len(), 15);
    }

    #[test]
    fn grid_points_lie_on_simplex() {
        for weights in grid_points(0.1).unwrap() {
            assert!((weights.sum() - 1.0).abs() < 1e-9);
            assert!(weights.base() >= 0.0 && weights.positional() >= 0.0);
            assert!(weights.entropy() >= 0.0);
        }
    }

    #[test]
    fn grid_order_is_base_outer_ascending() {
        let points = grid_points(0.5).unwrap();
        let triples: Vec<(f64, f64, f64)> = points
            .iter()
            .map(|w| (w.base(), w.positional(), w.entropy()))
            .collect();
        assert_eq!(
            triples,
            vec![
                (0.0, 0.0, 1.0),
                (0.0, 0.5, 0.5),
                (0.0, 1.0, 0.0),
                (0.5, 0.0, 0.5),
                (0.5, 0.5, 0.0),
                (1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn invalid_step_is_rejected() {
        let ctx = ctx();
        for step in [0.0, -0.1, 1.5, f64::NAN] {
            let config = OptimizerConfig {
                step,
                ..OptimizerConfig::default()
            };
            assert!(matches!(
                WeightOptimizer::new(&ctx, config),
                Err(EngineError::InvalidStep(_))
            ));
        }
    }

    #[test]
    fn sample_is_clamped_and_distinct() {
        let ctx = ctx();
        let optimizer = WeightOptimizer::new(&ctx, OptimizerConfig::default()).unwrap();
        let mut sample: Vec<&str> = optimizer.sample_answers().iter().map(|w| w.text()).collect();

        assert_eq!(sample.len(), ctx.len());
        sample.sort_unstable();
        sample.dedup();
        assert_eq!(sample.len(), ctx.len());
    }

    #[test]
    fn run_is_deterministic() {
        let ctx = ctx();
        let config = OptimizerConfig {
            step: 0.5,
            games_per_point: 6,
            seed: 3,
            strategy: StrategyType::Composite,
        };
        let optimizer = WeightOptimizer::new(&ctx, config).unwrap();

        let mut seen = 0;
        let first = optimizer.run_with(|_| seen += 1);
        let second = optimizer.run();

        assert_eq!(seen, 6);
        assert_eq!(first, second);
        assert_eq!(first.points.len(), 6);
    }

    #[test]
    fn best_is_first_strict_minimum() {
        let ctx = ctx();
        let config = OptimizerConfig {
            step: 0.5,
            games_per_point: 10,
            seed: 11,
            strategy: StrategyType::Composite,
        };
        let result = WeightOptimizer::new(&ctx, config).unwrap().run();

        let min = result
            .points
            .iter()
            .map(|p| p.average_attempts)
            .fold(f64::INFINITY, f64::min);
        let first = result
            .points
            .iter()
            .find(|p| p.average_attempts <= min)
            .unwrap();
        assert_eq!(result.best, *first);
    }
}
