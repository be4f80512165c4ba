//! Simulated annealing step.

use rand::Rng;
use tracing::trace;

use super::config::{AnnealingConfig, TemperatureSchedule};
use super::{LocalSearch, Step};
use crate::board::Board;
use crate::error::ConfigError;
use crate::family::PuzzleFamily;

/// Simulated annealing: samples one random move per step, always takes
/// improvements and takes other moves with a temperature-dependent
/// probability. A rejected move leaves the board as it was.
///
/// With the default [`AnnealingConfig`] the temperature is recomputed
/// from the family's start temperature on every step.
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::family::NQueens;
/// use hillclimb::strategy::{LocalSearch, SimulatedAnnealing, Step};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut annealing = SimulatedAnnealing::default();
/// let mut rng = StdRng::seed_from_u64(42);
/// let board = Board::new(vec![0, 0, 0, 0]);
/// assert!(matches!(
///     annealing.step(&NQueens::new(4), &board, &mut rng),
///     Step::Moved(_)
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    config: AnnealingConfig,
    temperature: Option<f64>,
}

impl SimulatedAnnealing {
    /// Creates the strategy from a validated configuration.
    pub fn new(config: AnnealingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            temperature: None,
        })
    }

    pub fn config(&self) -> &AnnealingConfig {
        &self.config
    }

    /// Temperature used by the most recent step, if any.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    fn next_temperature(&mut self, start: f64) -> f64 {
        let base = match self.config.schedule {
            TemperatureSchedule::PerStep => start,
            TemperatureSchedule::Continuous => self.temperature.unwrap_or(start),
        };
        let t = self.config.cool(base);
        self.temperature = Some(t);
        t
    }
}

impl LocalSearch for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "SimulatedAnnealing"
    }

    fn step<F: PuzzleFamily, R: Rng>(&mut self, family: &F, board: &Board, rng: &mut R) -> Step {
        let start = self
            .config
            .initial_temperature
            .unwrap_or_else(|| family.initial_temperature(board));
        let temperature = self.next_temperature(start);

        let Some(candidate) = family.random_neighbor(board, rng) else {
            return Step::Stuck;
        };

        let delta = family.fitness(&candidate) as f64 - family.fitness(board) as f64;
        let accepted = delta < 0.0
            || rng.random::<f64>() <= self.config.acceptance.probability(delta, temperature);

        trace!(event = "anneal", delta, temperature, accepted);

        if accepted {
            Step::Moved(candidate)
        } else {
            Step::Moved(board.clone())
        }
    }

    fn reset(&mut self) {
        self.temperature = None;
    }
}
