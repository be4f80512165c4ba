//! Local-search strategies.
//!
//! Each strategy is a one-step state machine: given the current board it
//! makes exactly one decision and returns the next board, or reports that
//! it cannot move at all. The [search driver](crate::search) calls
//! [`LocalSearch::step`] repeatedly until the board is solved or the step
//! budget runs out.
//!
//! | Strategy | Candidates per step | Acceptance |
//! |----------|---------------------|------------|
//! | [`RandomRestart`] | one random neighbor | always |
//! | [`FirstChoice`] | one random neighbor | fitness not worse |
//! | [`SteepestAscent`] | every neighbor | best fitness, ties broken at random |
//! | [`SimulatedAnnealing`] | one random neighbor | improving, else by temperature |
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod annealing;
mod config;
mod hill_climbing;

pub use annealing::SimulatedAnnealing;
pub use config::{Acceptance, AnnealingConfig, TemperatureSchedule};
pub use hill_climbing::{minimum_candidates, FirstChoice, RandomRestart, SteepestAscent};

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::board::Board;
use crate::error::ConfigError;
use crate::family::PuzzleFamily;

/// Outcome of one strategy step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The board to continue from. May equal the input when a candidate
    /// was rejected.
    Moved(Board),

    /// No acceptable move exists. The search ends at a local optimum.
    Stuck,
}

/// A local-search strategy driven one step at a time.
pub trait LocalSearch {
    /// Name used in evaluation records.
    fn name(&self) -> &'static str;

    /// Performs one decision cycle from `board`.
    ///
    /// Never mutates `board`; the successor is always a fresh value.
    fn step<F: PuzzleFamily, R: Rng>(&mut self, family: &F, board: &Board, rng: &mut R) -> Step;

    /// Clears state carried between steps. Called at the start of every
    /// search run.
    fn reset(&mut self) {}
}

/// Names the four strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    RandomRestart,
    FirstChoice,
    SteepestAscent,
    SimulatedAnnealing,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::RandomRestart,
        StrategyKind::FirstChoice,
        StrategyKind::SteepestAscent,
        StrategyKind::SimulatedAnnealing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::RandomRestart => "RandomRestart",
            StrategyKind::FirstChoice => "FirstChoice",
            StrategyKind::SteepestAscent => "SteepestAscent",
            StrategyKind::SimulatedAnnealing => "SimulatedAnnealing",
        }
    }

    /// Step budget used when none is given.
    ///
    /// Steepest ascent either converges or gets stuck quickly, so it gets
    /// a much smaller budget than the sampling strategies.
    pub fn default_max_steps(self) -> usize {
        match self {
            StrategyKind::SteepestAscent => 200,
            _ => 500_000,
        }
    }

    /// Builds the strategy with default parameters.
    pub fn build(self) -> Strategy {
        match self {
            StrategyKind::RandomRestart => Strategy::RandomRestart(RandomRestart),
            StrategyKind::FirstChoice => Strategy::FirstChoice(FirstChoice),
            StrategyKind::SteepestAscent => Strategy::SteepestAscent(SteepestAscent),
            StrategyKind::SimulatedAnnealing => {
                Strategy::SimulatedAnnealing(SimulatedAnnealing::default())
            }
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the display names as well as kebab- or snake-case spellings,
/// ignoring case: `SteepestAscent`, `steepest-ascent`, `steepest_ascent`.
impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == normalized)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// Any of the four strategies, for callers that pick one at runtime.
#[derive(Debug, Clone)]
pub enum Strategy {
    RandomRestart(RandomRestart),
    FirstChoice(FirstChoice),
    SteepestAscent(SteepestAscent),
    SimulatedAnnealing(SimulatedAnnealing),
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::RandomRestart(_) => StrategyKind::RandomRestart,
            Strategy::FirstChoice(_) => StrategyKind::FirstChoice,
            Strategy::SteepestAscent(_) => StrategyKind::SteepestAscent,
            Strategy::SimulatedAnnealing(_) => StrategyKind::SimulatedAnnealing,
        }
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        kind.build()
    }
}

impl From<SimulatedAnnealing> for Strategy {
    fn from(annealing: SimulatedAnnealing) -> Self {
        Strategy::SimulatedAnnealing(annealing)
    }
}

impl LocalSearch for Strategy {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn step<F: PuzzleFamily, R: Rng>(&mut self, family: &F, board: &Board, rng: &mut R) -> Step {
        match self {
            Strategy::RandomRestart(s) => s.step(family, board, rng),
            Strategy::FirstChoice(s) => s.step(family, board, rng),
            Strategy::SteepestAscent(s) => s.step(family, board, rng),
            Strategy::SimulatedAnnealing(s) => s.step(family, board, rng),
        }
    }

    fn reset(&mut self) {
        match self {
            Strategy::RandomRestart(s) => s.reset(),
            Strategy::FirstChoice(s) => s.reset(),
            Strategy::SteepestAscent(s) => s.reset(),
            Strategy::SimulatedAnnealing(s) => s.reset(),
        }
    }
}
