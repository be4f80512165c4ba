//! Hill-climbing strategies.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use super::{LocalSearch, Step};
use crate::board::Board;
use crate::family::PuzzleFamily;

/// Random walk: takes a uniformly random legal move every step, whether
/// or not it helps.
///
/// There is no convergence guarantee; on small state spaces the walk
/// stumbles onto a solution given enough steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRestart;

impl LocalSearch for RandomRestart {
    fn name(&self) -> &'static str {
        "RandomRestart"
    }

    fn step<F: PuzzleFamily, R: Rng>(&mut self, family: &F, board: &Board, rng: &mut R) -> Step {
        match family.random_neighbor(board, rng) {
            Some(next) => Step::Moved(next),
            None => Step::Stuck,
        }
    }
}

/// First-choice hill climbing: samples one random move and takes it if
/// it is not worse, otherwise stays put.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl LocalSearch for FirstChoice {
    fn name(&self) -> &'static str {
        "FirstChoice"
    }

    fn step<F: PuzzleFamily, R: Rng>(&mut self, family: &F, board: &Board, rng: &mut R) -> Step {
        let Some(candidate) = family.random_neighbor(board, rng) else {
            return Step::Stuck;
        };
        if family.fitness(&candidate) <= family.fitness(board) {
            Step::Moved(candidate)
        } else {
            Step::Moved(board.clone())
        }
    }
}

/// Steepest-ascent hill climbing: scores every neighbor and moves to one
/// of the best, chosen uniformly among ties.
///
/// Sideways moves onto equal fitness are allowed, so the strategy can
/// wander a plateau until the step budget ends. It reports
/// [`Step::Stuck`] only when every neighbor is strictly worse.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteepestAscent;

impl LocalSearch for SteepestAscent {
    fn name(&self) -> &'static str {
        "SteepestAscent"
    }

    fn step<F: PuzzleFamily, R: Rng>(&mut self, family: &F, board: &Board, rng: &mut R) -> Step {
        let (target, candidates) = minimum_candidates(family, board);
        match candidates.choose(rng) {
            Some(next) => {
                trace!(
                    event = "steepest_choice",
                    fitness = target,
                    ties = candidates.len(),
                );
                Step::Moved(next.clone())
            }
            None => Step::Stuck,
        }
    }
}

/// Scans the neighbors of `board` and collects those with the lowest
/// fitness, provided it does not exceed the current fitness.
///
/// Returns that fitness and the matching neighbors in enumeration order.
/// The list is empty when `board` is a local optimum (every neighbor is
/// strictly worse, or there is none).
pub fn minimum_candidates<F: PuzzleFamily>(family: &F, board: &Board) -> (usize, Vec<Board>) {
    let scored: Vec<(usize, Board)> = family
        .neighbors(board)
        .into_iter()
        .map(|next| (family.fitness(&next), next))
        .collect();

    let target = scored
        .iter()
        .map(|(fitness, _)| *fitness)
        .fold(family.fitness(board), usize::min);

    let candidates = scored
        .into_iter()
        .filter(|(fitness, _)| *fitness == target)
        .map(|(_, next)| next)
        .collect();

    (target, candidates)
}
