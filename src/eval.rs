//! Evaluation harness.
//!
//! Runs one strategy over a batch of boards, times every run and reports
//! per-board [`EvaluationRecord`]s plus an [`EvaluationSummary`] with the
//! success rate and mean search cost.

use std::io::{self, Write};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use crate::board::Board;
use crate::error::ConfigError;
use crate::family::PuzzleFamily;
use crate::search::{create_rng, SearchConfig, SearchRunner};
use crate::strategy::LocalSearch;

/// Header line matching [`EvaluationRecord::to_csv_row`].
pub const CSV_HEADER: &str = "name,board,solution,success,duration";

/// Outcome of one strategy on one board.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationRecord {
    /// Strategy name.
    pub name: String,

    /// Starting board.
    pub board: Board,

    /// Solved board, if the search succeeded.
    pub solution: Option<Board>,

    pub success: bool,

    /// Wall-clock time of the search.
    pub duration: Duration,

    /// Strategy steps taken.
    pub steps: usize,
}

impl EvaluationRecord {
    /// Renders the record as one CSV line (no trailing newline).
    ///
    /// Boards are quoted because their list notation contains commas;
    /// a missing solution is written as `None`. Duration is in seconds.
    pub fn to_csv_row(&self) -> String {
        let solution = match &self.solution {
            Some(board) => format!("\"{board}\""),
            None => "None".to_string(),
        };
        format!(
            "{},\"{}\",{},{},{}",
            self.name,
            self.board,
            solution,
            self.success,
            self.duration.as_secs_f64()
        )
    }
}

/// Aggregate statistics over the records of one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationSummary {
    pub name: String,
    pub instances: usize,
    pub solved: usize,

    /// Fraction of instances solved, in [0, 1]. Zero for an empty batch.
    pub success_rate: f64,

    /// Mean steps over all instances.
    pub mean_steps: f64,

    /// Mean steps over solved instances only.
    pub mean_solved_steps: Option<f64>,

    pub mean_duration: Duration,
    pub total_duration: Duration,
}

impl EvaluationSummary {
    pub fn from_records(name: &str, records: &[EvaluationRecord]) -> Self {
        let instances = records.len();
        let solved: Vec<&EvaluationRecord> = records.iter().filter(|r| r.success).collect();
        let total_steps: usize = records.iter().map(|r| r.steps).sum();
        let total_duration: Duration = records.iter().map(|r| r.duration).sum();

        let (success_rate, mean_steps, mean_duration) = if instances == 0 {
            (0.0, 0.0, Duration::ZERO)
        } else {
            (
                solved.len() as f64 / instances as f64,
                total_steps as f64 / instances as f64,
                total_duration / instances as u32,
            )
        };
        let mean_solved_steps = if solved.is_empty() {
            None
        } else {
            Some(solved.iter().map(|r| r.steps).sum::<usize>() as f64 / solved.len() as f64)
        };

        Self {
            name: name.to_string(),
            instances,
            solved: solved.len(),
            success_rate,
            mean_steps,
            mean_solved_steps,
            mean_duration,
            total_duration,
        }
    }
}

/// Runs `strategy` from every board in `boards`.
///
/// Each board gets its own RNG seeded with `seed + index`, where `seed`
/// is [`SearchConfig::seed`] or a fresh random value, so a seeded
/// evaluation gives the same records sequentially and in parallel.
/// Records come back in board order.
///
/// # Errors
///
/// Returns the error of [`SearchConfig::validate`].
///
/// # Examples
///
/// ```
/// use hillclimb::board::Board;
/// use hillclimb::eval::evaluate;
/// use hillclimb::family::NQueens;
/// use hillclimb::search::SearchConfig;
/// use hillclimb::strategy::SteepestAscent;
///
/// let boards = vec![Board::new(vec![1, 3, 0, 2]), Board::new(vec![0, 0, 0, 0])];
/// let config = SearchConfig::default().with_max_steps(200).with_seed(1);
/// let records = evaluate(&NQueens::new(4), &SteepestAscent, &boards, &config).unwrap();
/// assert_eq!(records.len(), 2);
/// assert!(records[0].success);
/// assert_eq!(records[0].steps, 0);
/// ```
pub fn evaluate<F, S>(
    family: &F,
    strategy: &S,
    boards: &[Board],
    config: &SearchConfig,
) -> Result<Vec<EvaluationRecord>, ConfigError>
where
    F: PuzzleFamily,
    S: LocalSearch + Clone + Send + Sync,
{
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let started = Instant::now();

    let run_one = |(index, board): (usize, &Board)| {
        let seed = base_seed.wrapping_add(index as u64);
        evaluate_one(family, strategy, board, config.max_steps, seed)
    };

    #[cfg(feature = "parallel")]
    let records: Vec<EvaluationRecord> = if config.parallel {
        boards.par_iter().enumerate().map(run_one).collect()
    } else {
        boards.iter().enumerate().map(run_one).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let records: Vec<EvaluationRecord> = boards.iter().enumerate().map(run_one).collect();

    let summary = EvaluationSummary::from_records(strategy.name(), &records);
    info!(
        event = "evaluation_end",
        strategy = strategy.name(),
        family = family.name(),
        instances = summary.instances,
        solved = summary.solved,
        success_rate = summary.success_rate,
        mean_steps = summary.mean_steps,
        duration_ms = started.elapsed().as_millis() as u64,
    );

    Ok(records)
}

fn evaluate_one<F, S>(
    family: &F,
    strategy: &S,
    board: &Board,
    max_steps: usize,
    seed: u64,
) -> EvaluationRecord
where
    F: PuzzleFamily,
    S: LocalSearch + Clone,
{
    let mut strategy = strategy.clone();
    let mut rng = create_rng(seed);

    let start = Instant::now();
    let report = SearchRunner::run_with_rng(family, &mut strategy, board.clone(), max_steps, &mut rng);
    let duration = start.elapsed();

    let success = report.result.is_solved();
    EvaluationRecord {
        name: strategy.name().to_string(),
        board: board.clone(),
        solution: report.result.into_solution(),
        success,
        duration,
        steps: report.steps,
    }
}

/// Writes [`CSV_HEADER`] followed by a newline.
pub fn write_csv_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")
}

/// Writes one CSV line per record.
pub fn write_csv_rows<W: Write>(writer: &mut W, records: &[EvaluationRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record.to_csv_row())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{EightPuzzle, NQueens};
    use crate::strategy::{RandomRestart, SimulatedAnnealing, SteepestAscent, StrategyKind};

    fn record(success: bool, steps: usize, millis: u64) -> EvaluationRecord {
        let board = Board::new(vec![1, 3, 0, 2]);
        EvaluationRecord {
            name: "SteepestAscent".into(),
            board: board.clone(),
            solution: success.then_some(board),
            success,
            duration: Duration::from_millis(millis),
            steps,
        }
    }

    #[test]
    fn test_csv_row_solved() {
        let row = record(true, 3, 1500).to_csv_row();
        assert_eq!(
            row,
            "SteepestAscent,\"[1, 3, 0, 2]\",\"[1, 3, 0, 2]\",true,1.5"
        );
    }

    #[test]
    fn test_csv_row_unsolved() {
        let row = record(false, 3, 250).to_csv_row();
        assert_eq!(row, "SteepestAscent,\"[1, 3, 0, 2]\",None,false,0.25");
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv_header(&mut out).unwrap();
        write_csv_rows(&mut out, &[record(false, 1, 0)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("SteepestAscent,"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_summary() {
        let records = vec![record(true, 10, 100), record(false, 200, 300), record(true, 30, 200)];
        let summary = EvaluationSummary::from_records("SteepestAscent", &records);
        assert_eq!(summary.instances, 3);
        assert_eq!(summary.solved, 2);
        assert!((summary.success_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!((summary.mean_steps - 80.0).abs() < 1e-12);
        assert_eq!(summary.mean_solved_steps, Some(20.0));
        assert_eq!(summary.mean_duration, Duration::from_millis(200));
        assert_eq!(summary.total_duration, Duration::from_millis(600));
    }

    #[test]
    fn test_summary_empty() {
        let summary = EvaluationSummary::from_records("FirstChoice", &[]);
        assert_eq!(summary.instances, 0);
        assert_eq!(summary.success_rate, 0.0);
        assert_eq!(summary.mean_solved_steps, None);
    }

    #[test]
    fn test_evaluate_keeps_board_order() {
        let queens = NQueens::new(4);
        let boards = vec![
            Board::new(vec![0, 0, 0, 0]),
            Board::new(vec![1, 3, 0, 2]),
            Board::new(vec![3, 3, 3, 3]),
        ];
        let config = SearchConfig::default().with_max_steps(50).with_seed(3);
        let records = evaluate(&queens, &SteepestAscent, &boards, &config).unwrap();
        assert_eq!(records.len(), 3);
        for (record, board) in records.iter().zip(&boards) {
            assert_eq!(&record.board, board);
            assert_eq!(record.name, "SteepestAscent");
            assert_eq!(record.success, record.solution.is_some());
        }
        assert!(records[1].success);
    }

    #[test]
    fn test_seeded_evaluation_is_reproducible() {
        let queens = NQueens::new(5);
        let mut rng = create_rng(8);
        let boards: Vec<Board> = (0..5).map(|_| queens.generate(&mut rng)).collect();
        let config = SearchConfig::default().with_max_steps(2_000).with_seed(21);

        let first = evaluate(&queens, &RandomRestart, &boards, &config).unwrap();
        let second = evaluate(&queens, &RandomRestart, &boards, &config).unwrap();
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.steps, b.steps);
            assert_eq!(a.solution, b.solution);
        }
    }

    #[test]
    fn test_evaluate_every_strategy_on_puzzles() {
        let puzzle = EightPuzzle::default().with_scramble_moves(4);
        let mut rng = create_rng(5);
        let boards: Vec<Board> = (0..4).map(|_| puzzle.generate(&mut rng)).collect();
        for kind in StrategyKind::ALL {
            let config = SearchConfig::default()
                .with_max_steps(kind.default_max_steps().min(5_000))
                .with_seed(1);
            let records = evaluate(&puzzle, &kind.build(), &boards, &config).unwrap();
            assert_eq!(records.len(), boards.len());
            for record in &records {
                assert!(record.steps <= config.max_steps);
                if let Some(solution) = &record.solution {
                    assert_eq!(solution, &EightPuzzle::goal());
                }
            }
        }
    }

    #[test]
    fn test_evaluate_clones_strategy_state() {
        let queens = NQueens::new(4);
        let annealing = SimulatedAnnealing::default();
        let boards = vec![Board::new(vec![0, 0, 0, 0])];
        let config = SearchConfig::default().with_max_steps(10).with_seed(1);
        evaluate(&queens, &annealing, &boards, &config).unwrap();
        assert!(annealing.temperature().is_none());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let queens = NQueens::new(6);
        let mut rng = create_rng(13);
        let boards: Vec<Board> = (0..8).map(|_| queens.generate(&mut rng)).collect();
        let config = SearchConfig::default().with_max_steps(1_000).with_seed(4);

        let sequential = evaluate(&queens, &SteepestAscent, &boards, &config).unwrap();
        let parallel =
            evaluate(&queens, &SteepestAscent, &boards, &config.clone().with_parallel(true))
                .unwrap();
        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.board, b.board);
            assert_eq!(a.solution, b.solution);
            assert_eq!(a.steps, b.steps);
        }
    }
}
