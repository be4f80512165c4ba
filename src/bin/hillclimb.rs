//! Command-line front end.
//!
//! Reads boards from a file (or generates them), runs the selected
//! strategies on every board and prints one CSV line per run to stdout.
//! Per-strategy summaries are logged to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hillclimb::board::{parse_boards, Board};
use hillclimb::eval::{evaluate, write_csv_header, write_csv_rows, EvaluationSummary};
use hillclimb::family::{EightPuzzle, NQueens, PuzzleFamily};
use hillclimb::search::{create_rng, SearchConfig};
use hillclimb::strategy::{
    Acceptance, AnnealingConfig, SimulatedAnnealing, Strategy, StrategyKind, TemperatureSchedule,
};
use hillclimb::{ConfigError, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FamilyArg {
    /// 8-puzzle, nine cells holding 0..8
    Puzzle,
    /// n-queens, one row index per column
    Queens,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScheduleArg {
    PerStep,
    Continuous,
}

/// Solve 8-puzzle and n-queens instances by hill climbing (random walk,
/// first-choice, steepest-ascent) and simulated annealing.
#[derive(Debug, Parser)]
#[command(name = "hillclimb", version)]
struct Cli {
    /// Board file, one board per line as whitespace-separated integers
    boardfile: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = FamilyArg::Puzzle)]
    family: FamilyArg,

    /// Generate this many random boards instead of reading a file
    #[arg(short, long, conflicts_with = "boardfile")]
    generate: Option<usize>,

    /// Board size for generated n-queens instances (boards read from a
    /// file use the length of their first board)
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Random moves from the goal when generating 8-puzzle instances
    #[arg(long, default_value_t = 30)]
    scramble: usize,

    /// Leave the blank out of the 8-puzzle distance
    #[arg(long)]
    exclude_blank: bool,

    /// Strategy to run; repeat for several (default: all four)
    #[arg(short, long = "strategy")]
    strategies: Vec<StrategyKind>,

    /// Step budget per search (default depends on the strategy)
    #[arg(short = 'n', long)]
    max_steps: Option<usize>,

    /// Only use the first N boards
    #[arg(long)]
    limit: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate boards in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Annealing temperature schedule
    #[arg(long, value_enum, default_value_t = ScheduleArg::PerStep)]
    schedule: ScheduleArg,

    /// Use the Metropolis acceptance rule for annealing
    #[arg(long)]
    metropolis: bool,
}

impl Cli {
    fn annealing(&self) -> std::result::Result<SimulatedAnnealing, ConfigError> {
        let schedule = match self.schedule {
            ScheduleArg::PerStep => TemperatureSchedule::PerStep,
            ScheduleArg::Continuous => TemperatureSchedule::Continuous,
        };
        let acceptance = if self.metropolis {
            Acceptance::Metropolis
        } else {
            Acceptance::PositiveExponent
        };
        SimulatedAnnealing::new(
            AnnealingConfig::default()
                .with_schedule(schedule)
                .with_acceptance(acceptance),
        )
    }

    fn strategies(&self) -> std::result::Result<Vec<Strategy>, ConfigError> {
        let kinds = if self.strategies.is_empty() {
            StrategyKind::ALL.to_vec()
        } else {
            self.strategies.clone()
        };
        kinds
            .into_iter()
            .map(|kind| match kind {
                StrategyKind::SimulatedAnnealing => self.annealing().map(Strategy::from),
                other => Ok(other.build()),
            })
            .collect()
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(event = "fatal", error = %err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let file_boards = match &cli.boardfile {
        Some(path) => Some(parse_boards(&fs::read_to_string(path)?)?),
        None => None,
    };
    match cli.family {
        FamilyArg::Puzzle => {
            let puzzle = EightPuzzle::default()
                .with_blank_excluded(cli.exclude_blank)
                .with_scramble_moves(cli.scramble);
            run(&puzzle, cli, file_boards)
        }
        FamilyArg::Queens => {
            // boards read from a file carry their own size
            let queens = file_boards
                .as_deref()
                .and_then(NQueens::sized_for)
                .unwrap_or_else(|| NQueens::new(cli.size));
            run(&queens, cli, file_boards)
        }
    }
}

fn load_boards<F: PuzzleFamily>(
    family: &F,
    cli: &Cli,
    file_boards: Option<Vec<Board>>,
) -> Result<Vec<Board>> {
    let mut boards = match (file_boards, cli.generate) {
        (Some(boards), _) => boards,
        (None, Some(count)) => {
            let mut rng = create_rng(cli.seed.unwrap_or_else(rand::random));
            (0..count).map(|_| family.generate(&mut rng)).collect()
        }
        (None, None) => {
            return Err(ConfigError::Invalid("give a BOARDFILE or --generate N".into()).into())
        }
    };
    if let Some(limit) = cli.limit {
        boards.truncate(limit);
    }
    for board in &boards {
        family.validate(board)?;
    }
    Ok(boards)
}

fn run<F: PuzzleFamily>(family: &F, cli: &Cli, file_boards: Option<Vec<Board>>) -> Result<()> {
    let boards = load_boards(family, cli, file_boards)?;
    let strategies = cli.strategies()?;
    info!(
        event = "run_start",
        family = family.name(),
        boards = boards.len(),
        strategies = strategies.len(),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_csv_header(&mut out)?;

    for strategy in &strategies {
        let kind = strategy.kind();
        let mut config = SearchConfig::default()
            .with_max_steps(cli.max_steps.unwrap_or_else(|| kind.default_max_steps()))
            .with_parallel(cli.parallel);
        config.seed = cli.seed;

        let records = evaluate(family, strategy, &boards, &config)?;
        write_csv_rows(&mut out, &records)?;
        out.flush()?;

        let summary = EvaluationSummary::from_records(kind.name(), &records);
        info!(
            event = "strategy_summary",
            strategy = %kind,
            solved = summary.solved,
            instances = summary.instances,
            success_rate = summary.success_rate,
            mean_steps = summary.mean_steps,
            mean_duration_ms = summary.mean_duration.as_secs_f64() * 1000.0,
        );
    }
    Ok(())
}
