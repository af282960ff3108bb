use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use nonet::solver::{
    engine::SolverEngine,
    grid::Grid,
    heuristics::variable::{FirstOpen, MinimumRemainingValues, RandomOpen, VariableSelection},
    stats,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Heuristic {
    /// Minimum remaining values: branch on the most constrained cell.
    Mrv,
    /// Lowest-index open cell.
    First,
    /// Uniformly random open cell.
    Random,
}

/// Solve a 9×9 Sudoku puzzle read from a text file.
///
/// The file holds 81 cells in row-major order: digits 1-9 for clues and
/// '-', '.' or '0' for blanks. Whitespace is ignored.
#[derive(Debug, Parser)]
#[command(name = "nonet", version, about)]
struct Args {
    /// Path to the puzzle file.
    puzzle: PathBuf,

    /// Variable-selection heuristic.
    #[arg(long, value_enum, default_value = "mrv")]
    heuristic: Heuristic,

    /// Print search counters after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the solution as JSON instead of a formatted grid.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.puzzle)?;
    let puzzle: Grid = text.parse()?;

    let heuristic: Box<dyn VariableSelection> = match args.heuristic {
        Heuristic::Mrv => Box::new(MinimumRemainingValues),
        Heuristic::First => Box::new(FirstOpen),
        Heuristic::Random => Box::new(RandomOpen::default()),
    };
    let engine = SolverEngine::new(heuristic);

    let start = Instant::now();
    let (solution, search_stats) = engine.solve(&puzzle);
    let elapsed = start.elapsed();

    let code = match solution {
        Some(solution) if args.json => {
            println!("{}", serde_json::to_string_pretty(&solution)?);
            ExitCode::SUCCESS
        }
        Some(solution) => {
            print!("{}", solution.grid());
            let order: String = solution
                .assignments()
                .iter()
                .map(|a| char::from(b'0' + a.digit.get()))
                .collect();
            println!("assignments (in search order): {order}");
            println!("solved in {elapsed:?}");
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution exists for this puzzle ({elapsed:?})");
            ExitCode::FAILURE
        }
    };

    if args.stats {
        println!("{}", stats::render_stats_table(&search_stats));
    }
    Ok(code)
}
